//! The load -> colorize -> blend -> encode orchestration.

use std::path::{Path, PathBuf};

use crate::{
    blend::{add_blend, clamp_color_range},
    colorize::{binary_to_color, intensity_to_color},
    encode_ffmpeg::encode_volume,
    error::{VisError, VisResult},
    load::{load_intensity, load_mask},
};

/// Output frame rate. The clips are slow-moving, so 4 fps keeps inspection
/// videos short without dropping anything.
pub const OUTPUT_FPS: u32 = 4;

/// Opacity of the mask overlay when composited onto the base clip.
pub const MASK_OPACITY: f32 = 0.8;

/// Mask foreground color.
const MASK_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Render `base` (and, if given, `mask` as a red overlay) into
/// `<file_name(base)>.mp4` inside `outpath`. Returns the path of the
/// written video.
///
/// Every failure is terminal: a missing file, a degenerate clip, or an
/// encoder error aborts the run with nothing to clean up.
#[tracing::instrument]
pub fn visualize(base: &Path, mask: Option<&Path>, outpath: &Path) -> VisResult<PathBuf> {
    if !base.exists() {
        return Err(VisError::missing_file(base));
    }
    let volume = load_intensity(base)?;
    tracing::debug!(
        frames = volume.frames,
        height = volume.height,
        width = volume.width,
        "loaded base clip"
    );
    let mut colored = intensity_to_color(&volume)?;

    if let Some(mask_path) = mask {
        if !mask_path.exists() {
            return Err(VisError::missing_file(mask_path));
        }
        let overlay = binary_to_color(&load_mask(mask_path)?, MASK_COLOR)?;
        add_blend(&mut colored, &overlay, MASK_OPACITY)?;
        clamp_color_range(&mut colored);
    }

    let out_path = outpath.join(output_name(base)?);
    encode_volume(&colored, OUTPUT_FPS, &out_path)?;
    tracing::info!(out = %out_path.display(), "wrote inspection video");
    Ok(out_path)
}

/// `clip_base.npz` renders to `clip_base.npz.mp4`: the source file name is
/// kept intact so the video sorts next to the clip it came from.
fn output_name(base: &Path) -> VisResult<String> {
    let name = base
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            VisError::precondition(format!(
                "base path '{}' has no usable file name",
                base.display()
            ))
        })?;
    Ok(format!("{name}.mp4"))
}
