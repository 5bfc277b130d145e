#![forbid(unsafe_code)]

pub mod blend;
pub mod colorize;
pub mod encode_ffmpeg;
pub mod error;
pub mod load;
pub mod pipeline;
pub mod volume;

pub use blend::{add_blend, clamp_color_range};
pub use colorize::{binary_to_color, intensity_to_color};
pub use encode_ffmpeg::{EncodeConfig, FfmpegEncoder, encode_volume, is_ffmpeg_on_path};
pub use error::{VisError, VisResult};
pub use load::{load_intensity, load_mask};
pub use pipeline::{MASK_OPACITY, OUTPUT_FPS, visualize};
pub use volume::{ColorVolume, Volume};
