//! NPY clip loading.
//!
//! Clip files are raw NPY streams: one 3-dimensional C-order array per file.
//! The upstream dataset writer labels them `.npz`, but the payload is a
//! single plain array, not a zip archive, so they are parsed as NPY
//! directly.

use std::{fs::File, io::BufReader, path::Path};

use npyz::{DType, NpyFile, Order, TypeChar};

use crate::{
    error::{VisError, VisResult},
    volume::Volume,
};

type ClipReader = NpyFile<BufReader<File>>;

/// Load a base intensity clip. The on-disk dtype must be `u8`.
pub fn load_intensity(path: &Path) -> VisResult<Volume> {
    let npy = open_npy(path)?;
    let [frames, height, width] = clip_geometry(&npy, path)?;

    match npy.dtype() {
        DType::Plain(ty) if ty.type_char() == TypeChar::Uint && ty.size_field() == 1 => {}
        other => {
            return Err(VisError::precondition(format!(
                "base clip '{}' must be u8, got dtype {other:?}",
                path.display()
            )));
        }
    }

    let data = npy
        .into_vec::<u8>()
        .map_err(|e| VisError::load(format!("read '{}': {e}", path.display())))?;
    Volume::new(frames, height, width, data)
}

/// Load a mask clip, thresholding each cell (value >= 1 becomes foreground)
/// so the returned volume holds only {0, 1}. Any integer or float dtype is
/// accepted.
pub fn load_mask(path: &Path) -> VisResult<Volume> {
    let npy = open_npy(path)?;
    let [frames, height, width] = clip_geometry(&npy, path)?;

    let DType::Plain(ty) = npy.dtype() else {
        return Err(VisError::load(format!(
            "mask clip '{}' has a record dtype",
            path.display()
        )));
    };

    let data = match (ty.type_char(), ty.size_field()) {
        (TypeChar::Uint, 1) => binarize::<u8>(npy, path, |v| v >= 1)?,
        (TypeChar::Uint, 2) => binarize::<u16>(npy, path, |v| v >= 1)?,
        (TypeChar::Uint, 4) => binarize::<u32>(npy, path, |v| v >= 1)?,
        (TypeChar::Uint, 8) => binarize::<u64>(npy, path, |v| v >= 1)?,
        (TypeChar::Int, 1) => binarize::<i8>(npy, path, |v| v >= 1)?,
        (TypeChar::Int, 2) => binarize::<i16>(npy, path, |v| v >= 1)?,
        (TypeChar::Int, 4) => binarize::<i32>(npy, path, |v| v >= 1)?,
        (TypeChar::Int, 8) => binarize::<i64>(npy, path, |v| v >= 1)?,
        (TypeChar::Float, 4) => binarize::<f32>(npy, path, |v| v >= 1.0)?,
        (TypeChar::Float, 8) => binarize::<f64>(npy, path, |v| v >= 1.0)?,
        _ => {
            return Err(VisError::load(format!(
                "mask clip '{}' has unsupported dtype {ty}",
                path.display()
            )));
        }
    };
    Volume::new(frames, height, width, data)
}

fn open_npy(path: &Path) -> VisResult<ClipReader> {
    let file = File::open(path)
        .map_err(|e| VisError::load(format!("open '{}': {e}", path.display())))?;
    NpyFile::new(BufReader::new(file))
        .map_err(|e| VisError::load(format!("parse '{}': {e}", path.display())))
}

fn clip_geometry(npy: &ClipReader, path: &Path) -> VisResult<[usize; 3]> {
    let shape = npy.shape();
    let &[frames, height, width] = shape else {
        return Err(VisError::precondition(format!(
            "clip '{}' must be frames x height x width, got {} dimension(s)",
            path.display(),
            shape.len()
        )));
    };
    if npy.order() != Order::C {
        return Err(VisError::load(format!(
            "clip '{}' is not C-order",
            path.display()
        )));
    }
    Ok([frames as usize, height as usize, width as usize])
}

fn binarize<T: npyz::Deserialize>(
    npy: ClipReader,
    path: &Path,
    is_foreground: impl Fn(T) -> bool,
) -> VisResult<Vec<u8>> {
    let values = npy
        .into_vec::<T>()
        .map_err(|e| VisError::load(format!("read '{}': {e}", path.display())))?;
    Ok(values
        .into_iter()
        .map(|v| u8::from(is_foreground(v)))
        .collect())
}
