use crate::error::{VisError, VisResult};

/// A clip of single-channel 8-bit frames, stored as one contiguous C-order
/// buffer of `frames * height * width` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume {
    pub frames: usize,
    pub height: usize,
    pub width: usize,
    pub data: Vec<u8>,
}

impl Volume {
    pub fn new(frames: usize, height: usize, width: usize, data: Vec<u8>) -> VisResult<Self> {
        let expected = frames
            .checked_mul(height)
            .and_then(|v| v.checked_mul(width))
            .ok_or_else(|| VisError::precondition("volume size overflow"))?;
        if data.len() != expected {
            return Err(VisError::precondition(format!(
                "volume data length {} does not match {frames}x{height}x{width}",
                data.len()
            )));
        }
        Ok(Self {
            frames,
            height,
            width,
            data,
        })
    }

    /// Minimum and maximum cell value, or `None` for an empty clip.
    pub fn value_range(&self) -> Option<(u8, u8)> {
        let min = self.data.iter().copied().min()?;
        let max = self.data.iter().copied().max()?;
        Some((min, max))
    }
}

/// A clip of packed RGB frames. `data` holds `frames * height * width * 3`
/// bytes, channel-last, C order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorVolume {
    pub frames: usize,
    pub height: usize,
    pub width: usize,
    pub data: Vec<u8>,
}

impl ColorVolume {
    pub fn new(frames: usize, height: usize, width: usize, data: Vec<u8>) -> VisResult<Self> {
        let expected = frames
            .checked_mul(height)
            .and_then(|v| v.checked_mul(width))
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| VisError::precondition("color volume size overflow"))?;
        if data.len() != expected {
            return Err(VisError::precondition(format!(
                "color volume data length {} does not match {frames}x{height}x{width}x3",
                data.len()
            )));
        }
        Ok(Self {
            frames,
            height,
            width,
            data,
        })
    }

    pub fn frame_len(&self) -> usize {
        self.height * self.width * 3
    }

    /// Packed rgb24 bytes of frame `idx`.
    pub fn frame(&self, idx: usize) -> &[u8] {
        let n = self.frame_len();
        &self.data[idx * n..(idx + 1) * n]
    }

    pub fn same_shape(&self, other: &ColorVolume) -> bool {
        self.frames == other.frames && self.height == other.height && self.width == other.width
    }
}
