//! Additive compositing in 8-bit color space.

use crate::{
    error::{VisError, VisResult},
    volume::ColorVolume,
};

/// Additively blend `fg`, scaled by `opacity`, onto `bg` in place.
///
/// The scaled foreground is truncated (not rounded) to `u8` before the add,
/// and sums that overflow the 8-bit range saturate at 255. `bg` is the
/// output buffer; callers that need the original background must blend into
/// a copy. The operands are not interchangeable: only the foreground is
/// attenuated by `opacity`.
pub fn add_blend(bg: &mut ColorVolume, fg: &ColorVolume, opacity: f32) -> VisResult<()> {
    if !(opacity > 0.0 && opacity <= 1.0) {
        return Err(VisError::precondition(format!(
            "blend opacity {opacity} is outside (0, 1]"
        )));
    }
    if !bg.same_shape(fg) {
        return Err(VisError::precondition(format!(
            "blend shape mismatch: background {}x{}x{}, foreground {}x{}x{}",
            bg.frames, bg.height, bg.width, fg.frames, fg.height, fg.width
        )));
    }

    for (b, &f) in bg.data.iter_mut().zip(&fg.data) {
        let scaled = (f32::from(f) * opacity) as u8;
        let sum = b.wrapping_add(scaled);
        // A wrapped sum lands below the operand that was just added.
        *b = if sum < scaled { u8::MAX } else { sum };
    }
    Ok(())
}

/// Final range clamp applied after compositing. Saturation in [`add_blend`]
/// already pins every cell to [0, 255]; this is a second guard on the buffer
/// handed to the encoder.
pub fn clamp_color_range(vol: &mut ColorVolume) {
    for v in &mut vol.data {
        *v = i32::from(*v).clamp(0, 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(value: u8) -> ColorVolume {
        ColorVolume::new(1, 2, 2, vec![value; 12]).unwrap()
    }

    #[test]
    fn zero_foreground_leaves_background_unchanged() {
        for opacity in [0.25, 0.5, 1.0] {
            let mut bg = solid(123);
            let fg = solid(0);
            add_blend(&mut bg, &fg, opacity).unwrap();
            assert_eq!(bg.data, vec![123; 12]);
        }
    }

    #[test]
    fn overflowing_sum_saturates_at_255() {
        let mut bg = solid(250);
        let fg = solid(20);
        add_blend(&mut bg, &fg, 1.0).unwrap();
        // 250 + 20 wraps to 14 in u8 space; the blend must clamp instead.
        assert_eq!(bg.data, vec![255; 12]);
    }

    #[test]
    fn scaled_foreground_is_truncated() {
        let mut bg = solid(10);
        let fg = solid(199);
        add_blend(&mut bg, &fg, 0.5).unwrap();
        // 199 * 0.5 = 99.5 truncates to 99.
        assert_eq!(bg.data, vec![109; 12]);
    }

    #[test]
    fn blend_is_asymmetric_below_full_opacity() {
        let mut ab = solid(10);
        add_blend(&mut ab, &solid(200), 0.5).unwrap();

        let mut ba = solid(200);
        add_blend(&mut ba, &solid(10), 0.5).unwrap();

        assert_eq!(ab.data, vec![110; 12]);
        assert_eq!(ba.data, vec![205; 12]);
    }

    #[test]
    fn out_of_range_opacity_is_rejected() {
        for opacity in [0.0, -0.5, 1.5, f32::NAN] {
            let mut bg = solid(0);
            let fg = solid(0);
            assert!(matches!(
                add_blend(&mut bg, &fg, opacity),
                Err(VisError::Precondition(_))
            ));
        }
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let mut bg = solid(0);
        let fg = ColorVolume::new(1, 1, 2, vec![0; 6]).unwrap();
        assert!(add_blend(&mut bg, &fg, 0.5).is_err());
    }

    #[test]
    fn clamp_color_range_is_identity_on_saturated_output() {
        let mut vol = solid(255);
        clamp_color_range(&mut vol);
        assert_eq!(vol.data, vec![255; 12]);
    }
}
