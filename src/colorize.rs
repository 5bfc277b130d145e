//! Scalar-to-RGB colorization via fixed lookup tables.
//!
//! Both colorizers are pure: equal input clips always produce byte-identical
//! output. The tables are rebuilt per call and never cached.

use crate::{
    error::{VisError, VisResult},
    volume::{ColorVolume, Volume},
};

/// Anchor colors of the default perceptual palette (dark blue through olive
/// to pale pink), RGB in [0, 1]. The 256-entry table interpolates linearly
/// between these.
const PALETTE_ANCHORS: [[f32; 3]; 20] = [
    [0.0039, 0.0980, 0.3490],
    [0.0318, 0.1687, 0.3620],
    [0.0596, 0.2392, 0.3749],
    [0.0827, 0.2918, 0.3797],
    [0.1047, 0.3420, 0.3835],
    [0.1561, 0.3804, 0.3671],
    [0.2153, 0.4157, 0.3447],
    [0.2898, 0.4447, 0.3075],
    [0.3714, 0.4710, 0.2631],
    [0.4624, 0.4969, 0.2235],
    [0.5612, 0.5228, 0.1882],
    [0.6596, 0.5455, 0.1886],
    [0.7580, 0.5639, 0.2330],
    [0.8471, 0.5851, 0.2973],
    [0.9176, 0.6110, 0.4016],
    [0.9745, 0.6404, 0.5090],
    [0.9839, 0.6812, 0.6298],
    [0.9914, 0.7220, 0.7502],
    [0.9859, 0.7612, 0.8651],
    [0.9804, 0.8000, 0.9804],
];

fn palette_sample(t: f32) -> [f32; 3] {
    let pos = t.clamp(0.0, 1.0) * (PALETTE_ANCHORS.len() - 1) as f32;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(PALETTE_ANCHORS.len() - 1);
    let frac = pos - lo as f32;

    let a = PALETTE_ANCHORS[lo];
    let b = PALETTE_ANCHORS[hi];
    [
        a[0] + (b[0] - a[0]) * frac,
        a[1] + (b[1] - a[1]) * frac,
        a[2] + (b[2] - a[2]) * frac,
    ]
}

/// Palette sampled at `i / 255`, each channel truncated to 0-255.
fn intensity_lut() -> [[u8; 3]; 256] {
    let mut lut = [[0u8; 3]; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let c = palette_sample(i as f32 / 255.0);
        *entry = [
            (c[0] * 255.0) as u8,
            (c[1] * 255.0) as u8,
            (c[2] * 255.0) as u8,
        ];
    }
    lut
}

/// Map an intensity clip through the default palette.
///
/// The clip must span more than one distinct level; a flat clip would render
/// as a single solid color and is rejected rather than silently encoded.
pub fn intensity_to_color(vol: &Volume) -> VisResult<ColorVolume> {
    let (min, max) = vol
        .value_range()
        .ok_or_else(|| VisError::precondition("intensity clip is empty"))?;
    if u16::from(max) - u16::from(min) <= 1 {
        return Err(VisError::precondition(format!(
            "intensity clip is degenerate: values span {min}..{max}"
        )));
    }

    let lut = intensity_lut();
    let mut data = vec![0u8; vol.data.len() * 3];
    for (dst, &v) in data.chunks_exact_mut(3).zip(&vol.data) {
        dst.copy_from_slice(&lut[usize::from(v)]);
    }
    ColorVolume::new(vol.frames, vol.height, vol.width, data)
}

/// Map a {0, 1} mask clip to black/`color`.
///
/// Unlike the intensity path, out-of-range cells are clamped into {0, 1}
/// rather than rejected. `color` is RGB in [0, 1], truncated to 0-255.
pub fn binary_to_color(vol: &Volume, color: [f32; 3]) -> VisResult<ColorVolume> {
    let lut = [
        [0u8, 0, 0],
        [
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
        ],
    ];

    let mut data = vec![0u8; vol.data.len() * 3];
    for (dst, &v) in data.chunks_exact_mut(3).zip(&vol.data) {
        dst.copy_from_slice(&lut[usize::from(v.min(1))]);
    }
    ColorVolume::new(vol.frames, vol.height, vol.width, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_volume() -> Volume {
        let data: Vec<u8> = (0..32).map(|i| (i * 255 / 31) as u8).collect();
        Volume::new(2, 4, 4, data).unwrap()
    }

    #[test]
    fn lut_endpoints_match_palette_anchors() {
        let lut = intensity_lut();
        assert_eq!(lut[0], [0, 24, 88]);
        assert_eq!(lut[255], [250, 204, 250]);
    }

    #[test]
    fn lut_runs_cool_to_warm() {
        let lut = intensity_lut();
        // Blue-dominant at the dark end, red-dominant at the bright end.
        assert!(lut[0][2] > lut[0][0]);
        assert!(lut[255][0] > 200);
        assert!(lut[0][0] < lut[128][0] && lut[128][0] < lut[255][0]);
    }

    #[test]
    fn intensity_output_is_rgb_of_same_geometry() {
        let vol = ramp_volume();
        let colored = intensity_to_color(&vol).unwrap();
        assert_eq!(
            (colored.frames, colored.height, colored.width),
            (vol.frames, vol.height, vol.width)
        );
        assert_eq!(colored.data.len(), vol.data.len() * 3);
    }

    #[test]
    fn intensity_colorization_is_deterministic() {
        let vol = ramp_volume();
        let a = intensity_to_color(&vol).unwrap();
        let b = intensity_to_color(&vol).unwrap();
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn flat_clip_is_rejected() {
        let vol = Volume::new(1, 2, 2, vec![100; 4]).unwrap();
        assert!(matches!(
            intensity_to_color(&vol),
            Err(VisError::Precondition(_))
        ));

        // A two-level clip spanning exactly one step is still degenerate.
        let vol = Volume::new(1, 2, 2, vec![100, 101, 100, 101]).unwrap();
        assert!(intensity_to_color(&vol).is_err());

        let vol = Volume::new(1, 2, 2, vec![100, 102, 100, 102]).unwrap();
        assert!(intensity_to_color(&vol).is_ok());
    }

    #[test]
    fn binary_maps_zero_to_black_and_one_to_color() {
        let vol = Volume::new(1, 1, 4, vec![0, 1, 0, 1]).unwrap();
        let colored = binary_to_color(&vol, [1.0, 0.0, 0.0]).unwrap();
        assert_eq!(&colored.data[0..3], &[0, 0, 0]);
        assert_eq!(&colored.data[3..6], &[255, 0, 0]);
    }

    #[test]
    fn binary_clamps_out_of_range_cells() {
        let vol = Volume::new(1, 1, 2, vec![0, 7]).unwrap();
        let colored = binary_to_color(&vol, [1.0, 0.0, 0.0]).unwrap();
        assert_eq!(&colored.data[3..6], &[255, 0, 0]);
    }

    #[test]
    fn binary_foreground_color_is_truncated() {
        let vol = Volume::new(1, 1, 1, vec![1]).unwrap();
        let colored = binary_to_color(&vol, [0.5, 0.25, 1.0]).unwrap();
        assert_eq!(&colored.data[..], &[127, 63, 255]);
    }
}
