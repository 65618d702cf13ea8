// src/math/color/luv.rs
use palette::{
    LinSrgb, Luv, Xyz,
    convert::FromColorUnclamped,
    white_point::{D65, WhitePoint},
};

/// Referenzweiß D65 (CIE 1931, 2°) in XYZ, Y = 1.
pub fn d65_white() -> [f32; 3] {
    let white: Xyz<_, f32> = D65::get_xyz();
    white.into_components().into()
}

/// CIELUV (L* in [0, 100]) nach XYZ mit D65 als Referenzweiß.
pub fn luv_to_xyz(l: f32, u: f32, v: f32) -> [f32; 3] {
    if l <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let xyz = Xyz::<D65, f32>::from_color_unclamped(Luv::<D65, f32>::new(l, u, v));
    xyz.into_components().into()
}

/// XYZ nach linearem sRGB, ohne Gamma-Kodierung und ohne Clipping.
pub fn xyz_to_linear_srgb([x, y, z]: [f32; 3]) -> [f32; 3] {
    let rgb = LinSrgb::from_color_unclamped(Xyz::<D65, f32>::new(x, y, z));
    rgb.into_components().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_d65_reference_white() {
        let [x, y, z] = d65_white();
        assert_abs_diff_eq!(x, 0.950_47, epsilon = 1e-4);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(z, 1.088_83, epsilon = 1e-4);
    }

    #[test]
    fn test_achromatic_luv_hits_white_point() {
        let [x, y, z] = luv_to_xyz(100.0, 0.0, 0.0);
        assert_abs_diff_eq!(x, d65_white()[0], epsilon = 1e-4);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(z, d65_white()[2], epsilon = 1e-4);
    }

    #[test]
    fn test_mid_lightness() {
        // L* = 50 entspricht Y ≈ 0.1842
        let [_, y, _] = luv_to_xyz(50.0, 0.0, 0.0);
        assert_abs_diff_eq!(y, 0.184_186, epsilon = 1e-4);
        assert_eq!(luv_to_xyz(0.0, 10.0, 10.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_white_point_maps_to_unit_rgb() {
        let rgb = xyz_to_linear_srgb(d65_white());
        for channel in rgb {
            assert_abs_diff_eq!(channel, 1.0, epsilon = 1e-3);
        }
    }
}
