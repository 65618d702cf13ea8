// src/math/color/hls.rs
use crate::math::types::Rgba;
use palette::{FromColor, Hsl, Srgb};
use crate::math::utils::constants::TAU;

/// Hue/Lightness/Saturation nach sRGB, alle Werte in [0, 1].
///
/// Der Farbton ist zyklisch: `h` und `h + 1` liefern dieselbe Farbe.
pub fn hls_to_rgb(hue: f32, lightness: f32, saturation: f32) -> [f32; 3] {
    let degrees = (hue * 360.0).rem_euclid(360.0);
    let hsl: Hsl = Hsl::new_srgb(degrees, saturation, lightness);
    let rgb = Srgb::from_color(hsl);
    [rgb.red, rgb.green, rgb.blue]
}

/// Farbe für einen Winkel in Radiant: Farbton `angle / 2π`.
pub fn hue_color(angle: f32, lightness: f32, saturation: f32, alpha: f32) -> Rgba {
    Rgba::from_rgb(hls_to_rgb(angle / TAU, lightness, saturation), alpha)
}
