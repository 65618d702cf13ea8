// src/math/types/color.rs
use serde::{Deserialize, Serialize};

/// RGBA-Farbe, alle Kanäle in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Hintergrund der Rasterbilder: weiß, vollständig transparent.
    pub const TRANSPARENT: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb([r, g, b]: [f32; 3], alpha: f32) -> Self {
        Self::new(r, g, b, alpha)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// 8-Bit-Kanäle, abgeschnitten wie `int(c * 255)`.
    pub fn to_u8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Hex-Farbe ohne Alpha, z.B. `#ff0000`.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Lesbare Beschreibung, z.B. für Tooltips.
    pub fn describe(self) -> String {
        let [r, g, b, _] = self.to_u8();
        format!("R: {r}, G: {g}, B: {b}, A: {:.2}", self.a)
    }
}

#[cfg(test)]
impl Rgba {
    pub fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn nearly_equal(&self, other: &Rgba, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_formats_truncate_channels() {
        let color = Rgba::new(1.0, 0.5, 0.0, 0.25);
        assert_eq!(color.to_u8(), [255, 127, 0, 63]);
        assert_eq!(color.to_hex(), "#ff7f00");
        assert_eq!(color.describe(), "R: 255, G: 127, B: 0, A: 0.25");
    }

    #[test]
    fn test_transparent_background() {
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(!Rgba::new(1.0, 1.0, 1.0, 0.1).is_transparent());
    }
}
