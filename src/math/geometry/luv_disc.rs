// src/math/geometry/luv_disc.rs
use crate::math::{
    color::{luv_to_xyz, xyz_to_linear_srgb},
    error::{MathError, MathResult, checks},
    geometry::raster::{Raster, scatter_into_raster},
    types::{Field2D, Rgba},
    utils::spacing,
};
use bevy::log::info;
use serde::{Deserialize, Serialize};

/// Chroma-Scheibe im CIELUV-Raum bei fester Helligkeit L*.
///
/// Das Gitter deckt `[-extent, extent]²` ab; nur Punkte im Einheitskreis
/// werden eingefärbt, mit `u* = x` und `v* = y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuvDiscConfig {
    pub resolution: usize,
    pub extent: f32,
    /// L* in (0, 100]
    pub lightness: f32,
}

impl Default for LuvDiscConfig {
    fn default() -> Self {
        Self {
            resolution: 500,
            extent: 2.0,
            lightness: 50.0,
        }
    }
}

impl LuvDiscConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_extent(mut self, extent: f32) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_lightness(mut self, lightness: f32) -> Self {
        self.lightness = lightness;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        checks::resolution(self.resolution)?;
        checks::positive("extent", self.extent)?;
        if !(self.lightness > 0.0 && self.lightness <= 100.0) {
            return Err(MathError::invalid(
                "lightness",
                self.lightness,
                "must lie within (0, 100]",
            ));
        }
        Ok(())
    }

    pub fn generate(&self) -> MathResult<Raster> {
        self.validate()?;
        let axis = spacing::linspace(-self.extent, self.extent, self.resolution);
        let xyz: Field2D<Option<[f32; 3]>> = Field2D::from_fn(self.resolution, |row, col| {
            let (x, y) = (axis[col], axis[row]);
            (x * x + y * y <= 1.0).then(|| luv_to_xyz(self.lightness, x, y))
        });

        // Normierung auf das globale Maximum aller Komponenten
        let peak = xyz
            .cells()
            .iter()
            .flatten()
            .flat_map(|c| c.iter().copied())
            .fold(0.0_f32, f32::max);
        let scale = if peak > 0.0 { 1.0 / peak } else { 1.0 };

        let masked = xyz.cells().iter().filter(|c| c.is_some()).count();
        info!(
            "CIELUV disc at L* = {}: {} of {} cells inside the unit circle.",
            self.lightness,
            masked,
            xyz.len()
        );

        let targets = xyz.iter_indexed().filter_map(|((row, col), cell)| {
            cell.map(|c| {
                let rgb = xyz_to_linear_srgb(c.map(|v| v * scale));
                let color = Rgba::from_rgb(rgb.map(|v| v.clamp(0.0, 1.0)), 1.0);
                (Some((col, row)), color)
            })
        });
        let (pixels, coverage) = scatter_into_raster(self.resolution, targets, |_, _| false);
        coverage.log("CIELUV disc");

        Ok(Raster {
            pixels,
            coverage,
            extent: self.extent,
            unit_circle: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_is_masked_to_unit_circle() {
        let raster = LuvDiscConfig::new().with_resolution(41).generate().unwrap();
        assert_eq!(raster.side(), 41);
        assert!(raster.unit_circle);
        // Achse: -2 .. 2 in Schritten von 0.1, Mitte bei Index 20
        assert!(!raster.pixel(20, 20).is_some_and(|p| p.is_transparent()));
        assert!(raster.pixel(0, 0).is_some_and(|p| p.is_transparent()));
        assert!(raster.pixel(35, 20).is_some_and(|p| p.is_transparent()));
        // Radius 1 entspricht 10 Zellen, Index 29 liegt knapp innerhalb
        assert!(!raster.pixel(29, 20).is_some_and(|p| p.is_transparent()));
    }

    #[test]
    fn test_channels_are_clipped() {
        let raster = LuvDiscConfig::new().with_resolution(31).generate().unwrap();
        for pixel in raster.pixels.cells() {
            for channel in pixel.rgb() {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_lightness_bounds() {
        assert!(LuvDiscConfig::new().with_lightness(0.0).generate().is_err());
        assert!(LuvDiscConfig::new().with_lightness(120.0).generate().is_err());
        assert!(LuvDiscConfig::new().with_extent(-1.0).generate().is_err());
    }

    #[test]
    fn test_disc_outside_grid_stays_empty() {
        // Ein einzelner Punkt bei (-2, -2) liegt außerhalb des Kreises
        let raster = LuvDiscConfig::new().with_resolution(1).generate().unwrap();
        assert_eq!(raster.coverage.written, 0);
        assert!(raster.pixel(0, 0).is_some_and(|p| p.is_transparent()));
    }
}
