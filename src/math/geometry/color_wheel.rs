// src/math/geometry/color_wheel.rs
use crate::math::{
    color::hue_color,
    error::{MathResult, checks},
    geometry::{
        grid::{CoordinateGrid, DensityMode},
        raster::{Raster, scatter_into_raster},
    },
    types::{Field2D, Rgba},
    utils::constants::VIBRANT_LIGHTNESS,
};
use bevy::log::{info, trace};
use serde::{Deserialize, Serialize};

/// Konfiguration für das 2D-HSL-Farbrad (Quadrat → Kreis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorWheelConfig {
    /// Seitenlänge des Polargitters und des Zielrasters.
    pub resolution: usize,
    /// Sättigung am Rand; innen skaliert sie linear mit dem Radius.
    pub saturation: f32,
    pub density: DensityMode,
}

impl Default for ColorWheelConfig {
    fn default() -> Self {
        Self {
            resolution: 500,
            saturation: 1.0,
            density: DensityMode::AreaEven,
        }
    }
}

/// Farbquadrat im Polargitter, vor der Abbildung auf den Kreis.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarColorSquare {
    /// `u` = θ, `v` = r
    pub grid: CoordinateGrid,
    pub colors: Field2D<Rgba>,
}

impl ColorWheelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    pub fn with_density(mut self, density: DensityMode) -> Self {
        self.density = density;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        checks::resolution(self.resolution)?;
        checks::unit_interval("saturation", self.saturation)
    }

    /// Farbton aus θ, Sättigung aus r, volle Deckkraft.
    pub fn color_square(&self) -> MathResult<PolarColorSquare> {
        self.validate()?;
        let grid = CoordinateGrid::polar(self.resolution, self.density)?;
        info!("Generated polar coordinate grid.");
        let colors = grid.u.zip_map(&grid.v, |&theta, &r| {
            hue_color(theta, VIBRANT_LIGHTNESS, r * self.saturation, 1.0)
        });
        Ok(PolarColorSquare { grid, colors })
    }

    /// Zielpixel `(x, y)` für eine Polarkoordinate, `None` außerhalb des Rasters.
    pub fn target_pixel(&self, theta: f32, r: f32) -> Option<(usize, usize)> {
        let side = self.resolution as i64;
        let center = (self.resolution / 2) as f32;
        let scale = self.resolution as f32 / 2.0;
        // `as` schneidet in Richtung Null ab
        let x = (center + r * theta.cos() * scale) as i64;
        let y = (center + r * theta.sin() * scale) as i64;
        if (0..side).contains(&x) && (0..side).contains(&y) {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }

    /// Liegt der Pixelmittelpunkt mindestens ein Pixel innerhalb des eingeschriebenen Kreises?
    fn inside_disc(&self, x: usize, y: usize) -> bool {
        let center = (self.resolution / 2) as f32;
        let limit = self.resolution as f32 / 2.0 - 1.0;
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        limit > 0.0 && dx * dx + dy * dy <= limit * limit
    }

    /// Farbrad als Raster mit transparentem Rand.
    pub fn generate(&self) -> MathResult<Raster> {
        let square = self.color_square()?;
        let targets = square
            .grid
            .pairs()
            .zip(square.colors.cells().iter().copied())
            .enumerate()
            .map(|(i, ((theta, r), color))| {
                let target = self.target_pixel(theta, r);
                if i % 100 == 0 {
                    trace!(
                        "Cell {} (θ {:.2}, r {:.2}) → {:?}, {}",
                        i,
                        theta,
                        r,
                        target,
                        color.describe()
                    );
                }
                (target, color)
            });
        let (pixels, coverage) =
            scatter_into_raster(self.resolution, targets, |x, y| self.inside_disc(x, y));
        coverage.log("Color wheel");

        Ok(Raster {
            pixels,
            coverage,
            extent: 1.0,
            unit_circle: false,
        })
    }
}
