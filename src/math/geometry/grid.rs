// src/math/geometry/grid.rs
use crate::math::{
    error::{MathResult, checks},
    types::Field2D,
    utils::{constants::TAU, spacing},
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Verteilung der Stützstellen entlang der radialen Achse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DensityMode {
    /// Gleiche Abstände im Radius
    #[default]
    Uniform,
    /// Gleiche Fläche pro Schritt (`sqrt`-Abstände)
    AreaEven,
}

impl DensityMode {
    /// `count` Stützstellen in [0, 1], beide Enden eingeschlossen.
    pub fn unit_samples(self, count: usize) -> Vec<f32> {
        match self {
            DensityMode::Uniform => spacing::linspace(0.0, 1.0, count),
            DensityMode::AreaEven => spacing::sqrt_spacing(count),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DensityMode::Uniform => "uniform",
            DensityMode::AreaEven => "area-even",
        }
    }
}

/// Meshgrid zweier Achsen: `u` läuft entlang der Spalten, `v` entlang der Zeilen.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    pub u: Field2D<f32>,
    pub v: Field2D<f32>,
}

impl CoordinateGrid {
    /// Winkelgitter für Flächen: `u` und `v` über [0, 2π].
    ///
    /// Der Dichtemodus wirkt auf die `v`-Achse.
    pub fn angular(resolution: usize, density: DensityMode) -> MathResult<Self> {
        checks::resolution(resolution)?;
        let u = spacing::linspace(0.0, TAU, resolution);
        let v: Vec<f32> = density
            .unit_samples(resolution)
            .into_iter()
            .map(|t| t * TAU)
            .collect();
        Ok(Self::from_axes(&u, &v))
    }

    /// Polargitter: `u` = Winkel θ über [0, 2π], `v` = Radius r über [0, 1].
    pub fn polar(resolution: usize, density: DensityMode) -> MathResult<Self> {
        checks::resolution(resolution)?;
        let theta = spacing::linspace(0.0, TAU, resolution);
        let radius = density.unit_samples(resolution);
        Ok(Self::from_axes(&theta, &radius))
    }

    fn from_axes(u: &[f32], v: &[f32]) -> Self {
        debug_assert_eq!(u.len(), v.len());
        let side = u.len();
        Self {
            u: Field2D::from_fn(side, |_, col| u[col]),
            v: Field2D::from_fn(side, |row, _| v[row]),
        }
    }

    pub fn resolution(&self) -> usize {
        self.u.side()
    }

    /// Iteriert über alle `(u, v)`-Paare in Zeilenreihenfolge.
    pub fn pairs(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.u.cells().iter().copied().zip(self.v.cells().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_axes_vary_along_their_own_dimension() {
        let grid = CoordinateGrid::angular(4, DensityMode::Uniform).unwrap();
        assert_eq!(grid.u.shape(), (4, 4));
        for row in 0..4 {
            assert_eq!(grid.u.row(row), grid.u.row(0));
        }
        for col in 0..4 {
            assert_eq!(grid.v[(2, col)], grid.v[(2, 0)]);
        }
        assert_eq!(grid.u[(0, 0)], 0.0);
        assert_eq!(grid.u[(0, 3)], TAU);
        assert_eq!(grid.v[(3, 0)], TAU);
    }

    #[test]
    fn test_rejects_empty_resolution() {
        assert!(CoordinateGrid::angular(0, DensityMode::Uniform).is_err());
        assert!(CoordinateGrid::polar(0, DensityMode::AreaEven).is_err());
    }

    /// Zeilen pro Flächeneinheit in einem Kreisring [r0, r1).
    fn rows_per_area(radii: &[f32], r0: f32, r1: f32) -> f32 {
        let rows = radii.iter().filter(|r| **r >= r0 && **r < r1).count();
        rows as f32 / (PI * (r1 * r1 - r0 * r0))
    }

    #[test]
    fn test_area_even_density_is_flat_per_area() {
        let polar = CoordinateGrid::polar(1001, DensityMode::AreaEven).unwrap();
        let radii: Vec<f32> = (0..1001).map(|row| polar.v[(row, 0)]).collect();
        let inner = rows_per_area(&radii, 0.0, 0.1);
        let outer = rows_per_area(&radii, 0.9, 1.0);
        assert!((inner / outer - 1.0).abs() < 0.25, "ratio {}", inner / outer);

        let uniform = CoordinateGrid::polar(1001, DensityMode::Uniform).unwrap();
        let radii: Vec<f32> = (0..1001).map(|row| uniform.v[(row, 0)]).collect();
        let inner = rows_per_area(&radii, 0.0, 0.1);
        let outer = rows_per_area(&radii, 0.9, 1.0);
        assert!(inner / outer > 10.0, "uniform ratio {}", inner / outer);
    }

    #[test]
    fn test_area_even_keeps_endpoints() {
        let grid = CoordinateGrid::angular(7, DensityMode::AreaEven).unwrap();
        assert_eq!(grid.v[(0, 0)], 0.0);
        assert_abs_diff_eq!(grid.v[(6, 0)], TAU, epsilon = 1e-6);
    }
}
