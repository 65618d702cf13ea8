// src/math/geometry/horn_torus.rs
use crate::math::{
    color::hue_color,
    error::{MathResult, checks},
    geometry::grid::{CoordinateGrid, DensityMode},
    types::{Field2D, Point3D, Rgba, Vec3},
    utils::constants::{PI, TAU, VIBRANT_LIGHTNESS},
};
use bevy::log::{Level, debug, trace};
use bevy::utils::tracing;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Verlauf der Deckkraft entlang von `V`, normiert auf `t = V / 2π`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OpacityFalloff {
    /// `1 - t`: opak an der Singularität, transparent am Ende
    #[default]
    Linear,
    /// `(1 - t)²`: betont die Transparenz nach außen
    Squared,
    /// `t`: ältere Variante, transparent an der Singularität
    Rising,
}

impl OpacityFalloff {
    pub fn opacity(self, t: f32) -> f32 {
        match self {
            OpacityFalloff::Linear => 1.0 - t,
            OpacityFalloff::Squared => (1.0 - t) * (1.0 - t),
            OpacityFalloff::Rising => t,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OpacityFalloff::Linear => "linear",
            OpacityFalloff::Squared => "squared",
            OpacityFalloff::Rising => "rising",
        }
    }
}

/// Wo `V = 0` auf der Fläche liegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseConvention {
    /// Phasenverschiebung um π: `V = 0` liegt in der Singularität
    #[default]
    Singularity,
    /// Keine Verschiebung: `V = 0` liegt auf dem äußeren Rand
    OuterRim,
}

impl PhaseConvention {
    pub fn offset(self) -> f32 {
        match self {
            PhaseConvention::Singularity => PI,
            PhaseConvention::OuterRim => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhaseConvention::Singularity => "singularity",
            PhaseConvention::OuterRim => "outer-rim",
        }
    }
}

/// Konfiguration für einen einzelnen Horn-Torus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HornTorusConfig {
    /// Seitenlänge des `(U, V)`-Gitters.
    pub resolution: usize,
    /// Ring- und Röhrenradius (beim Horn-Torus identisch).
    pub radius: f32,
    /// Sättigung der Farbtöne in [0, 1].
    pub saturation: f32,
    pub density: DensityMode,
    pub falloff: OpacityFalloff,
    pub phase: PhaseConvention,
}

impl Default for HornTorusConfig {
    fn default() -> Self {
        Self {
            resolution: 100,
            radius: 1.0,
            saturation: 1.0,
            density: DensityMode::Uniform,
            falloff: OpacityFalloff::Linear,
            phase: PhaseConvention::Singularity,
        }
    }
}

impl HornTorusConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
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

    pub fn with_falloff(mut self, falloff: OpacityFalloff) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_phase(mut self, phase: PhaseConvention) -> Self {
        self.phase = phase;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        checks::resolution(self.resolution)?;
        checks::positive("radius", self.radius)?;
        checks::unit_interval("saturation", self.saturation)
    }

    /// Position und Flächennormale für einen Gitterpunkt.
    pub fn surface_point(&self, u: f32, v: f32) -> (Point3D, Vec3) {
        let phi = v + self.phase.offset();
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let ring = self.radius + self.radius * cos_phi;
        let position = Point3D::new(ring * cos_u, ring * sin_u, self.radius * sin_phi);
        // Richtung vom Röhrenmittelpunkt zum Punkt, auch in der Singularität definiert
        let normal = Vec3::new(cos_phi * cos_u, cos_phi * sin_u, sin_phi);
        (position, normal)
    }

    /// Farbe für einen Gitterpunkt: Farbton aus `U`, Deckkraft aus `V`.
    pub fn surface_color(&self, u: f32, v: f32) -> Rgba {
        let alpha = self.falloff.opacity(v / TAU);
        hue_color(u, VIBRANT_LIGHTNESS, self.saturation, alpha)
    }

    /// Erzeugt Positions- und Farbfeld. Reine Funktion der Konfiguration.
    pub fn generate(&self) -> MathResult<SurfaceField> {
        self.validate()?;
        debug!(
            "Generating horn torus: resolution {}, radius {:.3}, saturation {:.3}, {} / {} / {}",
            self.resolution,
            self.radius,
            self.saturation,
            self.density.label(),
            self.falloff.label(),
            self.phase.label()
        );

        let grid = CoordinateGrid::angular(self.resolution, self.density)?;
        let geometry = grid.u.zip_map(&grid.v, |&u, &v| self.surface_point(u, v));
        let colors = grid.u.zip_map(&grid.v, |&u, &v| self.surface_color(u, v));

        if tracing::enabled!(Level::TRACE) {
            for row in 0..colors.side() {
                trace!("Longitude {}, opacity {:.2}", row, colors[(row, 0)].a);
            }
        }

        Ok(SurfaceField {
            positions: geometry.map(|(position, _)| *position),
            normals: geometry.map(|(_, normal)| *normal),
            colors,
            radius: self.radius,
        })
    }
}

/// Kurzform mit den Standardvarianten (lineare Deckkraft, Phasenverschiebung π).
pub fn generate_horn_torus(
    resolution: usize,
    radius: f32,
    saturation: f32,
    density: DensityMode,
) -> MathResult<SurfaceField> {
    HornTorusConfig::new()
        .with_resolution(resolution)
        .with_radius(radius)
        .with_saturation(saturation)
        .with_density(density)
        .generate()
}

/// Abgeflachte, parallele Arrays für Renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatField {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

/// Ergebnis eines Flächen-Generators: ein Punkt, eine Normale und eine Farbe pro Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceField {
    pub positions: Field2D<Point3D>,
    pub normals: Field2D<Vec3>,
    pub colors: Field2D<Rgba>,
    /// Radius, mit dem die Fläche erzeugt wurde.
    pub radius: f32,
}

impl SurfaceField {
    pub fn resolution(&self) -> usize {
        self.positions.side()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Punkte mit Farbe in Zeilenreihenfolge.
    pub fn points(&self) -> impl Iterator<Item = (Point3D, Rgba)> + '_ {
        self.positions
            .cells()
            .iter()
            .copied()
            .zip(self.colors.cells().iter().copied())
    }

    pub fn flatten(&self) -> FlatField {
        FlatField {
            positions: self.positions.cells().iter().map(|p| p.to_array()).collect(),
            normals: self.normals.cells().iter().map(|n| n.to_array()).collect(),
            colors: self.colors.cells().iter().map(|c| c.to_array()).collect(),
        }
    }
}
