// src/math/geometry/layers.rs
use crate::math::{
    error::{MathResult, checks},
    geometry::horn_torus::{HornTorusConfig, SurfaceField},
};
use bevy::log::info;
use serde::{Deserialize, Serialize};

/// Konzentrische Horn-Tori: Schicht `i` von `n` erhält Radius und Sättigung `i / n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerStackConfig {
    pub layers: usize,
    /// Radius der äußersten Schicht.
    pub outer_radius: f32,
    /// Sättigung der äußersten Schicht.
    pub max_saturation: f32,
    /// Vorlage für alle Schichten; Radius und Sättigung werden überschrieben.
    pub surface: HornTorusConfig,
}

impl Default for LayerStackConfig {
    fn default() -> Self {
        Self {
            layers: 20,
            outer_radius: 1.0,
            max_saturation: 1.0,
            surface: HornTorusConfig::default(),
        }
    }
}

impl LayerStackConfig {
    pub fn new(layers: usize) -> Self {
        Self {
            layers,
            ..Self::default()
        }
    }

    pub fn with_surface(mut self, surface: HornTorusConfig) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_outer_radius(mut self, radius: f32) -> Self {
        self.outer_radius = radius;
        self
    }

    pub fn with_max_saturation(mut self, saturation: f32) -> Self {
        self.max_saturation = saturation;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        checks::count("layers", self.layers)?;
        checks::positive("radius", self.outer_radius)?;
        checks::unit_interval("saturation", self.max_saturation)?;
        checks::resolution(self.surface.resolution)
    }

    /// Konfiguration jeder Schicht, von innen nach außen.
    pub fn layer_configs(&self) -> MathResult<Vec<HornTorusConfig>> {
        self.validate()?;
        Ok((1..=self.layers)
            .map(|i| {
                let fraction = i as f32 / self.layers as f32;
                self.surface
                    .clone()
                    .with_radius(self.outer_radius * fraction)
                    .with_saturation(self.max_saturation * fraction)
            })
            .collect())
    }

    /// Erzeugt alle Schichten als eigenständige Flächen.
    pub fn generate(&self) -> MathResult<Vec<SurfaceField>> {
        let configs = self.layer_configs()?;
        info!(
            "Generating {} horn torus layers at resolution {}.",
            configs.len(),
            self.surface.resolution
        );
        configs.iter().map(HornTorusConfig::generate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_layers_scale_radius_and_saturation() {
        let configs = LayerStackConfig::new(4).layer_configs().unwrap();
        assert_eq!(configs.len(), 4);
        for (i, config) in configs.iter().enumerate() {
            let expected = (i + 1) as f32 / 4.0;
            assert_abs_diff_eq!(config.radius, expected);
            assert_abs_diff_eq!(config.saturation, expected);
        }
        assert_eq!(configs[3].radius, 1.0);
    }

    #[test]
    fn test_generate_returns_one_field_per_layer() {
        let stack = LayerStackConfig::new(3)
            .with_surface(HornTorusConfig::new().with_resolution(6));
        let fields = stack.generate().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(fields.iter().all(|f| f.resolution() == 6));
        assert!(fields[0].radius < fields[2].radius);
    }

    #[test]
    fn test_stack_scale_parameters() {
        let configs = LayerStackConfig::new(2)
            .with_outer_radius(3.0)
            .with_max_saturation(0.5)
            .layer_configs()
            .unwrap();
        assert_abs_diff_eq!(configs[0].radius, 1.5);
        assert_abs_diff_eq!(configs[1].saturation, 0.5);
    }

    #[test]
    fn test_zero_layers_rejected() {
        let err = LayerStackConfig::new(0).generate().unwrap_err();
        assert_eq!(err.parameter(), "layers");
    }
}
