// src/scene.rs
use crate::config::{RoseConfig, SceneKind};
use crate::math::{
    error::MathResult,
    geometry::{Raster, SurfaceField},
};
use bevy::log::info;

/// Fertig erzeugte Daten, bereit zur Übergabe an ein Backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    /// Eine oder mehrere Flächen, jede als eigenes Primitiv
    Surfaces(Vec<SurfaceField>),
    /// 2D-Bild mit transparentem Rand
    Raster(Raster),
}

impl Scene {
    /// Anzahl der Primitive, die ein Renderer anlegt.
    pub fn primitive_count(&self) -> usize {
        match self {
            Scene::Surfaces(fields) => fields.len(),
            Scene::Raster(_) => 1,
        }
    }

    /// Gesamtzahl der Punkte bzw. Pixel.
    pub fn point_count(&self) -> usize {
        match self {
            Scene::Surfaces(fields) => fields.iter().map(SurfaceField::len).sum(),
            Scene::Raster(raster) => raster.pixels.len(),
        }
    }
}

/// Erzeugt die Szene für die aktive Konfiguration. Alle Parameter werden vor
/// der Berechnung geprüft.
pub fn build_scene(config: &RoseConfig) -> MathResult<Scene> {
    let scene = match config.scene {
        SceneKind::Torus => Scene::Surfaces(vec![config.torus.generate()?]),
        SceneKind::Layers => Scene::Surfaces(config.layers.generate()?),
        SceneKind::Wheel => Scene::Raster(config.wheel.generate()?),
        SceneKind::Luv => Scene::Raster(config.luv.generate()?),
    };
    info!(
        "Built {} scene: {} primitive(s), {} points.",
        config.scene.label(),
        scene.primitive_count(),
        scene.point_count()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_scene_has_one_primitive_per_layer() {
        let mut config = RoseConfig::default();
        config.layers.layers = 3;
        config.layers.surface.resolution = 10;
        let scene = build_scene(&config).unwrap();
        assert_eq!(scene.primitive_count(), 3);
        assert_eq!(scene.point_count(), 300);
    }

    #[test]
    fn test_raster_scenes() {
        let mut config = RoseConfig::default();
        config.scene = SceneKind::Wheel;
        config.wheel.resolution = 16;
        assert!(matches!(build_scene(&config), Ok(Scene::Raster(r)) if r.side() == 16));

        config.scene = SceneKind::Luv;
        config.luv.resolution = 8;
        assert_eq!(build_scene(&config).unwrap().point_count(), 64);
    }

    #[test]
    fn test_invalid_parameters_produce_no_scene() {
        let mut config = RoseConfig::default();
        config.scene = SceneKind::Torus;
        config.torus.resolution = 0;
        assert!(build_scene(&config).is_err());
    }
}
