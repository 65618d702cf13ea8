// src/config.rs
use crate::math::geometry::{
    ColorWheelConfig, DensityMode, HornTorusConfig, LayerStackConfig, LuvDiscConfig,
    OpacityFalloff, PhaseConvention,
};
use crate::visualization::projection::ProjectionCamera;
use bevy::prelude::Resource;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Syntaxfehler, aber auch `--help` und `--version`
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("{flag} has no effect on the {scene} scene")]
    NotApplicable {
        flag: &'static str,
        scene: &'static str,
    },

    #[error("Could not read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Welche Geometrie erzeugt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    Torus,
    /// Konzentrische Tori (Standard des Hauptskripts)
    #[default]
    Layers,
    Wheel,
    Luv,
}

impl SceneKind {
    pub fn label(self) -> &'static str {
        match self {
            SceneKind::Torus => "torus",
            SceneKind::Layers => "layers",
            SceneKind::Wheel => "wheel",
            SceneKind::Luv => "luv",
        }
    }
}

/// Ausgabeweg für die erzeugten Felder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Interaktives Dreiecksnetz
    Surface,
    /// Interaktive Punktwolke
    #[default]
    Points,
    /// Statische SVG-Datei
    Svg,
}

/// Gesamte Laufzeitkonfiguration. Wird im Viewer als Resource gehalten.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoseConfig {
    pub scene: SceneKind,
    pub backend: Backend,
    pub torus: HornTorusConfig,
    pub layers: LayerStackConfig,
    pub wheel: ColorWheelConfig,
    pub luv: LuvDiscConfig,
    pub camera: ProjectionCamera,
    pub output: Option<PathBuf>,
}

impl Default for RoseConfig {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            backend: Backend::default(),
            torus: HornTorusConfig::default(),
            layers: LayerStackConfig::default(),
            wheel: ColorWheelConfig::default(),
            luv: LuvDiscConfig::default(),
            camera: ProjectionCamera::default(),
            output: None,
        }
    }
}

impl RoseConfig {
    /// Lädt Einstellungen aus einer JSON-Datei; fehlende Felder bleiben auf Standardwerten.
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Ausgabedatei für statische Backends.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("hue-rose-{}.svg", self.scene.label())))
    }

    /// Aktuelle Auflösung der aktiven Szene.
    pub fn resolution(&self) -> usize {
        match self.scene {
            SceneKind::Torus => self.torus.resolution,
            SceneKind::Layers => self.layers.surface.resolution,
            SceneKind::Wheel => self.wheel.resolution,
            SceneKind::Luv => self.luv.resolution,
        }
    }
}

/// Ergebnis der Kommandozeilenauswertung.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(RoseConfig),
    PrintConfig(RoseConfig),
}

/// Kommandozeile. Jede gesetzte Option überschreibt den Wert aus `--config`.
#[derive(Parser, Debug)]
#[command(
    name = "hue-rose",
    version,
    about = "Horn-torus color fields and HSL color wheels"
)]
pub struct Cli {
    /// Geometry to generate (default: layers)
    #[arg(value_enum)]
    pub scene: Option<SceneKind>,

    /// Output: interactive mesh, point cloud or static SVG
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// Grid side length
    #[arg(long, value_name = "N")]
    pub resolution: Option<usize>,

    /// Torus radius (outer radius for layers)
    #[arg(long, value_name = "R")]
    pub radius: Option<f32>,

    /// Saturation in [0, 1] (outermost layer for layers)
    #[arg(long, value_name = "S")]
    pub saturation: Option<f32>,

    /// Radial sampling
    #[arg(long, value_enum)]
    pub density: Option<DensityMode>,

    /// Number of concentric tori
    #[arg(long, value_name = "N")]
    pub layers: Option<usize>,

    /// Opacity along V
    #[arg(long, value_enum)]
    pub falloff: Option<OpacityFalloff>,

    /// Where V = 0 lies on the torus
    #[arg(long, value_enum)]
    pub phase: Option<PhaseConvention>,

    /// CIELUV lightness L*
    #[arg(long, value_name = "L")]
    pub lightness: Option<f32>,

    /// Half width of the sampled u*/v* square
    #[arg(long, value_name = "E")]
    pub extent: Option<f32>,

    /// Camera elevation for static 3D output
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub elevation: Option<f32>,

    /// Camera azimuth for static 3D output
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub azimuth: Option<f32>,

    /// SVG file to write
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON file with base settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective settings as JSON
    #[arg(long)]
    pub print_config: bool,
}

const SURFACE_SCENES: &[SceneKind] = &[SceneKind::Torus, SceneKind::Layers];
const SATURATION_SCENES: &[SceneKind] = &[SceneKind::Torus, SceneKind::Layers, SceneKind::Wheel];

impl Cli {
    /// Erste gesetzte Option, die in `scene` nichts bewirken würde.
    fn inapplicable_flag(&self, scene: SceneKind) -> Option<&'static str> {
        let flags: [(&'static str, bool, &[SceneKind]); 8] = [
            ("--radius", self.radius.is_some(), SURFACE_SCENES),
            ("--saturation", self.saturation.is_some(), SATURATION_SCENES),
            ("--density", self.density.is_some(), SATURATION_SCENES),
            ("--falloff", self.falloff.is_some(), SURFACE_SCENES),
            ("--phase", self.phase.is_some(), SURFACE_SCENES),
            ("--layers", self.layers.is_some(), &[SceneKind::Layers]),
            ("--lightness", self.lightness.is_some(), &[SceneKind::Luv]),
            ("--extent", self.extent.is_some(), &[SceneKind::Luv]),
        ];
        flags
            .into_iter()
            .find(|(_, set, scenes)| *set && !scenes.contains(&scene))
            .map(|(flag, _, _)| flag)
    }

    /// Lädt die Basis (Datei oder Standardwerte) und legt die Optionen darüber.
    pub fn resolve(self) -> ConfigResult<CliCommand> {
        let base = match &self.config {
            Some(path) => RoseConfig::from_json_file(path)?,
            None => RoseConfig::default(),
        };
        let scene = self.scene.unwrap_or(base.scene);
        if let Some(flag) = self.inapplicable_flag(scene) {
            return Err(ConfigError::NotApplicable {
                flag,
                scene: scene.label(),
            });
        }

        let print_config = self.print_config;
        let config = self.merge(base, scene);
        Ok(if print_config {
            CliCommand::PrintConfig(config)
        } else {
            CliCommand::Run(config)
        })
    }

    fn merge(self, mut config: RoseConfig, scene: SceneKind) -> RoseConfig {
        config.scene = scene;
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if self.output.is_some() {
            config.output = self.output.clone();
        }
        if let Some(elevation) = self.elevation {
            config.camera.elevation_deg = elevation;
        }
        if let Some(azimuth) = self.azimuth {
            config.camera.azimuth_deg = azimuth;
        }

        match scene {
            SceneKind::Torus => {
                let mut torus = self.merge_surface(config.torus);
                if let Some(radius) = self.radius {
                    torus = torus.with_radius(radius);
                }
                if let Some(saturation) = self.saturation {
                    torus = torus.with_saturation(saturation);
                }
                config.torus = torus;
            }
            SceneKind::Layers => {
                let surface = self.merge_surface(config.layers.surface.clone());
                let mut layers = config.layers.with_surface(surface);
                if let Some(count) = self.layers {
                    layers.layers = count;
                }
                if let Some(radius) = self.radius {
                    layers = layers.with_outer_radius(radius);
                }
                if let Some(saturation) = self.saturation {
                    layers = layers.with_max_saturation(saturation);
                }
                config.layers = layers;
            }
            SceneKind::Wheel => {
                let mut wheel = config.wheel;
                if let Some(resolution) = self.resolution {
                    wheel = wheel.with_resolution(resolution);
                }
                if let Some(saturation) = self.saturation {
                    wheel = wheel.with_saturation(saturation);
                }
                if let Some(density) = self.density {
                    wheel = wheel.with_density(density);
                }
                config.wheel = wheel;
            }
            SceneKind::Luv => {
                let mut luv = config.luv;
                if let Some(resolution) = self.resolution {
                    luv = luv.with_resolution(resolution);
                }
                if let Some(lightness) = self.lightness {
                    luv = luv.with_lightness(lightness);
                }
                if let Some(extent) = self.extent {
                    luv = luv.with_extent(extent);
                }
                config.luv = luv;
            }
        }
        config
    }

    /// Gemeinsame Flächenparameter; Radius und Sättigung setzt der Aufrufer.
    fn merge_surface(&self, mut surface: HornTorusConfig) -> HornTorusConfig {
        if let Some(resolution) = self.resolution {
            surface = surface.with_resolution(resolution);
        }
        if let Some(density) = self.density {
            surface = surface.with_density(density);
        }
        if let Some(falloff) = self.falloff {
            surface = surface.with_falloff(falloff);
        }
        if let Some(phase) = self.phase {
            surface = surface.with_phase(phase);
        }
        surface
    }
}

/// Wertet die Argumente (ohne Programmnamen) aus.
pub fn parse_args<I>(args: I) -> ConfigResult<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let argv = std::iter::once("hue-rose".to_string()).chain(args);
    Cli::try_parse_from(argv)?.resolve()
}
