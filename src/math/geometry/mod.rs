// src/math/geometry/mod.rs

// Deklaration der Generatoren
pub mod color_wheel;
pub mod grid;
pub mod horn_torus;
pub mod layers;
pub mod luv_disc;
pub mod raster;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Typen
pub use self::color_wheel::{ColorWheelConfig, PolarColorSquare};
pub use self::grid::{CoordinateGrid, DensityMode};
pub use self::horn_torus::{
    FlatField, HornTorusConfig, OpacityFalloff, PhaseConvention, SurfaceField, generate_horn_torus,
};
pub use self::layers::LayerStackConfig;
pub use self::luv_disc::LuvDiscConfig;
pub use self::raster::{Raster, RasterCoverage};
