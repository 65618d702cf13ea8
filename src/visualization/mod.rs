// src/visualization/mod.rs
use crate::config::{Backend, RoseConfig};
use crate::scene::Scene;
use thiserror::Error;

pub mod mesh;
pub mod projection;
pub mod svg_export;
pub mod ui;
pub mod viewer;

pub use self::svg_export::SvgBackend;
pub use self::viewer::ViewerBackend;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Nimmt Positions- und Farbdaten entgegen und stellt sie dar.
pub trait RenderBackend {
    fn name(&self) -> &'static str;

    fn render(&mut self, scene: Scene) -> RenderResult<()>;
}

/// Wählt das Backend passend zur Konfiguration.
pub fn backend_for(config: &RoseConfig) -> Box<dyn RenderBackend> {
    match config.backend {
        Backend::Svg => Box::new(SvgBackend::new(config.output_path(), config.camera)),
        Backend::Surface | Backend::Points => Box::new(ViewerBackend::new(config.clone())),
    }
}
