// src/visualization/svg_export.rs
use super::{RenderBackend, RenderResult, projection};
use crate::math::{geometry::Raster, types::Rgba};
use crate::scene::Scene;
use bevy::log::info;
use std::path::PathBuf;
use svg::Document;
use svg::node::element::{Circle, Group, Rectangle};

/// Kantenlänge der erzeugten Dateien in Pixeln.
const PIXEL_SIZE: u32 = 800;

/// Schreibt Szenen als statische SVG-Datei.
pub struct SvgBackend {
    path: PathBuf,
    camera: projection::ProjectionCamera,
}

impl SvgBackend {
    pub fn new(path: PathBuf, camera: projection::ProjectionCamera) -> Self {
        Self { path, camera }
    }

    pub fn document(&self, scene: &Scene) -> Document {
        match scene {
            Scene::Raster(raster) => raster_document(raster, PIXEL_SIZE),
            Scene::Surfaces(fields) => {
                projection::projection_document(fields, &self.camera, PIXEL_SIZE)
            }
        }
    }
}

impl RenderBackend for SvgBackend {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&mut self, scene: Scene) -> RenderResult<()> {
        let document = self.document(&scene);
        svg::save(&self.path, &document)?;
        info!("Wrote SVG '{}'.", self.path.display());
        Ok(())
    }
}

/// Zusammenhängende Pixel gleicher Farbe in einer Zeile: `(start_x, länge, farbe)`.
fn row_runs(row: &[Rgba]) -> Vec<(usize, usize, Rgba)> {
    let mut runs: Vec<(usize, usize, Rgba)> = Vec::new();
    for (x, pixel) in row.iter().enumerate() {
        match runs.last_mut() {
            Some((_, length, color)) if color.to_u8() == pixel.to_u8() => *length += 1,
            _ => runs.push((x, 1, *pixel)),
        }
    }
    runs
}

/// Raster als SVG; eine Pixeleinheit pro Zelle, Ursprung links unten.
pub fn raster_document(raster: &Raster, pixel_size: u32) -> Document {
    let side = raster.side();
    let side_u32 = side as u32;
    let mut pixels = Group::new().set("shape-rendering", "crispEdges");

    for y in 0..side {
        let svg_y = side - 1 - y;
        for (x, length, color) in row_runs(raster.pixels.row(y)) {
            if color.to_u8()[3] == 0 {
                continue;
            }
            pixels = pixels.add(
                Rectangle::new()
                    .set("x", x as u32)
                    .set("y", svg_y as u32)
                    .set("width", length as u32)
                    .set("height", 1)
                    .set("fill", color.to_hex())
                    .set("fill-opacity", color.a),
            );
        }
    }

    let mut document = Document::new()
        .set("width", pixel_size)
        .set("height", pixel_size)
        .set("viewBox", (0_u32, 0_u32, side_u32, side_u32))
        .add(pixels);

    if raster.unit_circle && side > 1 {
        // Pixelmittelpunkte liegen bei x + 0.5; das Raster deckt [-extent, extent] ab
        let center = side as f32 / 2.0;
        let radius = (side - 1) as f32 / (2.0 * raster.extent);
        document = document.add(
            Circle::new()
                .set("cx", center)
                .set("cy", center)
                .set("r", radius)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", (side as f32 / 400.0).max(0.5)),
        );
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::{ColorWheelConfig, LuvDiscConfig};

    #[test]
    fn test_runs_merge_identical_pixels() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let row = [red, red, Rgba::TRANSPARENT, red];
        let runs = row_runs(&row);
        assert_eq!(runs.len(), 3);
        assert_eq!((runs[0].0, runs[0].1), (0, 2));
        assert_eq!((runs[2].0, runs[2].1), (3, 1));
    }

    #[test]
    fn test_wheel_document_skips_transparent_pixels() {
        let raster = ColorWheelConfig::new().with_resolution(2).generate().unwrap();
        let svg = raster_document(&raster, 100).to_string();
        // nur das Zentrum (1, 1) ist beschrieben; es liegt in SVG-Zeile 0
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains("#7f7f7f"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_luv_document_draws_unit_circle() {
        let raster = LuvDiscConfig::new().with_resolution(21).generate().unwrap();
        let svg = raster_document(&raster, 100).to_string();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains("viewBox=\"0 0 21 21\""));
    }
}
