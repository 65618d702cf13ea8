// src/visualization/projection.rs
use crate::math::{
    geometry::SurfaceField,
    types::{Point3D, Rgba},
};
use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Circle, Group, Rectangle, Title};

/// Hintergrund der statischen 3D-Ansicht.
const BACKGROUND: &str = "#eeeeee";

/// Blickrichtung für die statische 3D-Ansicht, in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionCamera {
    /// Höhe über der XY-Ebene
    pub elevation_deg: f32,
    /// Drehung um die Z-Achse
    pub azimuth_deg: f32,
    /// Punktradius in Weltkoordinaten
    pub point_radius: f32,
}

impl Default for ProjectionCamera {
    fn default() -> Self {
        Self {
            elevation_deg: 45.0,
            azimuth_deg: 60.0,
            point_radius: 0.012,
        }
    }
}

/// Ein projizierter Punkt: Bildschirmkoordinaten plus Tiefe (größer = näher).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub color: Rgba,
}

impl ProjectionCamera {
    /// Rotation Welt → Kamera. Zeilen: rechts, oben, Blickrichtung.
    pub fn rotation(&self) -> Rotation3<f32> {
        let elevation = self.elevation_deg.to_radians();
        let azimuth = self.azimuth_deg.to_radians();
        let view = Vector3::new(
            elevation.cos() * azimuth.cos(),
            elevation.cos() * azimuth.sin(),
            elevation.sin(),
        );
        let right = Vector3::new(-azimuth.sin(), azimuth.cos(), 0.0);
        let up = view.cross(&right);
        Rotation3::from_matrix_unchecked(Matrix3::from_rows(&[
            right.transpose(),
            up.transpose(),
            view.transpose(),
        ]))
    }

    pub fn project(&self, rotation: &Rotation3<f32>, point: Point3D, color: Rgba) -> ProjectedPoint {
        let camera = rotation * Vector3::new(point.x, point.y, point.z);
        ProjectedPoint {
            x: camera.x,
            y: camera.y,
            depth: camera.z,
            color,
        }
    }
}

/// Alle sichtbaren Punkte aller Flächen, von hinten nach vorne sortiert.
pub fn projected_points(fields: &[SurfaceField], camera: &ProjectionCamera) -> Vec<ProjectedPoint> {
    let rotation = camera.rotation();
    let mut points: Vec<ProjectedPoint> = fields
        .iter()
        .flat_map(|field| field.points())
        .filter(|(_, color)| !color.is_transparent())
        .map(|(position, color)| camera.project(&rotation, position, color))
        .collect();
    points.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    points
}

/// Statische Punktansicht als SVG (Maler-Algorithmus).
pub fn projection_document(
    fields: &[SurfaceField],
    camera: &ProjectionCamera,
    pixel_size: u32,
) -> Document {
    let points = projected_points(fields, camera);
    let half = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0_f32, f32::max)
        .max(camera.point_radius)
        * 1.1;

    let mut group = Group::new();
    for point in &points {
        // SVG-y zeigt nach unten
        group = group.add(
            Circle::new()
                .set("cx", point.x)
                .set("cy", -point.y)
                .set("r", camera.point_radius)
                .set("fill", point.color.to_hex())
                .set("fill-opacity", point.color.a)
                .add(Title::new(point.color.describe())),
        );
    }

    Document::new()
        .set("width", pixel_size)
        .set("height", pixel_size)
        .set("viewBox", (-half, -half, 2.0 * half, 2.0 * half))
        .add(
            Rectangle::new()
                .set("x", -half)
                .set("y", -half)
                .set("width", 2.0 * half)
                .set("height", 2.0 * half)
                .set("fill", BACKGROUND),
        )
        .add(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::HornTorusConfig;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rotation_is_orthonormal() {
        let rotation = ProjectionCamera::default().rotation();
        let m = rotation.matrix();
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-5);
        let identity = m * m.transpose();
        assert_abs_diff_eq!(identity, Matrix3::identity(), epsilon = 1e-5);
    }

    #[test]
    fn test_front_view_keeps_z_as_screen_up() {
        let camera = ProjectionCamera {
            elevation_deg: 0.0,
            azimuth_deg: 0.0,
            ..ProjectionCamera::default()
        };
        let rotation = camera.rotation();
        let p = camera.project(&rotation, Point3D::new(1.0, 2.0, 3.0), Rgba::TRANSPARENT);
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.depth, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_points_sorted_back_to_front_without_transparent_ones() {
        let field = HornTorusConfig::new().with_resolution(9).generate().unwrap();
        let points = projected_points(std::slice::from_ref(&field), &ProjectionCamera::default());
        // letzte Zeile (V = 2π) ist vollständig transparent
        assert_eq!(points.len(), 9 * 8);
        for pair in points.windows(2) {
            assert!(pair[0].depth <= pair[1].depth);
        }
    }

    #[test]
    fn test_document_contains_one_circle_per_point() {
        let field = HornTorusConfig::new().with_resolution(5).generate().unwrap();
        let svg = projection_document(&[field], &ProjectionCamera::default(), 400).to_string();
        assert_eq!(svg.matches("<circle").count(), 5 * 4);
        assert!(svg.contains(BACKGROUND));
        assert_eq!(svg.matches("<title>").count(), 5 * 4);
        // U = 0 in der ersten Zeile: rot, voll deckend
        assert!(svg.contains("R: 255, G: 0, B: 0, A: 1.00"));
    }
}
