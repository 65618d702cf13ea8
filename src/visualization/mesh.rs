// src/visualization/mesh.rs
use crate::math::geometry::{Raster, SurfaceField};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_render::render_asset::RenderAssetUsages;

/// Vertexfarben für Bevy: die Felder liefern sRGB, der PBR-Shader rechnet linear.
fn linear_vertex_colors(colors: &[[f32; 4]]) -> Vec<[f32; 4]> {
    colors
        .iter()
        .map(|&[r, g, b, a]| Color::rgba(r, g, b, a).as_linear_rgba_f32())
        .collect()
}

/// Dreiecksnetz über das (u, v)-Gitter eines Feldes, zwei Dreiecke pro Gitterzelle.
///
/// Die Vertexfarben tragen die Deckkraft; ein Material mit `AlphaMode::Blend`
/// macht die Singularität durchsichtig.
pub fn surface_mesh(field: &SurfaceField) -> Mesh {
    let flat = field.flatten();
    let resolution = field.resolution();

    let mut indices: Vec<u32> = Vec::with_capacity(6 * resolution.saturating_sub(1).pow(2));
    for row in 0..resolution.saturating_sub(1) {
        for col in 0..resolution - 1 {
            let a = (row * resolution + col) as u32;
            let b = a + 1;
            let c = a + resolution as u32;
            let d = c + 1;
            indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, flat.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, flat.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, linear_vertex_colors(&flat.colors))
        .with_inserted_indices(Indices::U32(indices))
}

/// Punktwolke ohne Indizes; jeder Gitterpunkt wird ein Vertex.
pub fn point_cloud_mesh(field: &SurfaceField) -> Mesh {
    let flat = field.flatten();
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, flat.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, flat.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, linear_vertex_colors(&flat.colors))
}

/// Textur aus einem Raster, sRGB mit Alpha.
pub fn raster_image(raster: &Raster) -> Image {
    let side = raster.side() as u32;
    Image::new(
        Extent3d {
            width: side,
            height: side,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        raster.to_rgba8_top_down(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::{ColorWheelConfig, HornTorusConfig};
    use approx::assert_abs_diff_eq;
    use bevy::render::mesh::VertexAttributeValues;

    fn field(resolution: usize) -> SurfaceField {
        HornTorusConfig::new()
            .with_resolution(resolution)
            .generate()
            .unwrap()
    }

    #[test]
    fn test_surface_mesh_counts() {
        let mesh = surface_mesh(&field(6));
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::TriangleList);
        assert_eq!(mesh.count_vertices(), 36);
        assert_eq!(mesh.indices().map(Indices::len), Some(6 * 5 * 5));
    }

    #[test]
    fn test_surface_mesh_indices_stay_in_range() {
        let mesh = surface_mesh(&field(4));
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert!(indices.iter().all(|&i| i < 16));
        // erste Zelle: (0, 4, 1) und (1, 4, 5)
        assert_eq!(&indices[..6], &[0, 4, 1, 1, 4, 5]);
    }

    #[test]
    fn test_single_point_field_has_no_triangles() {
        let mesh = surface_mesh(&field(1));
        assert_eq!(mesh.count_vertices(), 1);
        assert_eq!(mesh.indices().map(Indices::len), Some(0));
    }

    #[test]
    fn test_point_cloud_mesh() {
        let mesh = point_cloud_mesh(&field(5));
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert_eq!(mesh.count_vertices(), 25);
        assert!(mesh.indices().is_none());
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
    }

    #[test]
    fn test_vertex_colors_are_linearized() {
        let grey = HornTorusConfig::new()
            .with_resolution(3)
            .with_saturation(0.0)
            .generate()
            .unwrap();
        let mesh = surface_mesh(&grey);
        let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("expected float vertex colors");
        };
        // sRGB 0.5 entspricht linear etwa 0.214; Alpha bleibt unverändert
        assert_abs_diff_eq!(colors[0][0], 0.214, epsilon = 1e-3);
        assert_abs_diff_eq!(colors[0][2], 0.214, epsilon = 1e-3);
        assert_eq!(colors[0][3], 1.0);
    }

    #[test]
    fn test_raster_image_size() {
        let raster = ColorWheelConfig::new().with_resolution(8).generate().unwrap();
        let image = raster_image(&raster);
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 8);
        assert_eq!(image.data.len(), 8 * 8 * 4);
    }
}
