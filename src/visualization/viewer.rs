// src/visualization/viewer.rs
use super::{RenderBackend, RenderResult, mesh, ui::parameter_panel_system};
use crate::config::{Backend, RoseConfig};
use crate::scene::{Scene, build_scene};
use crate::setup::setup_scene;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;
use bevy_window::{Window, WindowPlugin};
use std::f32::consts::FRAC_PI_2;

const LOG_FILTER: &str = "info,wgpu=error,naga=warn,hue_rose=debug";

/// Markiert alle Entities, die aus einer Szene entstanden sind.
#[derive(Component)]
pub struct RoseGeometry;

/// Szene, die im nächsten Frame angezeigt werden soll.
#[derive(Resource, Default)]
pub struct PendingScene(pub Option<Scene>);

/// Kennzahlen der angezeigten Szene für das Panel.
#[derive(Resource, Debug, Default)]
pub struct SceneStatus {
    pub primitives: usize,
    pub points: usize,
    /// Letzter Fehler beim Neuerzeugen; die alte Szene bleibt dann sichtbar.
    pub error: Option<String>,
    pub unit_circle: bool,
}

/// Interaktives Fenster mit Orbit-Kamera und Parameter-Panel.
pub struct ViewerBackend {
    config: RoseConfig,
}

impl ViewerBackend {
    pub fn new(config: RoseConfig) -> Self {
        Self { config }
    }
}

impl RenderBackend for ViewerBackend {
    fn name(&self) -> &'static str {
        match self.config.backend {
            Backend::Surface => "surface",
            _ => "points",
        }
    }

    fn render(&mut self, scene: Scene) -> RenderResult<()> {
        App::new()
            .add_plugins(
                DefaultPlugins
                    .set(WindowPlugin {
                        primary_window: Some(Window {
                            title: format!("Hue Rose ({})", self.config.scene.label()),
                            ..default()
                        }),
                        ..default()
                    })
                    .set(LogPlugin {
                        filter: LOG_FILTER.into(),
                        level: Level::INFO,
                        ..default()
                    }),
            )
            .add_plugins(EguiPlugin)
            .add_plugins(PanOrbitCameraPlugin)
            .insert_resource(ClearColor(Color::rgb_u8(0xee, 0xee, 0xee)))
            .insert_resource(self.config.clone())
            .insert_resource(PendingScene(Some(scene)))
            .init_resource::<SceneStatus>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    parameter_panel_system,
                    regenerate_scene_system,
                    spawn_scene_system,
                    draw_unit_circle_system,
                )
                    .chain(),
            )
            .run();
        Ok(())
    }
}

/// Erzeugt die Szene neu, sobald das Panel die Konfiguration ändert.
pub fn regenerate_scene_system(
    config: Res<RoseConfig>,
    mut pending: ResMut<PendingScene>,
    mut status: ResMut<SceneStatus>,
) {
    if !config.is_changed() || config.is_added() {
        return;
    }
    match build_scene(&config) {
        Ok(scene) => {
            pending.0 = Some(scene);
            status.error = None;
        }
        Err(err) => {
            warn!("Scene not rebuilt, check `{}`: {}", err.parameter(), err);
            status.error = Some(err.to_string());
        }
    }
}

/// Ersetzt die angezeigten Entities durch die wartende Szene.
#[allow(clippy::too_many_arguments)]
pub fn spawn_scene_system(
    mut commands: Commands,
    mut pending: ResMut<PendingScene>,
    mut status: ResMut<SceneStatus>,
    config: Res<RoseConfig>,
    existing: Query<Entity, With<RoseGeometry>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(scene) = pending.0.take() else {
        return;
    };
    for entity in &existing {
        commands.entity(entity).despawn_recursive();
    }

    status.primitives = scene.primitive_count();
    status.points = scene.point_count();

    match scene {
        Scene::Surfaces(fields) => {
            status.unit_circle = false;
            // Felder sind Z-oben, Bevy ist Y-oben
            let orientation = Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2));
            let material = materials.add(StandardMaterial {
                base_color: Color::WHITE,
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                cull_mode: None,
                double_sided: true,
                ..default()
            });
            for field in fields.iter().filter(|field| !field.is_empty()) {
                let field_mesh = match config.backend {
                    Backend::Surface => mesh::surface_mesh(field),
                    _ => mesh::point_cloud_mesh(field),
                };
                commands.spawn((
                    PbrBundle {
                        mesh: meshes.add(field_mesh),
                        material: material.clone(),
                        transform: orientation,
                        ..default()
                    },
                    RoseGeometry,
                ));
            }
        }
        Scene::Raster(raster) => {
            status.unit_circle = raster.unit_circle;
            let size = 2.0 * raster.extent;
            let texture = images.add(mesh::raster_image(&raster));
            commands.spawn((
                PbrBundle {
                    mesh: meshes.add(Rectangle::new(size, size)),
                    material: materials.add(StandardMaterial {
                        base_color_texture: Some(texture),
                        unlit: true,
                        alpha_mode: AlphaMode::Blend,
                        cull_mode: None,
                        double_sided: true,
                        ..default()
                    }),
                    ..default()
                },
                RoseGeometry,
            ));
        }
    }
    debug!(
        "Spawned {} primitive(s) with {} points.",
        status.primitives, status.points
    );
}

/// Einheitskreis über dem CIELUV-Ausschnitt.
pub fn draw_unit_circle_system(mut gizmos: Gizmos, status: Res<SceneStatus>) {
    if !status.unit_circle {
        return;
    }
    gizmos.circle(
        Vec3::new(0.0, 0.0, 0.001),
        Direction3d::Z,
        1.0,
        Color::BLACK,
    );
}
