// ./src/setup.rs
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Startabstand der Kamera; passt zu Radius 1 mit etwas Rand.
const CAMERA_DISTANCE: f32 = 5.0;

pub fn setup_scene(mut commands: Commands) {
    // Kamera
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 1.5, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            button_orbit: MouseButton::Right,
            button_pan: MouseButton::Middle,
            radius: Some(CAMERA_DISTANCE), // Start Entfernung
            ..default()
        },
    ));
}
