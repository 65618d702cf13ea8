// ./src/visualization/ui.rs
use super::viewer::SceneStatus;
use crate::config::{Backend, RoseConfig, SceneKind};
use crate::math::geometry::{DensityMode, HornTorusConfig, OpacityFalloff, PhaseConvention};
use bevy::prelude::*;
use clap::ValueEnum;
use bevy_egui::{
    EguiContexts,
    egui::{self, ComboBox, Slider, Window},
};

pub fn parameter_panel_system(
    mut contexts: EguiContexts,
    mut config: ResMut<RoseConfig>,
    status: Res<SceneStatus>,
) {
    // Auf einer Kopie arbeiten, damit unveränderte Frames keine Neuberechnung auslösen
    let mut draft = config.clone();

    Window::new("Hue Rose")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Szene");
            ComboBox::from_label("Geometrie")
                .selected_text(draft.scene.label())
                .show_ui(ui, |ui| {
                    for &kind in SceneKind::value_variants() {
                        ui.selectable_value(&mut draft.scene, kind, kind.label());
                    }
                });
            ui.horizontal(|ui| {
                ui.radio_value(&mut draft.backend, Backend::Points, "Punkte");
                ui.radio_value(&mut draft.backend, Backend::Surface, "Fläche");
            });

            ui.separator();
            scene_controls(ui, &mut draft);

            ui.separator();
            ui.label(format!(
                "{} Primitiv(e), {} Punkte",
                status.primitives, status.points
            ));
            if let Some(error) = &status.error {
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.collapsing("Kamerasteuerung Info", |ui| {
                ui.label("Rechte Maustaste + Ziehen: Orbit");
                ui.label("Mittlere Maustaste + Ziehen: Pan");
                ui.label("Mausrad: Zoom");
            });
        });

    if draft != *config {
        *config = draft;
    }
}

/// Regler der aktiven Szene. Werte außerhalb des Reglerbereichs (z.B. aus der
/// Kommandozeile) bleiben erhalten, bis der Regler bewegt wird.
fn scene_controls(ui: &mut egui::Ui, config: &mut RoseConfig) {
    match config.scene {
        SceneKind::Torus => torus_controls(ui, &mut config.torus, true),
        SceneKind::Layers => {
            ui.add(
                Slider::new(&mut config.layers.layers, 1..=40)
                    .clamp_to_range(false)
                    .text("Schichten"),
            );
            ui.add(
                Slider::new(&mut config.layers.outer_radius, 0.1..=3.0)
                    .clamp_to_range(false)
                    .text("Äußerer Radius"),
            );
            ui.add(
                Slider::new(&mut config.layers.max_saturation, 0.0..=1.0)
                    .text("Max. Sättigung"),
            );
            // Radius und Sättigung kommen pro Schicht aus dem Stapel
            torus_controls(ui, &mut config.layers.surface, false);
        }
        SceneKind::Wheel => {
            ui.add(
                Slider::new(&mut config.wheel.resolution, 2..=1000)
                    .clamp_to_range(false)
                    .text("Auflösung"),
            );
            ui.add(Slider::new(&mut config.wheel.saturation, 0.0..=1.0).text("Sättigung"));
            density_combo(ui, &mut config.wheel.density);
        }
        SceneKind::Luv => {
            ui.add(
                Slider::new(&mut config.luv.resolution, 2..=1000)
                    .clamp_to_range(false)
                    .text("Auflösung"),
            );
            ui.add(
                Slider::new(&mut config.luv.extent, 1.0..=4.0)
                    .clamp_to_range(false)
                    .text("Ausschnitt"),
            );
            ui.add(Slider::new(&mut config.luv.lightness, 1.0..=100.0).text("Helligkeit L*"));
        }
    }
}

fn torus_controls(ui: &mut egui::Ui, torus: &mut HornTorusConfig, shape: bool) {
    ui.add(
        Slider::new(&mut torus.resolution, 2..=300)
            .clamp_to_range(false)
            .text("Auflösung"),
    );
    if shape {
        ui.add(
            Slider::new(&mut torus.radius, 0.1..=3.0)
                .clamp_to_range(false)
                .text("Radius"),
        );
        ui.add(Slider::new(&mut torus.saturation, 0.0..=1.0).text("Sättigung"));
    }
    density_combo(ui, &mut torus.density);

    ComboBox::from_label("Deckkraft")
        .selected_text(torus.falloff.label())
        .show_ui(ui, |ui| {
            for falloff in [
                OpacityFalloff::Linear,
                OpacityFalloff::Squared,
                OpacityFalloff::Rising,
            ] {
                ui.selectable_value(&mut torus.falloff, falloff, falloff.label());
            }
        });
    ComboBox::from_label("Phase")
        .selected_text(torus.phase.label())
        .show_ui(ui, |ui| {
            for phase in [PhaseConvention::Singularity, PhaseConvention::OuterRim] {
                ui.selectable_value(&mut torus.phase, phase, phase.label());
            }
        });
}

fn density_combo(ui: &mut egui::Ui, density: &mut DensityMode) {
    ComboBox::from_label("Dichte")
        .selected_text(density.label())
        .show_ui(ui, |ui| {
            for mode in [DensityMode::Uniform, DensityMode::AreaEven] {
                ui.selectable_value(density, mode, mode.label());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Zeichnet einen Frame ohne Eingaben.
    fn show(config: &mut RoseConfig) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| scene_controls(ui, config));
        });
    }

    #[test]
    fn test_values_beyond_slider_range_survive_a_frame() {
        let mut config = RoseConfig::default();
        config.scene = SceneKind::Torus;
        config.torus.resolution = 500;
        config.torus.radius = 5.0;
        show(&mut config);
        assert_eq!(config.torus.resolution, 500);
        assert_eq!(config.torus.radius, 5.0);

        config.scene = SceneKind::Layers;
        config.layers.layers = 64;
        config.layers.outer_radius = 4.0;
        config.layers.surface.resolution = 400;
        show(&mut config);
        assert_eq!(config.layers.layers, 64);
        assert_eq!(config.layers.outer_radius, 4.0);
        assert_eq!(config.layers.surface.resolution, 400);

        config.scene = SceneKind::Luv;
        config.luv.resolution = 2000;
        config.luv.extent = 0.5;
        show(&mut config);
        assert_eq!(config.luv.resolution, 2000);
        assert_eq!(config.luv.extent, 0.5);
    }
}
