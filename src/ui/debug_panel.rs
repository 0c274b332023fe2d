use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::parallax::rig::ParallaxRig;
use crate::ship::Ship;
use crate::ship::model::ShipModel;

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Draws the debug inspector panel using egui.
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    ship_query: Query<&ShipModel, With<Ship>>,
    rig: Option<Res<ParallaxRig>>,
    diagnostics: Res<DiagnosticsStore>,
    entities: Query<Entity>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    egui::SidePanel::right("debug_panel")
        .default_width(260.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Debug Panel");
            ui.separator();

            egui::CollapsingHeader::new(egui::RichText::new("Performance").strong())
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new("perf_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("FPS:");
                            let fps_text = diagnostics
                                .get(&FrameTimeDiagnosticsPlugin::FPS)
                                .and_then(|d| d.smoothed())
                                .map(|v| format!("{v:.1}"))
                                .unwrap_or_else(|| "...".to_string());
                            ui.colored_label(egui::Color32::LIGHT_GREEN, &fps_text);
                            ui.end_row();

                            ui.label("Entities:");
                            ui.label(format!("{}", entities.iter().count()));
                            ui.end_row();
                        });
                });

            egui::CollapsingHeader::new(egui::RichText::new("Ship").strong())
                .default_open(true)
                .show(ui, |ui| {
                    if let Ok(model) = ship_query.single() {
                        egui::Grid::new("ship_grid")
                            .num_columns(2)
                            .spacing([20.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("Position:");
                                ui.monospace(format!(
                                    "{:.1}, {:.1}",
                                    model.position.x, model.position.y
                                ));
                                ui.end_row();

                                ui.label("Velocity:");
                                ui.monospace(format!(
                                    "{:.1}, {:.1}",
                                    model.velocity.x, model.velocity.y
                                ));
                                ui.end_row();

                                ui.label("Heading:");
                                ui.monospace(format!("{:.2} rad", model.heading));
                                ui.end_row();
                            });
                    } else {
                        ui.label("No ship entity");
                    }
                });

            if let Some(ref rig) = rig {
                egui::CollapsingHeader::new(egui::RichText::new("Parallax").strong())
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.label(format!("{} layers", rig.len()));
                        for (i, (_, layer)) in rig.iter().enumerate() {
                            ui.separator();
                            egui::Grid::new(format!("layer_grid_{i}"))
                                .num_columns(2)
                                .spacing([20.0, 4.0])
                                .show(ui, |ui| {
                                    ui.label("Factor:");
                                    ui.monospace(format!("{:.2}", layer.factor()));
                                    ui.end_row();

                                    ui.label("Anchor:");
                                    ui.monospace(format!(
                                        "{:.3}, {:.3}",
                                        layer.anchor().x,
                                        layer.anchor().y
                                    ));
                                    ui.end_row();

                                    ui.label("Angle:");
                                    ui.monospace(format!("{:.2} rad", layer.angle()));
                                    ui.end_row();
                                });
                        }
                    });
            }
        });

    Ok(())
}
