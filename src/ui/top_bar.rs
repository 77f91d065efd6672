//! Top bar UI: app title, status, and dataset summary.

use eframe::egui::{self, Color32, RichText};

use crate::state::AppState;
use crate::ui::colors;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Oil Dashboard")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} exporters · {} producers",
                            state.dataset.exports.len(),
                            state.dataset.producers.len()
                        ))
                        .size(12.0)
                        .color(colors::ui::VALUE),
                    );
                });
            });
        });
}
