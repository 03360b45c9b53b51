// src/gui/components/alert.rs
use eframe::egui;

use crate::gui::app::App;

/// Blocking-style alert; stays up until OK.
pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.state.gui.alert.clone() else { return };

    let mut dismissed = false;
    egui::Window::new("Redfin Tools")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(&msg);
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        app.state.gui.alert = None;
    }
}
