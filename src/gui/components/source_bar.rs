// src/gui/components/source_bar.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut load_clicked = false;

    egui::Grid::new("source_grid").num_columns(2).show(ui, |ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_text)
                .hint_text("saved .html file or https://www.redfin.com/…/home/…")
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            load_clicked = true;
        }
        ui.end_row();

        ui.label("URL:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .hint_text("optional; overrides the page's own URL")
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );
        ui.end_row();
    });

    ui.horizontal(|ui| {
        if ui.button("Load").clicked() {
            load_clicked = true;
        }
        ui.label(&app.status);
    });

    if load_clicked {
        actions::load(app);
    }
}
