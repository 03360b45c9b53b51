// src/gui/components/details_table.rs
//
// Table view of the last "Log All Details" run.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(details) = &app.state.gui.last_details else {
        ui.weak("Use \"Log All Details\" to list every field here.");
        return;
    };

    ui.heading(format!("All details ({} fields)", details.len()));
    ui.separator();

    let entries: Vec<(&String, String)> = details
        .iter()
        .map(|(k, v)| (k, v.render()))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().resizable(true).at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Field"); });
            header.col(|ui| { ui.strong("Value"); });
        })
        .body(|body| {
            body.rows(18.0, entries.len(), |mut row| {
                let Some((key, value)) = entries.get(row.index()) else { return };
                row.col(|ui| { ui.label(key.as_str()); });
                row.col(|ui| { ui.label(value.as_str()); });
            });
        });
}
