// src/gui/components/action_panel.rs
//
// Fixed tool panel on the right: one button per action.

use eframe::egui;

use crate::{
    actions::Action,
    config::consts::PANEL_WIDTH,
    gui::{actions, app::App},
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let mut clicked: Option<Action> = None;

    egui::SidePanel::right("rtb-actions")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.add_space(8.0);

            if !app.attached {
                ui.weak(if app.page.is_some() { "Bot check page" } else { "No page loaded" });
                return;
            }

            for action in Action::ALL {
                let button = egui::Button::new(action.label())
                    .min_size(egui::vec2(ui.available_width(), 0.0));
                if ui.add(button).clicked() {
                    clicked = Some(action);
                }
                ui.add_space(4.0);
            }

            if let Some(text) = &app.state.gui.last_copied {
                ui.separator();
                ui.small("Last copied:");
                ui.add(egui::Label::new(egui::RichText::new(text).monospace().small()).wrap());
            }
        });

    // Run after the panel closure so `app` isn't borrowed twice
    if let Some(action) = clicked {
        actions::trigger(app, ctx, action);
    }
}
