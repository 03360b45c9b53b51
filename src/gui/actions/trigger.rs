// src/gui/actions/trigger.rs
use eframe::egui;

use crate::{
    actions::{self, Action, Outcome, Sinks},
    config::state::GuiState,
    data::FieldMap,
    gui::app::App,
};

/// Clipboard via egui, alert via the modal, log via tracing + the details table.
pub struct GuiSinks<'a> {
    pub ctx: &'a egui::Context,
    pub gui: &'a mut GuiState,
}

impl Sinks for GuiSinks<'_> {
    fn copy_text(&mut self, text: &str) {
        self.ctx.copy_text(s!(text));
        self.gui.last_copied = Some(s!(text));
    }

    fn alert(&mut self, msg: &str) {
        self.gui.alert = Some(s!(msg));
    }

    fn log_details(&mut self, details: &FieldMap) {
        match details.to_json_pretty() {
            Ok(json) => logf!("All details:\n{json}"),
            Err(e) => loge!("Details: JSON encode failed: {e}"),
        }
        self.gui.last_details = Some(details.clone());
    }
}

/// Button handler: fresh snapshot, dispatch, report.
pub fn trigger(app: &mut App, ctx: &egui::Context, action: Action) {
    let Some(loaded) = &app.page else {
        logd!("Action: {:?} clicked with no page loaded", action);
        return app.status("Nothing loaded");
    };

    let page = loaded.snapshot();
    let today = app.state.options.today();
    let mut sinks = GuiSinks { ctx, gui: &mut app.state.gui };

    let msg = match actions::dispatch(action, &page, today, &mut sinks) {
        Outcome::Copied(_) => format!("{}: copied to clipboard", action.label()),
        Outcome::Alerted => format!("{}: nothing to copy", action.label()),
        Outcome::Logged(n) => format!("Logged {n} fields"),
    };
    app.status(msg);
}
