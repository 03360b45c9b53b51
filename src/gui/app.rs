// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    source::LoadedPage,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Redfin Tools",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // raw page text; re-parsed for every action
    pub page: Option<LoadedPage>,

    // false when no page is loaded or the page is the bot check
    pub attached: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: GUI ready");
        Self {
            state,
            page: None,
            attached: false,
            status: s!("Load a saved listing page or paste a listing URL"),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Right-hand tool panel first so the central panel takes what's left
        crate::gui::components::action_panel::draw(ctx, self);

        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            crate::gui::components::source_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::details_table::draw(ui, self);
        });

        crate::gui::components::alert::draw(ctx, self);
    }
}
