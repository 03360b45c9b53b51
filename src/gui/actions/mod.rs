// src/gui/actions/mod.rs
//
// Folder module facade: consumers only see actions::{load, trigger}.

mod load;    // src/gui/actions/load.rs
mod trigger; // src/gui/actions/trigger.rs

pub use load::load;
pub use trigger::{trigger, GuiSinks};
