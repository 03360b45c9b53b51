// src/gui/components/mod.rs
pub mod action_panel;
pub mod alert;
pub mod details_table;
pub mod source_bar;
