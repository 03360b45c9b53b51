// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod actions;
pub mod config;
pub mod core;
pub mod data;
pub mod details;
pub mod error;
pub mod rows;
pub mod snapshot;
pub mod source;
pub mod specs;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
