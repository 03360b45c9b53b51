// src/log.rs
//
// tracing-backed logging. The GUI appends to LOG_FILE (no console on Windows),
// the CLI writes to stderr. RUST_LOG overrides the default filter.
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(target: LogTarget) {
    let builder = tracing_subscriber::fmt().with_env_filter(filter()).with_target(false);

    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File => {
            if let Some(parent) = Path::new(LOG_FILE).parent() {
                let _ = fs::create_dir_all(parent);
            }
            match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
                Ok(file) => {
                    let _ = builder
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                // Can't open the file: stderr beats losing everything
                Err(_) => {
                    let _ = builder.with_writer(std::io::stderr).try_init();
                }
            }
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
