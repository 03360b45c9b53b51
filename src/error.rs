// src/error.rs
//! Crate error type.
//!
//! Page-level problems (missing elements, odd text) never end up here; they
//! degrade to missing fields. These are the failures around getting a page
//! at all, or refusing to act on one.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// Reading a saved page from disk failed.
    #[error("Could not read {path}: {source}")]
    ReadPage {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transient failures on every attempt.
    #[error("Failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// The page is the site's bot check, not a listing.
    #[error("Page looks like a bot check (\"you might be a robot\"); tools not attached")]
    BotWall,

    /// A copy action produced nothing.
    #[error("Could not copy to clipboard")]
    NothingToCopy,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD (e.g., 2024-05-01)")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, ToolError>;
