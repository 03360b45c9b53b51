// src/specs/mod.rs
//! # Page "specs"
//!
//! Page-specific extraction: *where the ground truth lives on the page* and
//! *how to read it*. One spec per page type; today that is the home detail
//! (listing) page.
//!
//! ## What lives here
//! - Region lookups by class/id through [`PageSnapshot`](crate::snapshot::PageSnapshot).
//! - Splitting rendered text into raw key → value maps.
//!
//! ## What does **not** live here
//! - Derived fields (full address, list date, basement) and merging: `details`.
//! - Row formatting and sinks: `rows`, `actions`.
//!
//! ## Conventions
//! - Never error on a missing region; return `None` or an empty map.
//! - Keep the raw split policy per region (value/label order differs between
//!   the stats block and the key-details lists).
pub mod listing;
