// src/actions.rs
//! The four user actions and where their output goes.
//!
//! Each dispatch is a fresh read of the page: collect details, format, hand
//! the result to a sink. No state survives between actions.

use chrono::NaiveDate;

use crate::config::consts::ROBOT_PHRASE;
use crate::data::FieldMap;
use crate::details::collect_details;
use crate::rows::{RowSpec, LONG_ROW, SCORING_DETAILS, SHORT_ROW};
use crate::snapshot::PageSnapshot;

pub const COPY_FAILED: &str = "Could not copy to clipboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    CopyShortRow,
    CopyLongRow,
    CopyScoringDetails,
    LogAllDetails,
}

impl Action {
    /// Panel order.
    pub const ALL: [Action; 4] = [
        Action::CopyShortRow,
        Action::CopyLongRow,
        Action::CopyScoringDetails,
        Action::LogAllDetails,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::CopyShortRow => "Copy Short Row",
            Action::CopyLongRow => "Copy Long Row",
            Action::CopyScoringDetails => "Get Scoring Details",
            Action::LogAllDetails => "Log All Details",
        }
    }

    /// Row spec for the copy actions; None for the log action.
    pub fn row_spec(self) -> Option<&'static RowSpec> {
        match self {
            Action::CopyShortRow => Some(&SHORT_ROW),
            Action::CopyLongRow => Some(&LONG_ROW),
            Action::CopyScoringDetails => Some(&SCORING_DETAILS),
            Action::LogAllDetails => None,
        }
    }
}

/// Output side of the actions. Frontends decide what "clipboard" means.
pub trait Sinks {
    fn copy_text(&mut self, text: &str);
    fn alert(&mut self, msg: &str);
    fn log_details(&mut self, details: &FieldMap);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Copied(String),
    Alerted,
    Logged(usize),
}

/// True unless the page is the bot check.
pub fn should_attach(page: &dyn PageSnapshot) -> bool {
    !page.body_text().contains(ROBOT_PHRASE)
}

/// Copy `text`, or raise the alert if there's nothing to copy.
pub fn copy_or_alert(text: String, sinks: &mut dyn Sinks) -> Outcome {
    if text.is_empty() {
        logw!("Action: nothing to copy");
        sinks.alert(COPY_FAILED);
        Outcome::Alerted
    } else {
        sinks.copy_text(&text);
        Outcome::Copied(text)
    }
}

pub fn dispatch(
    action: Action,
    page: &dyn PageSnapshot,
    today: NaiveDate,
    sinks: &mut dyn Sinks,
) -> Outcome {
    let details = collect_details(page, today);
    logf!(?action, fields = details.len(), "Action: dispatch");

    match action.row_spec() {
        Some(spec) => copy_or_alert(spec.format(&details), sinks),
        None => {
            sinks.log_details(&details);
            Outcome::Logged(details.len())
        }
    }
}
