// src/config/options.rs
use chrono::{Local, NaiveDate};

use super::consts::*;
use crate::error::{Result, ToolError};
use crate::source::PageSource;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    /// Where the listing page comes from (file or URL)
    pub source: Option<PageSource>,
    /// Forces the `URL` field instead of deriving it from the page
    pub url_override: Option<String>,
    /// Pins "today" for list-date math; local date when None
    pub today: Option<NaiveDate>,
    pub fetch: FetchOptions,
}

impl AppOptions {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: HTTP_TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
            max_retries: MAX_RETRIES,
        }
    }
}

/// Parse a `YYYY-MM-DD` override for today's date.
pub fn parse_today(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| ToolError::InvalidDate(s!(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_override_wins() {
        let pinned = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let opts = AppOptions { today: Some(pinned), ..AppOptions::default() };
        assert_eq!(opts.today(), pinned);
    }

    #[test]
    fn parse_today_accepts_iso_dates() {
        assert_eq!(
            parse_today(" 2024-12-31 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert!(matches!(parse_today("12/31/2024"), Err(ToolError::InvalidDate(_))));
    }

    #[test]
    fn fetch_defaults_follow_consts() {
        let f = FetchOptions::default();
        assert_eq!(f.timeout_secs, HTTP_TIMEOUT_SECS);
        assert_eq!(f.max_retries, MAX_RETRIES);
        assert!(f.user_agent.starts_with("redfin_tools/"));
    }
}
