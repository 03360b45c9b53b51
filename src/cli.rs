// src/cli.rs
//
// Headless frontend: one action per invocation.
// Clipboard text goes to stdout (pipe it into pbcopy/xclip/clip),
// the alert goes to stderr and fails the run.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::actions::{self, Action, Outcome, Sinks};
use crate::config::options::{parse_today, AppOptions};
use crate::data::FieldMap;
use crate::error::{Result, ToolError};
use crate::source::{self, PageSource};

/// Pull listing details off a saved or live Redfin home page.
#[derive(Parser, Debug)]
#[command(name = "redfin_tools", version, about, long_about = None)]
pub struct Cli {
    /// What to produce
    #[arg(value_enum)]
    pub action: CliAction,

    /// Saved page (.html) or listing URL
    pub source: String,

    /// Use this as the URL field instead of the page's own
    #[arg(long)]
    pub url: Option<String>,

    /// Pretend today is YYYY-MM-DD (list date math)
    #[arg(long)]
    pub today: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliAction {
    /// MLS#, Full Address (tab separated)
    Short,
    /// MLS# … Sq Ft (tab separated)
    Long,
    /// Scoring details, one per line
    Scoring,
    /// Every field as JSON
    Details,
}

impl From<CliAction> for Action {
    fn from(a: CliAction) -> Self {
        match a {
            CliAction::Short => Action::CopyShortRow,
            CliAction::Long => Action::CopyLongRow,
            CliAction::Scoring => Action::CopyScoringDetails,
            CliAction::Details => Action::LogAllDetails,
        }
    }
}

impl Cli {
    pub fn options(&self) -> Result<AppOptions> {
        let mut opts = AppOptions {
            source: Some(PageSource::parse(&self.source)?),
            url_override: self.url.clone(),
            ..AppOptions::default()
        };
        if let Some(t) = &self.today {
            opts.today = Some(parse_today(t)?);
        }
        if let Some(secs) = self.timeout {
            opts.fetch.timeout_secs = secs;
        }
        Ok(opts)
    }
}

/// stdout/stderr sinks.
pub struct StdSinks<W: Write> {
    out: W,
    pub alerted: bool,
    pub error: Option<io::Error>,
}

impl<W: Write> StdSinks<W> {
    pub fn new(out: W) -> Self {
        Self { out, alerted: false, error: None }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            self.error.get_or_insert(e);
        }
    }
}

impl<W: Write> Sinks for StdSinks<W> {
    fn copy_text(&mut self, text: &str) {
        self.emit(text);
    }

    fn alert(&mut self, msg: &str) {
        eprintln!("{msg}");
        self.alerted = true;
    }

    fn log_details(&mut self, details: &FieldMap) {
        logf!(fields = details.len(), "All details");
        match details.to_json_pretty() {
            Ok(json) => self.emit(&json),
            Err(e) => {
                loge!("Details: JSON encode failed: {e}");
                self.error.get_or_insert(io::Error::other(e));
            }
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = cli.options()?;
    let Some(src) = &opts.source else {
        return Err(ToolError::InvalidUrl(cli.source.clone()));
    };

    let loaded = source::load(src, &opts)?;
    let page = loaded.snapshot();
    if !actions::should_attach(&page) {
        return Err(ToolError::BotWall);
    }

    let stdout = io::stdout();
    let mut sinks = StdSinks::new(stdout.lock());
    let outcome = actions::dispatch(cli.action.into(), &page, opts.today(), &mut sinks);

    if let Some(e) = sinks.error.take() {
        return Err(ToolError::Io(e));
    }
    match outcome {
        Outcome::Alerted => Err(ToolError::NothingToCopy),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_action_source_and_overrides() {
        let cli = Cli::try_parse_from([
            "redfin_tools", "long", "saved/home.html",
            "--url", "https://www.redfin.com/A/B/home/1",
            "--today", "2024-05-01",
            "--timeout", "5",
        ])
        .unwrap();
        assert_eq!(cli.action, CliAction::Long);

        let opts = cli.options().unwrap();
        assert_eq!(opts.source, Some(PageSource::File(PathBuf::from("saved/home.html"))));
        assert_eq!(opts.url_override.as_deref(), Some("https://www.redfin.com/A/B/home/1"));
        assert_eq!(opts.today, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(opts.fetch.timeout_secs, 5);
    }

    #[test]
    fn rejects_bad_today() {
        let cli = Cli::try_parse_from(["redfin_tools", "short", "x.html", "--today", "May 1"]).unwrap();
        assert!(matches!(cli.options(), Err(ToolError::InvalidDate(_))));
    }

    #[test]
    fn actions_map_one_to_one() {
        assert_eq!(Action::from(CliAction::Scoring), Action::CopyScoringDetails);
        assert_eq!(Action::from(CliAction::Details), Action::LogAllDetails);
    }

    #[test]
    fn std_sinks_write_lines_and_json() {
        let mut buf = Vec::new();
        {
            let mut sinks = StdSinks::new(&mut buf);
            sinks.copy_text("a\tb");
            let mut m = FieldMap::new();
            m.insert("Beds", "3");
            sinks.log_details(&m);
            assert!(!sinks.alerted);
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("a\tb\n"));
        assert!(out.contains("\"Beds\": \"3\""));
    }
}
