// src/source.rs
//
// Where a listing page comes from: a saved HTML file or a live URL.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use scraper::{Html, Selector};

use crate::config::consts::{LISTING_HOST, LISTING_PATH_MARKER};
use crate::config::options::AppOptions;
use crate::core::net;
use crate::error::{Result, ToolError};
use crate::snapshot::HtmlPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSource {
    File(PathBuf),
    Url(String),
}

impl PageSource {
    /// Anything starting with a URL scheme is a URL; the rest is a path.
    pub fn parse(text: &str) -> Result<Self> {
        let t = text.trim();
        if t.is_empty() {
            return Err(ToolError::InvalidUrl(s!(text)));
        }
        if !t.contains("://") {
            return Ok(PageSource::File(PathBuf::from(t)));
        }
        let url = Url::parse(t).map_err(|_| ToolError::InvalidUrl(s!(t)))?;
        match url.scheme() {
            "http" | "https" => Ok(PageSource::Url(url.into())),
            "file" => url
                .to_file_path()
                .map(PageSource::File)
                .map_err(|_| ToolError::InvalidUrl(s!(t))),
            other => Err(ToolError::UnsupportedScheme(s!(other))),
        }
    }
}

/// Raw page text plus the URL it stands for.
#[derive(Clone, Debug)]
pub struct LoadedPage {
    pub html: String,
    pub url: String,
}

impl LoadedPage {
    /// Parse a fresh snapshot. Called per action.
    pub fn snapshot(&self) -> HtmlPage {
        HtmlPage::parse(&self.html, self.url.clone())
    }
}

/// True for https://www.redfin.com/…/home/… style addresses.
pub fn is_listing_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(u) => u.host_str() == Some(LISTING_HOST) && u.path().contains(LISTING_PATH_MARKER),
        Err(_) => false,
    }
}

/// The page's own idea of its URL: canonical link, then og:url.
pub fn declared_url(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let lookups = [
        (r#"link[rel="canonical"]"#, "href"),
        (r#"meta[property="og:url"]"#, "content"),
    ];
    for (css, attr) in lookups {
        let Ok(sel) = Selector::parse(css) else { continue };
        let found = doc
            .select(&sel)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .find(|v| !v.is_empty());
        if let Some(v) = found {
            return Some(s!(v));
        }
    }
    None
}

fn file_url(path: &Path) -> String {
    let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Url::from_file_path(&abs)
        .map(String::from)
        .unwrap_or_else(|_| format!("file://{}", abs.display()))
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ToolError::ReadPage {
        path: path.display().to_string(),
        source,
    })
}

/// Load the page named by `opts.source`.
pub fn load(source: &PageSource, opts: &AppOptions) -> Result<LoadedPage> {
    let (html, derived_url) = match source {
        PageSource::File(path) => {
            let html = read_file(path)?;
            let url = declared_url(&html).unwrap_or_else(|| file_url(path));
            logf!(path = %path.display(), bytes = html.len(), "Source: read saved page");
            (html, url)
        }
        PageSource::Url(url) => {
            let client = net::create_client(&opts.fetch)?;
            let html = net::http_get(&client, url, opts.fetch.max_retries)?;
            (html, url.clone())
        }
    };

    let url = opts.url_override.clone().unwrap_or(derived_url);
    if !is_listing_url(&url) {
        logw!(%url, "Source: does not look like a listing page");
    }
    Ok(LoadedPage { html, url })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sources() {
        assert_eq!(
            PageSource::parse("saved/home.html").unwrap(),
            PageSource::File(PathBuf::from("saved/home.html"))
        );
        assert_eq!(
            PageSource::parse(" https://www.redfin.com/MA/Boston/1-A-St-02108/home/123 ").unwrap(),
            PageSource::Url(s!("https://www.redfin.com/MA/Boston/1-A-St-02108/home/123"))
        );
        assert!(matches!(PageSource::parse("ftp://x/y"), Err(ToolError::UnsupportedScheme(_))));
        assert!(matches!(PageSource::parse("   "), Err(ToolError::InvalidUrl(_))));
    }

    #[test]
    fn listing_url_detection() {
        assert!(is_listing_url("https://www.redfin.com/MA/Boston/1-A-St-02108/home/123"));
        assert!(!is_listing_url("https://www.redfin.com/city/1826/MA/Boston"));
        assert!(!is_listing_url("https://example.com/home/1"));
        assert!(!is_listing_url("not a url"));
    }

    #[test]
    fn declared_url_prefers_canonical() {
        let html = r#"<head>
            <meta property="og:url" content="https://og.example/home/2">
            <link rel="canonical" href="https://www.redfin.com/X/Y/home/1">
        </head>"#;
        assert_eq!(declared_url(html).as_deref(), Some("https://www.redfin.com/X/Y/home/1"));

        let og_only = r#"<meta property="og:url" content="https://og.example/home/2">"#;
        assert_eq!(declared_url(og_only).as_deref(), Some("https://og.example/home/2"));
        assert_eq!(declared_url("<p>nothing</p>"), None);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load(
            &PageSource::File(PathBuf::from("definitely/not/here.html")),
            &AppOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::ReadPage { .. }));
    }
}
