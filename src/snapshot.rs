// src/snapshot.rs
//! Read-only view of a rendered listing page.
//!
//! Everything the field parser knows about the page goes through
//! [`PageSnapshot`], so tests can feed synthetic pages and the GUI/CLI can feed
//! parsed HTML. Lookups never fail: a missing element is `None` or empty.

use scraper::{ElementRef, Html, Selector};

use crate::core::html::inner_text;

pub trait PageSnapshot {
    /// Address of the page (the `URL` field).
    fn url(&self) -> String;

    /// Rendered text of the whole body.
    fn body_text(&self) -> String;

    /// `attr` of the first element carrying `class`.
    fn first_attr(&self, class: &str, attr: &str) -> Option<String>;

    /// Rendered text of the first element carrying `class`.
    fn first_text(&self, class: &str) -> Option<String>;

    /// For every element carrying `class`, the rendered text of each element child.
    fn child_texts(&self, class: &str) -> Vec<Vec<String>>;

    /// Rendered text of the element with `id`.
    fn text_by_id(&self, id: &str) -> Option<String>;
}

/// A parsed HTML document plus the URL it was loaded from.
pub struct HtmlPage {
    url: String,
    doc: Html,
}

impl HtmlPage {
    pub fn parse(html: &str, url: impl Into<String>) -> Self {
        Self { url: url.into(), doc: Html::parse_document(html) }
    }

    fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(sel) => self.doc.select(&sel).collect(),
            Err(e) => {
                loge!("Snapshot: bad selector {css:?}: {e}");
                Vec::new()
            }
        }
    }

    fn first(&self, css: &str) -> Option<ElementRef<'_>> {
        self.select_all(css).into_iter().next()
    }
}

fn class_css(class: &str) -> String {
    join!(".", class)
}

impl PageSnapshot for HtmlPage {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn body_text(&self) -> String {
        match self.first("body") {
            Some(body) => inner_text(body),
            None => inner_text(self.doc.root_element()),
        }
    }

    fn first_attr(&self, class: &str, attr: &str) -> Option<String> {
        self.first(&class_css(class))
            .and_then(|el| el.value().attr(attr).map(String::from))
    }

    fn first_text(&self, class: &str) -> Option<String> {
        self.first(&class_css(class)).map(inner_text)
    }

    fn child_texts(&self, class: &str) -> Vec<Vec<String>> {
        self.select_all(&class_css(class))
            .into_iter()
            .map(|container| {
                container
                    .children()
                    .filter_map(ElementRef::wrap)
                    .map(inner_text)
                    .collect()
            })
            .collect()
    }

    fn text_by_id(&self, id: &str) -> Option<String> {
        self.first(&join!("#", id)).map(inner_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head><title>t</title></head><body>
          <div class="street-address" title="9 Elm Rd">9 Elm Rd,</div>
          <div class="dp-subtext">Springfield, MA 01101</div>
          <div class="keyDetailsList"><div><span>Beds</span><span>x</span></div></div>
          <div class="keyDetailsList"><div>Year Built<br>1950</div><div>Style<br>Cape</div></div>
        </body></html>"#;

    #[test]
    fn attribute_and_text_lookups() {
        let page = HtmlPage::parse(PAGE, "https://example.test/home/1");
        assert_eq!(page.url(), "https://example.test/home/1");
        assert_eq!(page.first_attr("street-address", "title").as_deref(), Some("9 Elm Rd"));
        assert_eq!(page.first_text("dp-subtext").as_deref(), Some("Springfield, MA 01101"));
        assert_eq!(page.first_attr("dp-subtext", "title"), None);
        assert_eq!(page.first_text("no-such-class"), None);
        assert_eq!(page.text_by_id("nope"), None);
    }

    #[test]
    fn child_texts_groups_per_container() {
        let page = HtmlPage::parse(PAGE, "");
        let lists = page.child_texts("keyDetailsList");
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0], vec!["Bedsx"]);
        assert_eq!(lists[1], vec!["Year Built\n1950", "Style\nCape"]);
    }

    #[test]
    fn body_text_skips_head() {
        let page = HtmlPage::parse(PAGE, "");
        let text = page.body_text();
        assert!(text.starts_with("9 Elm Rd,"));
        assert!(!text.lines().any(|l| l == "t"));
    }
}
