// src/core/html.rs
//
// innerText-ish rendering of a scraper element: text nodes are whitespace
// collapsed, <br> and block elements start a new line, non-rendered elements
// are skipped, blank lines are dropped.

use std::mem::take;

use scraper::{ElementRef, Node};

use super::sanitize::normalize_ws;

const SKIPPED: &[&str] = &["script", "style", "noscript", "template", "head"];

const BLOCKS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary",
    "table", "tbody", "thead", "tfoot", "tr", "ul",
];

pub fn is_block(tag: &str) -> bool {
    BLOCKS.contains(&tag)
}

#[derive(Default)]
struct Lines {
    done: Vec<String>,
    cur: String,
}

impl Lines {
    fn push(&mut self, text: &str) {
        self.cur.push_str(text);
    }

    fn space(&mut self) {
        self.cur.push(' ');
    }

    fn brk(&mut self) {
        let line = normalize_ws(&take(&mut self.cur));
        if !line.is_empty() {
            self.done.push(line);
        }
    }

    fn finish(mut self) -> String {
        self.brk();
        self.done.join("\n")
    }
}

fn walk(el: ElementRef<'_>, out: &mut Lines) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push(t),
            Node::Element(e) => {
                let tag = e.name();
                if SKIPPED.contains(&tag) {
                    continue;
                }
                if tag == "br" {
                    out.brk();
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else { continue };
                let block = is_block(tag);
                if block { out.brk(); }
                walk(child_el, out);
                if block {
                    out.brk();
                } else if matches!(tag, "td" | "th") {
                    // cells on one row stay on one line
                    out.space();
                }
            }
            _ => {}
        }
    }
}

/// Rendered text of `el`, one visual line per `\n`.
pub fn inner_text(el: ElementRef<'_>) -> String {
    let mut lines = Lines::default();
    walk(el, &mut lines);
    lines.finish()
}
