// src/core/sanitize.rs

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Split rendered text into lines the way `innerText.split("\n")` sees them.
/// `\r\n` is treated as one break.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_nbsp_and_newlines() {
        assert_eq!(normalize_ws("  Beds\u{a0}\n  3 "), "Beds 3");
        assert_eq!(normalize_ws("\t\n "), "");
    }

    #[test]
    fn split_lines_keeps_empty_segments() {
        assert_eq!(split_lines("a\r\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(split_lines("single"), vec!["single"]);
    }
}
