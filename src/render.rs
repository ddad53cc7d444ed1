//! The rendering pipeline.
//!
//! Stages run strictly in order and none calls back into an earlier one:
//! escape, extract code, assemble blocks, rewrite inline markup, restore
//! protected content.

use crate::{
    blocks::assemble_blocks,
    escape::escape_text,
    extract::extract_code,
    inline::rewrite_inline,
    restore::restore_tokens,
};

/// Render Markdown `text` to HTML.
///
/// The function is total. Malformed constructs fall back to paragraphs or
/// stay as escaped text, and empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use mdsafe::render;
/// assert_eq!(render("# Hi <you>"), "<h1>Hi &lt;you&gt;</h1>");
/// assert_eq!(render(""), "");
/// ```
#[must_use]
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let escaped = escape_text(text);
    let (substituted, mut table) = extract_code(&escaped);
    let blocks = assemble_blocks(&substituted);
    let rewritten = rewrite_inline(&blocks, &mut table);
    let html = restore_tokens(&rewritten, &table);
    log::debug!(
        "rendered {} input byte(s) to {} output byte(s) with {} protected token(s)",
        text.len(),
        html.len(),
        table.len()
    );
    html
}

/// Render optional text, treating `None` like the empty string.
///
/// # Examples
///
/// ```
/// use mdsafe::render_opt;
/// assert_eq!(render_opt(None), "");
/// assert_eq!(render_opt(Some("*hi*")), "<p><em>hi</em></p>");
/// ```
#[must_use]
pub fn render_opt(text: Option<&str>) -> String {
    text.map_or_else(String::new, render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_inputs() {
        assert_eq!(render(""), "");
        assert_eq!(render_opt(None), "");
        assert_eq!(render_opt(Some("")), "");
    }

    #[test]
    fn whitespace_only_input_renders_blank_fragments() {
        assert_eq!(render("  \n  "), "\n");
    }

    #[test]
    fn code_is_protected_from_emphasis() {
        assert_eq!(
            render("*a* `*b*`"),
            "<p><em>a</em> <code>*b*</code></p>"
        );
    }

    #[test]
    fn crlf_input_matches_lf_input() {
        assert_eq!(render("- a\r\n- b\r\n"), render("- a\n- b\n"));
    }
}
