//! Link, bold and italic rewriting over assembled block markup.
//!
//! The passes run in a fixed order and each sees the previous pass's
//! output. Overlapping delimiters are settled by that order and by lazy
//! matching alone. No pattern crosses a newline, so a rewrite never spans
//! two block fragments.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{
    extract::{Protected, TokenTable},
    lazy_regex,
    links::{INERT_TARGET, sanitize_link_target},
};

static LINK_RE: LazyLock<Regex> =
    lazy_regex!(r"\[([^\]\n]+)\]\(([^)\n]+)\)", "valid link regex");
static BOLD_RE: LazyLock<Regex> =
    lazy_regex!(r"\*\*(.+?)\*\*|__(.+?)__", "valid bold regex");
static ITALIC_RE: LazyLock<Regex> =
    lazy_regex!(r"\*([^*_\n].*?)\*|_([^*_\n].*?)_", "valid italic regex");

/// Text of whichever alternative matched.
fn either<'h>(caps: &Captures<'h>) -> &'h str {
    caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str())
}

/// Sanitize a link target taken from marker-substituted text.
///
/// Escaped text holds no `<`, so one in `url` belongs to a code marker.
/// Restoring it would put markup inside the `href` attribute.
fn link_target(url: &str) -> &str {
    if url.contains('<') {
        INERT_TARGET
    } else {
        sanitize_link_target(url)
    }
}

/// Rewrite `[label](url)` into an anchor.
///
/// The sanitized target goes into `table` and the opening tag is left as a
/// `LINK` marker, so the emphasis passes cannot touch its attributes. The
/// label stays inline and is rewritten like any other text.
#[must_use]
pub fn rewrite_links(html: &str, table: &mut TokenTable) -> String {
    LINK_RE
        .replace_all(html, |caps: &Captures<'_>| {
            let target = link_target(&caps[2]).to_string();
            let marker = table.push(Protected::Link(target));
            format!("{marker}{}</a>", &caps[1])
        })
        .into_owned()
}

/// Rewrite `**text**` and `__text__` into `<strong>`.
///
/// # Examples
///
/// ```
/// use mdsafe::inline::rewrite_bold;
/// assert_eq!(rewrite_bold("a **b** __c__"), "a <strong>b</strong> <strong>c</strong>");
/// assert_eq!(rewrite_bold("**mixed__"), "**mixed__");
/// ```
#[must_use]
pub fn rewrite_bold(html: &str) -> String {
    BOLD_RE
        .replace_all(html, |caps: &Captures<'_>| {
            format!("<strong>{}</strong>", either(caps))
        })
        .into_owned()
}

/// Rewrite `*text*` and `_text_` into `<em>`.
///
/// The text may not begin with `*` or `_`, which keeps leftover bold
/// delimiters from being read as emphasis.
#[must_use]
pub fn rewrite_italic(html: &str) -> String {
    ITALIC_RE
        .replace_all(html, |caps: &Captures<'_>| format!("<em>{}</em>", either(caps)))
        .into_owned()
}

/// Apply the link, bold and italic passes in that order.
#[must_use]
pub fn rewrite_inline(html: &str, table: &mut TokenTable) -> String {
    let html = rewrite_links(html, table);
    let html = rewrite_bold(&html);
    rewrite_italic(&html)
}
