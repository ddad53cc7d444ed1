//! Put protected content back once all rewriting is done.
//!
//! Sub-passes run links, then inline code, then fenced blocks. An inline
//! span can itself hold a fence marker, so fences must come last.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{
    extract::{Protected, TokenTable},
    lazy_regex,
    links::INERT_TARGET,
};

static LINK_MARKER_RE: LazyLock<Regex> = lazy_regex!(r"<@@LINK(\d+)@@>", "valid link marker");
static CODE_MARKER_RE: LazyLock<Regex> = lazy_regex!(r"<@@CODE(\d+)@@>", "valid code marker");
static FENCE_MARKER_RE: LazyLock<Regex> =
    lazy_regex!(r"<@@FENCE(\d+)@@>", "valid fence marker");

fn lookup<'t>(table: &'t TokenTable, caps: &Captures<'_>) -> Option<&'t Protected> {
    caps[1].parse::<usize>().ok().and_then(|idx| table.get(idx))
}

fn restore_links(html: &str, table: &TokenTable) -> String {
    LINK_MARKER_RE
        .replace_all(html, |caps: &Captures<'_>| {
            let target = match lookup(table, caps) {
                Some(Protected::Link(target)) => target.as_str(),
                _ => INERT_TARGET,
            };
            format!(r#"<a href="{target}" target="_blank" rel="noopener noreferrer">"#)
        })
        .into_owned()
}

fn restore_code(html: &str, table: &TokenTable) -> String {
    CODE_MARKER_RE
        .replace_all(html, |caps: &Captures<'_>| {
            let body = match lookup(table, caps) {
                Some(Protected::Code(body)) => body.as_str(),
                _ => "",
            };
            format!("<code>{body}</code>")
        })
        .into_owned()
}

fn restore_fences(html: &str, table: &TokenTable) -> String {
    FENCE_MARKER_RE
        .replace_all(html, |caps: &Captures<'_>| match lookup(table, caps) {
            Some(Protected::Fence {
                lang: Some(lang),
                body,
            }) => format!(
                r#"<pre><code class="language-{}">{body}</code></pre>"#,
                lang.to_lowercase()
            ),
            Some(Protected::Fence { lang: None, body }) => {
                format!("<pre><code>{body}</code></pre>")
            }
            _ => "<pre><code></code></pre>".to_string(),
        })
        .into_owned()
}

/// Replace every marker in `html` with the markup for its table record.
///
/// Bodies are inserted verbatim. They were escaped once on the way in and
/// are never escaped or rewritten again.
///
/// # Examples
///
/// ```
/// use mdsafe::{extract::extract_code, restore::restore_tokens};
/// let (text, table) = extract_code("run `ls`");
/// assert_eq!(restore_tokens(&text, &table), "run <code>ls</code>");
/// ```
#[must_use]
pub fn restore_tokens(html: &str, table: &TokenTable) -> String {
    if table.is_empty() {
        return html.to_string();
    }
    let html = restore_links(html, table);
    let html = restore_code(&html, table);
    restore_fences(&html, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_link_anchor() {
        let mut table = TokenTable::new();
        let marker = table.push(Protected::Link("mailto:a@b.c".into()));
        assert_eq!(
            restore_tokens(&format!("{marker}mail</a>"), &table),
            r#"<a href="mailto:a@b.c" target="_blank" rel="noopener noreferrer">mail</a>"#
        );
    }

    #[test]
    fn restores_fence_with_lowercased_language() {
        let mut table = TokenTable::new();
        let marker = table.push(Protected::Fence {
            lang: Some("Rust".into()),
            body: "*x*".into(),
        });
        assert_eq!(
            restore_tokens(&marker, &table),
            r#"<pre><code class="language-rust">*x*</code></pre>"#
        );
    }

    #[test]
    fn restores_fence_without_language() {
        let mut table = TokenTable::new();
        let marker = table.push(Protected::Fence {
            lang: None,
            body: "a\nb".into(),
        });
        assert_eq!(
            restore_tokens(&marker, &table),
            "<pre><code>a\nb</code></pre>"
        );
    }

    #[test]
    fn inline_span_holding_fence_marker_is_fully_restored() {
        let mut table = TokenTable::new();
        let fence = table.push(Protected::Fence {
            lang: None,
            body: "x".into(),
        });
        let code = table.push(Protected::Code(fence));
        assert_eq!(
            restore_tokens(&code, &table),
            "<code><pre><code>x</code></pre></code>"
        );
    }

    #[test]
    fn mismatched_kind_restores_empty() {
        let mut table = TokenTable::new();
        table.push(Protected::Link("#".into()));
        assert_eq!(restore_tokens("<@@CODE0@@>", &table), "<code></code>");
    }

    #[test]
    fn no_table_leaves_text_alone() {
        let table = TokenTable::new();
        assert_eq!(restore_tokens("<p>x</p>", &table), "<p>x</p>");
    }
}
