//! Pull code out of escaped text before block and inline rewriting.
//!
//! Fenced blocks and inline code spans are replaced by opaque markers and
//! their bodies recorded in a [`TokenTable`]. Markers begin with `<`, which
//! escaped text can never contain, so they cannot collide with user content.
//! They also avoid every character the inline passes react to, which keeps
//! code bodies untouched until [`restore_tokens`](crate::restore::restore_tokens)
//! puts them back.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::lazy_regex;

/// Fence whose closing backticks start their own line.
static CLOSED_FENCE_RE: LazyLock<Regex> = lazy_regex!(
    r"(?s)```([A-Za-z0-9_+-]+)?\n(.*?)\n```",
    "valid closed fence regex",
);

/// Fence whose closing backticks trail the final body line.
static TRAILING_FENCE_RE: LazyLock<Regex> = lazy_regex!(
    r"(?s)```([A-Za-z0-9_+-]+)?\n(.*?)```",
    "valid trailing fence regex",
);

/// Fence that is never closed and runs to the end of the input.
static UNCLOSED_FENCE_RE: LazyLock<Regex> = lazy_regex!(
    r"(?s)```([A-Za-z0-9_+-]+)?\n(.*)\z",
    "valid unclosed fence regex",
);

static INLINE_CODE_RE: LazyLock<Regex> =
    lazy_regex!(r"`([^`\n]+)`", "valid inline code regex");

/// Content shielded from rewriting until restoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protected {
    /// A fenced code block with an optional language tag.
    Fence { lang: Option<String>, body: String },
    /// An inline code span.
    Code(String),
    /// A sanitized link target awaiting its anchor tag.
    Link(String),
}

impl Protected {
    fn marker_label(&self) -> &'static str {
        match self {
            Self::Fence { .. } => "FENCE",
            Self::Code(_) => "CODE",
            Self::Link(_) => "LINK",
        }
    }
}

/// Append-only table of protected content for one render.
///
/// A record's position is its stable index, and the marker for a record
/// embeds that index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenTable {
    tokens: Vec<Protected>,
}

impl TokenTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `token` and return the marker that stands in for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdsafe::extract::{Protected, TokenTable};
    /// let mut table = TokenTable::new();
    /// assert_eq!(table.push(Protected::Code("x".into())), "<@@CODE0@@>");
    /// assert_eq!(table.push(Protected::Link("#".into())), "<@@LINK1@@>");
    /// ```
    pub fn push(&mut self, token: Protected) -> String {
        let marker = format!("<@@{}{}@@>", token.marker_label(), self.tokens.len());
        self.tokens.push(token);
        marker
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Protected> {
        self.tokens.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Protected> {
        self.tokens.iter()
    }
}

fn replace_fences(re: &Regex, text: &str, table: &mut TokenTable, trim_body: bool) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        let lang = caps.get(1).map(|m| m.as_str().to_string());
        let mut body = caps.get(2).map_or("", |m| m.as_str());
        if trim_body {
            body = body.strip_suffix('\n').unwrap_or(body);
        }
        table.push(Protected::Fence {
            lang,
            body: body.to_string(),
        })
    })
    .into_owned()
}

/// Replace fenced blocks and inline code in `escaped` with markers.
///
/// Fences are extracted before inline spans. Closed fences are matched
/// first so a well-formed fence is never swallowed by the looser
/// patterns that follow.
///
/// # Examples
///
/// ```
/// use mdsafe::extract::{Protected, extract_code};
/// let (text, table) = extract_code("use `x` here");
/// assert_eq!(text, "use <@@CODE0@@> here");
/// assert_eq!(table.get(0), Some(&Protected::Code("x".into())));
/// ```
#[must_use]
pub fn extract_code(escaped: &str) -> (String, TokenTable) {
    let mut table = TokenTable::new();
    let text = replace_fences(&CLOSED_FENCE_RE, escaped, &mut table, false);
    let text = replace_fences(&TRAILING_FENCE_RE, &text, &mut table, false);
    let text = replace_fences(&UNCLOSED_FENCE_RE, &text, &mut table, true);
    let fences = table.len();
    let text = INLINE_CODE_RE
        .replace_all(&text, |caps: &Captures<'_>| {
            table.push(Protected::Code(caps[1].to_string()))
        })
        .into_owned();
    log::debug!(
        "extracted {fences} fenced block(s) and {} inline span(s)",
        table.len() - fences
    );
    (text, table)
}
