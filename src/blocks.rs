//! Line classification and block assembly.
//!
//! Each line of the marker-substituted text is classified on its own. The
//! only state carried between lines is the [`ListState`], which decides
//! when list containers open and close.

use std::sync::LazyLock;

use regex::Regex;

use crate::{escape::BOM, lazy_regex};

static RULE_RE: LazyLock<Regex> = lazy_regex!(r"^(?:-{3,}|\*{3,})$", "valid rule regex");
static HEADING_RE: LazyLock<Regex> = lazy_regex!(r"^(#+)\s+(.+)$", "valid heading regex");
// Escaping has already turned `>` into `&gt;`.
static QUOTE_RE: LazyLock<Regex> = lazy_regex!(r"^&gt;\s?(.*)$", "valid blockquote regex");
static ORDERED_RE: LazyLock<Regex> =
    lazy_regex!(r"^[0-9]+\.\s+(.+)$", "valid ordered item regex");
static UNORDERED_RE: LazyLock<Regex> =
    lazy_regex!(r"^[-*+]\s+(.+)$", "valid unordered item regex");

/// Deepest heading level HTML defines.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Kind of list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    #[must_use]
    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Ordered => "<ol>",
            Self::Unordered => "<ul>",
        }
    }

    #[must_use]
    pub fn close_tag(self) -> &'static str {
        match self {
            Self::Ordered => "</ol>",
            Self::Unordered => "</ul>",
        }
    }
}

/// Whether a list container is open, and which kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    NoList,
    InOrderedList,
    InUnorderedList,
}

impl ListState {
    #[must_use]
    pub fn open_kind(self) -> Option<ListKind> {
        match self {
            Self::NoList => None,
            Self::InOrderedList => Some(ListKind::Ordered),
            Self::InUnorderedList => Some(ListKind::Unordered),
        }
    }

    fn from_kind(kind: Option<ListKind>) -> Self {
        match kind {
            None => Self::NoList,
            Some(ListKind::Ordered) => Self::InOrderedList,
            Some(ListKind::Unordered) => Self::InUnorderedList,
        }
    }

    /// Move to the state required by the next line.
    ///
    /// `next` is the list kind of the incoming line, or `None` for any
    /// non-item line. Closing and opening tags are pushed to `out` as
    /// needed. An item of the already open kind continues the container.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdsafe::blocks::{ListKind, ListState};
    /// let mut out = Vec::new();
    /// let state = ListState::InUnorderedList.advance(Some(ListKind::Ordered), &mut out);
    /// assert_eq!(state, ListState::InOrderedList);
    /// assert_eq!(out, ["</ul>", "<ol>"]);
    /// ```
    #[must_use]
    pub fn advance(self, next: Option<ListKind>, out: &mut Vec<String>) -> Self {
        let current = self.open_kind();
        if current == next {
            return self;
        }
        if let Some(kind) = current {
            out.push(kind.close_tag().to_string());
        }
        if let Some(kind) = next {
            out.push(kind.open_tag().to_string());
        }
        Self::from_kind(next)
    }

    /// Close any open container, leaving the state at [`ListState::NoList`].
    pub fn close(&mut self, out: &mut Vec<String>) {
        *self = self.advance(None, out);
    }
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Rule,
    Heading { level: usize, text: &'a str },
    Quote(&'a str),
    Item { kind: ListKind, text: &'a str },
    Blank,
    Paragraph(&'a str),
}

impl Block<'_> {
    /// The list kind this line belongs to, if it is a list item.
    #[must_use]
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::Item { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Render the fragment for this line, without any list container tags.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Rule => "<hr />".to_string(),
            Self::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
            Self::Quote(text) => format!("<blockquote><p>{text}</p></blockquote>"),
            Self::Item { text, .. } => format!("<li>{text}</li>"),
            Self::Blank => String::new(),
            Self::Paragraph(text) => format!("<p>{text}</p>"),
        }
    }
}

/// Classify one line. The first matching rule wins.
///
/// # Examples
///
/// ```
/// use mdsafe::blocks::{Block, ListKind, classify_line};
/// assert_eq!(classify_line("  ---  "), Block::Rule);
/// assert_eq!(
///     classify_line("3. third"),
///     Block::Item { kind: ListKind::Ordered, text: "third" }
/// );
/// ```
#[must_use]
pub fn classify_line(line: &str) -> Block<'_> {
    let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c == BOM);
    if RULE_RE.is_match(trimmed) {
        return Block::Rule;
    }
    if let Some(cap) = HEADING_RE.captures(trimmed) {
        let level = cap[1].len().min(MAX_HEADING_LEVEL);
        let text = cap.get(2).map_or("", |m| m.as_str());
        return Block::Heading { level, text };
    }
    if let Some(cap) = QUOTE_RE.captures(trimmed) {
        return Block::Quote(cap.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(cap) = ORDERED_RE.captures(trimmed) {
        let text = cap.get(1).map_or("", |m| m.as_str());
        return Block::Item {
            kind: ListKind::Ordered,
            text,
        };
    }
    if let Some(cap) = UNORDERED_RE.captures(trimmed) {
        let text = cap.get(1).map_or("", |m| m.as_str());
        return Block::Item {
            kind: ListKind::Unordered,
            text,
        };
    }
    if trimmed.is_empty() {
        return Block::Blank;
    }
    Block::Paragraph(trimmed)
}

/// Assemble block markup for `text`, one or more fragments per line.
///
/// Fragments are joined with `\n`. Blank lines contribute an empty
/// fragment and close any open list.
///
/// # Examples
///
/// ```
/// use mdsafe::blocks::assemble_blocks;
/// assert_eq!(
///     assemble_blocks("- a\n- b\n\npara"),
///     "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n\n<p>para</p>"
/// );
/// ```
#[must_use]
pub fn assemble_blocks(text: &str) -> String {
    let mut out = Vec::new();
    let mut state = ListState::default();
    let mut lines = 0usize;
    for line in text.split('\n') {
        let block = classify_line(line);
        state = state.advance(block.list_kind(), &mut out);
        out.push(block.to_html());
        lines += 1;
    }
    state.close(&mut out);
    log::trace!("assembled {lines} line(s) into {} fragment(s)", out.len());
    out.join("\n")
}
