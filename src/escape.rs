//! Escape untrusted text before any markup is produced.
//!
//! Escaping runs exactly once, as the first pipeline stage. Later stages
//! only ever add markup, so nothing downstream may call these helpers on
//! partially rendered output.

use std::borrow::Cow;

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Replace `& < > " '` with their entity forms.
///
/// Returns the input unchanged when none of the characters are present.
///
/// # Examples
///
/// ```
/// use mdsafe::escape::escape_html;
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("it's"), "it&#39;s");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(SPECIAL) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Collapse `\r\n` line endings to `\n`.
#[must_use]
pub fn normalise_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Byte-order mark that editors may leave at the start of a file.
pub const BOM: char = '\u{feff}';

/// Drop a leading byte-order mark, normalise line endings and escape
/// `text` in one step.
///
/// This is the form every later stage consumes.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    escape_html(&normalise_newlines(text)).into_owned()
}
