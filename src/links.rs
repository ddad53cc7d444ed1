//! Link target filtering.
//!
//! Only `http:`, `https:` and `mailto:` targets survive. Anything else,
//! including `javascript:` and `data:` URLs, is replaced with `#`.

use std::sync::LazyLock;

use regex::Regex;

use crate::lazy_regex;

/// Target emitted in place of a rejected URL.
pub const INERT_TARGET: &str = "#";

static ALLOWED_SCHEME_RE: LazyLock<Regex> =
    lazy_regex!(r"(?i)^(?:https?:|mailto:)", "valid link scheme regex");

/// Whether `url` begins with an allowed scheme, ignoring case.
#[must_use]
pub fn is_allowed_scheme(url: &str) -> bool {
    ALLOWED_SCHEME_RE.is_match(url)
}

/// Return the trimmed `url` if its scheme is allowed, otherwise `#`.
///
/// # Examples
///
/// ```
/// use mdsafe::links::sanitize_link_target;
/// assert_eq!(sanitize_link_target(" https://example.com "), "https://example.com");
/// assert_eq!(sanitize_link_target("javascript:alert(1)"), "#");
/// ```
#[must_use]
pub fn sanitize_link_target(url: &str) -> &str {
    let url = url.trim();
    if is_allowed_scheme(url) {
        url
    } else {
        INERT_TARGET
    }
}
