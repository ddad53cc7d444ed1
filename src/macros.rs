//! Helper macros used across the crate.

/// Lazily compile a [`Regex`](regex::Regex), panicking with `$msg` if the
/// pattern is invalid.
///
/// Every pattern in this crate is a literal, so the panic can only fire
/// during development.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static MARKER: LazyLock<Regex> = mdsafe::lazy_regex!(r"<@@CODE(\d+)@@>", "marker");
/// assert!(MARKER.is_match("<@@CODE3@@>"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
