//! File helpers for rendering Markdown documents.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::render::render;

/// Fail if `text` is longer than `max_bytes`.
///
/// `None` means no limit.
///
/// # Errors
/// Returns [`io::ErrorKind::InvalidData`] when the limit is exceeded.
pub fn check_size(text: &str, max_bytes: Option<usize>) -> io::Result<()> {
    match max_bytes {
        Some(limit) if text.len() > limit => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("input is {} bytes, limit is {limit}", text.len()),
        )),
        _ => Ok(()),
    }
}

/// Read `path` and return its rendered HTML.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid UTF-8, or is
/// larger than `max_bytes`.
pub fn render_file(path: &Path, max_bytes: Option<usize>) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    check_size(&text, max_bytes)?;
    Ok(render(&text))
}

/// Path of the HTML file written for `path`.
#[must_use]
pub fn html_path(path: &Path) -> PathBuf {
    path.with_extension("html")
}

/// Render `path` and write the result next to it with an `.html` extension.
///
/// Returns the path that was written.
///
/// # Errors
/// Returns an error if rendering the source or writing the output fails.
pub fn write_html(path: &Path, max_bytes: Option<usize>) -> io::Result<PathBuf> {
    let html = render_file(path, max_bytes)?;
    let out = html_path(path);
    fs::write(&out, html + "\n")?;
    Ok(out)
}
