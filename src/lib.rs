//! Render a small Markdown dialect to safe HTML.
//!
//! Input is escaped before anything else happens, so the only markup in
//! the output is markup this crate emits. Supported constructs are ATX
//! headings, thematic breaks, single-line blockquotes, flat ordered and
//! unordered lists, paragraphs, fenced and inline code, links, bold and
//! italic. Link targets are limited to `http:`, `https:` and `mailto:`.
//!
//! Rendering is a single linear pass through these modules:
//! - [`escape`] escapes the raw text and normalises line endings.
//! - [`extract`] swaps code for markers held in a [`TokenTable`].
//! - [`blocks`] classifies lines and assembles block markup.
//! - [`inline`] rewrites links, bold and italic.
//! - [`restore`] expands the markers again.

mod macros;

pub mod blocks;
pub mod escape;
pub mod extract;
pub mod inline;
pub mod io;
pub mod links;
pub mod render;
pub mod restore;

pub use blocks::{Block, ListKind, ListState, assemble_blocks, classify_line};
pub use escape::escape_text;
pub use extract::{Protected, TokenTable, extract_code};
pub use io::{render_file, write_html};
pub use links::sanitize_link_target;
pub use render::{render, render_opt};
