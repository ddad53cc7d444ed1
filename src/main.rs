use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use mdsafe::{
    io::{check_size, render_file, write_html},
    render,
};
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Render Markdown to safe HTML")]
struct Cli {
    /// Write `<name>.html` next to each input instead of printing
    #[arg(long = "write", requires = "files")]
    write: bool,
    /// Reject inputs larger than this many bytes
    #[arg(long = "max-bytes", value_name = "BYTES")]
    max_bytes: Option<usize>,
    /// Markdown files to render
    files: Vec<PathBuf>,
}

/// Entry point for the command-line renderer.
///
/// Reads standard input when no files are given. Files are processed in
/// parallel and reported in argument order. The first failing file stops
/// output and is named in the error.
///
/// # Examples
///
/// ```sh
/// # Print HTML for a file
/// mdsafe notes.md
///
/// # Write notes.html next to notes.md
/// mdsafe --write notes.md
///
/// # Render standard input
/// cat notes.md | mdsafe
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        check_size(&input, cli.max_bytes).context("standard input")?;
        println!("{}", render(&input));
        return Ok(());
    }

    if cli.write {
        let written: Vec<_> = cli
            .files
            .par_iter()
            .map(|path| write_html(path, cli.max_bytes))
            .collect();
        for (path, result) in cli.files.iter().zip(written) {
            let out = result.with_context(|| format!("failed to render {}", path.display()))?;
            log::info!("wrote {}", out.display());
        }
        return Ok(());
    }

    let rendered: Vec<_> = cli
        .files
        .par_iter()
        .map(|path| render_file(path, cli.max_bytes))
        .collect();
    for (path, result) in cli.files.iter().zip(rendered) {
        let html = result.with_context(|| format!("failed to render {}", path.display()))?;
        println!("{html}");
    }

    Ok(())
}
