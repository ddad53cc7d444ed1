//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a subset of the helpers")]

use assert_cmd::{Command, assert::Assert};
use html5ever::{driver::ParseOpts, parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements the renderer may emit, plus the wrappers the HTML parser adds.
pub const ALLOWED_ELEMENTS: &[&str] = &[
    "html",
    "head",
    "body",
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "blockquote",
    "ol",
    "ul",
    "li",
    "a",
    "strong",
    "em",
    "code",
    "pre",
];

/// Build the `mdsafe` command.
pub fn cli() -> Command {
    Command::cargo_bin("mdsafe").expect("failed to create cargo command for mdsafe")
}

/// Run the binary with `args`, feeding `input` on standard input.
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> Assert {
    cli().args(args).write_stdin(input).assert()
}

/// Run the binary with `args` and empty standard input.
pub fn run_cli_with_args(args: &[&str]) -> Assert {
    cli().args(args).write_stdin("").assert()
}

fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(html.to_string())
}

fn walk(handle: &Handle, visit: &mut dyn FnMut(&Handle)) {
    visit(handle);
    for child in handle.children.borrow().iter() {
        walk(child, visit);
    }
}

/// Local names of every element in `html`, in document order.
pub fn element_names(html: &str) -> Vec<String> {
    let dom = parse(html);
    let mut names = Vec::new();
    walk(&dom.document, &mut |node: &Handle| {
        if let NodeData::Element { name, .. } = &node.data {
            names.push(name.local.to_string());
        }
    });
    names
}

/// Values of every attribute named `attr` in `html`, in document order.
pub fn attribute_values(html: &str, attr: &str) -> Vec<String> {
    let dom = parse(html);
    let mut values = Vec::new();
    walk(&dom.document, &mut |node: &Handle| {
        if let NodeData::Element { attrs, .. } = &node.data {
            for a in attrs.borrow().iter() {
                if a.name.local.as_ref() == attr {
                    values.push(a.value.to_string());
                }
            }
        }
    });
    values
}

/// Names of every attribute present in `html`.
pub fn attribute_names(html: &str) -> Vec<String> {
    let dom = parse(html);
    let mut names = Vec::new();
    walk(&dom.document, &mut |node: &Handle| {
        if let NodeData::Element { attrs, .. } = &node.data {
            names.extend(attrs.borrow().iter().map(|a| a.name.local.to_string()));
        }
    });
    names
}
