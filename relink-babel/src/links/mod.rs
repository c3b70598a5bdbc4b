//! Link recognition and rewriting
//!
//! Two pattern-driven rewrites live here:
//!
//! | Direction        | Recognized shape                              | Emitted shape                                  |
//! |------------------|-----------------------------------------------|------------------------------------------------|
//! | Markdown → HTML  | `[label](url)`                                | `<a href="url">label</a>` (+ `target="_blank"`) |
//! | HTML → Markdown  | `<a ... href="url" ... [target="_blank"]>label</a>` | `[label](url)`                           |
//!
//! Neither side is a parser. Text that does not match a pattern is copied through untouched, and a
//! document without links is a valid input that converts to itself with a count of zero.
//!
//! # Known Limitations
//!
//! - A `]` inside a Markdown label ends the label early, so `[a]b](url)` is not one link.
//! - A `)` inside a Markdown url ends the url early.
//! - HTML recognition is attribute-order sensitive: `target="_blank"` is only noticed after `href`.
//! - A `>` inside an attribute value that precedes `href` prevents the anchor from matching.
//! - Nested anchors close at the first `</a>`.
//! - HTML labels do not span lines.

pub mod check;
pub mod html;
pub mod markdown;

pub use check::{check_input, InputWarning};
pub use html::{find_html_links, html_to_markdown, HtmlLink};
pub use markdown::{find_markdown_links, markdown_to_html, MarkdownLink};

use serde::Serialize;
use std::fmt;

/// The link syntax a piece of text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSyntax {
    Markdown,
    Html,
}

impl LinkSyntax {
    /// Human-facing name used in messages ("Markdown", "HTML").
    pub fn label(&self) -> &'static str {
        match self {
            LinkSyntax::Markdown => "Markdown",
            LinkSyntax::Html => "HTML",
        }
    }
}

impl fmt::Display for LinkSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a single conversion pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The rewritten document.
    pub text: String,
    /// Number of links that were rewritten.
    pub links: usize,
}

impl Conversion {
    /// A conversion that touched nothing.
    pub fn unchanged(source: &str) -> Self {
        Conversion {
            text: source.to_string(),
            links: 0,
        }
    }
}
