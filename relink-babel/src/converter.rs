//! Converter trait definition
//!
//! This module defines the Converter trait that every conversion direction implements, plus the
//! small value types that travel with a conversion request.

use crate::links::{Conversion, LinkSyntax};
use serde::Serialize;

/// Options accepted by converters.
///
/// Converters ignore options that have no meaning for their direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Emit `target="_blank"` on generated anchors (Markdown → HTML only).
    pub new_tab: bool,
}

impl ConvertOptions {
    pub fn with_new_tab(new_tab: bool) -> Self {
        ConvertOptions { new_tab }
    }
}

/// Trait for link converters
///
/// A converter rewrites links written in its source syntax into its target syntax. Converters are
/// named after their target, so `"html"` turns Markdown links into anchors.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Converter for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn source_syntax(&self) -> LinkSyntax {
///         LinkSyntax::Markdown
///     }
///
///     fn target_syntax(&self) -> LinkSyntax {
///         LinkSyntax::Markdown
///     }
///
///     fn convert(&self, source: &str, _options: &ConvertOptions) -> Conversion {
///         Conversion::unchanged(&source.to_uppercase())
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// The name of this converter (e.g., "html", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// Syntax of the links this converter recognizes
    fn source_syntax(&self) -> LinkSyntax;

    /// Syntax of the links this converter emits
    fn target_syntax(&self) -> LinkSyntax;

    /// Rewrite every recognized link in `source`.
    ///
    /// Conversion never fails: a document without links converts to itself with a count of zero.
    fn convert(&self, source: &str, options: &ConvertOptions) -> Conversion;
}

/// The two mutually exclusive conversion directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Markdown links → HTML anchors
    ToHtml,
    /// HTML anchors → Markdown links
    ToMarkdown,
}

impl Direction {
    /// Registry name of the converter implementing this direction.
    pub fn converter_name(&self) -> &'static str {
        match self {
            Direction::ToHtml => "html",
            Direction::ToMarkdown => "markdown",
        }
    }

    pub fn source_syntax(&self) -> LinkSyntax {
        match self {
            Direction::ToHtml => LinkSyntax::Markdown,
            Direction::ToMarkdown => LinkSyntax::Html,
        }
    }

    pub fn target_syntax(&self) -> LinkSyntax {
        match self {
            Direction::ToHtml => LinkSyntax::Html,
            Direction::ToMarkdown => LinkSyntax::Markdown,
        }
    }

    /// Past-tense summary of a finished conversion, e.g.
    /// `converted 3 Markdown links to HTML links`.
    pub fn describe(&self, links: usize) -> String {
        format!(
            "converted {links} {} links to {} links",
            self.source_syntax(),
            self.target_syntax()
        )
    }
}
