//! HTML → Markdown converter

use crate::converter::{ConvertOptions, Converter};
use crate::links::{self, Conversion, LinkSyntax};

/// Converter producing Markdown links
///
/// Options are ignored: `target="_blank"` has no Markdown equivalent and is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownConverter;

impl Converter for MarkdownConverter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "HTML anchors to Markdown links"
    }

    fn source_syntax(&self) -> LinkSyntax {
        LinkSyntax::Html
    }

    fn target_syntax(&self) -> LinkSyntax {
        LinkSyntax::Markdown
    }

    fn convert(&self, source: &str, _options: &ConvertOptions) -> Conversion {
        links::html_to_markdown(source)
    }
}
