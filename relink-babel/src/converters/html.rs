//! Markdown → HTML converter
//!
//! Turns `[label](url)` into `<a href="url">label</a>`. With [`ConvertOptions::new_tab`] set, every
//! generated anchor also carries `target="_blank"`.

use crate::converter::{ConvertOptions, Converter};
use crate::links::{self, Conversion, LinkSyntax};

/// Converter producing HTML anchors
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlConverter;

impl Converter for HtmlConverter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Markdown links to HTML anchors"
    }

    fn source_syntax(&self) -> LinkSyntax {
        LinkSyntax::Markdown
    }

    fn target_syntax(&self) -> LinkSyntax {
        LinkSyntax::Html
    }

    fn convert(&self, source: &str, options: &ConvertOptions) -> Conversion {
        links::markdown_to_html(source, options.new_tab)
    }
}
