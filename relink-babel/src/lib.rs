//! Link conversion between Markdown and HTML
//!
//!     This crate rewrites hyperlinks inside a text document from one syntax to the other:
//!     Markdown's `[label](url)` and HTML's `<a href="url">label</a>`. Everything that is not a
//!     link passes through untouched, so it works equally well on a README, a blog post, or a
//!     fragment of a template.
//!
//!     This is a pure lib, that is, it powers relink-cli but is shell agnostic: no code here
//!     prints, reads env vars, or touches the filesystem. Diagnostics go through the `log` facade
//!     and it is up to the host to install a logger.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # Registry errors
//!     ├── converter.rs            # Converter trait, options, directions
//!     ├── registry.rs             # ConverterRegistry for discovery and selection
//!     ├── converters
//!     │   ├── html.rs             # Markdown → HTML
//!     │   └── markdown.rs         # HTML → Markdown
//!     ├── links
//!     │   ├── markdown.rs         # Markdown link pattern and rewrite
//!     │   ├── html.rs             # HTML anchor pattern and rewrite
//!     │   └── check.rs            # Loose pre-check for link-shaped text
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── html                    # Markdown → HTML
//!     ├── markdown                # HTML → Markdown
//!     ├── round_trip
//!     └── fixtures
//!
//! Core Algorithms
//!
//!     Both directions are a single `replace_all` pass over the input with a compiled pattern and
//!     a rewrite callback. The count of converted links comes from that same pass, so it always
//!     equals the number of replacements.
//!
//!     The HTML side recognizes two anchor shapes, with and without `target="_blank"`, as one
//!     alternation. Each match becomes one [`links::HtmlLink`] that records whether the new-tab
//!     attribute was present; the Markdown output is the same either way.
//!
//! Round Tripping
//!
//!     Markdown → HTML → Markdown gives back the original link text for any label without `]`
//!     (or line breaks) and any url without `)` or `"`. The other way is lossy: `target="_blank"`
//!     and every other attribute is dropped on the way to Markdown.
//!
//! Library Choices
//!
//!     Patterns are `regex` expressions compiled once into `once_cell` statics. We explicitly do
//!     not parse Markdown or HTML: the tool is meant to touch links and nothing else, and a real
//!     parser would reformat the rest of the document.
//!
pub mod converter;
pub mod converters;
pub mod error;
pub mod links;
pub mod registry;

pub use converter::{ConvertOptions, Converter, Direction};
pub use error::ConvertError;
pub use links::{check_input, Conversion, InputWarning, LinkSyntax};
pub use registry::ConverterRegistry;

/// Convert `source` in the given direction with the built-in converters.
///
/// Same result as running the matching converter from a default [`ConverterRegistry`].
pub fn convert(source: &str, direction: Direction, options: &ConvertOptions) -> Conversion {
    match direction {
        Direction::ToHtml => links::markdown_to_html(source, options.new_tab),
        Direction::ToMarkdown => links::html_to_markdown(source),
    }
}
