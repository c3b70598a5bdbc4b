//! Converter implementations
//!
//! One converter per direction, each named after the syntax it produces.

pub mod html;
pub mod markdown;

pub use html::HtmlConverter;
pub use markdown::MarkdownConverter;
