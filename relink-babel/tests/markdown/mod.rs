//! Markdown converter tests
//!
//! HTML → Markdown rewriting through the `markdown` converter.

mod convert;
