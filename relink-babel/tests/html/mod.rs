//! HTML converter tests
//!
//! Markdown → HTML rewriting through the `html` converter.

mod convert;
