//! Advisory pre-check for input documents
//!
//! Before converting, callers can ask whether a document looks like it contains any links of the
//! expected syntax at all. The shapes here are deliberately looser than the ones used for
//! rewriting, and the outcome never changes what a conversion does.

use super::LinkSyntax;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static LOOSE_MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]\(.*?\)").expect("valid regex for loose markdown links"));

static LOOSE_HTML_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a\s+href=".*?""#).expect("valid regex for loose html links"));

/// Advisory raised when a document shows no sign of the expected link syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputWarning {
    pub expected: LinkSyntax,
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The input file does not appear to contain {} links.",
            self.expected
        )
    }
}

/// Check `source` for anything shaped like a `syntax` link.
///
/// Returns `Some` when nothing link-like was found.
pub fn check_input(source: &str, syntax: LinkSyntax) -> Option<InputWarning> {
    let pattern = match syntax {
        LinkSyntax::Markdown => &LOOSE_MARKDOWN_LINK,
        LinkSyntax::Html => &LOOSE_HTML_LINK,
    };

    if pattern.is_match(source) {
        None
    } else {
        log::debug!("no {syntax} link shapes found in input");
        Some(InputWarning { expected: syntax })
    }
}
