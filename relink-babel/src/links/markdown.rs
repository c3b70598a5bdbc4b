//! Markdown link recognition and Markdown → HTML rewriting

use super::Conversion;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;

/// `[label](url)`: the label stops at the first `]`, the url at the first `)`.
static MARKDOWN_LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex for markdown links")
});

/// A Markdown link found in a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink<'a> {
    pub label: &'a str,
    pub url: &'a str,
    /// Byte range of the whole `[label](url)` occurrence in the source.
    pub span: Range<usize>,
}

impl<'a> MarkdownLink<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        Some(MarkdownLink {
            label: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
            span: caps.get(0)?.range(),
        })
    }

    /// Render as an HTML anchor, optionally opening in a new tab.
    pub fn to_anchor(&self, new_tab: bool) -> String {
        if new_tab {
            format!(
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                self.url, self.label
            )
        } else {
            format!("<a href=\"{}\">{}</a>", self.url, self.label)
        }
    }
}

/// Collect every Markdown link in `source`, left to right.
pub fn find_markdown_links(source: &str) -> Vec<MarkdownLink<'_>> {
    MARKDOWN_LINK_REGEX
        .captures_iter(source)
        .filter_map(|caps| MarkdownLink::from_captures(&caps))
        .collect()
}

/// Rewrite every `[label](url)` in `source` as an HTML anchor.
///
/// Everything outside the recognized links is copied through byte for byte.
pub fn markdown_to_html(source: &str, new_tab: bool) -> Conversion {
    let mut links = 0;
    let text = MARKDOWN_LINK_REGEX.replace_all(source, |caps: &Captures<'_>| {
        match MarkdownLink::from_captures(caps) {
            Some(link) => {
                links += 1;
                link.to_anchor(new_tab)
            }
            None => caps[0].to_string(),
        }
    });

    log::debug!("rewrote {links} markdown link(s) as html anchors (new_tab={new_tab})");

    Conversion {
        text: text.into_owned(),
        links,
    }
}
