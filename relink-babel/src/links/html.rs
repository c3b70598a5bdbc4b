//! HTML anchor recognition and HTML → Markdown rewriting

use super::Conversion;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;

/// Two anchor shapes, tried in order at each position:
/// one carrying `target="_blank"` somewhere after `href`, and a plain one.
/// Labels are lazy and stop at the first `</a>`; `.` does not cross newlines.
static HTML_LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"<a\s+(?:[^>]*?\s+)?href="(?P<blank_url>[^"]*)"(?:[^>]*?\s+)?target="_blank"[^>]*>(?P<blank_label>.*?)</a>"#,
        r"|",
        r#"<a\s+(?:[^>]*?\s+)?href="(?P<url>[^"]*)"[^>]*>(?P<label>.*?)</a>"#,
    ))
    .expect("valid regex for html anchors")
});

/// An HTML anchor found in a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlLink<'a> {
    /// Everything between the opening tag and `</a>`, markup included.
    pub label: &'a str,
    pub url: &'a str,
    /// Whether the opening tag carried `target="_blank"` after its `href`.
    pub new_tab: bool,
    /// Byte range of the whole anchor in the source.
    pub span: Range<usize>,
}

impl<'a> HtmlLink<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let span = caps.get(0)?.range();
        if let (Some(url), Some(label)) = (caps.name("blank_url"), caps.name("blank_label")) {
            return Some(HtmlLink {
                label: label.as_str(),
                url: url.as_str(),
                new_tab: true,
                span,
            });
        }

        Some(HtmlLink {
            label: caps.name("label")?.as_str(),
            url: caps.name("url")?.as_str(),
            new_tab: false,
            span,
        })
    }

    /// Render as `[label](url)`. The new-tab flag has no Markdown form and is dropped.
    pub fn to_markdown(&self) -> String {
        format!("[{}]({})", self.label, self.url)
    }
}

/// Collect every recognized anchor in `source`, left to right.
pub fn find_html_links(source: &str) -> Vec<HtmlLink<'_>> {
    HTML_LINK_REGEX
        .captures_iter(source)
        .filter_map(|caps| HtmlLink::from_captures(&caps))
        .collect()
}

/// Rewrite every recognized `<a href="url">label</a>` in `source` as `[label](url)`.
pub fn html_to_markdown(source: &str) -> Conversion {
    let mut links = 0;
    let mut new_tab_links = 0;
    let text = HTML_LINK_REGEX.replace_all(source, |caps: &Captures<'_>| {
        match HtmlLink::from_captures(caps) {
            Some(link) => {
                links += 1;
                if link.new_tab {
                    new_tab_links += 1;
                }
                link.to_markdown()
            }
            None => caps[0].to_string(),
        }
    });

    log::debug!(
        "rewrote {links} html anchor(s) as markdown links ({new_tab_links} dropped target=\"_blank\")"
    );

    Conversion {
        text: text.into_owned(),
        links,
    }
}
