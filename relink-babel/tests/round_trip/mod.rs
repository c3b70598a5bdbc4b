//! Markdown → HTML → Markdown round trips.

use proptest::prelude::*;
use relink_babel::links::{html_to_markdown, markdown_to_html};
use relink_babel::{convert, ConvertOptions, Direction};

fn markdown_link(label: &str, url: &str) -> String {
    format!("[{label}]({url})")
}

#[test]
fn test_reading_list_round_trip_keeps_multi_line_anchor() {
    let md = include_str!("../fixtures/reading-list.md");
    let html = markdown_to_html(md, true);
    let back = html_to_markdown(&html.text);

    // The two-line footnote label cannot be read back from HTML
    assert_eq!(html.links, 5);
    assert_eq!(back.links, 4);
    assert!(back
        .text
        .contains("<a href=\"https://en.wikipedia.org/wiki/Rust\" target=\"_blank\">see\nthe wiki</a>"));
    assert!(back.text.contains("[Docs.rs](https://docs.rs)"));
}

#[test]
fn test_html_round_trip_is_lossy() {
    let html = r#"<a class="x" href="https://example.com" target="_blank">Example</a>"#;
    let md = convert(html, Direction::ToMarkdown, &ConvertOptions::default());
    let again = convert(&md.text, Direction::ToHtml, &ConvertOptions::default());
    assert_eq!(again.text, r#"<a href="https://example.com">Example</a>"#);
}

proptest! {
    #[test]
    fn markdown_link_survives_html_round_trip(
        label in "[^\\[\\]<\\n]{1,24}",
        url in "[A-Za-z0-9:/._~?=&#%+-]{1,40}",
        new_tab in any::<bool>(),
    ) {
        let original = markdown_link(&label, &url);

        let html = markdown_to_html(&original, new_tab);
        prop_assert_eq!(html.links, 1);

        let back = html_to_markdown(&html.text);
        prop_assert_eq!(back.links, 1);
        prop_assert_eq!(back.text, original);
    }

    #[test]
    fn count_matches_number_of_links(
        links in prop::collection::vec(("[a-z ]{1,8}", "[a-z0-9./]{1,12}"), 0..8),
        separator in "( |\n| and |, )",
        new_tab in any::<bool>(),
    ) {
        let document = links
            .iter()
            .map(|(label, url)| markdown_link(label, url))
            .collect::<Vec<_>>()
            .join(separator.as_str());

        let html = markdown_to_html(&document, new_tab);
        prop_assert_eq!(html.links, links.len());

        let back = html_to_markdown(&html.text);
        prop_assert_eq!(back.links, links.len());
        prop_assert_eq!(back.text, document);
    }

    #[test]
    fn text_without_link_markers_is_untouched(text in "[^\\[<]{0,80}") {
        let to_html = markdown_to_html(&text, true);
        prop_assert_eq!(&to_html.text, &text);
        prop_assert_eq!(to_html.links, 0);

        let to_markdown = html_to_markdown(&text);
        prop_assert_eq!(&to_markdown.text, &text);
        prop_assert_eq!(to_markdown.links, 0);
    }
}
