use insta::assert_snapshot;
use relink_babel::converters::HtmlConverter;
use relink_babel::{ConvertOptions, Conversion, Converter};
use rstest::rstest;

const READING_LIST_MD: &str = include_str!("../fixtures/reading-list.md");
const READING_LIST_HTML: &str = include_str!("../fixtures/reading-list.html");

fn to_html(source: &str, new_tab: bool) -> Conversion {
    HtmlConverter.convert(source, &ConvertOptions::with_new_tab(new_tab))
}

#[test]
fn test_reading_list_fixture() {
    let result = to_html(READING_LIST_MD, false);

    assert_eq!(result.text, READING_LIST_HTML);
    // Includes the footnote whose label spans two lines
    assert_eq!(result.links, 5);
}

#[test]
fn test_new_tab_applies_to_every_link() {
    let result = to_html(READING_LIST_MD, true);

    assert_eq!(result.links, 5);
    assert_eq!(result.text.matches(" target=\"_blank\">").count(), 5);
    assert!(result.text.contains("A note with [brackets] but no link."));
}

#[test]
fn test_sentence_snapshot() {
    let result = to_html("Read [the docs](https://docs.rs/regex) first.", true);
    assert_snapshot!(result.text, @r#"Read <a href="https://docs.rs/regex" target="_blank">the docs</a> first."#);
}

#[rstest]
#[case::plain(
    "[Example](https://example.com)",
    false,
    r#"<a href="https://example.com">Example</a>"#
)]
#[case::new_tab(
    "[Example](https://example.com)",
    true,
    r#"<a href="https://example.com" target="_blank">Example</a>"#
)]
#[case::relative_url("[Up](../index.md)", false, r#"<a href="../index.md">Up</a>"#)]
#[case::adjacent(
    "[a](1)[b](2)",
    false,
    r#"<a href="1">a</a><a href="2">b</a>"#
)]
#[case::image_keeps_bang("![logo](logo.png)", false, r#"!<a href="logo.png">logo</a>"#)]
fn test_link_cases(#[case] source: &str, #[case] new_tab: bool, #[case] expected: &str) {
    assert_eq!(to_html(source, new_tab).text, expected);
}

#[rstest]
#[case::no_links("Just prose.")]
#[case::bracket_in_label("[a]b](https://example.com)")]
#[case::reference_style("[text][ref]")]
#[case::empty_label("[](https://example.com)")]
#[case::empty_url("[text]()")]
fn test_not_links(#[case] source: &str) {
    let result = to_html(source, true);
    assert_eq!(result.text, source);
    assert_eq!(result.links, 0);
}
