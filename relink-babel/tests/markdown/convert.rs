use insta::assert_snapshot;
use relink_babel::converters::MarkdownConverter;
use relink_babel::links::find_html_links;
use relink_babel::{ConvertOptions, Conversion, Converter};
use rstest::rstest;

const ANCHORS_HTML: &str = include_str!("../fixtures/anchors.html");
const ANCHORS_MD: &str = include_str!("../fixtures/anchors.md");

fn to_markdown(source: &str) -> Conversion {
    MarkdownConverter.convert(source, &ConvertOptions::default())
}

#[test]
fn test_anchors_fixture() {
    let result = to_markdown(ANCHORS_HTML);

    assert_eq!(result.text, ANCHORS_MD);
    // The name-only anchor has no href and is left alone
    assert_eq!(result.links, 4);
}

#[test]
fn test_anchors_fixture_new_tab_flags() {
    let flags: Vec<bool> = find_html_links(ANCHORS_HTML)
        .iter()
        .map(|link| link.new_tab)
        .collect();
    assert_eq!(flags, vec![false, true, true, false]);
}

#[test]
fn test_sentence_snapshot() {
    let result = to_markdown(
        r#"Read <a href="https://docs.rs/regex" target="_blank">the docs</a> first."#,
    );
    assert_snapshot!(result.text, @"Read [the docs](https://docs.rs/regex) first.");
}

#[rstest]
#[case::plain(r#"<a href="https://example.com">Example</a>"#)]
#[case::new_tab(r#"<a href="https://example.com" target="_blank">Example</a>"#)]
#[case::leading_attribute(r#"<a class="link" href="https://example.com">Example</a>"#)]
#[case::trailing_attribute(r#"<a href="https://example.com" rel="nofollow">Example</a>"#)]
#[case::spaced_tag("<a   href=\"https://example.com\"\n   target=\"_blank\">Example</a>")]
fn test_anchor_shapes_collapse(#[case] source: &str) {
    let result = to_markdown(source);
    assert_eq!(result.text, "[Example](https://example.com)");
    assert_eq!(result.links, 1);
}

#[test]
fn test_multiple_anchors_keep_text_between() {
    let result = to_markdown(
        r#"<a href="1">one</a>, <a href="2" target="_blank">two</a> and <a href="3">three</a>!"#,
    );
    assert_eq!(result.text, "[one](1), [two](2) and [three](3)!");
    assert_eq!(result.links, 3);
}

#[rstest]
#[case::no_anchor("<p>Plain paragraph</p>")]
#[case::no_href(r#"<a name="top">Top</a>"#)]
#[case::single_quotes("<a href='https://example.com'>Example</a>")]
#[case::unclosed(r#"<a href="https://example.com">Example"#)]
#[case::uppercase(r#"<A HREF="https://example.com">Example</A>"#)]
fn test_not_anchors(#[case] source: &str) {
    let result = to_markdown(source);
    assert_eq!(result.text, source);
    assert_eq!(result.links, 0);
}
