//! Frame assembly against real documents: tag order and count, template
//! handling, and re-templating behaviour.

use frame_nodes_core::frame_types::{FrameButton, FrameParameters, MetaTag};
use frame_nodes_core::{extract_meta_tags, frame_meta_tags, FrameAssembler};
use pretty_assertions::assert_eq;

fn assemble(params: FrameParameters) -> String {
    FrameAssembler::new().assemble(params)
}

#[test]
fn minimal_frame_document() {
    let html = assemble(FrameParameters::new("https://x/i.png"));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(
        extract_meta_tags(&html),
        vec![
            MetaTag::new("fc:frame", "vNext"),
            MetaTag::new("og:image", "https://x/i.png"),
            MetaTag::new("fc:frame:image", "https://x/i.png"),
            MetaTag::new("fc:frame:image:aspect_ratio", "1.91:1"),
        ]
    );
}

#[test]
fn single_link_button() {
    let html = assemble(
        FrameParameters::new("https://x/i.png")
            .with_button(FrameButton::new("Go", "link").with_target("https://x")),
    );

    let tags = extract_meta_tags(&html);
    assert_eq!(
        tags[4..].to_vec(),
        vec![
            MetaTag::new("fc:frame:button:1", "Go"),
            MetaTag::new("fc:frame:button:1:action", "link"),
            MetaTag::new("fc:frame:button:1:target", "https://x"),
        ]
    );
    assert!(!tags.iter().any(|t| t.name.ends_with(":post_url")));
}

#[test]
fn explicit_values_override_defaults() {
    let html = assemble(
        FrameParameters::new("i")
            .with_aspect_ratio("1:1")
            .with_version("2024-02-01"),
    );
    let tags = extract_meta_tags(&html);

    assert_eq!(tags[0], MetaTag::new("fc:frame", "2024-02-01"));
    assert_eq!(tags[3], MetaTag::new("fc:frame:image:aspect_ratio", "1:1"));
}

#[test]
fn tag_count_follows_present_fields() {
    let button_shapes = [
        FrameButton::new("plain", "post"),
        FrameButton::new("target", "link").with_target("https://t"),
        FrameButton::new("callback", "post").with_post_url("https://cb"),
        FrameButton::new("both", "tx")
            .with_target("https://t")
            .with_post_url("https://cb"),
    ];

    for button_count in 0..=4 {
        for with_extras in [false, true] {
            let mut params = FrameParameters::new("https://x/i.png");
            let mut expected = 4;

            for button in button_shapes.iter().take(button_count) {
                expected += 2
                    + usize::from(button.target.is_some())
                    + usize::from(button.post_url.is_some());
                params = params.with_button(button.clone());
            }
            if with_extras {
                params = params
                    .with_post_url("https://cb")
                    .with_input_text("Your name")
                    .with_state(r#"{"page":1}"#)
                    .with_custom_meta("a", "1")
                    .with_custom_meta("b", "2");
                expected += 1 + 1 + 1 + 2;
            }

            let planned = frame_meta_tags(&params);
            let emitted = extract_meta_tags(&assemble(params));
            assert_eq!(emitted.len(), expected, "buttons={button_count} extras={with_extras}");
            assert_eq!(emitted, planned);
        }
    }
}

#[test]
fn template_content_is_kept_and_tags_follow_existing_head() {
    let template = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <title>My frame</title>
    <meta name="description" content="existing">
  </head>
  <body><h1>Hello</h1></body>
</html>"#;

    let html = assemble(FrameParameters::new("i").with_template(template));

    assert!(html.contains("<title>My frame</title>"));
    assert!(html.contains("<h1>Hello</h1>"));
    assert!(html.contains(r#"lang="en""#));

    let tags = extract_meta_tags(&html);
    assert_eq!(tags[0], MetaTag::new("description", "existing"));
    assert_eq!(tags[1], MetaTag::new("fc:frame", "vNext"));
    assert_eq!(tags.len(), 5);

    let head_end = html.find("</head>").unwrap();
    let body_start = html.find("<body>").unwrap();
    let last_tag = html.rfind("fc:frame:image:aspect_ratio").unwrap();
    assert!(last_tag < head_end && head_end < body_start);
}

#[test]
fn malformed_template_is_tolerated() {
    let html = assemble(
        FrameParameters::new("i").with_template("<html><body><div><p>unterminated <span>text"),
    );

    assert!(html.contains("unterminated"));
    assert_eq!(extract_meta_tags(&html).len(), 4);
}

#[test]
fn state_and_custom_values_survive_escaping() {
    let state = r#"{"msg":"<b>\"hi\" & bye</b>"}"#;
    let html = assemble(
        FrameParameters::new("i")
            .with_state(state)
            .with_custom_meta("of:accepts:xmtp", "2024-02-01"),
    );

    let tags = extract_meta_tags(&html);
    assert_eq!(tags[4], MetaTag::new("fc:frame:state", state));
    assert_eq!(tags[5], MetaTag::new("of:accepts:xmtp", "2024-02-01"));
}

#[test]
fn retemplating_previous_output_duplicates_tags() {
    let params = FrameParameters::new("https://x/i.png")
        .with_button(FrameButton::new("Next", "post"))
        .with_state(r#"{"page":2}"#);

    let first = assemble(params.clone());
    let second = assemble(params.clone().with_template(first.clone()));

    let first_tags = extract_meta_tags(&first);
    let second_tags = extract_meta_tags(&second);

    assert_eq!(second_tags.len(), first_tags.len() * 2);
    assert_eq!(second_tags[..first_tags.len()], first_tags[..]);
    assert_eq!(second_tags[first_tags.len()..], first_tags[..]);
}
