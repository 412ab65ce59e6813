//! Frame Assembler
//!
//! Turns [`FrameParameters`] into a finished HTML document by appending an
//! ordered run of `<meta>` tags to the template's `<head>`.
//!
//! ## Tag order
//!
//! ```text
//! fc:frame                         version (vNext when absent)
//! og:image                         image
//! fc:frame:image                   image
//! fc:frame:image:aspect_ratio      aspect ratio (1.91:1 when absent)
//! fc:frame:post_url                if non-empty
//! fc:frame:button:{i}              per button, 1-indexed
//! fc:frame:button:{i}:action
//! fc:frame:button:{i}:target       if non-empty
//! fc:frame:button:{i}:post_url     if non-empty
//! fc:frame:input:text              if non-empty
//! fc:frame:state                   unless empty or the literal text `{}`
//! <custom name>                    custom meta, declaration order
//! ```
//!
//! Clients may rely on this order for display priority, so it never changes.
//!
//! Tags are appended, never merged: assembling on top of a previous output
//! leaves the old tags in place and adds a second set.

use frame_types::{FrameParameters, MetaTag, DEFAULT_TEMPLATE};
use tracing::{debug, warn};

use crate::html::FrameDocument;

/// Buttons a frame client renders. Extra buttons are still emitted.
pub const MAX_BUTTONS: usize = 4;

/// State text treated as "no state".
const EMPTY_STATE: &str = "{}";

/// Builds frame documents from [`FrameParameters`].
#[derive(Debug, Clone)]
pub struct FrameAssembler {
    default_template: String,
}

impl Default for FrameAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameAssembler {
    pub fn new() -> Self {
        Self {
            default_template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Use `template` whenever an item has no template (or an empty one).
    pub fn with_default_template(template: impl Into<String>) -> Self {
        Self {
            default_template: template.into(),
        }
    }

    pub fn default_template(&self) -> &str {
        &self.default_template
    }

    /// Assemble the frame document for one item.
    pub fn assemble(&self, params: FrameParameters) -> String {
        let tags = frame_meta_tags(&params);
        let template = match params.template.as_deref() {
            Some(template) if !template.is_empty() => template,
            _ => self.default_template.as_str(),
        };

        let document = FrameDocument::parse(template);
        for tag in &tags {
            document.append_meta(tag);
        }
        let html = document.serialize();

        debug!(
            image = %params.image,
            buttons = params.buttons.len(),
            tags = tags.len(),
            bytes = html.len(),
            "Assembled frame"
        );
        html
    }
}

/// The ordered meta tags a frame is made of, before they touch any document.
pub fn frame_meta_tags(params: &FrameParameters) -> Vec<MetaTag> {
    let mut tags = Vec::with_capacity(8 + params.buttons.len() * 4 + params.custom_meta.len());

    tags.push(MetaTag::new("fc:frame", params.version_or_default()));
    tags.push(MetaTag::new("og:image", &params.image));
    tags.push(MetaTag::new("fc:frame:image", &params.image));
    tags.push(MetaTag::new(
        "fc:frame:image:aspect_ratio",
        params.aspect_ratio_or_default(),
    ));

    if let Some(post_url) = non_empty(&params.post_url) {
        tags.push(MetaTag::new("fc:frame:post_url", post_url));
    }

    if params.buttons.len() > MAX_BUTTONS {
        warn!(
            buttons = params.buttons.len(),
            max = MAX_BUTTONS,
            "Frame has more buttons than clients render; emitting all of them"
        );
    }
    for (i, button) in params.buttons.iter().enumerate() {
        let prefix = format!("fc:frame:button:{}", i + 1);
        tags.push(MetaTag::new(prefix.clone(), &button.label));
        tags.push(MetaTag::new(
            format!("{}:action", prefix),
            button.action.as_str(),
        ));
        if let Some(target) = non_empty(&button.target) {
            tags.push(MetaTag::new(format!("{}:target", prefix), target));
        }
        if let Some(post_url) = non_empty(&button.post_url) {
            tags.push(MetaTag::new(format!("{}:post_url", prefix), post_url));
        }
    }

    if let Some(label) = non_empty(&params.input_text_label) {
        tags.push(MetaTag::new("fc:frame:input:text", label));
    }

    // Literal comparison: "{ }" or "{\n}" is still emitted.
    if let Some(state) = non_empty(&params.state).filter(|s| *s != EMPTY_STATE) {
        tags.push(MetaTag::new("fc:frame:state", state));
    }

    tags.extend(
        params
            .custom_meta
            .iter()
            .map(|meta| MetaTag::new(&meta.name, &meta.value)),
    );

    tags
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_types::FrameButton;
    use pretty_assertions::assert_eq;

    fn names(tags: &[MetaTag]) -> Vec<&str> {
        tags.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_minimal_frame_tags() {
        let tags = frame_meta_tags(&FrameParameters::new("https://x/i.png"));
        assert_eq!(
            tags,
            vec![
                MetaTag::new("fc:frame", "vNext"),
                MetaTag::new("og:image", "https://x/i.png"),
                MetaTag::new("fc:frame:image", "https://x/i.png"),
                MetaTag::new("fc:frame:image:aspect_ratio", "1.91:1"),
            ]
        );
    }

    #[test]
    fn test_button_optional_tags() {
        let params = FrameParameters::new("i")
            .with_button(FrameButton::new("Go", "link").with_target("https://x"))
            .with_button(FrameButton::new("Send", "tx").with_post_url("https://cb"))
            .with_button(FrameButton::new("Plain", "post").with_target(""));

        let tags = frame_meta_tags(&params);
        assert_eq!(
            names(&tags)[4..].to_vec(),
            vec![
                "fc:frame:button:1",
                "fc:frame:button:1:action",
                "fc:frame:button:1:target",
                "fc:frame:button:2",
                "fc:frame:button:2:action",
                "fc:frame:button:2:post_url",
                "fc:frame:button:3",
                "fc:frame:button:3:action",
            ]
        );
        assert_eq!(tags[8], MetaTag::new("fc:frame:button:2:action", "tx"));
    }

    #[test]
    fn test_empty_strings_skip_conditional_tags() {
        let params = FrameParameters::new("i")
            .with_post_url("")
            .with_input_text("")
            .with_state("");
        assert_eq!(frame_meta_tags(&params).len(), 4);
    }

    #[test]
    fn test_state_literal_comparison() {
        let empty = FrameParameters::new("i").with_state("{}");
        assert_eq!(frame_meta_tags(&empty).len(), 4);

        let spaced = FrameParameters::new("i").with_state("{ }");
        let tags = frame_meta_tags(&spaced);
        assert_eq!(tags.last(), Some(&MetaTag::new("fc:frame:state", "{ }")));
    }

    #[test]
    fn test_full_order() {
        let params = FrameParameters::new("i")
            .with_post_url("https://cb")
            .with_button(FrameButton::new("A", "post"))
            .with_input_text("Say hi")
            .with_state(r#"{"n":1}"#)
            .with_custom_meta("of:accepts:xmtp", "2024-02-01")
            .with_custom_meta("of:version", "vNext");

        assert_eq!(
            names(&frame_meta_tags(&params)),
            vec![
                "fc:frame",
                "og:image",
                "fc:frame:image",
                "fc:frame:image:aspect_ratio",
                "fc:frame:post_url",
                "fc:frame:button:1",
                "fc:frame:button:1:action",
                "fc:frame:input:text",
                "fc:frame:state",
                "of:accepts:xmtp",
                "of:version",
            ]
        );
    }

    #[test]
    fn test_more_than_four_buttons_are_emitted() {
        let mut params = FrameParameters::new("i");
        for n in 0..6 {
            params = params.with_button(FrameButton::new(format!("B{}", n), "post"));
        }
        let tags = frame_meta_tags(&params);
        assert_eq!(tags.len(), 4 + 6 * 2);
        assert_eq!(tags.last().map(|t| t.name.as_str()), Some("fc:frame:button:6:action"));
    }

    #[test]
    fn test_empty_template_uses_default() {
        let assembler = FrameAssembler::with_default_template(
            "<!DOCTYPE html><html><head><title>Fallback</title></head><body></body></html>",
        );
        let html = assembler.assemble(FrameParameters::new("i").with_template(""));
        assert!(html.contains("<title>Fallback</title>"));
        assert!(html.contains(r#"content="vNext""#));
    }
}
