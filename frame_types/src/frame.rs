//! Frame parameter and meta tag types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Frame version emitted as `fc:frame` when the parameters leave it out.
pub const DEFAULT_FRAME_VERSION: &str = "vNext";

/// Document used when no template (or an empty one) is supplied.
pub const DEFAULT_TEMPLATE: &str = "<!DOCTYPE html>\n<html>\n\t<head></head>\n\t<body></body>\n</html>";

// ============================================================================
// ASPECT RATIO
// ============================================================================

/// Image aspect ratio of a frame.
///
/// Strings other than the two known ratios are carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AspectRatio {
    /// `1.91:1`
    #[default]
    Landscape,
    /// `1:1`
    Square,
    Other(String),
}

impl AspectRatio {
    pub fn as_str(&self) -> &str {
        match self {
            AspectRatio::Landscape => "1.91:1",
            AspectRatio::Square => "1:1",
            AspectRatio::Other(raw) => raw,
        }
    }
}

impl From<String> for AspectRatio {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "1.91:1" => AspectRatio::Landscape,
            "1:1" => AspectRatio::Square,
            _ => AspectRatio::Other(raw),
        }
    }
}

impl From<&str> for AspectRatio {
    fn from(raw: &str) -> Self {
        AspectRatio::from(raw.to_string())
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        match ratio {
            AspectRatio::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// BUTTONS
// ============================================================================

/// What a frame button does when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonAction {
    #[default]
    Link,
    Mint,
    Post,
    PostRedirect,
    /// Transaction request
    Tx,
    Other(String),
}

impl ButtonAction {
    pub fn as_str(&self) -> &str {
        match self {
            ButtonAction::Link => "link",
            ButtonAction::Mint => "mint",
            ButtonAction::Post => "post",
            ButtonAction::PostRedirect => "post_redirect",
            ButtonAction::Tx => "tx",
            ButtonAction::Other(raw) => raw,
        }
    }
}

impl From<String> for ButtonAction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "link" => ButtonAction::Link,
            "mint" => ButtonAction::Mint,
            "post" => ButtonAction::Post,
            "post_redirect" => ButtonAction::PostRedirect,
            "tx" => ButtonAction::Tx,
            _ => ButtonAction::Other(raw),
        }
    }
}

impl From<&str> for ButtonAction {
    fn from(raw: &str) -> Self {
        ButtonAction::from(raw.to_string())
    }
}

impl From<ButtonAction> for String {
    fn from(action: ButtonAction) -> Self {
        match action {
            ButtonAction::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One frame button.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameButton {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub action: ButtonAction,
    /// Action target (link URL, mint address, tx endpoint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Button-level callback overriding the frame `post_url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
}

impl FrameButton {
    pub fn new(label: impl Into<String>, action: impl Into<ButtonAction>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
            target: None,
            post_url: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_post_url(mut self, post_url: impl Into<String>) -> Self {
        self.post_url = Some(post_url.into());
        self
    }
}

// ============================================================================
// META TAGS
// ============================================================================

/// A user-supplied meta tag appended after the frame tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl CustomMeta {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A `<meta name=.. content=..>` pair, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.content)
    }
}

// ============================================================================
// FRAME PARAMETERS
// ============================================================================

/// Everything needed to assemble one frame document.
///
/// `None` means "not supplied": defaults for `aspect_ratio`, `version` and
/// `template` apply only then. An explicitly empty version is emitted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameParameters {
    /// Image URL, used for both `og:image` and `fc:frame:image`
    pub image: String,
    #[serde(default)]
    pub buttons: Vec<FrameButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text_label: Option<String>,
    /// Frame-level callback URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    /// Frame state as serialized JSON text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default)]
    pub custom_meta: Vec<CustomMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl FrameParameters {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Default::default()
        }
    }

    pub fn with_button(mut self, button: FrameButton) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: impl Into<AspectRatio>) -> Self {
        self.aspect_ratio = Some(ratio.into());
        self
    }

    pub fn with_input_text(mut self, label: impl Into<String>) -> Self {
        self.input_text_label = Some(label.into());
        self
    }

    pub fn with_post_url(mut self, post_url: impl Into<String>) -> Self {
        self.post_url = Some(post_url.into());
        self
    }

    /// Set state from its already-serialized text (kept verbatim).
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set state from a JSON value, serialized compactly.
    pub fn with_state_json(mut self, state: &serde_json::Value) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_custom_meta(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_meta.push(CustomMeta::new(name, value));
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Version to emit, `vNext` when not supplied.
    pub fn version_or_default(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_FRAME_VERSION)
    }

    /// Aspect ratio to emit, `1.91:1` when not supplied.
    pub fn aspect_ratio_or_default(&self) -> &str {
        self.aspect_ratio
            .as_ref()
            .map(AspectRatio::as_str)
            .unwrap_or_else(|| AspectRatio::Landscape.as_str())
    }
}
