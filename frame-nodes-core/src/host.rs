//! Host parameter adapter
//!
//! The workflow host hands every item's parameters over as JSON in its own
//! shape (`additionalFields`, `{ "items": [...] }` collections, JSON fields as
//! strings). This module reads that shape once per item and produces the
//! immutable parameter structs the assemblers take.

use frame_types::{
    AspectRatio, CustomMeta, FrameButton, FrameParameters, TransactionParameters,
};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A repeatable host field: either `{ "items": [...] }` or a bare list.
///
/// `null` and an object without `items` both read as empty. A bad entry
/// reports its own error rather than a generic shape mismatch.
#[derive(Debug, Clone)]
pub enum FixedCollection<T> {
    Items { items: Vec<T> },
    List(Vec<T>),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for FixedCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(FixedCollection::List(Vec::new())),
            Value::Array(list) => Vec::<T>::deserialize(Value::Array(list))
                .map(FixedCollection::List)
                .map_err(de::Error::custom),
            Value::Object(mut map) => match map.remove("items") {
                None | Some(Value::Null) => Ok(FixedCollection::Items { items: Vec::new() }),
                Some(items) => Vec::<T>::deserialize(items)
                    .map(|items| FixedCollection::Items { items })
                    .map_err(|e| de::Error::custom(format!("items: {}", e))),
            },
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a list or an object with `items`",
            )),
        }
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(s) => de::Unexpected::Str(s),
        _ => de::Unexpected::Other("value"),
    }
}

impl<T> Default for FixedCollection<T> {
    fn default() -> Self {
        FixedCollection::List(Vec::new())
    }
}

impl<T> FixedCollection<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            FixedCollection::Items { items } => items,
            FixedCollection::List(items) => items,
        }
    }
}

// ============================================================================
// FRAME BUILDER
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameHostItem {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub buttons: FixedCollection<FrameButton>,
    #[serde(default)]
    pub respond_now: Option<bool>,
    #[serde(default)]
    pub additional_fields: FrameAdditionalFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAdditionalFields {
    pub image_aspect_ratio: Option<AspectRatio>,
    pub input_text_label: Option<String>,
    pub post_url: Option<String>,
    /// A JSON string (kept verbatim) or any JSON value
    pub state: Option<Value>,
    pub template: Option<String>,
    #[serde(default)]
    pub custom_meta: FixedCollection<CustomMeta>,
    pub version: Option<String>,
}

impl FrameHostItem {
    pub fn from_value(raw: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(raw)
    }

    /// Split into frame parameters and the item's respond-now flag.
    pub fn into_parameters(self, respond_now_default: bool) -> (FrameParameters, bool) {
        let fields = self.additional_fields;
        let params = FrameParameters {
            image: self.image,
            buttons: self.buttons.into_vec(),
            aspect_ratio: fields.image_aspect_ratio,
            input_text_label: fields.input_text_label,
            post_url: fields.post_url,
            state: fields.state.map(state_text),
            template: fields.template,
            custom_meta: fields.custom_meta.into_vec(),
            version: fields.version,
        };
        (params, self.respond_now.unwrap_or(respond_now_default))
    }
}

fn state_text(state: Value) -> String {
    match state {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

// ============================================================================
// TRANSACTION BUILDER
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxHostItem {
    pub chain_id: Option<String>,
    #[serde(default)]
    pub recipient: String,
    pub method: Option<String>,
    pub value: Option<String>,
    #[serde(default)]
    pub attribution: bool,
    #[serde(default)]
    pub respond_now: Option<bool>,
    #[serde(default)]
    pub additional_fields: TxAdditionalFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxAdditionalFields {
    pub data: Option<String>,
    /// Passed through as given, string or array
    pub abi: Option<Value>,
}

impl TxHostItem {
    pub fn from_value(raw: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(raw)
    }

    /// Split into transaction parameters and the item's respond-now flag.
    pub fn into_parameters(
        self,
        default_chain_id: &str,
        respond_now_default: bool,
    ) -> (TransactionParameters, bool) {
        let params = TransactionParameters {
            chain_id: self
                .chain_id
                .unwrap_or_else(|| default_chain_id.to_string()),
            recipient: self.recipient,
            method: self.method,
            value: self.value,
            data: self.additional_fields.data,
            abi: self.additional_fields.abi,
            attribution: self.attribution,
        };
        (params, self.respond_now.unwrap_or(respond_now_default))
    }
}
