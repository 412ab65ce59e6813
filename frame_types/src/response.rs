//! Immediate HTTP response payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Body of an immediate response: frame HTML or a JSON record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Text(String),
    Json(Value),
}

impl ResponseBody {
    /// Body bytes as sent on the wire. JSON bodies are serialized compactly.
    pub fn to_wire_string(&self) -> String {
        match self {
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Json(value) => value.to_string(),
        }
    }
}

/// Full response handed to the host's responder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub body: ResponseBody,
    pub headers: BTreeMap<String, String>,
    pub status_code: u16,
}

impl HttpResponse {
    /// `200` with `content-type: text/html; charset=utf-8`.
    pub fn html(body: impl Into<String>) -> Self {
        Self::ok(ResponseBody::Text(body.into()), CONTENT_TYPE_HTML)
    }

    /// `200` with `content-type: application/json; charset=utf-8`.
    pub fn json(body: Value) -> Self {
        Self::ok(ResponseBody::Json(body), CONTENT_TYPE_JSON)
    }

    fn ok(body: ResponseBody, content_type: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), content_type.to_string());
        Self {
            body,
            headers,
            status_code: 200,
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|s| s.as_str())
    }
}
