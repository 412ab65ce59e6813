//! Builder nodes
//!
//! A [`Node`] is what the host's item loop drives: it reads one item's host
//! parameters ([`Node::parse_item`]) and turns the resulting parameter struct
//! into an output record plus the response it would send if asked to respond
//! immediately ([`Node::execute`]).

use frame_types::{FrameParameters, HttpResponse, TransactionParameters};
use serde_json::{Map, Value};

use crate::config::{FrameNodeConfig, FrameOutputMode, TransactionNodeConfig};
use crate::error::NodeError;
use crate::frame::FrameAssembler;
use crate::host::{FrameHostItem, TxHostItem};
use crate::transaction::TransactionAssembler;

/// One input item: immutable parameters plus whether it wants an immediate
/// response.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeItem<P> {
    pub parameters: P,
    pub respond_now: bool,
}

impl<P> NodeItem<P> {
    pub fn new(parameters: P, respond_now: bool) -> Self {
        Self {
            parameters,
            respond_now,
        }
    }
}

/// Result of executing one item.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeOutput {
    /// Record appended to the node's output sequence
    pub json: Value,
    /// Response handed to the responder when this item responds immediately
    pub response: HttpResponse,
}

pub trait Node {
    type Parameters;

    /// Node type name as registered with the host.
    fn name(&self) -> &'static str;

    /// Read one item's host parameters.
    fn parse_item(
        &self,
        index: usize,
        raw: &Value,
    ) -> Result<NodeItem<Self::Parameters>, NodeError>;

    fn execute(&self, parameters: Self::Parameters) -> Result<NodeOutput, NodeError>;
}

// ============================================================================
// FRAME BUILDER
// ============================================================================

pub struct FrameBuilderNode {
    assembler: FrameAssembler,
    config: FrameNodeConfig,
}

impl Default for FrameBuilderNode {
    fn default() -> Self {
        Self::new(FrameNodeConfig::default())
    }
}

impl FrameBuilderNode {
    pub const NAME: &'static str = "frameBuilder";

    pub fn new(config: FrameNodeConfig) -> Self {
        let assembler = match &config.default_template {
            Some(template) => FrameAssembler::with_default_template(template.clone()),
            None => FrameAssembler::new(),
        };
        Self { assembler, config }
    }

    pub fn output_mode(&self) -> FrameOutputMode {
        self.config.output_mode
    }
}

impl Node for FrameBuilderNode {
    type Parameters = FrameParameters;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse_item(&self, index: usize, raw: &Value) -> Result<NodeItem<FrameParameters>, NodeError> {
        let item = FrameHostItem::from_value(raw)
            .map_err(|source| NodeError::InvalidParameters { index, source })?;
        let (parameters, respond_now) = item.into_parameters(self.config.respond_now);
        Ok(NodeItem::new(parameters, respond_now))
    }

    fn execute(&self, parameters: FrameParameters) -> Result<NodeOutput, NodeError> {
        let html = self.assembler.assemble(parameters);

        let mut record = Map::new();
        record.insert(
            self.config.output_mode.field_name().to_string(),
            Value::String(html.clone()),
        );
        Ok(NodeOutput {
            json: Value::Object(record),
            response: HttpResponse::html(html),
        })
    }
}

// ============================================================================
// TRANSACTION BUILDER
// ============================================================================

#[derive(Default)]
pub struct TxBuilderNode {
    config: TransactionNodeConfig,
}

impl TxBuilderNode {
    pub const NAME: &'static str = "ethereumTxBuilder";

    pub fn new(config: TransactionNodeConfig) -> Self {
        Self { config }
    }
}

impl Node for TxBuilderNode {
    type Parameters = TransactionParameters;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse_item(
        &self,
        index: usize,
        raw: &Value,
    ) -> Result<NodeItem<TransactionParameters>, NodeError> {
        let item = TxHostItem::from_value(raw)
            .map_err(|source| NodeError::InvalidParameters { index, source })?;
        let (parameters, respond_now) =
            item.into_parameters(&self.config.default_chain_id, self.config.respond_now);
        Ok(NodeItem::new(parameters, respond_now))
    }

    fn execute(&self, parameters: TransactionParameters) -> Result<NodeOutput, NodeError> {
        let request = TransactionAssembler::assemble(parameters);
        let json = serde_json::to_value(&request)?;
        Ok(NodeOutput {
            response: HttpResponse::json(json.clone()),
            json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_types::{ResponseBody, CONTENT_TYPE_HTML, CONTENT_TYPE_JSON};
    use serde_json::json;

    #[test]
    fn test_frame_output_modes() {
        let html_node = FrameBuilderNode::default();
        let output = html_node.execute(FrameParameters::new("i")).unwrap();
        assert!(output.json["html"].as_str().unwrap().contains("fc:frame"));
        assert_eq!(output.response.content_type(), Some(CONTENT_TYPE_HTML));
        assert_eq!(output.response.status_code, 200);

        let output_node = FrameBuilderNode::new(FrameNodeConfig {
            output_mode: FrameOutputMode::Output,
            ..Default::default()
        });
        let output = output_node.execute(FrameParameters::new("i")).unwrap();
        assert!(output.json.get("html").is_none());
        assert_eq!(
            output.json["output"].as_str(),
            match &output.response.body {
                ResponseBody::Text(text) => Some(text.as_str()),
                ResponseBody::Json(_) => None,
            }
        );
    }

    #[test]
    fn test_tx_response_is_json() {
        let node = TxBuilderNode::default();
        let output = node
            .execute(TransactionParameters::new("eip155:10", "0xabc"))
            .unwrap();
        assert_eq!(output.response.content_type(), Some(CONTENT_TYPE_JSON));
        assert_eq!(output.response.body, ResponseBody::Json(output.json.clone()));
        assert_eq!(output.json["chainId"], json!("eip155:10"));
    }

    #[test]
    fn test_parse_error_carries_index() {
        let node = TxBuilderNode::default();
        let err = node.parse_item(3, &json!({ "attribution": "yes" })).unwrap_err();
        assert!(matches!(err, NodeError::InvalidParameters { index: 3, .. }));
    }
}
