//! Node descriptions
//!
//! Static metadata the host renders as each node's parameter form. The
//! defaults declared here are the same constants the host adapter and the
//! assemblers fall back to.

use frame_types::{
    AspectRatio, ButtonAction, KnownChain, DEFAULT_FRAME_VERSION, DEFAULT_TEMPLATE,
    DEFAULT_TX_METHOD,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::node::{FrameBuilderNode, TxBuilderNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    String,
    Boolean,
    Options,
    Json,
    Collection,
    FixedCollection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: Value,
}

impl PropertyOption {
    fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    /// Sub-fields of a collection or fixed collection
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<NodeProperty>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub multiple_values: bool,
}

impl NodeProperty {
    fn new(
        display_name: &'static str,
        name: &'static str,
        kind: PropertyType,
        default: Value,
    ) -> Self {
        Self {
            display_name,
            name,
            kind,
            required: false,
            default,
            description: None,
            options: Vec::new(),
            fields: Vec::new(),
            multiple_values: false,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    fn with_options(mut self, options: Vec<PropertyOption>) -> Self {
        self.options = options;
        self
    }

    fn with_fields(mut self, fields: Vec<NodeProperty>) -> Self {
        self.fields = fields;
        self
    }

    fn multiple(mut self) -> Self {
        self.multiple_values = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: &'static str,
    pub name: &'static str,
    pub group: Vec<&'static str>,
    pub version: u32,
    pub description: &'static str,
    pub defaults: Value,
    pub inputs: Vec<&'static str>,
    pub outputs: Vec<&'static str>,
    pub properties: Vec<NodeProperty>,
}

impl NodeDescription {
    pub fn property(&self, name: &str) -> Option<&NodeProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

pub fn frame_builder_description() -> NodeDescription {
    let actions = [
        ("Link", ButtonAction::Link),
        ("Mint", ButtonAction::Mint),
        ("Post", ButtonAction::Post),
        ("Redirect", ButtonAction::PostRedirect),
        ("Transaction", ButtonAction::Tx),
    ]
    .into_iter()
    .map(|(name, action)| PropertyOption::new(name, action.as_str()))
    .collect();

    let ratios = [AspectRatio::Landscape, AspectRatio::Square]
        .iter()
        .map(|ratio| PropertyOption::new(ratio.as_str(), ratio.as_str()))
        .collect();

    let button_fields = vec![
        NodeProperty::new("Label", "label", PropertyType::String, json!("")).required(),
        NodeProperty::new("Action", "action", PropertyType::Options, json!(ButtonAction::Link.as_str()))
            .required()
            .with_options(actions),
        NodeProperty::new("Action Target", "target", PropertyType::String, json!("")),
        NodeProperty::new("Post URL", "postUrl", PropertyType::String, json!("")).describe("Custom Post URL"),
    ];

    let custom_meta_fields = vec![
        NodeProperty::new("Name", "name", PropertyType::String, json!("")).describe("Custom meta tag name"),
        NodeProperty::new("Value", "value", PropertyType::String, json!("")).describe("Custom meta tag value"),
    ];

    let additional_fields = vec![
        NodeProperty::new(
            "Aspect Ratio",
            "imageAspectRatio",
            PropertyType::Options,
            json!(AspectRatio::Landscape.as_str()),
        )
        .describe("Image aspect ratio")
        .with_options(ratios),
        NodeProperty::new("Input", "inputTextLabel", PropertyType::String, json!("")).describe("Text input label"),
        NodeProperty::new("Callback URL", "postUrl", PropertyType::String, json!(""))
            .describe("Signature packet receiver endpoint URL"),
        NodeProperty::new("State", "state", PropertyType::Json, json!("{}"))
            .describe("JSON representation of state passed to the frame server"),
        NodeProperty::new("HTML Template", "template", PropertyType::String, json!(DEFAULT_TEMPLATE))
            .describe("HTML template to embed meta tags into"),
        NodeProperty::new("Custom Meta", "customMeta", PropertyType::FixedCollection, json!([]))
            .multiple()
            .with_fields(custom_meta_fields),
        NodeProperty::new("Version", "version", PropertyType::String, json!(DEFAULT_FRAME_VERSION))
            .describe("Version of the frame"),
    ];

    NodeDescription {
        display_name: "Farcaster: Frame builder",
        name: FrameBuilderNode::NAME,
        group: vec!["transform", "output"],
        version: 1,
        description: "Generates frame HTML with meta tags for the provided frame parameters",
        defaults: json!({ "name": "Frame builder" }),
        inputs: vec!["main"],
        outputs: vec!["main"],
        properties: vec![
            NodeProperty::new("Image", "image", PropertyType::String, json!(""))
                .required()
                .describe("URL of frame image"),
            NodeProperty::new("Buttons", "buttons", PropertyType::FixedCollection, json!([]))
                .multiple()
                .with_fields(button_fields),
            NodeProperty::new("Respond Immediately", "respondNow", PropertyType::Boolean, json!(true)).describe(
                "Whether to respond immediately or pass the response down the workflow",
            ),
            NodeProperty::new("Additional Fields", "additionalFields", PropertyType::Collection, json!({}))
                .with_fields(additional_fields),
        ],
    }
}

pub fn tx_builder_description() -> NodeDescription {
    let chains = KnownChain::ALL
        .iter()
        .map(|chain| PropertyOption::new(chain.display_name(), chain.caip2()))
        .collect();

    NodeDescription {
        display_name: "Ethereum Tx Builder",
        name: TxBuilderNode::NAME,
        group: vec!["transform", "output"],
        version: 1,
        description: "Generates a frame transaction request object",
        defaults: json!({ "name": "Build Tx" }),
        inputs: vec!["main"],
        outputs: vec!["main"],
        properties: vec![
            NodeProperty::new("Blockchain", "chainId", PropertyType::Options, json!(KnownChain::default().caip2()))
                .required()
                .describe("Blockchain ID in CAIP-2 format")
                .with_options(chains),
            NodeProperty::new("Recipient", "recipient", PropertyType::String, json!("")).required(),
            NodeProperty::new("Method", "method", PropertyType::String, json!(DEFAULT_TX_METHOD))
                .describe("A method ID to identify the type of tx request"),
            NodeProperty::new("Value", "value", PropertyType::String, json!(""))
                .describe("Transaction value in the chain's smallest unit (wei)"),
            NodeProperty::new("Attribution", "attribution", PropertyType::Boolean, json!(false))
                .describe("Whether to include the calldata attribution suffix"),
            NodeProperty::new("Respond Immediately", "respondNow", PropertyType::Boolean, json!(false)).describe(
                "Whether to respond immediately or pass the response down the workflow",
            ),
            NodeProperty::new("Additional Fields", "additionalFields", PropertyType::Collection, json!({}))
                .with_fields(vec![
                    NodeProperty::new("Data", "data", PropertyType::String, json!(""))
                        .describe("Transaction calldata"),
                    NodeProperty::new("ABI", "abi", PropertyType::Json, json!("[]")).describe(
                        "JSON ABI which must include the encoded function type and should include potential error types",
                    ),
                ]),
        ],
    }
}
