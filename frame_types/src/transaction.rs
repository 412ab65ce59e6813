//! Transaction request types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Method used when the parameters leave it out.
pub const DEFAULT_TX_METHOD: &str = "eth_sendTransaction";

/// Chains offered by the transaction builder, identified in CAIP-2 format.
///
/// Any other CAIP-2 string is still accepted as a chain id; this list only
/// drives the default and the node description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KnownChain {
    #[default]
    Base,
    Optimism,
    Ethereum,
}

impl KnownChain {
    pub const ALL: [KnownChain; 3] = [
        KnownChain::Base,
        KnownChain::Optimism,
        KnownChain::Ethereum,
    ];

    pub fn caip2(&self) -> &'static str {
        match self {
            KnownChain::Base => "eip155:8453",
            KnownChain::Optimism => "eip155:10",
            KnownChain::Ethereum => "eip155:1",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            KnownChain::Base => "Base",
            KnownChain::Optimism => "Optimism",
            KnownChain::Ethereum => "Ethereum",
        }
    }

    pub fn from_caip2(chain_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.caip2() == chain_id)
    }
}

/// Inputs of the transaction builder. Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionParameters {
    /// CAIP-2 chain id, e.g. `eip155:8453`
    pub chain_id: String,
    /// Recipient address
    pub recipient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Value in the chain's smallest unit, as a decimal string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Hex calldata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<Value>,
    #[serde(default)]
    pub attribution: bool,
}

impl TransactionParameters {
    pub fn new(chain_id: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            recipient: recipient.into(),
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_abi(mut self, abi: Value) -> Self {
        self.abi = Some(abi);
        self
    }

    pub fn with_attribution(mut self, attribution: bool) -> Self {
        self.attribution = attribution;
        self
    }

    pub fn method_or_default(&self) -> &str {
        self.method.as_deref().unwrap_or(DEFAULT_TX_METHOD)
    }
}

/// The `params` block of a [`TransactionRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<Value>,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Transaction request handed to a frame client for signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub chain_id: String,
    pub method: String,
    pub attribution: bool,
    pub params: TransactionCall,
}
