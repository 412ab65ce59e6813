//! frame-nodes-core: frame and transaction builder nodes
//!
//! Two stateless nodes for a workflow host:
//!
//! - **Frame builder** - frame parameters → HTML document whose `<head>`
//!   carries the frame's ordered `<meta>` tags ([`FrameAssembler`])
//! - **Tx builder** - transaction parameters → transaction request record
//!   ([`TransactionAssembler`])
//!
//! Around the assemblers:
//! - [`host`] reads the host's per-item parameter JSON into immutable structs
//! - [`Node`] ties parsing, assembly and output shaping together per node
//! - [`BatchExecutor`] runs a batch in order and hands the first item's result
//!   to an injected [`Responder`] when asked to respond immediately
//! - [`config`] loads node settings from YAML
//! - [`description`] holds the parameter-form metadata for each node
//!
//! Nothing in here validates chain ids, addresses, ABIs or markup. Templates
//! are parsed leniently and repaired, never rejected.

pub mod config;
pub mod description;
pub mod error;
pub mod executor;
pub mod frame;
pub mod host;
pub mod html;
pub mod node;
pub mod responder;
pub mod transaction;

pub use config::{
    ConfigLoader, FrameNodeConfig, FrameOutputMode, NodesConfig, TransactionNodeConfig,
};
pub use description::{frame_builder_description, tx_builder_description, NodeDescription};
pub use error::NodeError;
pub use executor::{BatchExecutor, BatchOutcome};
pub use frame::{frame_meta_tags, FrameAssembler, MAX_BUTTONS};
pub use html::extract_meta_tags;
pub use node::{FrameBuilderNode, Node, NodeItem, NodeOutput, TxBuilderNode};
pub use responder::{CollectingResponder, Responder, ResponseSlot, WriterResponder};
pub use transaction::TransactionAssembler;

pub use frame_types;
