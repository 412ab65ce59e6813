//! Batch executor
//!
//! Drives a [`Node`] over one batch of items the way the host's item loop
//! does:
//!
//! - items run one at a time, in input order, each in isolation;
//! - output item `i` is the record produced from input item `i`;
//! - the first item alone may respond immediately, and only if it asks to.
//!   Later items never respond, whatever their flag says.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::error::NodeError;
use crate::node::{Node, NodeItem, NodeOutput};
use crate::responder::{Responder, ResponseSlot};

/// Outputs of one batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub execution_id: Uuid,
    pub items: Vec<Value>,
    /// Whether the first item's result went to the responder
    pub responded: bool,
}

pub struct BatchExecutor<'n, N: Node> {
    node: &'n N,
}

impl<'n, N: Node> BatchExecutor<'n, N> {
    pub fn new(node: &'n N) -> Self {
        Self { node }
    }

    pub fn run<R: Responder + ?Sized>(
        &self,
        items: Vec<NodeItem<N::Parameters>>,
        responder: &mut R,
    ) -> Result<BatchOutcome, NodeError> {
        let execution_id = Uuid::now_v7();
        let span = info_span!(
            "node_batch",
            node = self.node.name(),
            %execution_id,
            items = items.len()
        );
        let _enter = span.enter();

        let mut slot = ResponseSlot::new(responder);
        let mut outputs = Vec::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            let respond = index == 0 && item.respond_now;
            let NodeOutput { json, response } = self.node.execute(item.parameters)?;
            if respond {
                slot.send(response)?;
            }
            debug!(index, responded = respond, "Item executed");
            outputs.push(json);
        }

        info!(
            items = outputs.len(),
            responded = slot.is_sent(),
            "Batch complete"
        );
        Ok(BatchOutcome {
            execution_id,
            responded: slot.is_sent(),
            items: outputs,
        })
    }

    /// Parse every item's host parameters, then run the batch.
    ///
    /// A malformed item fails the whole batch before anything executes.
    pub fn run_host_items<R: Responder + ?Sized>(
        &self,
        raw_items: &[Value],
        responder: &mut R,
    ) -> Result<BatchOutcome, NodeError> {
        let items = raw_items
            .iter()
            .enumerate()
            .map(|(index, raw)| self.node.parse_item(index, raw))
            .collect::<Result<Vec<_>, _>>()?;
        self.run(items, responder)
    }
}
