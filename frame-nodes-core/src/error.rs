//! Node error model.
//!
//! The assemblers themselves never fail. Everything here comes from the
//! surroundings: malformed host parameters, a responder that cannot deliver,
//! or output serialization.

/// Errors surfaced by node execution.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// Host parameters for one item could not be read.
    #[error("Invalid parameters for item {index}: {source}")]
    InvalidParameters {
        index: usize,
        source: serde_json::Error,
    },

    /// The responder could not deliver the immediate response.
    #[error("Response delivery failed: {0}")]
    ResponseFailed(String),

    /// A second immediate response was attempted within one batch.
    #[error("Immediate response already sent for this batch")]
    ResponseAlreadySent,

    #[error("Failed to serialize node output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
