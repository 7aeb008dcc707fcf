use thiserror::Error;

use crate::store::action::ProducerId;

/// Errors surfaced by the capture store.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Registering an id that is already present. The registry is left
    /// unchanged; the existing producer keeps its slot until it unregisters.
    #[error("producer `{0}` is already registered")]
    DuplicateProducer(ProducerId),
}

/// Errors raised while decoding devtool bridge messages.
///
/// These never escape the bridge boundary: a malformed inbound message is
/// logged and dropped, matching the protocol's no-fatal-errors policy.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed devtool message: {0}")]
    MalformedMessage(#[from] serde_json::Error),
}
