//! # Emitter Errors
//!
//! The core loop treats random draws and clock reads as infallible; the only
//! failure modes are serializing a record and writing it to the sink. Both
//! are surfaced here so callers can `?`-propagate and let the process
//! terminate, since no recovery semantic is defined.

/// Errors that can occur while emitting order events.
#[derive(Debug, thiserror::Error)]
pub enum EmitterError {
    #[error("failed to serialize order record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("event sink failed: {0}")]
    Sink(#[from] std::io::Error),
}
