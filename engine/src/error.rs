//! Central error types of the trading-system core.
//!
//! Most failures in the matching path never surface as `Err`: validation
//! and routing problems are recovered at the engine boundary and become
//! reply messages to the originating session. The errors below cover the
//! remaining system-level surfaces (catalogue construction, snapshotting,
//! identifier exhaustion) and aggregate the subsystem taxonomies.

use arara_idgen::GenerationError;
use arara_markets::SecurityLookup;
use arara_refdata::StorageError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Central error type of the Arara trading system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An identifier-generation context exhausted its counter space.
    #[error("IdGeneration: {0}")]
    IdGeneration(#[from] GenerationError),

    /// A request attribute failed validation.
    #[error("Validation: {0}")]
    Validation(#[from] ValidationError),

    /// A request addressed an instrument the catalogue does not contain.
    #[error("unknown instrument: {0}")]
    UnknownInstrument(SecurityLookup),

    /// The reference-data layer failed; never shown to clients.
    #[error("Storage: {0}")]
    Storage(#[from] StorageError),

    /// The receiver side of the trading-reply channel was dropped.
    #[error("reply channel receiver dropped")]
    ReplyRxDropped,
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for EngineError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        Self::ReplyRxDropped
    }
}
