use thiserror::Error;

/// Failure reported by the reference-data storage layer.
///
/// None of these propagate to clients: the trading system logs them and the
/// rejection boundary reports a generic `Other` business reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage connection failure: {0}")]
    ConnectionFailure(String),

    /// A query expected exactly one record and found none or several.
    #[error("cardinality violated: expected a single record")]
    CardinalityViolated,

    #[error("data integrity violated: {0}")]
    DataIntegrityViolated(String),

    #[error("malformed predicate expression: {0}")]
    MalformedPredicate(String),
}
