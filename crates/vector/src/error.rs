use thiserror::Error;

use crate::vector::Vector;

/// Errors returned by the vector space, encoder, algebra and codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },

    #[error("invalid config: dimension must be >= 1 (got {dimension})")]
    InvalidConfigDimension { dimension: usize },

    /// Invalid UTF-8 in input unit `unit` at byte `offset`.
    ///
    /// Encoding of that unit stopped at the bad byte. `partial` holds
    /// everything accumulated before it (and every other unit of a batch);
    /// treat it as unreliable.
    #[error("malformed UTF-8 in unit {unit} at byte {offset}")]
    MalformedInput {
        unit: usize,
        offset: usize,
        partial: Box<Vector>,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("component {index} overflows i64")]
    ComponentOverflow { index: usize },

    #[error("truncated serialization: expected {expected} components, found {found}")]
    TruncatedSerialization { expected: usize, found: usize },

    #[error("invalid component {index}: {token:?} is not a decimal integer")]
    InvalidComponent { index: usize, token: String },
}

impl VectorError {
    /// Take the partially accumulated vector out of a `MalformedInput` error.
    pub fn into_partial(self) -> Option<Vector> {
        match self {
            VectorError::MalformedInput { partial, .. } => Some(*partial),
            _ => None,
        }
    }
}
