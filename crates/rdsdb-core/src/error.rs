//! Core error types.

use crate::ident::ParseError;
use thiserror::Error;

/// Catalog errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Identifier does not match `RDS(m,n,k,lambda)`.
    #[error("malformed identifier {0}")]
    MalformedIdentifier(#[from] ParseError),

    /// Identifier absent from the catalog.
    #[error("{identifier} not in database")]
    NotFound { identifier: String },

    /// Set index out of range for an entry.
    #[error("no such set: {identifier} has {count} stored set(s), index {index} requested")]
    IndexOutOfRange {
        identifier: String,
        index: usize,
        count: usize,
    },

    /// Catalog file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog content could not be deserialized.
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this is a lookup failure a caller can report and move past.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::MalformedIdentifier(_) | Error::NotFound { .. } | Error::IndexOutOfRange { .. }
        )
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
