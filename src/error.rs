//! Error types for the trade ledger contract
//!
//! Every variant renders to the text the host receives in a failure response,
//! so messages stay short and stable.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Trade ledger error types
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of arguments for an operation
    #[error("Incorrect number of arguments. Expecting {expected}")]
    Arity {
        /// Argument count the operation requires
        expected: usize,
        /// Argument count the caller supplied
        actual: usize,
    },

    /// Function name not recognised by the dispatcher
    #[error("Invalid Smart Contract function name.")]
    UnknownFunction(String),

    /// Failure reported by the ledger backend (read, write or range scan)
    #[error("{0}")]
    Backend(String),

    /// Record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Contract configuration rejected by the builder
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an arity error from the required and supplied argument counts.
    #[must_use]
    pub const fn arity(expected: usize, actual: usize) -> Self {
        Self::Arity { expected, actual }
    }

    /// Wrap any backend failure, keeping only its message.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
