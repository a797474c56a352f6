//! Error types for chain access.

use thiserror::Error;

/// Errors returned by chain clients and ledger doubles.
#[derive(Error, Debug)]
pub enum ChainError {
    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query endpoint answered with a non-success status.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The ledger refused a submitted transaction.
    #[error("transaction rejected ({status}): {message}")]
    Rejected {
        /// Status code reported alongside the refusal.
        status: u16,
        /// Refusal reason as reported by the ledger.
        message: String,
    },

    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,

    /// A funding source could not cover the request.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Polling gave up before the condition held.
    #[error("timed out after {0} attempts")]
    Timeout(u32),

    /// The server answered with a payload the client cannot use.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
