//! Error types for transaction construction and signing.

use thiserror::Error;

/// Errors produced while parsing, serializing or signing transactions.
#[derive(Error, Debug)]
pub enum TransactionError {
    /// The transaction violates a structural rule: bad input index,
    /// missing source output info, malformed fields.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Signing failed or could not proceed.
    #[error("signing error: {0}")]
    SigningError(String),

    /// Wire-format encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Wrapped script error.
    #[error(transparent)]
    Script(#[from] stas_script::ScriptError),

    /// Wrapped primitives error.
    #[error(transparent)]
    Primitives(#[from] stas_primitives::PrimitivesError),
}
