//! Error types for token operations.

use thiserror::Error;

/// Errors raised by token schema handling, script building/parsing,
/// transaction factories and lineage validation.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token schema failed validation.
    #[error("invalid token schema: {0}")]
    InvalidScheme(String),

    /// Token value is not conserved across an operation.
    #[error("total out amount {total_out} must equal total in amount {total_in}")]
    Conservation {
        /// Total token satoshis produced by the operation.
        total_out: u64,
        /// Total token satoshis consumed by the operation.
        total_in: u64,
    },

    /// A script could not be built or parsed.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// A destination is malformed (bad amount, bad count, stray data).
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    /// A supplied UTXO is unusable for the requested operation.
    #[error("invalid utxo: {0}")]
    InvalidUtxo(String),

    /// A signer refused or failed to produce a signature.
    #[error("signing failed: {0}")]
    SigningFailed(String),

    /// A split was requested on a non-splittable token.
    #[error("token is not splittable")]
    NotSplittable,

    /// The token protocol version is not supported for this operation.
    #[error("unsupported token version: {0}")]
    UnsupportedVersion(u8),

    /// Funding does not cover the required value plus fees.
    #[error("insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds {
        /// Satoshis required to complete the operation.
        needed: u64,
        /// Satoshis available from the funding input(s).
        available: u64,
    },

    /// Transaction error.
    #[error(transparent)]
    Transaction(#[from] stas_transaction::TransactionError),

    /// Script error.
    #[error(transparent)]
    Script(#[from] stas_script::ScriptError),

    /// Primitives error.
    #[error(transparent)]
    Primitives(#[from] stas_primitives::PrimitivesError),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
