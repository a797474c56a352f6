//! Transaction construction, signing and serialization for the STAS
//! SDK.
//!
//! Provides the `Transaction` type with wire serialization, BIP-143
//! FORKID signature hashing, the `Signer` capability with key-backed
//! and callback-backed realizations, and the P2PKH locking template.

pub mod input;
pub mod output;
pub mod sighash;
pub mod signer;
pub mod template;
pub mod transaction;

mod error;
pub use error::TransactionError;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use signer::{CallbackSigner, KeySigner, Signer};
pub use transaction::Transaction;
