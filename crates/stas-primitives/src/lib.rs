//! Cryptographic and encoding primitives for the STAS SDK.
//!
//! Provides the foundational pieces the higher crates build on:
//! - Bitcoin hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160, HMAC)
//! - the `Hash` type used for transaction ids
//! - secp256k1 private/public keys and ECDSA signatures
//! - Base58 and Base58Check encoding
//! - VarInt and little-endian wire readers/writers

pub mod base58;
pub mod chainhash;
pub mod ec;
pub mod hash;
pub mod util;

mod error;
pub use error::PrimitivesError;
