#![deny(missing_docs)]

//! STAS Token SDK - Complete SDK.
//!
//! Re-exports all STAS SDK components for convenient single-crate usage.

pub use stas_primitives as primitives;
pub use stas_script as script;
pub use stas_transaction as transaction;
pub use stas_tokens as tokens;
pub use stas_chain as chain;
