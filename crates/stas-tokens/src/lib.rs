#![deny(missing_docs)]
//! STAS token protocol support.
//!
//! Provides the token schema, the STAS v2 locking script builder and
//! reader, transaction factories for the full token lifecycle
//! (contract, issue, transfer, split, merge, mergeSplit, redeem),
//! transition verification and off-chain lineage validation.

pub mod error;
pub mod factory;
pub mod lineage;
pub mod schema;
pub mod script;
pub mod script_type;
pub mod token_id;
pub mod transition;
pub mod types;
pub mod units;

pub use error::TokenError;
pub use schema::{TokenSchema, TokenVersion};
pub use script_type::ScriptType;
pub use token_id::TokenId;
pub use transition::TransitionKind;
pub use types::{Destination, Utxo};
