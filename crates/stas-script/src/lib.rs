//! Bitcoin script handling for the STAS SDK.
//!
//! Provides the [`Script`] type with construction, push-data encoding,
//! chunk-level parsing and ASM rendering, the opcode table, and P2PKH
//! [`Address`] encoding for mainnet and testnet.

pub mod address;
pub mod chunk;
pub mod opcodes;
pub mod script;

mod error;
pub use address::{Address, Network};
pub use chunk::ScriptChunk;
pub use error::ScriptError;
pub use script::Script;
