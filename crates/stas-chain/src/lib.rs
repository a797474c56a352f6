#![deny(missing_docs)]

//! # stas-chain
//!
//! Chain access for the STAS SDK: capability traits over external
//! services, a WhatsOnChain-style explorer client, a test-network
//! faucet client, polling helpers for eventually consistent indexers,
//! and an in-memory ledger for integration tests.
//!
//! Transaction building lives in `stas-tokens`; this crate covers
//! everything that talks to the world outside the process.
//!
//! # Example
//!
//! ```no_run
//! use stas_chain::{ExplorerClient, ExplorerConfig, LedgerQuery};
//!
//! # async fn example() -> Result<(), stas_chain::ChainError> {
//! let client = ExplorerClient::new(ExplorerConfig {
//!     network: "main".to_string(),
//!     ..Default::default()
//! });
//!
//! let tx = client.fetch_transaction("abcdef1234567890").await?;
//! println!("outputs: {}", tx.vout.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod explorer;
pub mod faucet;
pub mod memory;
pub mod poll;
pub mod traits;
pub mod types;


pub use error::ChainError;
pub use explorer::ExplorerClient;
pub use faucet::FaucetClient;
pub use memory::{MemoryLedger, DEFAULT_FAUCET_SATOSHIS};
pub use poll::{is_token_balance, PollConfig};
pub use traits::{BalanceQuery, FundingSource, LedgerQuery, TokenIndex};
pub use types::{
    AddressTokens, ChainTx, ChainTxIn, ChainTxOut, ExplorerConfig, FaucetConfig, ScriptPubKey,
    ScriptSig, TokenBalanceEntry, TokenDetail, UnspentOutput,
};
