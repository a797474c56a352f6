//! Capability traits over external chain services.
//!
//! Token flows need four things from the outside world: coins to pay
//! fees, a way to read and submit transactions, a token index and a
//! balance view. Each is its own trait so applications implement only
//! what they use, and tests swap in [`MemoryLedger`](crate::MemoryLedger)
//! for all of them.

use async_trait::async_trait;

use stas_script::Address;
use stas_tokens::Utxo;

use crate::error::ChainError;
use crate::types::{ChainTx, TokenDetail};

/// Provides spendable coins for fees and contract funding.
#[async_trait]
pub trait FundingSource: Send + Sync {
    /// Obtain fresh UTXOs spendable by `address`.
    ///
    /// # Errors
    /// [`ChainError::InsufficientFunds`] when the source cannot cover
    /// the request.
    async fn request_funds(&self, address: &Address) -> Result<Vec<Utxo>, ChainError>;
}

/// Reads transactions from the ledger and submits new ones.
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    /// Fetch a transaction by display-order txid.
    ///
    /// # Errors
    /// [`ChainError::NotFound`] for an unknown txid.
    async fn fetch_transaction(&self, txid: &str) -> Result<ChainTx, ChainError>;

    /// Submit a raw transaction, returning its display-order txid.
    ///
    /// # Errors
    /// [`ChainError::Rejected`] when the ledger refuses the
    /// transaction; the status and message are passed through opaquely.
    async fn broadcast(&self, raw_tx_hex: &str) -> Result<String, ChainError>;
}

/// Resolves token identity from transactions and looks up metadata.
#[async_trait]
pub trait TokenIndex: Send + Sync {
    /// The token id carried by the first token output of `txid`, or
    /// `None` when the transaction carries no token outputs.
    ///
    /// # Errors
    /// [`ChainError::NotFound`] when the transaction itself is unknown.
    async fn token_id_for(&self, txid: &str) -> Result<Option<String>, ChainError>;

    /// Metadata for the token class identified by `token_id` and
    /// `symbol`.
    ///
    /// # Errors
    /// [`ChainError::NotFound`] when no such token is indexed.
    async fn token_detail(&self, token_id: &str, symbol: &str)
        -> Result<TokenDetail, ChainError>;
}

/// Reports token holdings per address.
#[async_trait]
pub trait BalanceQuery: Send + Sync {
    /// Total token satoshis currently held by `address`, summed across
    /// token classes. An address the ledger has never seen holds zero.
    async fn token_balance(&self, address: &Address) -> Result<u64, ChainError>;
}
