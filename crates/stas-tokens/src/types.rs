//! Common types for token operations.

use stas_primitives::chainhash::Hash;
use stas_script::{Address, Script};

/// A reference to an unspent transaction output.
///
/// Carries no spending key; spend authority arrives separately as a
/// [`Signer`](stas_transaction::Signer) when a transaction is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utxo {
    /// Transaction hash of the output, internal byte order.
    pub txid: Hash,
    /// Output index within the transaction.
    pub vout: u32,
    /// The locking script of the output.
    pub locking_script: Script,
    /// Satoshi value of the output.
    pub satoshis: u64,
}

impl Utxo {
    /// Create a UTXO reference.
    pub fn new(txid: Hash, vout: u32, locking_script: Script, satoshis: u64) -> Self {
        Self {
            txid,
            vout,
            locking_script,
            satoshis,
        }
    }
}

/// A destination for token value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// The recipient address.
    pub address: Address,
    /// Satoshi amount to send.
    pub satoshis: u64,
    /// Free-form payload appended to the recipient's locking script.
    /// Only honored at issue time.
    pub data: Option<Vec<u8>>,
}

impl Destination {
    /// Create a destination with no data payload.
    pub fn new(address: Address, satoshis: u64) -> Self {
        Self {
            address,
            satoshis,
            data: None,
        }
    }

    /// Create an issue destination carrying a data payload.
    pub fn with_data(address: Address, satoshis: u64, data: Vec<u8>) -> Self {
        Self {
            address,
            satoshis,
            data: Some(data),
        }
    }
}
