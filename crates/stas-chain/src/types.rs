//! Client configuration and wire models for explorer responses.
//!
//! Explorer APIs report output values in fractional BTC; everything
//! internal works in integer satoshis, so the conversion happens here
//! at the response boundary and nowhere else.

use serde::{Deserialize, Serialize};

use stas_primitives::chainhash::Hash;
use stas_script::Script;
use stas_tokens::units::bitcoin_to_satoshis;
use stas_tokens::Utxo;

use crate::error::ChainError;

/// Configuration for [`ExplorerClient`](crate::ExplorerClient).
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Base URL of the explorer API, without a trailing slash.
    pub base_url: String,
    /// Network segment of the URL path, `"main"` or `"test"`.
    pub network: String,
    /// Optional API key sent with every request.
    pub api_key: Option<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            base_url: "https://api.whatsonchain.com/v1/bsv".to_string(),
            network: "test".to_string(),
            api_key: None,
        }
    }
}

/// Configuration for [`FaucetClient`](crate::FaucetClient).
#[derive(Debug, Clone)]
pub struct FaucetConfig {
    /// Base URL of the faucet service, without a trailing slash.
    pub base_url: String,
    /// Basic-auth username, if the faucet requires one.
    pub username: Option<String>,
    /// Basic-auth password, if the faucet requires one.
    pub password: Option<String>,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        FaucetConfig {
            base_url: "https://taalnet.wallet.taal.com".to_string(),
            username: None,
            password: None,
        }
    }
}

/// A transaction as reported by the explorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainTx {
    /// Transaction id, display-order hex.
    pub txid: String,
    /// Transaction hash; equals `txid` for non-segwit chains.
    #[serde(default)]
    pub hash: Option<String>,
    /// Transaction format version.
    #[serde(default)]
    pub version: Option<u32>,
    /// Serialized size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Lock time.
    #[serde(default)]
    pub locktime: Option<u32>,
    /// Inputs.
    #[serde(default)]
    pub vin: Vec<ChainTxIn>,
    /// Outputs.
    #[serde(default)]
    pub vout: Vec<ChainTxOut>,
    /// Hash of the containing block, absent while unconfirmed.
    #[serde(default)]
    pub blockhash: Option<String>,
    /// Confirmation count.
    #[serde(default)]
    pub confirmations: Option<u64>,
    /// Transaction time as a Unix timestamp.
    #[serde(default)]
    pub time: Option<u64>,
    /// Block time as a Unix timestamp.
    #[serde(default)]
    pub blocktime: Option<u64>,
}

impl ChainTx {
    /// Turn the output at `vout` into a spendable [`Utxo`] reference.
    ///
    /// # Errors
    /// [`ChainError::InvalidResponse`] when the index is out of range or
    /// the reported txid or script hex cannot be decoded.
    pub fn output_as_utxo(&self, vout: u32) -> Result<Utxo, ChainError> {
        let output = self.vout.get(vout as usize).ok_or_else(|| {
            ChainError::InvalidResponse(format!(
                "vout {} out of range in tx {}",
                vout, self.txid
            ))
        })?;
        let txid = Hash::from_hex(&self.txid)
            .map_err(|e| ChainError::InvalidResponse(format!("bad txid {}: {}", self.txid, e)))?;
        let locking_script = Script::from_hex(&output.script_pub_key.hex).map_err(|e| {
            ChainError::InvalidResponse(format!("bad script hex at vout {vout}: {e}"))
        })?;
        Ok(Utxo {
            txid,
            vout,
            locking_script,
            satoshis: output.satoshis(),
        })
    }
}

/// An input of an explorer-reported transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainTxIn {
    /// Txid of the output being spent, display-order hex.
    #[serde(default)]
    pub txid: String,
    /// Index of the output being spent.
    #[serde(default)]
    pub vout: u32,
    /// Unlocking script.
    #[serde(default, rename = "scriptSig")]
    pub script_sig: Option<ScriptSig>,
    /// Sequence number.
    #[serde(default)]
    pub sequence: Option<u32>,
    /// Coinbase data, present only on coinbase inputs.
    #[serde(default)]
    pub coinbase: Option<String>,
}

/// An unlocking script in asm and hex form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptSig {
    /// Disassembled script.
    #[serde(default)]
    pub asm: String,
    /// Hex-encoded script bytes.
    #[serde(default)]
    pub hex: String,
}

/// An output of an explorer-reported transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainTxOut {
    /// Output value in fractional BTC, as explorers report it.
    pub value: f64,
    /// Output index.
    pub n: u32,
    /// The locking script.
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,
}

impl ChainTxOut {
    /// The output value in integer satoshis.
    pub fn satoshis(&self) -> u64 {
        bitcoin_to_satoshis(self.value)
    }
}

/// A locking script as reported by the explorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptPubKey {
    /// Disassembled script.
    #[serde(default)]
    pub asm: String,
    /// Hex-encoded script bytes.
    pub hex: String,
    /// Script classification reported by the server.
    #[serde(default, rename = "type")]
    pub script_type: Option<String>,
    /// Addresses the script pays to, when the server can tell.
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// One entry of an address unspent-output listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnspentOutput {
    /// Block height of the funding transaction, 0 while unconfirmed.
    #[serde(default)]
    pub height: i64,
    /// Output index within the funding transaction.
    pub tx_pos: u32,
    /// Txid of the funding transaction, display-order hex.
    pub tx_hash: String,
    /// Output value in satoshis.
    pub value: u64,
}

/// Token metadata returned by the explorer's token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDetail {
    /// The token symbol.
    pub symbol: String,
    /// Human-readable token name.
    #[serde(default)]
    pub name: Option<String>,
    /// Total supply recorded at issue time.
    #[serde(default)]
    pub total_supply: Option<u64>,
    /// Whether token value may be split across outputs.
    #[serde(default)]
    pub splittable: Option<bool>,
    /// Txid of the contract transaction, when indexed.
    #[serde(default)]
    pub contract_txid: Option<String>,
    /// Txid of the issuance transaction, when indexed.
    #[serde(default)]
    pub issuance_txid: Option<String>,
}

/// Token holdings of one address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressTokens {
    /// The queried address.
    #[serde(default)]
    pub address: String,
    /// One entry per held token class.
    #[serde(default)]
    pub tokens: Vec<TokenBalanceEntry>,
}

/// One token class held by an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalanceEntry {
    /// The token symbol.
    #[serde(default)]
    pub symbol: String,
    /// The token id, when the server reports it.
    #[serde(default)]
    pub token_id: Option<String>,
    /// Held satoshi amount of this token class.
    #[serde(default, alias = "tokenBalance")]
    pub balance: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_tx_parses_explorer_shape() {
        let json = r#"{
            "txid": "294cd1ebd5de1d8d3a37155bf3221412ddcb2b62a5ad30e4cb0d50de64dfd1bb",
            "hash": "294cd1ebd5de1d8d3a37155bf3221412ddcb2b62a5ad30e4cb0d50de64dfd1bb",
            "version": 1,
            "size": 225,
            "locktime": 0,
            "vin": [{
                "txid": "4c8ef9c84cbd3bb2f10d9a3b694ecb21ad3ccc577e26849fb2916e7173674c4e",
                "vout": 1,
                "scriptSig": {"asm": "", "hex": "47304402"},
                "sequence": 4294967295
            }],
            "vout": [{
                "value": 0.0001,
                "n": 0,
                "scriptPubKey": {
                    "asm": "OP_DUP OP_HASH160 aa OP_EQUALVERIFY OP_CHECKSIG",
                    "hex": "76a914aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa88ac",
                    "type": "pubkeyhash",
                    "addresses": ["mvWvsZjdtfv7c6mmyFNoS4JiQGXRdSzXLK"]
                }
            }],
            "confirmations": 3
        }"#;

        let tx: ChainTx = serde_json::from_str(json).unwrap();
        assert_eq!(tx.vin.len(), 1);
        assert_eq!(tx.vin[0].vout, 1);
        assert_eq!(tx.vout[0].satoshis(), 10_000);
        assert_eq!(tx.confirmations, Some(3));
    }

    #[test]
    fn chain_tx_tolerates_minimal_shape() {
        let tx: ChainTx = serde_json::from_str(r#"{"txid": "aa"}"#).unwrap();
        assert!(tx.vin.is_empty());
        assert!(tx.vout.is_empty());
        assert!(tx.blockhash.is_none());
    }

    #[test]
    fn output_as_utxo_converts_value_and_script() {
        let tx: ChainTx = serde_json::from_str(
            r#"{
                "txid": "294cd1ebd5de1d8d3a37155bf3221412ddcb2b62a5ad30e4cb0d50de64dfd1bb",
                "vout": [{
                    "value": 0.01,
                    "n": 0,
                    "scriptPubKey": {"hex": "76a914aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa88ac"}
                }]
            }"#,
        )
        .unwrap();

        let utxo = tx.output_as_utxo(0).unwrap();
        assert_eq!(utxo.satoshis, 1_000_000);
        assert_eq!(utxo.vout, 0);
        assert_eq!(utxo.txid.to_string(), tx.txid);
        assert!(utxo.locking_script.is_p2pkh());
    }

    #[test]
    fn output_as_utxo_rejects_out_of_range() {
        let tx: ChainTx = serde_json::from_str(r#"{"txid": "aa"}"#).unwrap();
        assert!(matches!(
            tx.output_as_utxo(0),
            Err(ChainError::InvalidResponse(_))
        ));
    }

    #[test]
    fn token_balance_entry_accepts_both_field_names() {
        let snake: TokenBalanceEntry =
            serde_json::from_str(r#"{"symbol": "TEST", "balance": 7000}"#).unwrap();
        assert_eq!(snake.balance, 7_000);

        let camel: TokenBalanceEntry =
            serde_json::from_str(r#"{"symbol": "TEST", "tokenBalance": 3000}"#).unwrap();
        assert_eq!(camel.balance, 3_000);
    }

    #[test]
    fn default_configs_point_at_public_services() {
        let explorer = ExplorerConfig::default();
        assert!(explorer.base_url.starts_with("https://"));
        assert_eq!(explorer.network, "test");
        assert!(explorer.api_key.is_none());

        let faucet = FaucetConfig::default();
        assert!(faucet.base_url.starts_with("https://"));
        assert!(faucet.username.is_none());
    }
}
