//! In-memory ledger for integration testing.
//!
//! [`MemoryLedger`] implements every chain trait against a process-local
//! transaction store. It accepts only transactions it would expect a
//! node to accept: inputs must reference known unspent outputs, carry
//! unlocking scripts and not inflate value, and any transaction that
//! touches token scripts must form a valid token transition. Signatures
//! are not executed; unlocking scripts are checked for presence only.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use stas_primitives::chainhash::Hash;
use stas_script::Address;
use stas_tokens::error::TokenError;
use stas_tokens::lineage::TxFetcher;
use stas_tokens::script::reader::{parse_stas, read_locking_script, ParsedScript};
use stas_tokens::transition::verify_transition;
use stas_tokens::units::satoshis_to_bitcoin;
use stas_tokens::Utxo;
use stas_transaction::template::p2pkh;
use stas_transaction::{Transaction, TransactionOutput};

use crate::error::ChainError;
use crate::traits::{BalanceQuery, FundingSource, LedgerQuery, TokenIndex};
use crate::types::{ChainTx, ChainTxIn, ChainTxOut, ScriptPubKey, ScriptSig, TokenDetail};

/// Satoshis minted per [`FundingSource::request_funds`] call.
pub const DEFAULT_FAUCET_SATOSHIS: u64 = 1_000_000;

/// An in-memory ledger implementing all chain traits.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: Mutex<LedgerState>,
}

#[derive(Debug, Default)]
struct LedgerState {
    /// Accepted transactions by internal-order txid.
    txs: HashMap<[u8; 32], StoredTx>,
    /// Outpoints consumed by accepted transactions.
    spent: HashSet<([u8; 32], u32)>,
    /// Distinguishes otherwise identical mint transactions.
    mint_seq: u32,
}

#[derive(Debug)]
struct StoredTx {
    raw: Vec<u8>,
    tx: Transaction,
}

fn rejected(message: impl Into<String>) -> ChainError {
    ChainError::Rejected {
        status: 400,
        message: message.into(),
    }
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Mint coins out of thin air: creates and stores a transaction with
    /// one P2PKH output per amount, all paying `pkh`, and returns the
    /// resulting UTXO references.
    pub fn mint(&self, pkh: &[u8; 20], amounts: &[u64]) -> Vec<Utxo> {
        let mut state = self.state();
        state.mint_seq += 1;

        let mut tx = Transaction::new();
        // distinct lock times keep repeated identical mints from colliding
        tx.lock_time = state.mint_seq;
        for &satoshis in amounts {
            tx.add_output(TransactionOutput {
                satoshis,
                locking_script: p2pkh::lock_hash(pkh),
                change: false,
            });
        }

        let txid = tx.tx_id();
        let utxos = amounts
            .iter()
            .enumerate()
            .map(|(vout, &satoshis)| Utxo {
                txid: Hash::new(txid),
                vout: vout as u32,
                locking_script: p2pkh::lock_hash(pkh),
                satoshis,
            })
            .collect();

        state.txs.insert(
            txid,
            StoredTx {
                raw: tx.to_bytes(),
                tx,
            },
        );
        utxos
    }

    /// Validate and accept a transaction, returning its display-order
    /// txid.
    ///
    /// # Errors
    /// [`ChainError::Rejected`] with a node-flavored reason when an
    /// input is unknown, already spent or unsigned, when outputs exceed
    /// inputs, or when the transaction breaks a token transition rule.
    pub fn submit(&self, tx: &Transaction) -> Result<String, ChainError> {
        let mut state = self.state();

        if tx.inputs.is_empty() {
            return Err(rejected("missing inputs"));
        }

        let mut consumed = Vec::with_capacity(tx.inputs.len());
        let mut in_tx_spent = HashSet::new();
        for (i, input) in tx.inputs.iter().enumerate() {
            let outpoint = (input.source_txid, input.source_tx_out_index);
            let source = state
                .txs
                .get(&input.source_txid)
                .and_then(|stored| stored.tx.outputs.get(input.source_tx_out_index as usize))
                .ok_or_else(|| {
                    rejected(format!("missing inputs: input {i} references an unknown output"))
                })?;
            if state.spent.contains(&outpoint) || !in_tx_spent.insert(outpoint) {
                return Err(rejected(format!(
                    "txn-mempool-conflict: input {} spends {}:{} again",
                    i,
                    Hash::new(input.source_txid),
                    input.source_tx_out_index
                )));
            }
            if input.unlocking_script.is_none() {
                return Err(rejected(format!(
                    "mandatory-script-verify-flag-failed: input {i} has no unlocking script"
                )));
            }
            consumed.push(source.clone());
        }

        let total_in: u64 = consumed.iter().map(|out| out.satoshis).sum();
        let total_out = tx.total_output_satoshis();
        if total_out > total_in {
            return Err(rejected(format!(
                "bad-txns-in-belowout: output value {total_out} exceeds input value {total_in}"
            )));
        }

        let touches_tokens = consumed
            .iter()
            .chain(tx.outputs.iter())
            .any(|out| matches!(
                read_locking_script(out.locking_script.to_bytes()),
                ParsedScript::StasV2(_)
            ));
        if touches_tokens {
            verify_transition(tx, &consumed).map_err(|e| rejected(e.to_string()))?;
        }

        for input in &tx.inputs {
            state
                .spent
                .insert((input.source_txid, input.source_tx_out_index));
        }

        let txid = tx.tx_id();
        let display = tx.tx_id_hex();
        state.txs.insert(
            txid,
            StoredTx {
                raw: tx.to_bytes(),
                tx: tx.clone(),
            },
        );
        Ok(display)
    }

    /// Whether the outpoint `txid:vout` (display-order txid) has been
    /// consumed by an accepted transaction.
    pub fn is_spent(&self, txid: &str, vout: u32) -> Result<bool, ChainError> {
        let internal = parse_txid(txid)?;
        Ok(self.state().spent.contains(&(internal, vout)))
    }
}

fn parse_txid(txid: &str) -> Result<[u8; 32], ChainError> {
    Hash::from_hex(txid)
        .map(|h| h.to_bytes())
        .map_err(|e| ChainError::InvalidResponse(format!("bad txid {txid}: {e}")))
}

fn chain_tx_from(stored: &StoredTx) -> ChainTx {
    let tx = &stored.tx;
    ChainTx {
        txid: tx.tx_id_hex(),
        hash: Some(tx.tx_id_hex()),
        version: Some(tx.version),
        size: Some(stored.raw.len() as u64),
        locktime: Some(tx.lock_time),
        vin: tx
            .inputs
            .iter()
            .map(|input| ChainTxIn {
                txid: Hash::new(input.source_txid).to_string(),
                vout: input.source_tx_out_index,
                script_sig: input.unlocking_script.as_ref().map(|script| ScriptSig {
                    asm: script.to_asm(),
                    hex: script.to_hex(),
                }),
                sequence: Some(input.sequence_number),
                coinbase: None,
            })
            .collect(),
        vout: tx
            .outputs
            .iter()
            .enumerate()
            .map(|(n, out)| ChainTxOut {
                value: satoshis_to_bitcoin(out.satoshis),
                n: n as u32,
                script_pub_key: ScriptPubKey {
                    asm: out.locking_script.to_asm(),
                    hex: out.locking_script.to_hex(),
                    script_type: Some(
                        read_locking_script(out.locking_script.to_bytes())
                            .script_type()
                            .to_string(),
                    ),
                    addresses: Vec::new(),
                },
            })
            .collect(),
        blockhash: None,
        confirmations: Some(1),
        time: None,
        blocktime: None,
    }
}

#[async_trait]
impl FundingSource for MemoryLedger {
    async fn request_funds(&self, address: &Address) -> Result<Vec<Utxo>, ChainError> {
        Ok(self.mint(&address.public_key_hash, &[DEFAULT_FAUCET_SATOSHIS]))
    }
}

#[async_trait]
impl LedgerQuery for MemoryLedger {
    async fn fetch_transaction(&self, txid: &str) -> Result<ChainTx, ChainError> {
        let internal = parse_txid(txid)?;
        let state = self.state();
        let stored = state.txs.get(&internal).ok_or(ChainError::NotFound)?;
        Ok(chain_tx_from(stored))
    }

    async fn broadcast(&self, raw_tx_hex: &str) -> Result<String, ChainError> {
        let tx = Transaction::from_hex(raw_tx_hex)
            .map_err(|e| rejected(format!("bad-txns-decode-failed: {e}")))?;
        self.submit(&tx)
    }
}

#[async_trait]
impl TokenIndex for MemoryLedger {
    async fn token_id_for(&self, txid: &str) -> Result<Option<String>, ChainError> {
        let internal = parse_txid(txid)?;
        let state = self.state();
        let stored = state.txs.get(&internal).ok_or(ChainError::NotFound)?;
        Ok(stored.tx.outputs.iter().find_map(|out| {
            parse_stas(out.locking_script.to_bytes()).map(|fields| fields.token_id().to_string())
        }))
    }

    async fn token_detail(
        &self,
        token_id: &str,
        symbol: &str,
    ) -> Result<TokenDetail, ChainError> {
        let state = self.state();
        for stored in state.txs.values() {
            for out in &stored.tx.outputs {
                let Some(fields) = parse_stas(out.locking_script.to_bytes()) else {
                    continue;
                };
                if fields.token_id().as_str() == token_id && fields.symbol == symbol {
                    return Ok(TokenDetail {
                        symbol: fields.symbol,
                        name: None,
                        total_supply: Some(fields.supply),
                        splittable: Some(fields.splittable),
                        contract_txid: None,
                        issuance_txid: Some(stored.tx.tx_id_hex()),
                    });
                }
            }
        }
        Err(ChainError::NotFound)
    }
}

#[async_trait]
impl BalanceQuery for MemoryLedger {
    async fn token_balance(&self, address: &Address) -> Result<u64, ChainError> {
        let state = self.state();
        let mut total = 0u64;
        for (txid, stored) in &state.txs {
            for (vout, out) in stored.tx.outputs.iter().enumerate() {
                if state.spent.contains(&(*txid, vout as u32)) {
                    continue;
                }
                if let Some(fields) = parse_stas(out.locking_script.to_bytes()) {
                    if fields.owner_hash == address.public_key_hash {
                        total += out.satoshis;
                    }
                }
            }
        }
        Ok(total)
    }
}

impl TxFetcher for MemoryLedger {
    fn fetch_raw_tx(&self, txid: &[u8; 32]) -> Result<Vec<u8>, TokenError> {
        let state = self.state();
        state
            .txs
            .get(txid)
            .map(|stored| stored.raw.clone())
            .ok_or_else(|| {
                TokenError::InvalidScript(format!("tx not found: {}", hex::encode(txid)))
            })
    }
}
