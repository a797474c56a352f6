//! Off-chain lineage validation for STAS tokens.
//!
//! [`LineageValidator`] walks the ancestor graph of a token output back
//! to its contract transaction, re-verifying every hop as a token
//! transition along the way. Merges give a hop two token parents, so
//! the walk follows every token input rather than a single spine.
//!
//! Fetching is abstracted behind [`TxFetcher`] so the validator runs
//! against a node RPC, an indexer API or an in-memory store alike.

use std::collections::HashSet;

use stas_primitives::hash::sha256d;
use stas_transaction::{Transaction, TransactionOutput};

use crate::error::TokenError;
use crate::script::reader::{read_locking_script, ParsedScript};
use crate::transition::{verify_transition, TransitionKind};

/// Source of raw transactions, keyed by txid.
///
/// Implementors provide access to a transaction store, whether a local
/// cache, a node RPC or an indexer API.
pub trait TxFetcher {
    /// Fetch the raw serialized bytes of the transaction with the given
    /// txid.
    ///
    /// The `txid` is in internal byte order (the double-SHA256 of the
    /// raw transaction, not reversed).
    ///
    /// # Errors
    /// Returns [`TokenError`] when the transaction cannot be found or
    /// fetched.
    fn fetch_raw_tx(&self, txid: &[u8; 32]) -> Result<Vec<u8>, TokenError>;
}

/// Maximum number of lineage hops before the walk is abandoned.
const MAX_CHAIN_DEPTH: usize = 10_000;

/// Walks a token output's ancestor graph back to the contract
/// transaction, verifying every hop.
///
/// Validated txids are cached, so checking several outputs of the same
/// issuance only walks the shared ancestry once.
pub struct LineageValidator {
    /// Txids already verified as legitimate hops.
    validated: HashSet<[u8; 32]>,
    /// The contract txid every issue in this lineage must spend. The
    /// walk's trust anchor.
    contract_txid: [u8; 32],
    /// The redemption hash every token script in the lineage must
    /// carry.
    redemption_pkh: [u8; 20],
}

impl LineageValidator {
    /// Create a validator anchored on `contract_txid` (internal byte
    /// order) for tokens carrying `redemption_pkh`.
    pub fn new(contract_txid: [u8; 32], redemption_pkh: [u8; 20]) -> Self {
        let mut validated = HashSet::new();
        // the contract itself is the trust anchor
        validated.insert(contract_txid);

        Self {
            validated,
            contract_txid,
            redemption_pkh,
        }
    }

    /// Validate the lineage of the token output `utxo_txid:vout`.
    ///
    /// Each hop is fetched, integrity-checked against its txid, and
    /// re-verified as a token transition with every consumed output
    /// resolved from its parent transaction. Issue hops must spend the
    /// anchor contract transaction; every other hop pushes its token
    /// parents onto the walk. Already-validated txids short-circuit.
    ///
    /// # Errors
    /// Returns [`TokenError`] when a hop cannot be fetched, fails the
    /// integrity check, breaks a transition rule, carries the wrong
    /// redemption hash, or the walk exceeds the depth bound.
    pub fn validate(
        &mut self,
        utxo_txid: &[u8; 32],
        vout: u32,
        tx_fetcher: &dyn TxFetcher,
    ) -> Result<(), TokenError> {
        let mut worklist: Vec<([u8; 32], u32)> = vec![(*utxo_txid, vout)];
        let mut hops = 0usize;

        while let Some((txid, vout)) = worklist.pop() {
            if self.validated.contains(&txid) {
                continue;
            }

            hops += 1;
            if hops > MAX_CHAIN_DEPTH {
                return Err(TokenError::InvalidScript(format!(
                    "lineage chain exceeds maximum depth ({MAX_CHAIN_DEPTH})"
                )));
            }

            let tx = fetch_tx(tx_fetcher, &txid)?;

            let output = tx.outputs.get(vout as usize).ok_or_else(|| {
                TokenError::InvalidScript(format!(
                    "vout {} out of range in tx {}",
                    vout,
                    hex::encode(txid)
                ))
            })?;

            let fields = match read_locking_script(output.locking_script.to_bytes()) {
                ParsedScript::StasV2(fields) => fields,
                other => {
                    return Err(TokenError::InvalidScript(format!(
                        "unexpected script type {} at vout {} in tx {}",
                        other.script_type(),
                        vout,
                        hex::encode(txid)
                    )))
                }
            };
            if fields.redemption_hash != self.redemption_pkh {
                return Err(TokenError::InvalidScript(format!(
                    "redemption hash mismatch in tx {}: expected {}, got {}",
                    hex::encode(txid),
                    hex::encode(self.redemption_pkh),
                    hex::encode(fields.redemption_hash)
                )));
            }

            // resolve every consumed output from its parent
            let mut consumed = Vec::with_capacity(tx.inputs.len());
            for input in &tx.inputs {
                let parent = fetch_tx(tx_fetcher, &input.source_txid)?;
                let parent_out = parent
                    .outputs
                    .get(input.source_tx_out_index as usize)
                    .ok_or_else(|| {
                        TokenError::InvalidScript(format!(
                            "vout {} out of range in tx {}",
                            input.source_tx_out_index,
                            hex::encode(input.source_txid)
                        ))
                    })?;
                consumed.push(parent_out.clone());
            }

            let kind = verify_transition(&tx, &consumed)?;

            if kind == TransitionKind::Issue {
                let anchored = tx
                    .inputs
                    .iter()
                    .any(|input| input.source_txid == self.contract_txid);
                if !anchored {
                    return Err(TokenError::InvalidScript(format!(
                        "issue transaction {} does not spend the expected contract transaction {}",
                        hex::encode(txid),
                        hex::encode(self.contract_txid)
                    )));
                }
            } else {
                for (input, parent_out) in tx.inputs.iter().zip(&consumed) {
                    if matches!(
                        read_locking_script(parent_out.locking_script.to_bytes()),
                        ParsedScript::StasV2(_)
                    ) {
                        worklist.push((input.source_txid, input.source_tx_out_index));
                    }
                }
            }

            self.validated.insert(txid);
        }

        Ok(())
    }

    /// Whether `txid` has already been validated.
    pub fn is_validated(&self, txid: &[u8; 32]) -> bool {
        self.validated.contains(txid)
    }

    /// Number of txids validated so far.
    pub fn validated_count(&self) -> usize {
        self.validated.len()
    }
}

/// Fetch and parse a transaction, checking the bytes hash to the
/// requested txid.
fn fetch_tx(fetcher: &dyn TxFetcher, txid: &[u8; 32]) -> Result<Transaction, TokenError> {
    let raw = fetcher.fetch_raw_tx(txid)?;
    let computed = sha256d(&raw);
    if computed != *txid {
        return Err(TokenError::InvalidScript(format!(
            "fetched TX hash mismatch: expected {}, got {}",
            hex::encode(txid),
            hex::encode(computed)
        )));
    }
    Ok(Transaction::from_bytes(&raw)?)
}
