//! Transaction factories for the STAS token lifecycle.
//!
//! Pure functions that build complete, signed transactions: the
//! contract transaction that commits a schema, then issue, transfer,
//! split, merge, mergeSplit and redeem. Builders take UTXOs and
//! destinations plus [`Signer`] implementations; they never see private
//! key material, so hardware and remote signing setups plug in
//! unchanged.

pub mod contract;
pub mod stas;

pub use contract::{build_contract_tx, ContractConfig};
pub use stas::{
    build_issue_tx, build_merge_split_tx, build_merge_tx, build_redeem_tx, build_split_tx,
    build_transfer_tx, IssueConfig, MergeConfig, MergeSplitConfig, RedeemConfig, SplitConfig,
    TransferConfig,
};

use stas_transaction::signer::Signer;
use stas_transaction::template::p2pkh;
use stas_transaction::{Transaction, TransactionInput, TransactionOutput};

use crate::error::TokenError;
use crate::types::Utxo;

/// Default fee rate in satoshis per kilobyte.
pub const DEFAULT_FEE_RATE: u64 = 500;

/// Serialized size of a P2PKH change output.
const CHANGE_OUTPUT_SIZE: usize = 34;

/// Add an input spending `utxo`, with the source output attached so the
/// input can later be signed without fetching the previous transaction.
pub(crate) fn add_outpoint_input(tx: &mut Transaction, utxo: &Utxo) {
    let mut input = TransactionInput::new();
    input.source_txid = *utxo.txid.as_bytes();
    input.source_tx_out_index = utxo.vout;
    input.set_source_output(Some(TransactionOutput {
        satoshis: utxo.satoshis,
        locking_script: utxo.locking_script.clone(),
        change: false,
    }));
    tx.add_input(input);
}

/// Estimate the serialized transaction size.
pub(crate) fn estimate_size(num_inputs: usize, outputs: &[TransactionOutput]) -> usize {
    let mut size = 4 + 1 + 1 + 4; // version + varint(in) + varint(out) + locktime
    size += num_inputs * (32 + 4 + 1 + p2pkh::UNLOCKING_SCRIPT_SIZE_ESTIMATE as usize + 4);
    for output in outputs {
        size += 8 + 1 + output.locking_script.len();
    }
    size
}

/// Estimate the fee for the transaction as it stands, leaving room for
/// one change output.
pub(crate) fn estimate_fee(tx: &Transaction, fee_rate: u64) -> u64 {
    let est_size = estimate_size(tx.inputs.len(), &tx.outputs) + CHANGE_OUTPUT_SIZE;
    (est_size as u64 * fee_rate).div_ceil(1000)
}

/// Deduct the fee from the funding value and append a change output
/// back to the funding signer's address when anything is left over.
///
/// Token inputs are fully accounted for by token outputs, so the fee
/// comes out of the funding value alone.
pub(crate) fn add_change_output(
    tx: &mut Transaction,
    funding_satoshis: u64,
    fee_rate: u64,
    funding_signer: &dyn Signer,
) -> Result<(), TokenError> {
    let fee = estimate_fee(tx, fee_rate);

    if funding_satoshis < fee {
        return Err(TokenError::InsufficientFunds {
            needed: fee,
            available: funding_satoshis,
        });
    }

    let change = funding_satoshis - fee;
    if change > 0 {
        let change_pkh = funding_signer.public_key().hash160();
        tx.add_output(TransactionOutput {
            satoshis: change,
            locking_script: p2pkh::lock_hash(&change_pkh),
            change: true,
        });
    }

    Ok(())
}

/// Reject funding UTXOs that cannot be signed.
pub(crate) fn check_funding(funding: &Utxo) -> Result<(), TokenError> {
    if funding.locking_script.is_empty() {
        return Err(TokenError::InvalidUtxo(
            "funding utxo has an empty locking script".into(),
        ));
    }
    Ok(())
}
