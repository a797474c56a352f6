//! Signature hash computation.
//!
//! Computes the digest an ECDSA signature commits to when authorizing a
//! transaction input. BSV uses the BIP-143 digest algorithm with the
//! FORKID flag for replay protection, which commits to the satoshi
//! value being spent.

use stas_primitives::hash::sha256d;
use stas_primitives::util::{VarInt, WireWriter};

use crate::transaction::Transaction;
use crate::TransactionError;

// -----------------------------------------------------------------------
// Sighash flag constants
// -----------------------------------------------------------------------

/// Sign all inputs and all outputs (the default).
pub const SIGHASH_ALL: u32 = 0x01;

/// Sign all inputs but no outputs, leaving outputs free to change.
pub const SIGHASH_NONE: u32 = 0x02;

/// Sign all inputs and only the output at the signed input's index.
pub const SIGHASH_SINGLE: u32 = 0x03;

/// Combined with a base flag: commit only to the signed input, allowing
/// other inputs to be added later.
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;

/// Replay-protection flag required on all post-fork BSV signatures.
pub const SIGHASH_FORKID: u32 = 0x40;

/// The standard BSV sighash type: ALL | FORKID.
pub const SIGHASH_ALL_FORKID: u32 = SIGHASH_ALL | SIGHASH_FORKID;

/// Mask extracting the base sighash type (ALL, NONE, SINGLE).
pub const SIGHASH_MASK: u32 = 0x1f;

// -----------------------------------------------------------------------
// BIP-143 (FORKID) signature hash
// -----------------------------------------------------------------------

/// Compute the BIP-143 signature hash for one input.
///
/// `prev_output_script` is the scriptCode, the locking script of the
/// output being spent, and `satoshis` its value. Returns the
/// double-SHA256 of the preimage, ready for ECDSA.
pub fn signature_hash(
    tx: &Transaction,
    input_index: usize,
    prev_output_script: &[u8],
    sighash_type: u32,
    satoshis: u64,
) -> Result<[u8; 32], TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        )));
    }

    let preimage = calc_preimage(tx, input_index, prev_output_script, sighash_type, satoshis)?;
    Ok(sha256d(&preimage))
}

/// Compute the BIP-143 preimage bytes before double-hashing.
///
/// Layout:
/// 1. nVersion (4 bytes LE)
/// 2. hashPrevouts (32 bytes), zero under ANYONECANPAY
/// 3. hashSequence (32 bytes), zero under ANYONECANPAY/SINGLE/NONE
/// 4. outpoint (32 + 4 bytes) of the input being signed
/// 5. scriptCode (VarInt length + script bytes)
/// 6. value (8 bytes LE) of the output being spent
/// 7. nSequence (4 bytes LE) of the input being signed
/// 8. hashOutputs (32 bytes), all outputs, one output, or zero
/// 9. nLocktime (4 bytes LE)
/// 10. sighashType (4 bytes LE)
pub fn calc_preimage(
    tx: &Transaction,
    input_index: usize,
    prev_output_script: &[u8],
    sighash_type: u32,
    satoshis: u64,
) -> Result<Vec<u8>, TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        )));
    }

    let input = &tx.inputs[input_index];
    let base_type = sighash_type & SIGHASH_MASK;

    let hash_prevouts = if sighash_type & SIGHASH_ANYONECANPAY == 0 {
        source_out_hash(tx)
    } else {
        [0u8; 32]
    };

    let hash_sequence = if sighash_type & SIGHASH_ANYONECANPAY == 0
        && base_type != SIGHASH_SINGLE
        && base_type != SIGHASH_NONE
    {
        sequence_hash(tx)
    } else {
        [0u8; 32]
    };

    let hash_outputs = if base_type != SIGHASH_SINGLE && base_type != SIGHASH_NONE {
        outputs_hash(tx, -1)
    } else if base_type == SIGHASH_SINGLE && input_index < tx.outputs.len() {
        outputs_hash(tx, input_index as i32)
    } else {
        [0u8; 32]
    };

    let mut writer = WireWriter::with_capacity(256);

    writer.write_u32_le(tx.version);
    writer.write_bytes(&hash_prevouts);
    writer.write_bytes(&hash_sequence);

    // Outpoint of the input being signed.
    writer.write_bytes(&input.source_txid);
    writer.write_u32_le(input.source_tx_out_index);

    writer.write_varint(VarInt::from(prev_output_script.len()));
    writer.write_bytes(prev_output_script);

    writer.write_u64_le(satoshis);
    writer.write_u32_le(input.sequence_number);
    writer.write_bytes(&hash_outputs);
    writer.write_u32_le(tx.lock_time);
    writer.write_u32_le(sighash_type);

    Ok(writer.into_bytes())
}

// -----------------------------------------------------------------------
// Component hashes
// -----------------------------------------------------------------------

/// Double-SHA256 of all input outpoints (txid + vout) concatenated.
fn source_out_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = WireWriter::with_capacity(tx.inputs.len() * 36);
    for input in &tx.inputs {
        writer.write_bytes(&input.source_txid);
        writer.write_u32_le(input.source_tx_out_index);
    }
    sha256d(writer.as_bytes())
}

/// Double-SHA256 of all input sequence numbers concatenated.
fn sequence_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = WireWriter::with_capacity(tx.inputs.len() * 4);
    for input in &tx.inputs {
        writer.write_u32_le(input.sequence_number);
    }
    sha256d(writer.as_bytes())
}

/// Double-SHA256 of serialized outputs: all of them for `n == -1`,
/// otherwise only the output at index `n` (SIGHASH_SINGLE).
fn outputs_hash(tx: &Transaction, n: i32) -> [u8; 32] {
    let mut writer = WireWriter::new();
    if n == -1 {
        for output in &tx.outputs {
            writer.write_bytes(&output.bytes_for_sig_hash());
        }
    } else {
        writer.write_bytes(&tx.outputs[n as usize].bytes_for_sig_hash());
    }
    sha256d(writer.as_bytes())
}
