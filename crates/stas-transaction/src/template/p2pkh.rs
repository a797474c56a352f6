//! Pay-to-Public-Key-Hash (P2PKH) script template.
//!
//! Builds the standard locking script `OP_DUP OP_HASH160 <hash>
//! OP_EQUALVERIFY OP_CHECKSIG`. Unlocking scripts are assembled by
//! `signer::sign_input`, the same `push(sig) push(pubkey)` shape token
//! scripts use.

use stas_script::opcodes::*;
use stas_script::{Address, Script};

/// Estimated byte length of a P2PKH unlocking script:
/// 1 (push) + ~72 (DER signature + flag byte) + 1 (push) + 33
/// (compressed public key).
pub const UNLOCKING_SCRIPT_SIZE_ESTIMATE: u64 = 106;

/// Create a P2PKH locking script paying to an address.
pub fn lock(address: &Address) -> Script {
    lock_hash(&address.public_key_hash)
}

/// Create a P2PKH locking script paying to a 20-byte public key hash.
pub fn lock_hash(public_key_hash: &[u8; 20]) -> Script {
    let mut bytes = Vec::with_capacity(25);
    bytes.push(OP_DUP);
    bytes.push(OP_HASH160);
    bytes.push(OP_DATA_20);
    bytes.extend_from_slice(public_key_hash);
    bytes.push(OP_EQUALVERIFY);
    bytes.push(OP_CHECKSIG);

    Script::from_bytes(&bytes)
}
