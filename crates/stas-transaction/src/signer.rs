//! Input signing capability.
//!
//! `Signer` is the seam between transaction builders and key custody.
//! A signer produces the signature blob for one input; the builder
//! assembles the unlocking script `push(sig) push(pubkey)` itself, the
//! same shape P2PKH and token scripts use. Two realizations are
//! provided: `KeySigner` holds a private key and signs locally,
//! `CallbackSigner` delegates to caller code so the key can live in an
//! external custody system.

use stas_primitives::ec::{PrivateKey, PublicKey};
use stas_script::Script;

use crate::sighash::{self, SIGHASH_ALL_FORKID};
use crate::transaction::Transaction;
use crate::TransactionError;

/// Produces signatures authorizing transaction inputs.
///
/// `sign_input` receives the transaction, the input index, and the
/// locking script and satoshi value of the output being spent. It
/// returns the signature blob: the DER-encoded ECDSA signature with the
/// sighash flag byte appended, ready to be pushed into an unlocking
/// script.
pub trait Signer {
    /// The public key the produced signatures verify against.
    fn public_key(&self) -> PublicKey;

    /// Sign the input at `input_index`, returning DER signature bytes
    /// with the sighash flag byte appended.
    fn sign_input(
        &self,
        tx: &Transaction,
        input_index: u32,
        locking_script: &Script,
        satoshis: u64,
    ) -> Result<Vec<u8>, TransactionError>;
}

// -----------------------------------------------------------------------
// KeySigner
// -----------------------------------------------------------------------

/// A `Signer` holding a private key, signing locally.
///
/// Computes the BIP-143 FORKID digest and signs it with RFC6979
/// deterministic ECDSA (low-S). Defaults to sighash `ALL | FORKID`.
pub struct KeySigner {
    /// The signing key.
    private_key: PrivateKey,

    /// The sighash flags committed to by every produced signature.
    sighash_flag: u32,
}

impl KeySigner {
    /// Create a signer using the standard `SIGHASH_ALL_FORKID` flags.
    pub fn new(private_key: PrivateKey) -> Self {
        KeySigner {
            private_key,
            sighash_flag: SIGHASH_ALL_FORKID,
        }
    }

    /// Create a signer with explicit sighash flags.
    pub fn with_sighash_flag(private_key: PrivateKey, sighash_flag: u32) -> Self {
        KeySigner {
            private_key,
            sighash_flag,
        }
    }
}

impl Signer for KeySigner {
    fn public_key(&self) -> PublicKey {
        self.private_key.pub_key()
    }

    fn sign_input(
        &self,
        tx: &Transaction,
        input_index: u32,
        locking_script: &Script,
        satoshis: u64,
    ) -> Result<Vec<u8>, TransactionError> {
        let digest = sighash::signature_hash(
            tx,
            input_index as usize,
            locking_script.to_bytes(),
            self.sighash_flag,
            satoshis,
        )?;

        let signature = self.private_key.sign(&digest)?;

        let der = signature.to_der();
        let mut blob = Vec::with_capacity(der.len() + 1);
        blob.extend_from_slice(&der);
        blob.push(self.sighash_flag as u8);
        Ok(blob)
    }
}

// -----------------------------------------------------------------------
// CallbackSigner
// -----------------------------------------------------------------------

/// Signing callback: receives `(tx, input_index, locking_script,
/// satoshis)` and returns the signature blob or an error message.
pub type SignCallback =
    dyn Fn(&Transaction, u32, &Script, u64) -> Result<Vec<u8>, String> + Send + Sync;

/// A `Signer` delegating signature production to caller code.
///
/// Holds the spender's public key and a closure that produces the
/// signature blob, so the private key never has to enter the process.
/// Asynchronous custody backends bridge to the synchronous call
/// themselves; a refused or failed callback surfaces as
/// `TransactionError::SigningError` and the build is discarded.
pub struct CallbackSigner {
    /// Public key matching the remote signing key.
    public_key: PublicKey,

    /// Caller-supplied signing function.
    callback: Box<SignCallback>,
}

impl CallbackSigner {
    /// Create a signer from a public key and a signing closure.
    pub fn new<F>(public_key: PublicKey, callback: F) -> Self
    where
        F: Fn(&Transaction, u32, &Script, u64) -> Result<Vec<u8>, String>
            + Send
            + Sync
            + 'static,
    {
        CallbackSigner {
            public_key,
            callback: Box::new(callback),
        }
    }
}

impl Signer for CallbackSigner {
    fn public_key(&self) -> PublicKey {
        self.public_key.clone()
    }

    fn sign_input(
        &self,
        tx: &Transaction,
        input_index: u32,
        locking_script: &Script,
        satoshis: u64,
    ) -> Result<Vec<u8>, TransactionError> {
        (self.callback)(tx, input_index, locking_script, satoshis)
            .map_err(TransactionError::SigningError)
    }
}

// -----------------------------------------------------------------------
// Unlocking script assembly
// -----------------------------------------------------------------------

/// Assemble the unlocking script `push(sig) push(pubkey)` from a
/// signature blob and the spender's public key.
pub fn unlock_script(
    sig_with_flag: &[u8],
    public_key: &PublicKey,
) -> Result<Script, TransactionError> {
    let mut script = Script::new();
    script.append_push_data(sig_with_flag)?;
    script.append_push_data(&public_key.to_compressed())?;
    Ok(script)
}

/// Sign the input at `input_index` with `signer` and store the
/// assembled unlocking script on the input.
///
/// The scriptCode and satoshi value come from the input's attached
/// source output, so source info must be set before calling.
pub fn sign_input(
    tx: &mut Transaction,
    input_index: u32,
    signer: &dyn Signer,
) -> Result<(), TransactionError> {
    let idx = input_index as usize;
    if idx >= tx.inputs.len() {
        return Err(TransactionError::SigningError(format!(
            "input index {} out of range (tx has {} inputs)",
            idx,
            tx.inputs.len()
        )));
    }

    let (locking_script, satoshis) = {
        let source_output = tx.inputs[idx].source_tx_output().ok_or_else(|| {
            TransactionError::SigningError(
                "missing source output on input (no previous tx info)".to_string(),
            )
        })?;
        (source_output.locking_script.clone(), source_output.satoshis)
    };

    let sig_blob = signer.sign_input(tx, input_index, &locking_script, satoshis)?;
    let script = unlock_script(&sig_blob, &signer.public_key())?;

    tx.inputs[idx].unlocking_script = Some(script);
    Ok(())
}
