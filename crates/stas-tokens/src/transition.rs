//! Structural validation of token transitions.
//!
//! A transition is one transaction viewed against the outputs it
//! consumes. [`verify_transition`] classifies the transition by the
//! count of token inputs and outputs, then enforces the class identity,
//! splittability and value conservation rules for that shape. It is
//! purely structural: signatures and on-chain existence are out of its
//! hands.

use std::fmt;

use stas_transaction::{Transaction, TransactionOutput};

use crate::error::TokenError;
use crate::script::reader::{read_locking_script, ParsedScript, StasFields};

/// Maximum number of token destinations a split may produce.
pub const MAX_SPLIT_DESTINATIONS: usize = 4;

/// The recognized kinds of token transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// A P2PKH contract output fanned out into the first token outputs.
    Issue,
    /// One token input moved whole to a new owner.
    Transfer,
    /// One token input partitioned across two to four outputs.
    Split,
    /// Two inputs of the same token joined into one output.
    Merge,
    /// Two inputs of the same token re-partitioned across two outputs.
    MergeSplit,
    /// Token inputs paid back to the redemption address as plain
    /// satoshis, leaving no token outputs.
    Redeem,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitionKind::Issue => "issue",
            TransitionKind::Transfer => "transfer",
            TransitionKind::Split => "split",
            TransitionKind::Merge => "merge",
            TransitionKind::MergeSplit => "mergeSplit",
            TransitionKind::Redeem => "redeem",
        };
        f.write_str(name)
    }
}

/// Validate one token transition.
///
/// `consumed` holds the outputs spent by `tx`, one per input and in
/// input order. Token inputs and outputs are the entries whose locking
/// script parses as STAS v2; everything else (funding, change, data
/// carriers) is ignored by the shape rules.
///
/// Checks, in order: every token input and output belongs to one token
/// class; the input/output counts form a supported shape; splitting
/// shapes only consume splittable tokens; and token satoshis are
/// conserved. Issues are anchored on `consumed[0]`, which must be the
/// P2PKH contract output and supplies the conserved value. Redeems must
/// pay the full consumed token value to the redemption hash in output
/// zero.
///
/// # Errors
/// [`TokenError::InvalidUtxo`] when `consumed` does not line up with the
/// inputs, [`TokenError::InvalidScript`] for class or shape violations,
/// [`TokenError::NotSplittable`] and [`TokenError::Conservation`] for
/// rule violations.
pub fn verify_transition(
    tx: &Transaction,
    consumed: &[TransactionOutput],
) -> Result<TransitionKind, TokenError> {
    if consumed.len() != tx.inputs.len() {
        return Err(TokenError::InvalidUtxo(format!(
            "{} consumed outputs supplied for {} inputs",
            consumed.len(),
            tx.inputs.len()
        )));
    }

    let token_in = token_entries(consumed);
    let token_out = token_entries(&tx.outputs);

    if let Some((first, _)) = token_in.first() {
        if token_in.iter().any(|(f, _)| !f.same_token(first)) {
            return Err(TokenError::InvalidScript(
                "token inputs belong to different token classes".into(),
            ));
        }
        if token_out.iter().any(|(f, _)| !f.same_token(first)) {
            return Err(TokenError::InvalidScript(
                "token outputs do not match the consumed token class".into(),
            ));
        }
    } else if let Some((first, _)) = token_out.first() {
        if token_out.iter().any(|(f, _)| !f.same_token(first)) {
            return Err(TokenError::InvalidScript(
                "token outputs belong to different token classes".into(),
            ));
        }
    }

    let kind = match (token_in.len(), token_out.len()) {
        (0, n) if n >= 1 => TransitionKind::Issue,
        (1, 1) => TransitionKind::Transfer,
        (1, n) if (2..=MAX_SPLIT_DESTINATIONS).contains(&n) => TransitionKind::Split,
        (2, 1) => TransitionKind::Merge,
        (2, 2) => TransitionKind::MergeSplit,
        (n, 0) if n >= 1 => TransitionKind::Redeem,
        (n_in, n_out) => {
            return Err(TokenError::InvalidScript(format!(
                "unsupported token transition shape: {n_in} token inputs, {n_out} token outputs"
            )))
        }
    };

    // splitting shapes require every consumed token to be splittable;
    // issue fan-out consumes no token inputs and is always allowed
    if token_out.len() > 1 && token_in.iter().any(|(f, _)| !f.splittable) {
        return Err(TokenError::NotSplittable);
    }

    match kind {
        TransitionKind::Issue => {
            let contract = consumed
                .first()
                .ok_or_else(|| TokenError::InvalidUtxo("issue transaction has no inputs".into()))?;
            if !matches!(
                read_locking_script(contract.locking_script.to_bytes()),
                ParsedScript::P2pkh { .. }
            ) {
                return Err(TokenError::InvalidScript(
                    "issue transaction does not spend a P2PKH contract output".into(),
                ));
            }
            let total_out: u64 = token_out.iter().map(|(_, sats)| *sats).sum();
            let total_in = contract.satoshis;
            if total_out != total_in {
                return Err(TokenError::Conservation { total_out, total_in });
            }
        }
        TransitionKind::Redeem => {
            let paid = tx.outputs.first().ok_or_else(|| {
                TokenError::InvalidScript("redeem transaction has no outputs".into())
            })?;
            let redemption = token_in[0].0.redemption_hash;
            let pays_redemption = matches!(
                read_locking_script(paid.locking_script.to_bytes()),
                ParsedScript::P2pkh { owner_hash } if owner_hash == redemption
            );
            if !pays_redemption {
                return Err(TokenError::InvalidScript(
                    "redeem output does not pay the redemption hash".into(),
                ));
            }
            let total_in: u64 = token_in.iter().map(|(_, sats)| *sats).sum();
            if paid.satoshis != total_in {
                return Err(TokenError::Conservation {
                    total_out: paid.satoshis,
                    total_in,
                });
            }
        }
        _ => {
            let total_out: u64 = token_out.iter().map(|(_, sats)| *sats).sum();
            let total_in: u64 = token_in.iter().map(|(_, sats)| *sats).sum();
            if total_out != total_in {
                return Err(TokenError::Conservation { total_out, total_in });
            }
        }
    }

    Ok(kind)
}

fn token_entries(outputs: &[TransactionOutput]) -> Vec<(StasFields, u64)> {
    outputs
        .iter()
        .filter_map(
            |out| match read_locking_script(out.locking_script.to_bytes()) {
                ParsedScript::StasV2(fields) => Some((fields, out.satoshis)),
                _ => None,
            },
        )
        .collect()
}
