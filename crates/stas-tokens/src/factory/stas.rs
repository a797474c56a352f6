//! STAS transaction factories.
//!
//! Pure functions that build complete, signed transactions for the
//! token operations: issue, transfer, split, merge, mergeSplit and
//! redeem. Every builder validates the operation rules before touching
//! a signer, keeps token outputs in destination order ahead of the
//! change output, and funds fees exclusively from the funding UTXO so
//! token value is conserved exactly.
//!
//! None of the builders verify that a signer actually controls the
//! consumed output; a transaction signed with an unrelated key builds
//! fine here and is rejected by the network.

use stas_transaction::signer::{self, Signer};
use stas_transaction::template::p2pkh;
use stas_transaction::{Transaction, TransactionOutput};

use crate::error::TokenError;
use crate::factory::{add_change_output, add_outpoint_input, check_funding};
use crate::schema::TokenSchema;
use crate::script::reader::{parse_stas, StasFields};
use crate::script::stas_builder::{build_stas_locking_script, update_stas_owner};
use crate::transition::MAX_SPLIT_DESTINATIONS;
use crate::types::{Destination, Utxo};

// -----------------------------------------------------------------------
// Config structs
// -----------------------------------------------------------------------

/// Configuration for issuing tokens out of a contract output.
pub struct IssueConfig {
    /// The token schema committed by the contract transaction.
    pub schema: TokenSchema,
    /// The contract UTXO being spent as input 0.
    pub contract_utxo: Utxo,
    /// Destinations for the issued tokens. Amounts must sum to the
    /// contract output value. Data payloads are honored here and baked
    /// into each destination's script for the life of the token.
    pub destinations: Vec<Destination>,
    /// Funding UTXO paying the fee.
    pub funding: Utxo,
    /// Fee rate in satoshis per kilobyte.
    pub fee_rate: u64,
}

/// Configuration for transferring a token output whole.
pub struct TransferConfig {
    /// The token UTXO being transferred.
    pub token_utxo: Utxo,
    /// The recipient. The amount must equal the token UTXO value.
    pub destination: Destination,
    /// Funding UTXO paying the fee.
    pub funding: Utxo,
    /// Fee rate in satoshis per kilobyte.
    pub fee_rate: u64,
}

/// Configuration for splitting one token output into several.
pub struct SplitConfig {
    /// The token UTXO being split.
    pub token_utxo: Utxo,
    /// Two to four destinations whose amounts sum to the token UTXO
    /// value.
    pub destinations: Vec<Destination>,
    /// Funding UTXO paying the fee.
    pub funding: Utxo,
    /// Fee rate in satoshis per kilobyte.
    pub fee_rate: u64,
}

/// Configuration for merging two token outputs into one.
pub struct MergeConfig {
    /// The two token UTXOs being merged. Both must belong to the same
    /// token class.
    pub token_utxos: [Utxo; 2],
    /// The recipient. The amount must equal the combined token value.
    pub destination: Destination,
    /// Funding UTXO paying the fee.
    pub funding: Utxo,
    /// Fee rate in satoshis per kilobyte.
    pub fee_rate: u64,
}

/// Configuration for merging two token outputs and re-partitioning the
/// combined value across two recipients in one transaction.
pub struct MergeSplitConfig {
    /// The two token UTXOs being merged. Both must belong to the same
    /// token class and be splittable.
    pub token_utxos: [Utxo; 2],
    /// The two destinations whose amounts sum to the combined token
    /// value.
    pub destinations: [Destination; 2],
    /// Funding UTXO paying the fee.
    pub funding: Utxo,
    /// Fee rate in satoshis per kilobyte.
    pub fee_rate: u64,
}

/// Configuration for redeeming a token output.
pub struct RedeemConfig {
    /// The token UTXO being redeemed.
    pub token_utxo: Utxo,
    /// Funding UTXO paying the fee.
    pub funding: Utxo,
    /// Fee rate in satoshis per kilobyte.
    pub fee_rate: u64,
}

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

/// Parse the STAS fields out of a token UTXO's locking script.
fn token_fields(utxo: &Utxo) -> Result<StasFields, TokenError> {
    match parse_stas(utxo.locking_script.to_bytes()) {
        Some(fields) => Ok(fields),
        None => Err(TokenError::InvalidScript(
            "token utxo does not carry a STAS locking script".into(),
        )),
    }
}

fn check_destination_amounts(destinations: &[Destination]) -> Result<(), TokenError> {
    for dest in destinations {
        if dest.satoshis == 0 {
            return Err(TokenError::InvalidDestination(
                "destination amount must be greater than zero".into(),
            ));
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------
// Factory functions
// -----------------------------------------------------------------------

/// Build an issue transaction.
///
/// # Transaction structure
/// - Input 0: contract UTXO (P2PKH, signed by `issuer_signer`)
/// - Input 1: funding UTXO (signed by `funding_signer`)
/// - Outputs 0..N-1: STAS token outputs, one per destination
/// - Output N: change
///
/// The destination amounts must sum to exactly the contract output
/// value; the fan-out width is unrestricted and does not depend on the
/// splittable flag.
pub fn build_issue_tx(
    config: &IssueConfig,
    issuer_signer: &dyn Signer,
    funding_signer: &dyn Signer,
) -> Result<Transaction, TokenError> {
    if config.destinations.is_empty() {
        return Err(TokenError::InvalidDestination(
            "at least one destination required".into(),
        ));
    }

    let total_out: u64 = config.destinations.iter().map(|d| d.satoshis).sum();
    if total_out != config.contract_utxo.satoshis {
        return Err(TokenError::Conservation {
            total_out,
            total_in: config.contract_utxo.satoshis,
        });
    }
    check_destination_amounts(&config.destinations)?;

    if !config.contract_utxo.locking_script.is_p2pkh() {
        return Err(TokenError::InvalidUtxo(
            "contract utxo is not a P2PKH output".into(),
        ));
    }
    check_funding(&config.funding)?;

    let mut tx = Transaction::new();
    add_outpoint_input(&mut tx, &config.contract_utxo);
    add_outpoint_input(&mut tx, &config.funding);

    for dest in &config.destinations {
        let locking_script =
            build_stas_locking_script(&dest.address, &config.schema, dest.data.as_deref())?;
        tx.add_output(TransactionOutput {
            satoshis: dest.satoshis,
            locking_script,
            change: false,
        });
    }

    add_change_output(
        &mut tx,
        config.funding.satoshis,
        config.fee_rate,
        funding_signer,
    )?;

    signer::sign_input(&mut tx, 0, issuer_signer)?;
    signer::sign_input(&mut tx, 1, funding_signer)?;

    Ok(tx)
}

/// Build a transfer transaction.
///
/// # Transaction structure
/// - Input 0: token UTXO (signed by `owner_signer`)
/// - Input 1: funding UTXO (signed by `funding_signer`)
/// - Output 0: the same STAS script re-keyed to the destination
/// - Output 1: change
pub fn build_transfer_tx(
    config: &TransferConfig,
    owner_signer: &dyn Signer,
    funding_signer: &dyn Signer,
) -> Result<Transaction, TokenError> {
    if config.destination.satoshis != config.token_utxo.satoshis {
        return Err(TokenError::Conservation {
            total_out: config.destination.satoshis,
            total_in: config.token_utxo.satoshis,
        });
    }
    if config.destination.satoshis == 0 {
        return Err(TokenError::InvalidDestination(
            "destination amount must be greater than zero".into(),
        ));
    }
    check_funding(&config.funding)?;

    let mut tx = Transaction::new();
    add_outpoint_input(&mut tx, &config.token_utxo);
    add_outpoint_input(&mut tx, &config.funding);

    let locking_script = update_stas_owner(
        &config.token_utxo.locking_script,
        &config.destination.address,
    )?;
    tx.add_output(TransactionOutput {
        satoshis: config.destination.satoshis,
        locking_script,
        change: false,
    });

    add_change_output(
        &mut tx,
        config.funding.satoshis,
        config.fee_rate,
        funding_signer,
    )?;

    signer::sign_input(&mut tx, 0, owner_signer)?;
    signer::sign_input(&mut tx, 1, funding_signer)?;

    Ok(tx)
}

/// Build a split transaction.
///
/// # Transaction structure
/// - Input 0: token UTXO (signed by `owner_signer`)
/// - Input 1: funding UTXO (signed by `funding_signer`)
/// - Outputs 0..N-1: STAS token outputs, one per destination
/// - Output N: change
///
/// The consumed token must be splittable and the destination amounts
/// must sum to exactly the token UTXO value.
pub fn build_split_tx(
    config: &SplitConfig,
    owner_signer: &dyn Signer,
    funding_signer: &dyn Signer,
) -> Result<Transaction, TokenError> {
    if config.destinations.len() < 2 {
        return Err(TokenError::InvalidDestination(
            "at least 2 split destinations required".into(),
        ));
    }
    if config.destinations.len() > MAX_SPLIT_DESTINATIONS {
        return Err(TokenError::InvalidDestination(format!(
            "maximum {MAX_SPLIT_DESTINATIONS} split destinations allowed"
        )));
    }

    let fields = token_fields(&config.token_utxo)?;
    if !fields.splittable {
        return Err(TokenError::NotSplittable);
    }

    let total_out: u64 = config.destinations.iter().map(|d| d.satoshis).sum();
    if total_out != config.token_utxo.satoshis {
        return Err(TokenError::Conservation {
            total_out,
            total_in: config.token_utxo.satoshis,
        });
    }
    check_destination_amounts(&config.destinations)?;
    check_funding(&config.funding)?;

    let mut tx = Transaction::new();
    add_outpoint_input(&mut tx, &config.token_utxo);
    add_outpoint_input(&mut tx, &config.funding);

    for dest in &config.destinations {
        let locking_script = update_stas_owner(&config.token_utxo.locking_script, &dest.address)?;
        tx.add_output(TransactionOutput {
            satoshis: dest.satoshis,
            locking_script,
            change: false,
        });
    }

    add_change_output(
        &mut tx,
        config.funding.satoshis,
        config.fee_rate,
        funding_signer,
    )?;

    signer::sign_input(&mut tx, 0, owner_signer)?;
    signer::sign_input(&mut tx, 1, funding_signer)?;

    Ok(tx)
}

/// Build a merge transaction.
///
/// # Transaction structure
/// - Inputs 0..1: the two token UTXOs (signed by the matching entry in
///   `owner_signers`)
/// - Input 2: funding UTXO (signed by `funding_signer`)
/// - Output 0: one STAS output carrying the combined value
/// - Output 1: change
///
/// The merged output re-keys the first token UTXO's script. Merging
/// does not require the splittable flag.
pub fn build_merge_tx(
    config: &MergeConfig,
    owner_signers: [&dyn Signer; 2],
    funding_signer: &dyn Signer,
) -> Result<Transaction, TokenError> {
    let first = token_fields(&config.token_utxos[0])?;
    let second = token_fields(&config.token_utxos[1])?;
    if !first.same_token(&second) {
        return Err(TokenError::InvalidUtxo(
            "token utxos belong to different token classes".into(),
        ));
    }

    let total_in: u64 = config.token_utxos.iter().map(|u| u.satoshis).sum();
    if config.destination.satoshis != total_in {
        return Err(TokenError::Conservation {
            total_out: config.destination.satoshis,
            total_in,
        });
    }
    if config.destination.satoshis == 0 {
        return Err(TokenError::InvalidDestination(
            "destination amount must be greater than zero".into(),
        ));
    }
    check_funding(&config.funding)?;

    let mut tx = Transaction::new();
    for utxo in &config.token_utxos {
        add_outpoint_input(&mut tx, utxo);
    }
    add_outpoint_input(&mut tx, &config.funding);

    let locking_script = update_stas_owner(
        &config.token_utxos[0].locking_script,
        &config.destination.address,
    )?;
    tx.add_output(TransactionOutput {
        satoshis: config.destination.satoshis,
        locking_script,
        change: false,
    });

    add_change_output(
        &mut tx,
        config.funding.satoshis,
        config.fee_rate,
        funding_signer,
    )?;

    for (i, owner) in owner_signers.iter().enumerate() {
        signer::sign_input(&mut tx, i as u32, *owner)?;
    }
    signer::sign_input(&mut tx, 2, funding_signer)?;

    Ok(tx)
}

/// Build a mergeSplit transaction.
///
/// # Transaction structure
/// - Inputs 0..1: the two token UTXOs (signed by the matching entry in
///   `owner_signers`)
/// - Input 2: funding UTXO (signed by `funding_signer`)
/// - Outputs 0..1: STAS outputs re-partitioning the combined value
/// - Output 2: change
///
/// Both consumed tokens must be splittable and belong to the same token
/// class.
pub fn build_merge_split_tx(
    config: &MergeSplitConfig,
    owner_signers: [&dyn Signer; 2],
    funding_signer: &dyn Signer,
) -> Result<Transaction, TokenError> {
    let first = token_fields(&config.token_utxos[0])?;
    let second = token_fields(&config.token_utxos[1])?;
    if !first.same_token(&second) {
        return Err(TokenError::InvalidUtxo(
            "token utxos belong to different token classes".into(),
        ));
    }
    if !first.splittable || !second.splittable {
        return Err(TokenError::NotSplittable);
    }

    let total_in: u64 = config.token_utxos.iter().map(|u| u.satoshis).sum();
    let total_out: u64 = config.destinations.iter().map(|d| d.satoshis).sum();
    if total_out != total_in {
        return Err(TokenError::Conservation { total_out, total_in });
    }
    check_destination_amounts(&config.destinations)?;
    check_funding(&config.funding)?;

    let mut tx = Transaction::new();
    for utxo in &config.token_utxos {
        add_outpoint_input(&mut tx, utxo);
    }
    add_outpoint_input(&mut tx, &config.funding);

    for dest in &config.destinations {
        let locking_script =
            update_stas_owner(&config.token_utxos[0].locking_script, &dest.address)?;
        tx.add_output(TransactionOutput {
            satoshis: dest.satoshis,
            locking_script,
            change: false,
        });
    }

    add_change_output(
        &mut tx,
        config.funding.satoshis,
        config.fee_rate,
        funding_signer,
    )?;

    for (i, owner) in owner_signers.iter().enumerate() {
        signer::sign_input(&mut tx, i as u32, *owner)?;
    }
    signer::sign_input(&mut tx, 2, funding_signer)?;

    Ok(tx)
}

/// Build a redeem transaction.
///
/// # Transaction structure
/// - Input 0: token UTXO (signed by `owner_signer`)
/// - Input 1: funding UTXO (signed by `funding_signer`)
/// - Output 0: P2PKH paying the full token value to the redemption hash
/// - Output 1: change from the funding value
///
/// Redemption returns the locked satoshis to the issuer as ordinary,
/// spendable coin; nothing is burned. The fee comes out of the funding
/// UTXO so the redeemed value arrives intact.
pub fn build_redeem_tx(
    config: &RedeemConfig,
    owner_signer: &dyn Signer,
    funding_signer: &dyn Signer,
) -> Result<Transaction, TokenError> {
    if config.token_utxo.satoshis == 0 {
        return Err(TokenError::InvalidUtxo("token utxo has no value".into()));
    }
    let fields = token_fields(&config.token_utxo)?;
    check_funding(&config.funding)?;

    let mut tx = Transaction::new();
    add_outpoint_input(&mut tx, &config.token_utxo);
    add_outpoint_input(&mut tx, &config.funding);

    tx.add_output(TransactionOutput {
        satoshis: config.token_utxo.satoshis,
        locking_script: p2pkh::lock_hash(&fields.redemption_hash),
        change: false,
    });

    add_change_output(
        &mut tx,
        config.funding.satoshis,
        config.fee_rate,
        funding_signer,
    )?;

    signer::sign_input(&mut tx, 0, owner_signer)?;
    signer::sign_input(&mut tx, 1, funding_signer)?;

    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TokenVersion;
    use crate::transition::{verify_transition, TransitionKind};
    use stas_primitives::chainhash::Hash;
    use stas_primitives::ec::PrivateKey;
    use stas_script::{Address, Network};
    use stas_transaction::signer::KeySigner;

    fn keyed_signer(byte: u8) -> KeySigner {
        KeySigner::new(PrivateKey::from_bytes(&[byte; 32]).unwrap())
    }

    fn address_of(signer: &KeySigner) -> Address {
        Address::from_public_key_hash(&signer.public_key().hash160(), Network::Mainnet)
    }

    fn test_schema(splittable: bool) -> TokenSchema {
        TokenSchema {
            name: "Test Token".to_string(),
            issuer_pkh: [0xbb; 20],
            symbol: "TEST".to_string(),
            supply: 10_000,
            satoshis_per_token: 1,
            splittable,
            version: TokenVersion::V2,
        }
    }

    fn token_utxo(schema: &TokenSchema, owner: &Address, satoshis: u64, vout: u32) -> Utxo {
        Utxo {
            txid: Hash::new([0x21; 32]),
            vout,
            locking_script: build_stas_locking_script(owner, schema, None).unwrap(),
            satoshis,
        }
    }

    fn funding_utxo(signer: &KeySigner, satoshis: u64) -> Utxo {
        Utxo {
            txid: Hash::new([0x22; 32]),
            vout: 0,
            locking_script: p2pkh::lock_hash(&signer.public_key().hash160()),
            satoshis,
        }
    }

    fn contract_utxo(schema: &TokenSchema) -> Utxo {
        Utxo {
            txid: Hash::new([0x20; 32]),
            vout: 0,
            locking_script: p2pkh::lock_hash(&schema.issuer_pkh),
            satoshis: schema.supply,
        }
    }

    fn consumed_outputs(utxos: &[&Utxo]) -> Vec<TransactionOutput> {
        utxos
            .iter()
            .map(|u| TransactionOutput {
                satoshis: u.satoshis,
                locking_script: u.locking_script.clone(),
                change: false,
            })
            .collect()
    }

    #[test]
    fn issue_fans_out_and_verifies() {
        let issuer = keyed_signer(0x01);
        let funder = keyed_signer(0x02);
        let alice = address_of(&keyed_signer(0x03));
        let bob = address_of(&keyed_signer(0x04));
        let schema = test_schema(true);

        let contract = contract_utxo(&schema);
        let funding = funding_utxo(&funder, 20_000);
        let config = IssueConfig {
            schema: schema.clone(),
            contract_utxo: contract.clone(),
            destinations: vec![Destination::new(alice, 7_000), Destination::new(bob, 3_000)],
            funding: funding.clone(),
            fee_rate: 500,
        };

        let tx = build_issue_tx(&config, &issuer, &funder).unwrap();

        let consumed = consumed_outputs(&[&contract, &funding]);
        assert_eq!(
            verify_transition(&tx, &consumed).unwrap(),
            TransitionKind::Issue
        );

        assert_eq!(tx.outputs[0].satoshis, 7_000);
        assert_eq!(tx.outputs[1].satoshis, 3_000);
        let fields = parse_stas(tx.outputs[0].locking_script.to_bytes()).unwrap();
        assert_eq!(fields.redemption_hash, schema.issuer_pkh);
        assert_eq!(fields.symbol, "TEST");
        assert!(tx.outputs.last().unwrap().change);
        assert!(tx.inputs.iter().all(|i| i.unlocking_script.is_some()));
    }

    #[test]
    fn issue_conservation_exact_message() {
        let issuer = keyed_signer(0x01);
        let funder = keyed_signer(0x02);
        let alice = address_of(&keyed_signer(0x03));
        let schema = test_schema(true);

        let config = IssueConfig {
            schema: schema.clone(),
            contract_utxo: contract_utxo(&schema),
            destinations: vec![Destination::new(alice, 0)],
            funding: funding_utxo(&funder, 20_000),
            fee_rate: 500,
        };

        let err = build_issue_tx(&config, &issuer, &funder).unwrap_err();
        assert_eq!(
            err.to_string(),
            "total out amount 0 must equal total in amount 10000"
        );
    }

    #[test]
    fn issue_bakes_destination_data() {
        let issuer = keyed_signer(0x01);
        let funder = keyed_signer(0x02);
        let alice = address_of(&keyed_signer(0x03));
        let schema = test_schema(true);

        let config = IssueConfig {
            schema: schema.clone(),
            contract_utxo: contract_utxo(&schema),
            destinations: vec![Destination::with_data(alice, 10_000, b"seat-42".to_vec())],
            funding: funding_utxo(&funder, 20_000),
            fee_rate: 500,
        };

        let tx = build_issue_tx(&config, &issuer, &funder).unwrap();
        let fields = parse_stas(tx.outputs[0].locking_script.to_bytes()).unwrap();
        assert_eq!(fields.data, Some(b"seat-42".to_vec()));
    }

    #[test]
    fn issue_rejects_non_p2pkh_contract() {
        let issuer = keyed_signer(0x01);
        let funder = keyed_signer(0x02);
        let alice = address_of(&keyed_signer(0x03));
        let schema = test_schema(true);

        let config = IssueConfig {
            schema: schema.clone(),
            contract_utxo: token_utxo(&schema, &alice, 10_000, 0),
            destinations: vec![Destination::new(alice.clone(), 10_000)],
            funding: funding_utxo(&funder, 20_000),
            fee_rate: 500,
        };

        assert!(matches!(
            build_issue_tx(&config, &issuer, &funder),
            Err(TokenError::InvalidUtxo(_))
        ));
    }

    #[test]
    fn transfer_rekeys_and_verifies() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let bob = address_of(&keyed_signer(0x04));
        let schema = test_schema(true);

        let token = token_utxo(&schema, &alice, 5_000, 0);
        let funding = funding_utxo(&funder, 8_000);
        let config = TransferConfig {
            token_utxo: token.clone(),
            destination: Destination::new(bob.clone(), 5_000),
            funding: funding.clone(),
            fee_rate: 500,
        };

        let tx = build_transfer_tx(&config, &alice_signer, &funder).unwrap();

        let consumed = consumed_outputs(&[&token, &funding]);
        assert_eq!(
            verify_transition(&tx, &consumed).unwrap(),
            TransitionKind::Transfer
        );

        let fields = parse_stas(tx.outputs[0].locking_script.to_bytes()).unwrap();
        assert_eq!(fields.owner_hash, bob.public_key_hash);
        assert_eq!(tx.outputs[0].satoshis, 5_000);
        assert!(tx.outputs[1].change);
    }

    #[test]
    fn transfer_preserves_issue_data() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let bob = address_of(&keyed_signer(0x04));
        let schema = test_schema(true);

        let token = Utxo {
            txid: Hash::new([0x21; 32]),
            vout: 0,
            locking_script: build_stas_locking_script(&alice, &schema, Some(b"memo")).unwrap(),
            satoshis: 5_000,
        };
        let config = TransferConfig {
            token_utxo: token,
            destination: Destination::new(bob, 5_000),
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        let tx = build_transfer_tx(&config, &alice_signer, &funder).unwrap();
        let fields = parse_stas(tx.outputs[0].locking_script.to_bytes()).unwrap();
        assert_eq!(fields.data, Some(b"memo".to_vec()));
    }

    #[test]
    fn transfer_amount_mismatch_rejected() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let bob = address_of(&keyed_signer(0x04));
        let schema = test_schema(true);

        let config = TransferConfig {
            token_utxo: token_utxo(&schema, &alice, 5_000, 0),
            destination: Destination::new(bob, 4_999),
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        assert!(matches!(
            build_transfer_tx(&config, &alice_signer, &funder),
            Err(TokenError::Conservation {
                total_out: 4_999,
                total_in: 5_000
            })
        ));
    }

    #[test]
    fn wrong_owner_key_still_builds() {
        // ownership is enforced on chain, not locally
        let stranger = keyed_signer(0x7f);
        let funder = keyed_signer(0x02);
        let alice = address_of(&keyed_signer(0x03));
        let bob = address_of(&keyed_signer(0x04));
        let schema = test_schema(true);

        let config = TransferConfig {
            token_utxo: token_utxo(&schema, &alice, 5_000, 0),
            destination: Destination::new(bob, 5_000),
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        assert!(build_transfer_tx(&config, &stranger, &funder).is_ok());
    }

    #[test]
    fn split_three_ways_and_verifies() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema = test_schema(true);

        let token = token_utxo(&schema, &alice, 9_000, 0);
        let funding = funding_utxo(&funder, 8_000);
        let destinations = vec![
            Destination::new(address_of(&keyed_signer(0x04)), 4_000),
            Destination::new(address_of(&keyed_signer(0x05)), 3_000),
            Destination::new(alice.clone(), 2_000),
        ];
        let config = SplitConfig {
            token_utxo: token.clone(),
            destinations,
            funding: funding.clone(),
            fee_rate: 500,
        };

        let tx = build_split_tx(&config, &alice_signer, &funder).unwrap();

        let consumed = consumed_outputs(&[&token, &funding]);
        assert_eq!(
            verify_transition(&tx, &consumed).unwrap(),
            TransitionKind::Split
        );
        assert_eq!(tx.outputs[0].satoshis, 4_000);
        assert_eq!(tx.outputs[1].satoshis, 3_000);
        assert_eq!(tx.outputs[2].satoshis, 2_000);
    }

    #[test]
    fn split_rejects_one_destination() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema = test_schema(true);

        let config = SplitConfig {
            token_utxo: token_utxo(&schema, &alice, 9_000, 0),
            destinations: vec![Destination::new(alice.clone(), 9_000)],
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        assert!(matches!(
            build_split_tx(&config, &alice_signer, &funder),
            Err(TokenError::InvalidDestination(_))
        ));
    }

    #[test]
    fn split_rejects_five_destinations() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema = test_schema(true);

        let destinations = (0u8..5)
            .map(|i| Destination::new(address_of(&keyed_signer(0x10 + i)), 1_000))
            .collect();
        let config = SplitConfig {
            token_utxo: token_utxo(&schema, &alice, 5_000, 0),
            destinations,
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        let err = build_split_tx(&config, &alice_signer, &funder).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid destination: maximum 4 split destinations allowed"
        );
    }

    #[test]
    fn split_non_splittable_rejected() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema = test_schema(false);

        let config = SplitConfig {
            token_utxo: token_utxo(&schema, &alice, 9_000, 0),
            destinations: vec![
                Destination::new(alice.clone(), 5_000),
                Destination::new(alice.clone(), 4_000),
            ],
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        assert!(matches!(
            build_split_tx(&config, &alice_signer, &funder),
            Err(TokenError::NotSplittable)
        ));
    }

    #[test]
    fn split_conservation_mismatch_rejected() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema = test_schema(true);

        let config = SplitConfig {
            token_utxo: token_utxo(&schema, &alice, 9_000, 0),
            destinations: vec![
                Destination::new(alice.clone(), 5_000),
                Destination::new(alice.clone(), 3_000),
            ],
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        assert!(matches!(
            build_split_tx(&config, &alice_signer, &funder),
            Err(TokenError::Conservation {
                total_out: 8_000,
                total_in: 9_000
            })
        ));
    }

    #[test]
    fn merge_joins_and_verifies() {
        let alice_signer = keyed_signer(0x03);
        let bob_signer = keyed_signer(0x04);
        let funder = keyed_signer(0x02);
        let carol = address_of(&keyed_signer(0x05));
        let schema = test_schema(true);

        let token_a = token_utxo(&schema, &address_of(&alice_signer), 4_000, 0);
        let token_b = token_utxo(&schema, &address_of(&bob_signer), 6_000, 1);
        let funding = funding_utxo(&funder, 8_000);
        let config = MergeConfig {
            token_utxos: [token_a.clone(), token_b.clone()],
            destination: Destination::new(carol.clone(), 10_000),
            funding: funding.clone(),
            fee_rate: 500,
        };

        let tx = build_merge_tx(&config, [&alice_signer, &bob_signer], &funder).unwrap();

        let consumed = consumed_outputs(&[&token_a, &token_b, &funding]);
        assert_eq!(
            verify_transition(&tx, &consumed).unwrap(),
            TransitionKind::Merge
        );
        let fields = parse_stas(tx.outputs[0].locking_script.to_bytes()).unwrap();
        assert_eq!(fields.owner_hash, carol.public_key_hash);
        assert_eq!(tx.outputs[0].satoshis, 10_000);
        assert!(tx.inputs.iter().all(|i| i.unlocking_script.is_some()));
    }

    #[test]
    fn merge_non_splittable_allowed() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema = test_schema(false);

        let config = MergeConfig {
            token_utxos: [
                token_utxo(&schema, &alice, 4_000, 0),
                token_utxo(&schema, &alice, 6_000, 1),
            ],
            destination: Destination::new(alice.clone(), 10_000),
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        assert!(build_merge_tx(&config, [&alice_signer, &alice_signer], &funder).is_ok());
    }

    #[test]
    fn merge_rejects_mixed_token_classes() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema_a = test_schema(true);
        let mut schema_b = test_schema(true);
        schema_b.issuer_pkh = [0xee; 20];

        let config = MergeConfig {
            token_utxos: [
                token_utxo(&schema_a, &alice, 4_000, 0),
                token_utxo(&schema_b, &alice, 6_000, 1),
            ],
            destination: Destination::new(alice.clone(), 10_000),
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        let err = build_merge_tx(&config, [&alice_signer, &alice_signer], &funder).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid utxo: token utxos belong to different token classes"
        );
    }

    #[test]
    fn merge_split_repartitions_and_verifies() {
        let alice_signer = keyed_signer(0x03);
        let bob_signer = keyed_signer(0x04);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let bob = address_of(&bob_signer);
        let schema = test_schema(true);

        let token_a = token_utxo(&schema, &alice, 4_000, 0);
        let token_b = token_utxo(&schema, &bob, 6_000, 1);
        let funding = funding_utxo(&funder, 8_000);
        let config = MergeSplitConfig {
            token_utxos: [token_a.clone(), token_b.clone()],
            destinations: [
                Destination::new(bob.clone(), 7_500),
                Destination::new(alice.clone(), 2_500),
            ],
            funding: funding.clone(),
            fee_rate: 500,
        };

        let tx = build_merge_split_tx(&config, [&alice_signer, &bob_signer], &funder).unwrap();

        let consumed = consumed_outputs(&[&token_a, &token_b, &funding]);
        assert_eq!(
            verify_transition(&tx, &consumed).unwrap(),
            TransitionKind::MergeSplit
        );
        assert_eq!(tx.outputs[0].satoshis, 7_500);
        assert_eq!(tx.outputs[1].satoshis, 2_500);
    }

    #[test]
    fn merge_split_non_splittable_rejected() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema = test_schema(false);

        let config = MergeSplitConfig {
            token_utxos: [
                token_utxo(&schema, &alice, 4_000, 0),
                token_utxo(&schema, &alice, 6_000, 1),
            ],
            destinations: [
                Destination::new(alice.clone(), 7_500),
                Destination::new(alice.clone(), 2_500),
            ],
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        assert!(matches!(
            build_merge_split_tx(&config, [&alice_signer, &alice_signer], &funder),
            Err(TokenError::NotSplittable)
        ));
    }

    #[test]
    fn redeem_pays_redemption_hash_and_verifies() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let schema = test_schema(true);

        let token = token_utxo(&schema, &alice, 5_000, 0);
        let funding = funding_utxo(&funder, 8_000);
        let config = RedeemConfig {
            token_utxo: token.clone(),
            funding: funding.clone(),
            fee_rate: 500,
        };

        let tx = build_redeem_tx(&config, &alice_signer, &funder).unwrap();

        let consumed = consumed_outputs(&[&token, &funding]);
        assert_eq!(
            verify_transition(&tx, &consumed).unwrap(),
            TransitionKind::Redeem
        );

        assert_eq!(tx.outputs[0].satoshis, 5_000);
        assert_eq!(
            tx.outputs[0].locking_script.to_bytes(),
            p2pkh::lock_hash(&schema.issuer_pkh).to_bytes()
        );
        assert!(tx.outputs[1].change);
        assert!(tx.outputs[1].satoshis < 8_000);
    }

    #[test]
    fn redeem_rejects_non_token_utxo() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);

        let config = RedeemConfig {
            token_utxo: funding_utxo(&funder, 5_000),
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        assert!(matches!(
            build_redeem_tx(&config, &alice_signer, &funder),
            Err(TokenError::InvalidScript(_))
        ));
    }

    #[test]
    fn fee_shortfall_rejected() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let bob = address_of(&keyed_signer(0x04));
        let schema = test_schema(true);

        let config = TransferConfig {
            token_utxo: token_utxo(&schema, &alice, 5_000, 0),
            destination: Destination::new(bob, 5_000),
            funding: funding_utxo(&funder, 10),
            fee_rate: 500,
        };

        match build_transfer_tx(&config, &alice_signer, &funder) {
            Err(TokenError::InsufficientFunds { needed, available }) => {
                assert!(needed > 10);
                assert_eq!(available, 10);
            }
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
    }

    #[test]
    fn identical_configs_build_identical_bytes() {
        let alice_signer = keyed_signer(0x03);
        let funder = keyed_signer(0x02);
        let alice = address_of(&alice_signer);
        let bob = address_of(&keyed_signer(0x04));
        let schema = test_schema(true);

        let config = TransferConfig {
            token_utxo: token_utxo(&schema, &alice, 5_000, 0),
            destination: Destination::new(bob, 5_000),
            funding: funding_utxo(&funder, 8_000),
            fee_rate: 500,
        };

        let a = build_transfer_tx(&config, &alice_signer, &funder).unwrap();
        let b = build_transfer_tx(&config, &alice_signer, &funder).unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());
    }
}
