//! Contract transaction factory.
//!
//! The contract transaction is the root of every token lineage. It pays
//! the full supply to the issuer as plain P2PKH (the output issuance
//! later spends) and publishes the JSON schema in an OP_RETURN output,
//! so any verifier can recover the token terms from the chain.

use stas_script::opcodes::{OP_FALSE, OP_RETURN};
use stas_script::Script;
use stas_transaction::signer::{self, Signer};
use stas_transaction::template::p2pkh;
use stas_transaction::{Transaction, TransactionOutput};

use crate::error::TokenError;
use crate::factory::{add_outpoint_input, check_funding, estimate_fee};
use crate::schema::TokenSchema;
use crate::types::Utxo;

/// Configuration for building a contract transaction.
pub struct ContractConfig {
    /// The token schema to commit on chain.
    pub schema: TokenSchema,
    /// Funding UTXOs paying for the contract output and the fee. All
    /// must be spendable by the funding signer.
    pub funding: Vec<Utxo>,
    /// Fee rate in satoshis per kilobyte.
    pub fee_rate: u64,
}

/// Build a contract transaction.
///
/// # Transaction structure
/// - Inputs: funding UTXOs (P2PKH)
/// - Output 0: P2PKH to the issuer hash, carrying exactly the supply
/// - Output 1: `OP_FALSE OP_RETURN <schema JSON>`
/// - Output 2: change, when any is left
///
/// The funding must cover the supply plus the fee; the shortfall
/// surfaces as [`TokenError::InsufficientFunds`].
pub fn build_contract_tx(
    config: &ContractConfig,
    funding_signer: &dyn Signer,
) -> Result<Transaction, TokenError> {
    config.schema.validate()?;

    if config.funding.is_empty() {
        return Err(TokenError::InvalidUtxo(
            "at least one funding utxo required".into(),
        ));
    }
    for utxo in &config.funding {
        check_funding(utxo)?;
    }

    let mut tx = Transaction::new();
    for utxo in &config.funding {
        add_outpoint_input(&mut tx, utxo);
    }

    // Output 0: the contract output, spent by the issue transaction
    tx.add_output(TransactionOutput {
        satoshis: config.schema.supply,
        locking_script: p2pkh::lock_hash(&config.schema.issuer_pkh),
        change: false,
    });

    // Output 1: schema record
    let mut data_script = Script::new();
    data_script.append_opcodes(&[OP_FALSE, OP_RETURN])?;
    data_script.append_push_data(&config.schema.to_bytes()?)?;
    tx.add_output(TransactionOutput {
        satoshis: 0,
        locking_script: data_script,
        change: false,
    });

    let available: u64 = config.funding.iter().map(|u| u.satoshis).sum();
    let fee = estimate_fee(&tx, config.fee_rate);
    let needed = config.schema.supply + fee;
    if available < needed {
        return Err(TokenError::InsufficientFunds { needed, available });
    }

    let change = available - needed;
    if change > 0 {
        let change_pkh = funding_signer.public_key().hash160();
        tx.add_output(TransactionOutput {
            satoshis: change,
            locking_script: p2pkh::lock_hash(&change_pkh),
            change: true,
        });
    }

    for i in 0..tx.inputs.len() {
        signer::sign_input(&mut tx, i as u32, funding_signer)?;
    }

    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TokenVersion;
    use crate::script::reader::{read_locking_script, ParsedScript};
    use stas_primitives::chainhash::Hash;
    use stas_primitives::ec::PrivateKey;
    use stas_transaction::signer::KeySigner;

    fn funding_signer() -> KeySigner {
        KeySigner::new(PrivateKey::from_bytes(&[0x51; 32]).unwrap())
    }

    fn funding_utxo(signer: &KeySigner, satoshis: u64, vout: u32) -> Utxo {
        let pkh = signer.public_key().hash160();
        Utxo {
            txid: Hash::new([0x12; 32]),
            vout,
            locking_script: p2pkh::lock_hash(&pkh),
            satoshis,
        }
    }

    fn test_schema() -> TokenSchema {
        TokenSchema {
            name: "Test Token".to_string(),
            issuer_pkh: [0xbb; 20],
            symbol: "TEST".to_string(),
            supply: 10_000,
            satoshis_per_token: 1,
            splittable: true,
            version: TokenVersion::V2,
        }
    }

    #[test]
    fn builds_supply_and_schema_outputs() {
        let signer = funding_signer();
        let config = ContractConfig {
            schema: test_schema(),
            funding: vec![funding_utxo(&signer, 50_000, 0)],
            fee_rate: 500,
        };

        let tx = build_contract_tx(&config, &signer).unwrap();

        // supply output
        assert_eq!(tx.outputs[0].satoshis, 10_000);
        match read_locking_script(tx.outputs[0].locking_script.to_bytes()) {
            ParsedScript::P2pkh { owner_hash } => assert_eq!(owner_hash, [0xbb; 20]),
            other => panic!("expected P2PKH contract output, got {other:?}"),
        }

        // schema record
        assert_eq!(tx.outputs[1].satoshis, 0);
        assert_eq!(
            read_locking_script(tx.outputs[1].locking_script.to_bytes()),
            ParsedScript::OpReturn
        );
        let record = tx.outputs[1].locking_script.to_bytes();
        let json_start = record
            .windows(4)
            .position(|w| w == b"{\"na")
            .expect("schema JSON embedded in the record");
        let parsed = TokenSchema::from_bytes(&record[json_start..]).unwrap();
        assert_eq!(parsed, config.schema);

        // change and signatures
        assert!(tx.outputs[2].change);
        assert!(tx.inputs.iter().all(|i| i.unlocking_script.is_some()));
    }

    #[test]
    fn gathers_multiple_funding_utxos() {
        let signer = funding_signer();
        let config = ContractConfig {
            schema: test_schema(),
            funding: vec![
                funding_utxo(&signer, 6_000, 0),
                funding_utxo(&signer, 6_000, 1),
            ],
            fee_rate: 500,
        };

        let tx = build_contract_tx(&config, &signer).unwrap();
        assert_eq!(tx.inputs.len(), 2);
        assert_eq!(tx.outputs[0].satoshis, 10_000);
    }

    #[test]
    fn rejects_insufficient_funding() {
        let signer = funding_signer();
        let config = ContractConfig {
            schema: test_schema(),
            funding: vec![funding_utxo(&signer, 9_999, 0)],
            fee_rate: 500,
        };

        match build_contract_tx(&config, &signer) {
            Err(TokenError::InsufficientFunds { needed, available }) => {
                assert!(needed > 10_000);
                assert_eq!(available, 9_999);
            }
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_funding() {
        let signer = funding_signer();
        let config = ContractConfig {
            schema: test_schema(),
            funding: vec![],
            fee_rate: 500,
        };

        assert!(matches!(
            build_contract_tx(&config, &signer),
            Err(TokenError::InvalidUtxo(_))
        ));
    }

    #[test]
    fn rejects_invalid_schema() {
        let signer = funding_signer();
        let mut schema = test_schema();
        schema.supply = 0;
        let config = ContractConfig {
            schema,
            funding: vec![funding_utxo(&signer, 50_000, 0)],
            fee_rate: 500,
        };

        assert!(matches!(
            build_contract_tx(&config, &signer),
            Err(TokenError::InvalidScheme(_))
        ));
    }

    #[test]
    fn build_is_deterministic() {
        let signer = funding_signer();
        let config = ContractConfig {
            schema: test_schema(),
            funding: vec![funding_utxo(&signer, 50_000, 0)],
            fee_rate: 500,
        };

        let a = build_contract_tx(&config, &signer).unwrap();
        let b = build_contract_tx(&config, &signer).unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());
    }
}
