//! Property tests for transaction wire serialization.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use stas_script::Script;
use stas_transaction::{Transaction, TransactionInput, TransactionOutput};

/// Strategy producing an arbitrary input.
///
/// Empty unlocking scripts serialize as zero-length and read back as
/// `None`, so the strategy never generates `Some` with an empty script.
fn arb_input() -> impl Strategy<Value = TransactionInput> {
    (
        any::<[u8; 32]>(),
        any::<u32>(),
        any::<u32>(),
        option::of(vec(any::<u8>(), 1..100)),
    )
        .prop_map(|(txid, vout, sequence, script)| {
            let mut input = TransactionInput::new();
            input.source_txid = txid;
            input.source_tx_out_index = vout;
            input.sequence_number = sequence;
            input.unlocking_script = script.map(|bytes| Script::from_bytes(&bytes));
            input
        })
}

/// Strategy producing an arbitrary output.
///
/// Satoshi values stay below the 21 million coin cap so output sums
/// cannot overflow.
fn arb_output() -> impl Strategy<Value = TransactionOutput> {
    (0u64..2_100_000_000_000_000, vec(any::<u8>(), 0..100)).prop_map(|(satoshis, script)| {
        TransactionOutput {
            satoshis,
            locking_script: Script::from_bytes(&script),
            change: false,
        }
    })
}

/// Strategy producing an arbitrary transaction.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        1u32..=2,
        vec(arb_input(), 0..5),
        vec(arb_output(), 0..5),
        any::<u32>(),
    )
        .prop_map(|(version, inputs, outputs, lock_time)| Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bytes_roundtrip(tx in arb_transaction()) {
        let bytes = tx.to_bytes();
        let parsed = Transaction::from_bytes(&bytes).unwrap();
        prop_assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn hex_roundtrip(tx in arb_transaction()) {
        let parsed = Transaction::from_hex(&tx.to_hex()).unwrap();
        prop_assert_eq!(parsed.to_hex(), tx.to_hex());
    }

    #[test]
    fn parsed_structure_matches(tx in arb_transaction()) {
        let parsed = Transaction::from_bytes(&tx.to_bytes()).unwrap();
        prop_assert_eq!(parsed.version, tx.version);
        prop_assert_eq!(parsed.input_count(), tx.input_count());
        prop_assert_eq!(parsed.output_count(), tx.output_count());
        prop_assert_eq!(parsed.lock_time, tx.lock_time);
        prop_assert_eq!(parsed.total_output_satoshis(), tx.total_output_satoshis());
    }

    #[test]
    fn txid_hex_is_reversed_txid(tx in arb_transaction()) {
        let mut id = tx.tx_id();
        id.reverse();
        prop_assert_eq!(hex::encode(id), tx.tx_id_hex());
    }

    #[test]
    fn trailing_bytes_rejected(tx in arb_transaction(), extra in vec(any::<u8>(), 1..16)) {
        let mut bytes = tx.to_bytes();
        bytes.extend_from_slice(&extra);
        prop_assert!(Transaction::from_bytes(&bytes).is_err());
    }
}
