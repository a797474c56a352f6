//! Transaction input referencing a previous output.

use stas_primitives::util::{VarInt, WireReader, WireWriter};
use stas_script::Script;

use crate::output::TransactionOutput;
use crate::TransactionError;

/// Default sequence number marking a finalized input (no relative
/// lock-time).
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// A single input of a transaction.
///
/// References the output being spent by transaction id and output index.
/// The `unlocking_script` supplies whatever the referenced locking
/// script demands; it stays `None` until the input is signed.
///
/// Source output information, needed to compute signature hashes, can
/// be attached either as the full previous transaction
/// (`source_transaction`) or as just the relevant output
/// (`set_source_output`). The direct output takes priority when both
/// are present.
///
/// # Wire format
///
/// | Field               | Size          |
/// |---------------------|---------------|
/// | source_txid         | 32 bytes (LE) |
/// | source_tx_out_index | 4 bytes (LE)  |
/// | script length       | VarInt        |
/// | unlocking_script    | variable      |
/// | sequence_number     | 4 bytes (LE)  |
#[derive(Clone, Debug)]
pub struct TransactionInput {
    /// Transaction id of the output being spent, in internal
    /// (little-endian) byte order.
    pub source_txid: [u8; 32],

    /// Index of the output within the source transaction.
    pub source_tx_out_index: u32,

    /// Sequence number. Defaults to `0xFFFFFFFF` (finalized).
    pub sequence_number: u32,

    /// The unlocking script, or `None` before signing.
    pub unlocking_script: Option<Script>,

    /// Optional full source transaction for source-output lookups.
    pub source_transaction: Option<Box<crate::transaction::Transaction>>,

    /// Optional direct source output; takes priority over
    /// `source_transaction`.
    source_output: Option<TransactionOutput>,
}

impl TransactionInput {
    /// Create an input with a zeroed txid, index 0, a finalized sequence
    /// and no scripts or source info.
    pub fn new() -> Self {
        TransactionInput {
            source_txid: [0u8; 32],
            source_tx_out_index: 0,
            sequence_number: DEFAULT_SEQUENCE_NUMBER,
            unlocking_script: None,
            source_transaction: None,
            source_output: None,
        }
    }

    /// Deserialize an input from a `WireReader`.
    ///
    /// A zero-length script field reads back as `unlocking_script: None`.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let txid_bytes = reader.read_bytes(32).map_err(|e| {
            TransactionError::SerializationError(format!("reading source txid: {}", e))
        })?;
        let mut source_txid = [0u8; 32];
        source_txid.copy_from_slice(txid_bytes);

        let source_tx_out_index = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading output index: {}", e))
        })?;

        let script_len = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading script length: {}", e))
        })?;

        let script_bytes = reader.read_bytes(script_len.value() as usize).map_err(|e| {
            TransactionError::SerializationError(format!("reading unlocking script: {}", e))
        })?;

        let sequence_number = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading sequence number: {}", e))
        })?;

        let unlocking_script = if script_bytes.is_empty() {
            None
        } else {
            Some(Script::from_bytes(script_bytes))
        };

        Ok(TransactionInput {
            source_txid,
            source_tx_out_index,
            sequence_number,
            unlocking_script,
            source_transaction: None,
            source_output: None,
        })
    }

    /// Serialize this input into a `WireWriter`.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.source_txid);
        writer.write_u32_le(self.source_tx_out_index);

        match &self.unlocking_script {
            Some(script) => {
                let script_bytes = script.to_bytes();
                writer.write_varint(VarInt::from(script_bytes.len()));
                writer.write_bytes(script_bytes);
            }
            None => {
                writer.write_varint(VarInt::from(0u64));
            }
        }

        writer.write_u32_le(self.sequence_number);
    }

    /// Serialize this input to a byte vector.
    ///
    /// With `clear` set, the unlocking script is written as zero-length
    /// regardless of its contents, the form signature preimages use.
    pub fn to_bytes_cleared(&self, clear: bool) -> Vec<u8> {
        let mut writer = WireWriter::new();
        writer.write_bytes(&self.source_txid);
        writer.write_u32_le(self.source_tx_out_index);

        if clear {
            writer.write_varint(VarInt::from(0u64));
        } else if let Some(script) = self.unlocking_script.as_ref() {
            let script_bytes = script.to_bytes();
            writer.write_varint(VarInt::from(script_bytes.len()));
            writer.write_bytes(script_bytes);
        } else {
            writer.write_varint(VarInt::from(0u64));
        }

        writer.write_u32_le(self.sequence_number);
        writer.into_bytes()
    }

    /// Attach a direct source output to this input, or clear it with
    /// `None`.
    ///
    /// Supplies the satoshi value and locking script of the output being
    /// spent without requiring the full source transaction.
    pub fn set_source_output(&mut self, output: Option<TransactionOutput>) {
        self.source_output = output;
    }

    /// Look up the source output, if available.
    ///
    /// Checks the direct source output first, then the output at
    /// `source_tx_out_index` of `source_transaction`.
    pub fn source_tx_output(&self) -> Option<&TransactionOutput> {
        if let Some(ref output) = self.source_output {
            return Some(output);
        }
        if let Some(ref source_tx) = self.source_transaction {
            source_tx.outputs.get(self.source_tx_out_index as usize)
        } else {
            None
        }
    }

    /// Satoshi value of the source output, if available.
    pub fn source_tx_satoshis(&self) -> Option<u64> {
        self.source_tx_output().map(|o| o.satoshis)
    }

    /// Locking script of the source output, if available.
    pub fn source_tx_script(&self) -> Option<&Script> {
        self.source_tx_output().map(|o| &o.locking_script)
    }
}

impl Default for TransactionInput {
    fn default() -> Self {
        Self::new()
    }
}
