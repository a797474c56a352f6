//! Transaction output with satoshi value and locking script.

use stas_primitives::util::{VarInt, WireReader, WireWriter};
use stas_script::Script;

use crate::TransactionError;

/// A single output of a transaction.
///
/// Each output locks a satoshi `value` behind a `locking_script`
/// (scriptPubKey). The `change` flag is a local annotation used by fee
/// calculation to mark the output that absorbs leftover satoshis; it is
/// never serialized.
///
/// # Wire format
///
/// | Field          | Size         |
/// |----------------|--------------|
/// | satoshis       | 8 bytes (LE) |
/// | script length  | VarInt       |
/// | locking_script | variable     |
#[derive(Clone, Debug)]
pub struct TransactionOutput {
    /// Satoshis locked by this output.
    pub satoshis: u64,

    /// The locking script defining the spending conditions.
    pub locking_script: Script,

    /// Local-only change marker, not part of the wire format.
    pub change: bool,
}

impl TransactionOutput {
    /// Create an output with zero satoshis and an empty script.
    pub fn new() -> Self {
        TransactionOutput {
            satoshis: 0,
            locking_script: Script::new(),
            change: false,
        }
    }

    /// Deserialize an output from a `WireReader`.
    ///
    /// Reads 8-byte LE satoshis, a VarInt script length, and the script
    /// bytes.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let satoshis = reader
            .read_u64_le()
            .map_err(|e| TransactionError::SerializationError(format!("reading satoshis: {}", e)))?;

        let script_len = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading script length: {}", e))
        })?;

        let script_bytes = reader.read_bytes(script_len.value() as usize).map_err(|e| {
            TransactionError::SerializationError(format!("reading locking script: {}", e))
        })?;

        Ok(TransactionOutput {
            satoshis,
            locking_script: Script::from_bytes(script_bytes),
            change: false,
        })
    }

    /// Serialize this output into a `WireWriter`.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_u64_le(self.satoshis);
        let script_bytes = self.locking_script.to_bytes();
        writer.write_varint(VarInt::from(script_bytes.len()));
        writer.write_bytes(script_bytes);
    }

    /// Serialize this output to a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Serialize this output for signature hash computation.
    ///
    /// Identical to `to_bytes`: satoshis(8) + varint(len) + script.
    pub fn bytes_for_sig_hash(&self) -> Vec<u8> {
        self.to_bytes()
    }

    /// The locking script as a lowercase hex string.
    pub fn locking_script_hex(&self) -> String {
        self.locking_script.to_hex()
    }
}

impl Default for TransactionOutput {
    fn default() -> Self {
        Self::new()
    }
}
