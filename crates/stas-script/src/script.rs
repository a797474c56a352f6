//! The Bitcoin script type.
//!
//! Scripts appear in transaction inputs (unlocking) and outputs
//! (locking). [`Script`] wraps the raw bytes and provides construction,
//! classification, push-data encoding and ASM rendering. STAS locking
//! scripts are ordinary scripts to this type; the token-aware layers sit
//! above it.

use std::fmt;

use crate::chunk::{decode_script, push_data_prefix, ScriptChunk};
use crate::opcodes::*;
use crate::ScriptError;

/// A Bitcoin script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let bytes =
            hex::decode(hex_str).map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Ok(Script(bytes))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create a script from a space-separated ASM string.
    ///
    /// Known OP_xxx tokens are emitted as opcodes; anything else is
    /// treated as hex push data.
    pub fn from_asm(asm: &str) -> Result<Self, ScriptError> {
        let mut script = Script::new();
        if asm.is_empty() {
            return Ok(script);
        }
        for token in asm.split(' ') {
            if let Some(opcode) = string_to_opcode(token) {
                script.append_opcodes(&[opcode])?;
            } else {
                script.append_push_data_hex(token)?;
            }
        }
        Ok(script)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Encode the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Render the script as a space-separated ASM string.
    ///
    /// Returns an empty string for empty or malformed scripts.
    pub fn to_asm(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let mut parts = Vec::new();
        let mut pos = 0;
        while pos < self.0.len() {
            match self.read_op(&mut pos) {
                Ok(chunk) => {
                    let s = chunk.to_asm_string();
                    if !s.is_empty() {
                        parts.push(s);
                    }
                }
                Err(_) => return String::new(),
            }
        }
        parts.join(" ")
    }

    /// Return a reference to the underlying bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return the length of the script in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the script has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------------

    /// Check if this is a P2PKH output script.
    ///
    /// Pattern: OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG.
    /// A STAS locking script starts with the same five elements but keeps
    /// going, so the exact 25-byte length matters here.
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == 25
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == OP_DATA_20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    /// Check if this is a data output script (OP_RETURN or OP_FALSE OP_RETURN).
    pub fn is_data(&self) -> bool {
        let b = &self.0;
        (!b.is_empty() && b[0] == OP_RETURN)
            || (b.len() > 1 && b[0] == OP_FALSE && b[1] == OP_RETURN)
    }

    // -----------------------------------------------------------------------
    // Data extraction
    // -----------------------------------------------------------------------

    /// Extract the 20-byte public key hash from a P2PKH-prefixed script.
    ///
    /// Accepts anything starting with OP_DUP OP_HASH160 <push>, which
    /// covers both plain P2PKH outputs and the owner section of a STAS
    /// locking script.
    ///
    /// # Errors
    /// [`ScriptError::EmptyScript`] for an empty script,
    /// [`ScriptError::NotP2PKH`] if the prefix does not match.
    pub fn public_key_hash(&self) -> Result<Vec<u8>, ScriptError> {
        if self.0.is_empty() {
            return Err(ScriptError::EmptyScript);
        }
        if self.0.len() <= 2 || self.0[0] != OP_DUP || self.0[1] != OP_HASH160 {
            return Err(ScriptError::NotP2PKH);
        }
        let parts = decode_script(&self.0[2..])?;
        match parts.first().and_then(|chunk| chunk.data.clone()) {
            Some(data) => Ok(data),
            None => Err(ScriptError::NotP2PKH),
        }
    }

    /// Parse the script into decoded chunks.
    pub fn chunks(&self) -> Result<Vec<ScriptChunk>, ScriptError> {
        decode_script(&self.0)
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    /// Append data bytes with the minimal push prefix.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        let prefix = push_data_prefix(data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Append hex-encoded data with the minimal push prefix.
    pub fn append_push_data_hex(&mut self, hex_str: &str) -> Result<(), ScriptError> {
        let data = hex::decode(hex_str).map_err(|_| ScriptError::InvalidPushData)?;
        self.append_push_data(&data)
    }

    /// Append raw opcodes.
    ///
    /// Rejects push data opcodes (OP_DATA_1..OP_PUSHDATA4); use
    /// [`Script::append_push_data`] for those.
    pub fn append_opcodes(&mut self, opcodes: &[u8]) -> Result<(), ScriptError> {
        for &op in opcodes {
            if (OP_DATA_1..=OP_PUSHDATA4).contains(&op) {
                return Err(ScriptError::InvalidOpcodeType(
                    opcode_to_string(op).to_string(),
                ));
            }
        }
        self.0.extend_from_slice(opcodes);
        Ok(())
    }

    /// Check byte equality with another script.
    pub fn equals(&self, other: &Script) -> bool {
        self.0 == other.0
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Read one script operation at `pos`, advancing past it.
    ///
    /// Unlike [`decode_script`], OP_RETURN is read as a bare opcode so
    /// ASM rendering keeps walking the trailing bytes.
    fn read_op(&self, pos: &mut usize) -> Result<ScriptChunk, ScriptError> {
        let b = &self.0;
        if *pos >= b.len() {
            return Err(ScriptError::IndexOutOfRange);
        }
        let op = b[*pos];
        match op {
            OP_PUSHDATA1 => {
                if b.len() < *pos + 2 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length = b[*pos + 1] as usize;
                *pos += 2;
                if b.len() < *pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = b[*pos..*pos + length].to_vec();
                *pos += length;
                Ok(ScriptChunk { op: OP_PUSHDATA1, data: Some(data) })
            }
            OP_PUSHDATA2 => {
                if b.len() < *pos + 3 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length = u16::from_le_bytes([b[*pos + 1], b[*pos + 2]]) as usize;
                *pos += 3;
                if b.len() < *pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = b[*pos..*pos + length].to_vec();
                *pos += length;
                Ok(ScriptChunk { op: OP_PUSHDATA2, data: Some(data) })
            }
            OP_PUSHDATA4 => {
                if b.len() < *pos + 5 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length =
                    u32::from_le_bytes([b[*pos + 1], b[*pos + 2], b[*pos + 3], b[*pos + 4]])
                        as usize;
                *pos += 5;
                if b.len() < *pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = b[*pos..*pos + length].to_vec();
                *pos += length;
                Ok(ScriptChunk { op: OP_PUSHDATA4, data: Some(data) })
            }
            _ if op >= OP_DATA_1 && op < OP_PUSHDATA1 => {
                let length = op as usize;
                if b.len() < *pos + 1 + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = b[*pos + 1..*pos + 1 + length].to_vec();
                *pos += 1 + length;
                Ok(ScriptChunk { op, data: Some(data) })
            }
            _ => {
                *pos += 1;
                Ok(ScriptChunk { op, data: None })
            }
        }
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
