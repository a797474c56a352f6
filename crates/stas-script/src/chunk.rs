//! Script chunk parsing and push data encoding.
//!
//! A chunk is a single script element: either a bare opcode or a data
//! push carrying its payload. Chunk-level parsing is what the token
//! script reader builds on, so OP_RETURN handling here follows node
//! behavior: outside a conditional block it consumes the remainder of
//! the script as data.

use crate::opcodes::*;
use crate::ScriptError;

/// A single parsed element of a Bitcoin script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte. For direct pushes (1-75 bytes) this is the length.
    pub op: u8,
    /// The pushed bytes, if this chunk is a push operation.
    pub data: Option<Vec<u8>>,
}

impl ScriptChunk {
    /// Render this chunk as an ASM token.
    ///
    /// Data pushes render as hex, bare opcodes by their OP_xxx name.
    pub fn to_asm_string(&self) -> String {
        if self.op > OP_0 && self.op <= OP_PUSHDATA4 {
            if let Some(ref data) = self.data {
                return hex::encode(data);
            }
        }
        opcode_to_string(self.op).to_string()
    }
}

/// Decode raw script bytes into chunks.
///
/// Handles direct pushes (1-75 bytes), OP_PUSHDATA1/2/4, and OP_RETURN.
/// An OP_RETURN outside a conditional block consumes the rest of the
/// script (including the OP_RETURN byte itself) as the chunk's data.
///
/// # Errors
/// Returns [`ScriptError::DataTooSmall`] if a push operation claims more
/// bytes than remain in the script.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0;
    let mut conditional_depth: i32 = 0;

    while pos < bytes.len() {
        let op = bytes[pos];

        match op {
            OP_IF | OP_NOTIF | OP_VERIF | OP_VERNOTIF => {
                conditional_depth += 1;
                chunks.push(ScriptChunk { op, data: None });
                pos += 1;
            }
            OP_ENDIF => {
                conditional_depth -= 1;
                chunks.push(ScriptChunk { op, data: None });
                pos += 1;
            }
            OP_RETURN => {
                if conditional_depth > 0 {
                    chunks.push(ScriptChunk { op, data: None });
                    pos += 1;
                } else {
                    let data = bytes[pos..].to_vec();
                    chunks.push(ScriptChunk { op, data: Some(data) });
                    pos = bytes.len();
                }
            }
            OP_PUSHDATA1 => {
                if bytes.len() < pos + 2 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length = bytes[pos + 1] as usize;
                pos += 2;
                if bytes.len() < pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                chunks.push(ScriptChunk {
                    op,
                    data: Some(bytes[pos..pos + length].to_vec()),
                });
                pos += length;
            }
            OP_PUSHDATA2 => {
                if bytes.len() < pos + 3 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length = u16::from_le_bytes([bytes[pos + 1], bytes[pos + 2]]) as usize;
                pos += 3;
                if bytes.len() < pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                chunks.push(ScriptChunk {
                    op,
                    data: Some(bytes[pos..pos + length].to_vec()),
                });
                pos += length;
            }
            OP_PUSHDATA4 => {
                if bytes.len() < pos + 5 {
                    return Err(ScriptError::DataTooSmall);
                }
                let length = u32::from_le_bytes([
                    bytes[pos + 1],
                    bytes[pos + 2],
                    bytes[pos + 3],
                    bytes[pos + 4],
                ]) as usize;
                pos += 5;
                if bytes.len() < pos + length {
                    return Err(ScriptError::DataTooSmall);
                }
                chunks.push(ScriptChunk {
                    op,
                    data: Some(bytes[pos..pos + length].to_vec()),
                });
                pos += length;
            }
            0x01..=0x4b => {
                let length = op as usize;
                if bytes.len() < pos + 1 + length {
                    return Err(ScriptError::DataTooSmall);
                }
                chunks.push(ScriptChunk {
                    op,
                    data: Some(bytes[pos + 1..pos + 1 + length].to_vec()),
                });
                pos += 1 + length;
            }
            _ => {
                chunks.push(ScriptChunk { op, data: None });
                pos += 1;
            }
        }
    }

    Ok(chunks)
}

/// Compute the push prefix for a payload of the given length.
///
/// Chooses the minimal encoding: a bare length byte up to 75 bytes,
/// then OP_PUSHDATA1/2/4 as the payload grows.
///
/// # Errors
/// Returns [`ScriptError::DataTooBig`] above the 4 GiB push limit.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>, ScriptError> {
    if data_len <= 75 {
        Ok(vec![data_len as u8])
    } else if data_len <= 0xFF {
        Ok(vec![OP_PUSHDATA1, data_len as u8])
    } else if data_len <= 0xFFFF {
        let mut buf = vec![OP_PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        Ok(buf)
    } else if data_len <= 0xFFFF_FFFF {
        let mut buf = vec![OP_PUSHDATA4];
        buf.extend_from_slice(&(data_len as u32).to_le_bytes());
        Ok(buf)
    } else {
        Err(ScriptError::DataTooBig)
    }
}
