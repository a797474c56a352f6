//! Token script type classification.

use std::fmt;

/// Classification of locking script types relevant to token operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptType {
    /// STAS v2 token script.
    StasV2,
    /// Standard Pay-to-Public-Key-Hash script.
    P2pkh,
    /// OP_RETURN data carrier script.
    OpReturn,
    /// Unknown or unrecognized script type.
    Unknown,
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptType::StasV2 => write!(f, "STAS"),
            ScriptType::P2pkh => write!(f, "P2PKH"),
            ScriptType::OpReturn => write!(f, "OP_RETURN"),
            ScriptType::Unknown => write!(f, "Unknown"),
        }
    }
}
