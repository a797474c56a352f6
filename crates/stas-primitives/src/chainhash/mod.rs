//! Transaction id hash type.
//!
//! `Hash` is a 32-byte array stored in internal (little-endian) order and
//! displayed as byte-reversed hex, the convention every explorer and node
//! API uses for transaction ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PrimitivesError;

/// Size of a `Hash` in bytes.
pub const HASH_SIZE: usize = 32;

/// Maximum hex string length for a `Hash` (64 characters).
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;

/// A 32-byte hash identifying a transaction.
///
/// Stored in internal byte order; `Display` and `from_hex` use the
/// reversed (display) order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Create a `Hash` from a raw 32-byte array in internal order.
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a `Hash` from a slice that must be exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != HASH_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            )));
        }
        let mut arr = [0u8; HASH_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Hash(arr))
    }

    /// Parse a byte-reversed hex string.
    ///
    /// The string represents the display order; short strings are padded
    /// with leading zeros on the high end, so `"1"` parses to the hash
    /// whose internal bytes start with `0x01`.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Ok(Hash::default());
        }
        if hex_str.len() > MAX_HASH_STRING_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "max hash string length is {} bytes",
                MAX_HASH_STRING_SIZE
            )));
        }

        let padded = if hex_str.len() % 2 != 0 {
            format!("0{}", hex_str)
        } else {
            hex_str.to_string()
        };

        let decoded = hex::decode(&padded)?;
        let mut display_order = [0u8; HASH_SIZE];
        let offset = HASH_SIZE - decoded.len();
        display_order[offset..].copy_from_slice(&decoded);

        let mut internal = [0u8; HASH_SIZE];
        for i in 0..HASH_SIZE {
            internal[i] = display_order[HASH_SIZE - 1 - i];
        }

        Ok(Hash(internal))
    }

    /// Access the internal byte array.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Return the internal bytes as an owned array.
    pub fn to_bytes(&self) -> [u8; HASH_SIZE] {
        self.0
    }
}

/// Display as byte-reversed hex: internal `[0x06, 0xe5, ...]` prints as
/// `"...e506"`.
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

impl FromStr for Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Genesis block hash in internal (little-endian) order.
    const GENESIS_HASH: Hash = Hash([
        0x6f, 0xe2, 0x8c, 0x0a, 0xb6, 0xf1, 0xb3, 0x72,
        0xc1, 0xa6, 0xa2, 0x46, 0xae, 0x63, 0xf7, 0x4f,
        0x93, 0x1e, 0x83, 0x65, 0xe1, 0x5a, 0x08, 0x9c,
        0x68, 0xd6, 0x19, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]);

    #[test]
    fn display_reverses_bytes() {
        // Block 100000 hash in internal byte order.
        let hash = Hash::new([
            0x06, 0xe5, 0x33, 0xfd, 0x1a, 0xda, 0x86, 0x39,
            0x1f, 0x3f, 0x6c, 0x34, 0x32, 0x04, 0xb0, 0xd2,
            0x78, 0xd4, 0xaa, 0xec, 0x1c, 0x0b, 0x20, 0xaa,
            0x27, 0xba, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]);
        assert_eq!(
            hash.to_string(),
            "000000000003ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506"
        );
    }

    #[test]
    fn from_hex_full_and_stripped() {
        let full = Hash::from_hex(
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
        )
        .unwrap();
        assert_eq!(full, GENESIS_HASH);

        // Leading zeros may be stripped.
        let stripped =
            Hash::from_hex("19d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f").unwrap();
        assert_eq!(stripped, GENESIS_HASH);

        // Empty string yields the zero hash.
        assert_eq!(Hash::from_hex("").unwrap(), Hash::default());

        // Single digit lands in the low display byte.
        let one = Hash::from_hex("1").unwrap();
        let mut expected = [0u8; HASH_SIZE];
        expected[0] = 0x01;
        assert_eq!(one, Hash::new(expected));
    }

    #[test]
    fn from_hex_rejects_oversize() {
        let too_long = "ab".repeat(HASH_SIZE + 1);
        assert!(Hash::from_hex(&too_long).is_err());
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        assert!(Hash::from_bytes(&[0u8; HASH_SIZE + 1]).is_err());
        assert!(Hash::from_bytes(&[0u8; 4]).is_err());
    }

    #[test]
    fn hex_roundtrip() {
        let hex_str = GENESIS_HASH.to_string();
        assert_eq!(Hash::from_hex(&hex_str).unwrap(), GENESIS_HASH);
    }

    #[test]
    fn serde_as_hex_string() {
        let json = serde_json::to_string(&GENESIS_HASH).unwrap();
        assert_eq!(
            json,
            "\"000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f\""
        );
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GENESIS_HASH);
    }
}
