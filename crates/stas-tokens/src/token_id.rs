//! Token identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

use stas_script::{Address, Network};

use crate::error::TokenError;

/// A unique token identifier.
///
/// The token id is the Base58Check address form of the schema's issuer
/// public key hash, the same 20 bytes embedded as the redemption hash at
/// the tail of every STAS locking script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TokenId {
    /// The Base58Check address string.
    address_string: String,
    /// The 20-byte public key hash.
    #[serde(with = "hex_pkh")]
    pkh: [u8; 20],
}

mod hex_pkh {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8; 20], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 20], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let mut arr = [0u8; 20];
        if bytes.len() != 20 {
            return Err(serde::de::Error::custom("expected 20 bytes"));
        }
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}

impl TokenId {
    /// Create a `TokenId` from an [`Address`].
    pub fn from_address(address: &Address) -> Self {
        Self {
            address_string: address.address_string.clone(),
            pkh: address.public_key_hash,
        }
    }

    /// Parse a `TokenId` from a Base58Check address string.
    pub fn from_string(address: &str) -> Result<Self, TokenError> {
        let address = Address::from_string(address)?;
        Ok(Self::from_address(&address))
    }

    /// Create a `TokenId` directly from a 20-byte public key hash.
    pub fn from_pkh(pkh: [u8; 20]) -> Self {
        let address = Address::from_public_key_hash(&pkh, Network::Mainnet);
        Self {
            address_string: address.address_string,
            pkh,
        }
    }

    /// Returns the address string.
    pub fn as_str(&self) -> &str {
        &self.address_string
    }

    /// Returns the 20-byte public key hash.
    pub fn public_key_hash(&self) -> &[u8; 20] {
        &self.pkh
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}
