//! Token schema definition and validation.

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::token_id::TokenId;

/// Maximum ticker symbol length in bytes.
pub const MAX_SYMBOL_LEN: usize = 128;

/// STAS protocol version of a token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TokenVersion {
    /// Legacy STAS tokens, recognized when parsing only.
    V1,
    /// The current 1431-byte STAS template; the only version new scripts
    /// are built for.
    V2,
}

impl From<TokenVersion> for u8 {
    fn from(version: TokenVersion) -> u8 {
        match version {
            TokenVersion::V1 => 1,
            TokenVersion::V2 => 2,
        }
    }
}

impl TryFrom<u8> for TokenVersion {
    type Error = TokenError;

    fn try_from(byte: u8) -> Result<Self, TokenError> {
        match byte {
            1 => Ok(TokenVersion::V1),
            2 => Ok(TokenVersion::V2),
            other => Err(TokenError::UnsupportedVersion(other)),
        }
    }
}

/// Immutable descriptor of a token class.
///
/// Created once at contract time, embedded as a JSON record in the
/// contract transaction's OP_RETURN output, and committed (issuer hash,
/// symbol, supply, version) into every STAS locking script of the
/// class. Never mutated after issuance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSchema {
    /// Human-readable token name.
    pub name: String,
    /// The issuer's 20-byte public key hash. Doubles as the redemption
    /// hash embedded in every token script, and as the token id.
    #[serde(with = "hex_pkh")]
    pub issuer_pkh: [u8; 20],
    /// Ticker symbol, 1 to [`MAX_SYMBOL_LEN`] bytes of `[A-Za-z0-9_\-@&]`.
    pub symbol: String,
    /// Total supply in satoshis.
    pub supply: u64,
    /// Satoshis representing one display token.
    pub satoshis_per_token: u64,
    /// Whether token outputs of this class may be split.
    pub splittable: bool,
    /// Protocol version.
    pub version: TokenVersion,
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

impl TokenSchema {
    /// Validate the schema fields.
    ///
    /// # Errors
    /// [`TokenError::InvalidScheme`] for a zero supply, a zero
    /// satoshis-per-token ratio, a supply that is not a whole number of
    /// tokens, or a bad symbol.
    pub fn validate(&self) -> Result<(), TokenError> {
        if self.supply == 0 {
            return Err(TokenError::InvalidScheme(
                "supply must be greater than zero".into(),
            ));
        }
        if self.satoshis_per_token == 0 {
            return Err(TokenError::InvalidScheme(
                "satoshis per token must be at least 1".into(),
            ));
        }
        if self.supply % self.satoshis_per_token != 0 {
            return Err(TokenError::InvalidScheme(format!(
                "supply {} is not a whole multiple of satoshis per token {}",
                self.supply, self.satoshis_per_token
            )));
        }
        validate_symbol(&self.symbol)
    }

    /// The token id derived from the issuer public key hash.
    pub fn token_id(&self) -> TokenId {
        TokenId::from_pkh(self.issuer_pkh)
    }

    /// Serialize the schema to its JSON record bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TokenError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize a schema from its JSON record bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TokenError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Check a ticker symbol: 1 to [`MAX_SYMBOL_LEN`] bytes drawn from
/// `[A-Za-z0-9_\-@&]`.
pub fn validate_symbol(symbol: &str) -> Result<(), TokenError> {
    if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
        return Err(TokenError::InvalidScheme(format!(
            "symbol must be 1 to {} bytes, got {}",
            MAX_SYMBOL_LEN,
            symbol.len()
        )));
    }
    let ok = symbol
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'@' | b'&'));
    if !ok {
        return Err(TokenError::InvalidScheme(format!(
            "symbol '{}' contains characters outside [A-Za-z0-9_-@&]",
            symbol
        )));
    }
    Ok(())
}
