//! Builder for STAS v2 locking scripts.

use stas_script::Address;
use stas_script::Script;

use crate::error::TokenError;
use crate::schema::{TokenSchema, TokenVersion};
use crate::script::reader;
use crate::script::templates::{
    FLAG_NON_SPLITTABLE, FLAG_SPLITTABLE, PKH_LEN, STAS_V2_OWNER_OFFSET,
    STAS_V2_REDEMPTION_OFFSET, STAS_V2_TEMPLATE_LEN,
};

/// The full STAS v2 template (1431 bytes) with zero placeholders for owner (bytes 3..23)
/// and redemption PKH (bytes 1411..1431).
const STAS_V2_TEMPLATE_HEX: &str = concat!(
    "76a914", "0000000000000000000000000000000000000000",
    "88ac6976aa607f5f7f7c5e7f7c5d7f7c5c7f7c5b7f7c5a7f7c597f7c587f7c577f7c567f7c557f7c547f7c537f7c527f7c517f7c7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e",
    "7c5f7f7c5e7f7c5d7f7c5c7f7c5b7f7c5a7f7c597f7c587f7c577f7c567f7c557f7c547f7c537f7c527f7c517f7c7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e",
    "01007e818b21414136d08c5ed2bf3ba048afe6dcaebafeffffffffffffffffffffffffffffff00",
    "7d976e7c5296a06394677768827601249301307c7e23022079be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798027e7c7e7c",
    "8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c",
    "8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c",
    "8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c",
    "8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c8276638c687f7c",
    "7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e7e",
    "01417e21038ff83d8cf12121491609c4939dc11c4aa35503508fe432dc5a5c1905608b9218ad",
    "547f7701207f01207f7701247f517f7801007e8102fd00a063546752687f7801007e817f727e7b01177f777b557a766471567a577a786354807e7e676d68",
    "aa880067765158a569765187645294567a5379587a7e7e78637c8c7c53797e577a7e6878637c8c7c53797e577a7e6878637c8c7c53797e577a7e68",
    "78637c8c7c53797e577a7e6878637c8c7c53797e577a7e6867567a6876aa587a7d54807e577a597a5a7a786354807e6f7e7eaa727c7e676d6e7eaa7c687b7eaa",
    "587a7d877663516752687c72879b69537a647500687c7b547f77517f7853a0916901247f77517f7c01007e817602fc00a06302fd00a063546752687f7c01007e81",
    "6854937f77788c6301247f77517f7c01007e817602fc00a06302fd00a063546752687f7c01007e816854937f777852946301247f77517f7c01007e81",
    "7602fc00a06302fd00a063546752687f7c01007e816854937f77686877517f7c52797d8b9f7c53a09b91697c76638c7c587f77517f7c01007e81",
    "7602fc00a06302fd00a063546752687f7c01007e81687f777c6876638c7c587f77517f7c01007e817602fc00a06302fd00a063546752687f7c01007e81",
    "687f777c6863587f77517f7c01007e817602fc00a06302fd00a063546752687f7c01007e81687f7768587f517f7801007e81",
    "7602fc00a06302fd00a063546752687f7801007e81727e7b7b687f75537f7c0376a9148801147f775379645579887567726881766968789263556753687a76",
    "026c057f7701147f8263517f7c766301007e817f7c6775006877686b537992635379528763547a6b547a6b677c6b567a6b537a7c717c71716868",
    "547a587f7c81547a557964936755795187637c686b687c547f7701207f75748c7a7669765880748c7a76567a876457790376a9147e7c7e557967",
    "041976a9147c7e0288ac687e7e5579636c766976748c7a9d58807e6c0376a9147e748c7a7e6c7e7e676c766b8263828c007c80517e846864745aa063",
    "7c748c7a76697d937b7b58807e56790376a9147e748c7a7e55797e7e6868686c567a5187637500678263828c007c80517e846868647459a063",
    "7c748c7a76697d937b7b58807e55790376a9147e748c7a7e55797e7e687459a0637c748c7a76697d937b7b58807e55790376a9147e748c7a7e55797e7e",
    "68687c537a9d547963557958807e041976a91455797e0288ac7e7e68aa87726d77776a14",
    "0000000000000000000000000000000000000000"
);

/// Build a STAS v2 locking script for one token output.
///
/// Patches the owner hash and the schema's issuer (redemption) hash into
/// the template, then appends the data section: flags, symbol, supply
/// and version pushes, plus the optional issue-time payload. Identical
/// inputs produce byte-identical scripts; the token amount lives in the
/// output value, never in the script.
///
/// # Errors
/// [`TokenError::UnsupportedVersion`] when the schema version is not
/// [`TokenVersion::V2`], [`TokenError::InvalidScheme`] when the schema
/// fails validation, [`TokenError::InvalidDestination`] for an empty
/// data payload.
pub fn build_stas_locking_script(
    owner: &Address,
    schema: &TokenSchema,
    data: Option<&[u8]>,
) -> Result<Script, TokenError> {
    schema.validate()?;
    if schema.version != TokenVersion::V2 {
        return Err(TokenError::UnsupportedVersion(schema.version.into()));
    }
    if let Some(payload) = data {
        if payload.is_empty() {
            return Err(TokenError::InvalidDestination(
                "issue data payload must not be empty".into(),
            ));
        }
    }

    let mut bytes = hex::decode(STAS_V2_TEMPLATE_HEX)
        .map_err(|e| TokenError::InvalidScript(format!("template decode error: {e}")))?;

    debug_assert_eq!(bytes.len(), STAS_V2_TEMPLATE_LEN);

    bytes[STAS_V2_OWNER_OFFSET..STAS_V2_OWNER_OFFSET + PKH_LEN]
        .copy_from_slice(&owner.public_key_hash);
    bytes[STAS_V2_REDEMPTION_OFFSET..STAS_V2_REDEMPTION_OFFSET + PKH_LEN]
        .copy_from_slice(&schema.issuer_pkh);

    let flags = if schema.splittable {
        FLAG_SPLITTABLE
    } else {
        FLAG_NON_SPLITTABLE
    };

    let mut script = Script::from_bytes(&bytes);
    script.append_push_data(&[flags])?;
    script.append_push_data(schema.symbol.as_bytes())?;
    script.append_push_data(&schema.supply.to_le_bytes())?;
    script.append_push_data(&[schema.version.into()])?;
    if let Some(payload) = data {
        script.append_push_data(payload)?;
    }

    Ok(script)
}

/// Rebuild a STAS locking script for a new owner.
///
/// Transfer, split and merge outputs re-emit the consumed locking script
/// with the owner hash swapped; the spending body, redemption hash and
/// appended data section carry over byte for byte.
///
/// # Errors
/// [`TokenError::InvalidScript`] when `token_script` does not parse as a
/// STAS v2 script.
pub fn update_stas_owner(
    token_script: &Script,
    new_owner: &Address,
) -> Result<Script, TokenError> {
    let bytes = token_script.to_bytes();
    if reader::parse_stas(bytes).is_none() {
        return Err(TokenError::InvalidScript(
            "not a STAS locking script".into(),
        ));
    }

    let mut updated = bytes.to_vec();
    updated[STAS_V2_OWNER_OFFSET..STAS_V2_OWNER_OFFSET + PKH_LEN]
        .copy_from_slice(&new_owner.public_key_hash);
    Ok(Script::from_bytes(&updated))
}
