//! Locking script classification and STAS field extraction.

use crate::schema::{TokenVersion, MAX_SYMBOL_LEN};
use crate::script::templates::{
    FLAG_NON_SPLITTABLE, FLAG_SPLITTABLE, P2PKH_LEN, P2PKH_PREFIX, P2PKH_SUFFIX, PKH_LEN,
    STAS_V2_MARKER, STAS_V2_MARKER_OFFSET, STAS_V2_MIN_LEN, STAS_V2_OP_RETURN_OFFSET,
    STAS_V2_OWNER_OFFSET, STAS_V2_PREFIX, STAS_V2_REDEMPTION_OFFSET, STAS_V2_TEMPLATE_LEN,
};
use crate::script_type::ScriptType;
use crate::token_id::TokenId;

/// Fields extracted from a STAS v2 locking script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StasFields {
    /// The 20-byte hash of the owner's public key. Spending requires the
    /// matching key.
    pub owner_hash: [u8; 20],
    /// The 20-byte redemption hash baked in at issue time. It never
    /// changes across transfers and identifies the token class.
    pub redemption_hash: [u8; 20],
    /// Whether the token value may be split across several outputs.
    pub splittable: bool,
    /// The token symbol.
    pub symbol: String,
    /// Total supply recorded at issue time.
    pub supply: u64,
    /// The STAS protocol version.
    pub version: TokenVersion,
    /// Optional issue-time data payload carried by every descendant
    /// script.
    pub data: Option<Vec<u8>>,
}

impl StasFields {
    /// The token id derived from the redemption hash.
    pub fn token_id(&self) -> TokenId {
        TokenId::from_pkh(self.redemption_hash)
    }

    /// Whether `other` belongs to the same token class, meaning the
    /// redemption hash and symbol both match.
    pub fn same_token(&self, other: &StasFields) -> bool {
        self.redemption_hash == other.redemption_hash && self.symbol == other.symbol
    }
}

/// A classified locking script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedScript {
    /// A STAS v2 token script with its extracted fields.
    StasV2(StasFields),
    /// A standard pay-to-public-key-hash script.
    P2pkh {
        /// The 20-byte public key hash the output pays to.
        owner_hash: [u8; 20],
    },
    /// An OP_RETURN (or OP_FALSE OP_RETURN) data carrier.
    OpReturn,
    /// Anything else, including truncated or mutated token templates.
    Unknown,
}

impl ParsedScript {
    /// The coarse script type of this classification.
    pub fn script_type(&self) -> ScriptType {
        match self {
            ParsedScript::StasV2(_) => ScriptType::StasV2,
            ParsedScript::P2pkh { .. } => ScriptType::P2pkh,
            ParsedScript::OpReturn => ScriptType::OpReturn,
            ParsedScript::Unknown => ScriptType::Unknown,
        }
    }
}

/// Quick probe for the STAS v2 shape: prefix, marker and minimum length.
///
/// A `true` here does not guarantee [`parse_stas`] succeeds; the
/// appended data section may still be malformed.
pub fn is_stas(script: &[u8]) -> bool {
    script.len() >= STAS_V2_MIN_LEN
        && script[..STAS_V2_PREFIX.len()] == STAS_V2_PREFIX
        && script[STAS_V2_MARKER_OFFSET..STAS_V2_MARKER_OFFSET + STAS_V2_MARKER.len()]
            == STAS_V2_MARKER
}

/// Classify a locking script.
///
/// Tries STAS v2 first, then P2PKH, then OP_RETURN. A script that looks
/// like a STAS template but whose appended data section fails strict
/// parsing falls through to the later matches (so a mutated template
/// never masquerades as a valid token).
pub fn read_locking_script(script: &[u8]) -> ParsedScript {
    if let Some(fields) = parse_stas(script) {
        return ParsedScript::StasV2(fields);
    }

    if script.len() == P2PKH_LEN
        && script[..P2PKH_PREFIX.len()] == P2PKH_PREFIX
        && script[P2PKH_LEN - P2PKH_SUFFIX.len()..] == P2PKH_SUFFIX
    {
        let mut owner_hash = [0u8; 20];
        owner_hash.copy_from_slice(&script[3..23]);
        return ParsedScript::P2pkh { owner_hash };
    }

    if script.first() == Some(&0x6a) {
        return ParsedScript::OpReturn;
    }
    if script.len() >= 2 && script[0] == 0x00 && script[1] == 0x6a {
        return ParsedScript::OpReturn;
    }

    ParsedScript::Unknown
}

/// Parse a script as a STAS v2 token script.
///
/// Returns `None` unless the prefix, marker, OP_RETURN trailer and the
/// whole appended data section all check out: flags must be a single
/// `0x00` or `0x01` byte, the symbol 1 to 128 bytes of UTF-8, the supply
/// exactly 8 little-endian bytes and the version a single supported
/// byte, with at most one trailing data item and no stray bytes.
pub fn parse_stas(script: &[u8]) -> Option<StasFields> {
    if !is_stas(script) {
        return None;
    }
    if script[STAS_V2_OP_RETURN_OFFSET] != 0x6a || script[STAS_V2_OP_RETURN_OFFSET + 1] != 0x14 {
        return None;
    }

    let mut owner_hash = [0u8; 20];
    owner_hash.copy_from_slice(&script[STAS_V2_OWNER_OFFSET..STAS_V2_OWNER_OFFSET + PKH_LEN]);
    let mut redemption_hash = [0u8; 20];
    redemption_hash
        .copy_from_slice(&script[STAS_V2_REDEMPTION_OFFSET..STAS_V2_REDEMPTION_OFFSET + PKH_LEN]);

    let items = parse_push_items(&script[STAS_V2_TEMPLATE_LEN..])?;
    if items.len() < 4 || items.len() > 5 {
        return None;
    }

    let splittable = match items[0].as_slice() {
        [FLAG_SPLITTABLE] => true,
        [FLAG_NON_SPLITTABLE] => false,
        _ => return None,
    };

    if items[1].is_empty() || items[1].len() > MAX_SYMBOL_LEN {
        return None;
    }
    let symbol = String::from_utf8(items[1].clone()).ok()?;

    let supply = u64::from_le_bytes(items[2].as_slice().try_into().ok()?);

    if items[3].len() != 1 {
        return None;
    }
    let version = TokenVersion::try_from(items[3][0]).ok()?;

    let data = items.get(4).cloned();

    Some(StasFields {
        owner_hash,
        redemption_hash,
        splittable,
        symbol,
        supply,
        version,
        data,
    })
}

/// Walk a byte slice as consecutive push-data items. The entire slice
/// must decode as pushes; any other opcode or a truncated push means a
/// mutated script and yields `None`.
fn parse_push_items(data: &[u8]) -> Option<Vec<Vec<u8>>> {
    let mut items = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let opcode = data[offset];
        let (start, len) = match opcode {
            0x01..=0x4b => (offset + 1, opcode as usize),
            // OP_PUSHDATA1
            0x4c => {
                if offset + 1 >= data.len() {
                    return None;
                }
                (offset + 2, data[offset + 1] as usize)
            }
            // OP_PUSHDATA2
            0x4d => {
                if offset + 2 >= data.len() {
                    return None;
                }
                let len = u16::from_le_bytes([data[offset + 1], data[offset + 2]]) as usize;
                (offset + 3, len)
            }
            _ => return None,
        };
        let end = start + len;
        if end > data.len() {
            return None;
        }
        items.push(data[start..end].to_vec());
        offset = end;
    }
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TokenSchema;
    use crate::script::stas_builder::build_stas_locking_script;
    use stas_script::{Address, Network};

    fn test_address(pkh: [u8; 20]) -> Address {
        Address::from_public_key_hash(&pkh, Network::Mainnet)
    }

    fn test_schema() -> TokenSchema {
        TokenSchema {
            name: "Test Token".to_string(),
            issuer_pkh: [0xbb; 20],
            symbol: "TEST".to_string(),
            supply: 10_000,
            satoshis_per_token: 1,
            splittable: true,
            version: TokenVersion::V2,
        }
    }

    fn built_stas(data: Option<&[u8]>) -> Vec<u8> {
        build_stas_locking_script(&test_address([0xaa; 20]), &test_schema(), data)
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[test]
    fn classify_stas() {
        let script = built_stas(None);
        assert!(is_stas(&script));
        assert_eq!(
            read_locking_script(&script).script_type(),
            ScriptType::StasV2
        );
    }

    #[test]
    fn classify_p2pkh_and_extract_owner() {
        let script = hex::decode("76a914e2a623699e81b291c0327f408fea765d534baa2a88ac").unwrap();
        match read_locking_script(&script) {
            ParsedScript::P2pkh { owner_hash } => {
                assert_eq!(
                    hex::encode(owner_hash),
                    "e2a623699e81b291c0327f408fea765d534baa2a"
                );
            }
            other => panic!("expected P2PKH, got {other:?}"),
        }
    }

    #[test]
    fn classify_op_return() {
        let script = hex::decode("6a0568656c6c6f").unwrap();
        assert_eq!(read_locking_script(&script), ParsedScript::OpReturn);
    }

    #[test]
    fn classify_op_false_op_return() {
        let script = hex::decode("006a0568656c6c6f").unwrap();
        assert_eq!(read_locking_script(&script), ParsedScript::OpReturn);
    }

    #[test]
    fn classify_unknown() {
        // an OP_CHECKSIG-only script matches nothing we track
        let script = [0xacu8];
        assert_eq!(read_locking_script(&script), ParsedScript::Unknown);
    }

    #[test]
    fn classify_empty() {
        assert_eq!(read_locking_script(&[]), ParsedScript::Unknown);
    }

    #[test]
    fn garbage_bytes_do_not_panic() {
        let script: Vec<u8> = (0..2000).map(|i| (i % 251) as u8).collect();
        let _ = read_locking_script(&script);
    }

    #[test]
    fn truncated_template_is_not_stas() {
        let script = built_stas(None);
        for cut in [30, 500, 1408, 1430, STAS_V2_TEMPLATE_LEN, script.len() - 1] {
            let parsed = read_locking_script(&script[..cut]);
            assert!(
                !matches!(parsed, ParsedScript::StasV2(_)),
                "cut at {cut} still classified as STAS"
            );
        }
    }

    #[test]
    fn mutated_marker_is_unknown() {
        let mut script = built_stas(None);
        script[STAS_V2_MARKER_OFFSET] ^= 0x01;
        assert_eq!(read_locking_script(&script), ParsedScript::Unknown);
    }

    #[test]
    fn mutated_flags_is_unknown() {
        let mut script = built_stas(None);
        // the flags byte sits right after the template's length byte
        script[STAS_V2_TEMPLATE_LEN + 1] = 0x02;
        assert_eq!(read_locking_script(&script), ParsedScript::Unknown);
    }

    #[test]
    fn trailing_non_push_byte_is_unknown() {
        let mut script = built_stas(None);
        script.push(0xff);
        assert_eq!(read_locking_script(&script), ParsedScript::Unknown);
    }

    #[test]
    fn missing_op_return_trailer_is_unknown() {
        let mut script = built_stas(None);
        script[STAS_V2_OP_RETURN_OFFSET] = 0x00;
        assert_eq!(read_locking_script(&script), ParsedScript::Unknown);
    }

    #[test]
    fn same_token_requires_matching_redemption_and_symbol() {
        let a = parse_stas(&built_stas(None)).unwrap();

        let mut b = a.clone();
        assert!(a.same_token(&b));

        b.owner_hash = [0x99; 20];
        assert!(a.same_token(&b));

        b.symbol = "OTHER".to_string();
        assert!(!a.same_token(&b));

        let mut c = a.clone();
        c.redemption_hash = [0x00; 20];
        assert!(!a.same_token(&c));
    }

    #[test]
    fn fields_survive_data_payload() {
        let fields = parse_stas(&built_stas(Some(b"payload"))).unwrap();
        assert_eq!(fields.symbol, "TEST");
        assert_eq!(fields.supply, 10_000);
        assert_eq!(fields.data, Some(b"payload".to_vec()));
    }
}
