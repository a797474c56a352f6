//! Byte-pattern constants for the STAS v2 locking script layout.

/// STAS v2 prefix: OP_DUP OP_HASH160 OP_DATA_20.
pub const STAS_V2_PREFIX: [u8; 3] = [0x76, 0xa9, 0x14];

/// Bytes immediately after the 20-byte owner PKH in a STAS v2 script:
/// OP_EQUALVERIFY OP_CHECKSIG OP_VERIFY OP_DUP OP_HASH160 OP_16.
pub const STAS_V2_MARKER: [u8; 6] = [0x88, 0xac, 0x69, 0x76, 0xaa, 0x60];

/// Offset of the owner public key hash in a STAS v2 script (bytes 3..23).
pub const STAS_V2_OWNER_OFFSET: usize = 3;

/// Length of a public key hash (20 bytes).
pub const PKH_LEN: usize = 20;

/// Offset where the post-owner marker begins (byte 23).
pub const STAS_V2_MARKER_OFFSET: usize = STAS_V2_OWNER_OFFSET + PKH_LEN;

/// Total length of the STAS v2 template (owner + spending body +
/// OP_RETURN + redemption), excluding the appended data section.
pub const STAS_V2_TEMPLATE_LEN: usize = 1431;

/// Offset of OP_RETURN (0x6a) in the STAS v2 template.
pub const STAS_V2_OP_RETURN_OFFSET: usize = 1409;

/// Offset of the redemption PKH in the STAS v2 template (bytes
/// 1411..1431), preceded by OP_DATA_20 (0x14) at offset 1410.
pub const STAS_V2_REDEMPTION_OFFSET: usize = 1411;

/// Minimum length for a STAS v2 script: the template plus the smallest
/// appended section (flags, one-byte symbol, supply, version pushes).
pub const STAS_V2_MIN_LEN: usize = STAS_V2_TEMPLATE_LEN + 2 + 2 + 9 + 2;

/// Appended flags byte marking a splittable token.
pub const FLAG_SPLITTABLE: u8 = 0x00;

/// Appended flags byte marking a non-splittable token.
pub const FLAG_NON_SPLITTABLE: u8 = 0x01;

/// Standard P2PKH locking script length (25 bytes).
pub const P2PKH_LEN: usize = 25;

/// P2PKH prefix: OP_DUP OP_HASH160 OP_DATA_20.
pub const P2PKH_PREFIX: [u8; 3] = [0x76, 0xa9, 0x14];

/// P2PKH suffix: OP_EQUALVERIFY OP_CHECKSIG.
pub const P2PKH_SUFFIX: [u8; 2] = [0x88, 0xac];
