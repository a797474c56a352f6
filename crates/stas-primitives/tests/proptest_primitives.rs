use proptest::prelude::*;

use stas_primitives::chainhash::Hash;
use stas_primitives::ec::private_key::PrivateKey;
use stas_primitives::ec::signature::Signature;
use stas_primitives::hash::sha256;
use stas_primitives::util::{VarInt, WireReader, WireWriter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn private_key_wif_roundtrip(seed in prop::array::uniform32(any::<u8>())) {
        // Not all 32-byte arrays are valid private keys (must be < curve order, nonzero).
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let wif = pk.to_wif();
            let pk2 = PrivateKey::from_wif(&wif).unwrap();
            prop_assert_eq!(pk.to_hex(), pk2.to_hex());
            // The derived key hash is what scripts lock to.
            prop_assert_eq!(pk.pub_key().hash160().len(), 20);
        }
    }

    #[test]
    fn ecdsa_sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let hash = sha256(&msg);
            let sig = pk.sign(&hash).unwrap();
            let pub_key = pk.pub_key();
            prop_assert!(pub_key.verify(&hash, &sig));
        }
    }

    #[test]
    fn signature_der_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let sig = pk.sign(&sha256(&msg)).unwrap();
            let der = sig.to_der();
            let parsed = Signature::from_der(&der).unwrap();
            prop_assert_eq!(sig, parsed);
        }
    }

    #[test]
    fn hash_hex_roundtrip(bytes in prop::array::uniform32(any::<u8>())) {
        let hash = Hash::new(bytes);
        let hex_str = hash.to_string();
        let hash2 = Hash::from_hex(&hex_str).unwrap();
        prop_assert_eq!(hash.as_bytes(), hash2.as_bytes());
    }

    #[test]
    fn varint_roundtrip(value in any::<u64>()) {
        let varint = VarInt(value);
        let bytes = varint.to_bytes();
        prop_assert_eq!(bytes.len(), varint.length());

        let mut reader = WireReader::new(&bytes);
        let parsed = reader.read_varint().unwrap();
        prop_assert_eq!(parsed.value(), value);
        prop_assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn wire_roundtrip(
        byte in any::<u8>(),
        word in any::<u32>(),
        count in any::<u64>(),
        payload in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        let mut writer = WireWriter::new();
        writer.write_u8(byte);
        writer.write_u32_le(word);
        writer.write_varint(VarInt(count));
        writer.write_bytes(&payload);
        let encoded = writer.into_bytes();

        let mut reader = WireReader::new(&encoded);
        prop_assert_eq!(reader.read_u8().unwrap(), byte);
        prop_assert_eq!(reader.read_u32_le().unwrap(), word);
        prop_assert_eq!(reader.read_varint().unwrap().value(), count);
        prop_assert_eq!(reader.read_bytes(payload.len()).unwrap(), payload.as_slice());
        prop_assert_eq!(reader.remaining(), 0);
    }
}
