use proptest::prelude::*;
use skywallet_core::{
    address_from_pubkey, decode_address_raw, derive_pair, iterate, pubkey_from_seckey,
    recover_pubkey, sign_digest, ErrorCode, MAX_SEED_LEN,
};

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn any_secret_key() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
        .prop_filter("valid secp256k1 scalar", |bytes| pubkey_from_seckey(bytes).is_ok())
}

proptest! {
    #[test]
    fn derived_addresses_stay_in_alphabet(seed in prop::collection::vec(any::<u8>(), 0..64)) {
        let (_, pubkey) = derive_pair(&seed).unwrap();
        let address = address_from_pubkey(&pubkey);

        prop_assert!(address.len() <= 35);
        prop_assert!(address.chars().all(|c| BASE58_ALPHABET.contains(c)));

        // Base58 round-trip recovers the 25-byte form: hash, version, checksum
        let decoded = bs58::decode(&address).into_vec().unwrap();
        prop_assert_eq!(decoded.len(), 25);
        prop_assert_eq!(decoded[20], 0);
        let checksum = skywallet_core::sha256(&decoded[..21]);
        prop_assert_eq!(&decoded[21..], &checksum[..4]);

        let raw = decode_address_raw(&address).unwrap();
        prop_assert_eq!(&raw[..], &decoded[..20]);
    }

    #[test]
    fn derivation_is_deterministic(seed in prop::collection::vec(any::<u8>(), 0..MAX_SEED_LEN)) {
        let (next1, sk1, pk1) = iterate(&seed).unwrap();
        let (next2, sk2, pk2) = iterate(&seed).unwrap();

        prop_assert_eq!(*next1, *next2);
        prop_assert_eq!(*sk1, *sk2);
        prop_assert_eq!(pk1, pk2);
    }

    #[test]
    fn oversized_seeds_are_rejected(
        seed in prop::collection::vec(any::<u8>(), MAX_SEED_LEN + 1..MAX_SEED_LEN + 64)
    ) {
        let err = iterate(&seed).unwrap_err();
        prop_assert_eq!(err.code, ErrorCode::InputTooLong);
    }

    #[test]
    fn signatures_recover_their_signer(
        seckey in any_secret_key(),
        digest in prop::array::uniform32(any::<u8>()),
        nonce in any::<u32>(),
    ) {
        let pubkey = pubkey_from_seckey(&seckey).unwrap();
        let signature = sign_digest(&seckey, &digest, nonce).unwrap();

        prop_assert!(signature[64] < 4);
        prop_assert_eq!(recover_pubkey(&digest, &signature).unwrap(), pubkey);
    }
}
