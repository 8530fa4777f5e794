//! Deterministic Key Derivation
//!
//! Reproduces the network's key-derivation protocol byte for byte: a seed
//! deterministically yields a secp256k1 key pair and the next seed in the
//! chain, so the device and the reference node derive identical addresses.
//!
//! SECURITY: every secret-bearing intermediate (secret keys, chained
//! seeds, mixing buffers) is held in `Zeroizing` so it is wiped on every
//! exit path, including early error returns.

use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{ecdh, pubkey_from_seckey, sha256, sha256_two};
use crate::error::{WalletError, WalletResult};
use crate::types::{Digest, PublicKeyBytes, SecretKeyBytes, MAX_ADDRESS_INDEX, MAX_SEED_LEN};
use crate::wallet::address;

/// Derive a key pair from a seed: `seckey = SHA256(seed)`, lifted to a point
///
/// Single hash-and-lift with no validity retry, matching the reference
/// implementation exactly. The hash landing outside the scalar range is a
/// ~2^-128 event and surfaces as an error instead of being re-hashed.
pub fn derive_pair(seed: &[u8]) -> WalletResult<(Zeroizing<SecretKeyBytes>, PublicKeyBytes)> {
    let seckey = Zeroizing::new(sha256(seed));
    let pubkey = pubkey_from_seckey(&seckey)?;
    Ok((seckey, pubkey))
}

/// Advance the deterministic chain one step
///
/// Returns `(next_seed, seckey, pubkey)`. Walking the chain yields the
/// wallet's address sequence: `seed_0 -> (seed_1, key_0)`,
/// `seed_1 -> (seed_2, key_1)`, and so on. Rejects seeds longer than
/// [`MAX_SEED_LEN`] before touching any buffer.
pub fn iterate(
    seed: &[u8],
) -> WalletResult<(Zeroizing<Digest>, Zeroizing<SecretKeyBytes>, PublicKeyBytes)> {
    if seed.len() > MAX_SEED_LEN {
        return Err(WalletError::input_too_long(format!(
            "Seed must be at most {} bytes, got {}",
            MAX_SEED_LEN,
            seed.len()
        )));
    }

    let next_seed = Zeroizing::new(secp256k1_hash(seed)?);

    let mut scratch = Zeroizing::new(Vec::with_capacity(seed.len() + next_seed.len()));
    scratch.extend_from_slice(seed);
    scratch.extend_from_slice(next_seed.as_ref());

    let keypair_seed = Zeroizing::new(sha256(&scratch));
    let (seckey, pubkey) = derive_pair(keypair_seed.as_ref())?;

    Ok((next_seed, seckey, pubkey))
}

/// The protocol's seed-mixing hash
///
/// Not a general hash function: it folds a throwaway key pair and an ECDH
/// exchange into the digest, making each chain step cost two derivations
/// and a scalar multiply. Mutually recursive with [`derive_pair`] by
/// design; both are pure, so the recursion is plain function calls.
pub fn secp256k1_hash(seed: &[u8]) -> WalletResult<Digest> {
    let hash = Zeroizing::new(sha256(seed));

    let (seckey, _) = derive_pair(hash.as_ref())?;

    let hash2 = Zeroizing::new(sha256(hash.as_ref()));
    let (throwaway, pubkey) = derive_pair(hash2.as_ref())?;
    drop(throwaway);

    let ecdh_key = Zeroizing::new(ecdh(&pubkey, &seckey)?);

    Ok(sha256_two(hash.as_ref(), ecdh_key.as_ref()))
}

/// Walk the chain to the key pair at `index` (0-based)
///
/// Intermediate seeds and discarded key pairs are wiped as the walk
/// advances. Indexes past [`MAX_ADDRESS_INDEX`] are refused; a request
/// that far down the chain is a dispatch-layer bug, not a wallet.
pub fn key_pair_at_index(
    seed: &[u8],
    index: u32,
) -> WalletResult<(Zeroizing<SecretKeyBytes>, PublicKeyBytes)> {
    if index > MAX_ADDRESS_INDEX {
        return Err(WalletError::invalid_input(format!(
            "Address index must be at most {}, got {}",
            MAX_ADDRESS_INDEX, index
        )));
    }

    let mut current = Zeroizing::new(seed.to_vec());
    let mut step = 0;
    loop {
        let (next_seed, seckey, pubkey) = iterate(&current)?;
        if step == index {
            return Ok((seckey, pubkey));
        }
        current.zeroize();
        current.extend_from_slice(&*next_seed);
        step += 1;
    }
}

/// Derive `count` consecutive addresses starting at `start_index`
///
/// This is the bulk form the dispatch layer uses to answer address
/// requests; only public material leaves the function.
pub fn derive_addresses(
    seed: &[u8],
    start_index: u32,
    count: u32,
) -> WalletResult<Vec<String>> {
    if count == 0 {
        return Err(WalletError::invalid_input("Address count must be nonzero"));
    }
    let last = start_index
        .checked_add(count - 1)
        .filter(|last| *last <= MAX_ADDRESS_INDEX)
        .ok_or_else(|| {
            WalletError::invalid_input(format!(
                "Address range must end at or before index {}",
                MAX_ADDRESS_INDEX
            ))
        })?;

    let mut addresses = Vec::with_capacity(count as usize);
    let mut current = Zeroizing::new(seed.to_vec());
    for step in 0..=last {
        let (next_seed, _seckey, pubkey) = iterate(&current)?;
        if step >= start_index {
            addresses.push(address::address_from_pubkey(&pubkey));
        }
        current.zeroize();
        current.extend_from_slice(&*next_seed);
    }

    crate::log_debug!(
        "derivation",
        "Derived address batch",
        start_index = start_index,
        count = count,
    );
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_pair_is_deterministic() {
        let seed = b"deterministic seed";
        let (sk1, pk1) = derive_pair(seed).unwrap();
        let (sk2, pk2) = derive_pair(seed).unwrap();

        assert_eq!(*sk1, *sk2);
        assert_eq!(pk1, pk2);
    }

    #[test]
    fn test_derive_pair_zero_seed_vector() {
        // seckey for the all-zero seed is SHA256(0x00 * 32), pinned
        let (seckey, pubkey) = derive_pair(&[0u8; 32]).unwrap();
        assert_eq!(
            hex::encode(*seckey),
            "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"
        );
        assert_eq!(pubkey, pubkey_from_seckey(&seckey).unwrap());
    }

    #[test]
    fn test_iterate_is_deterministic() {
        let seed = b"chain seed";
        let (next1, sk1, pk1) = iterate(seed).unwrap();
        let (next2, sk2, pk2) = iterate(seed).unwrap();

        assert_eq!(*next1, *next2);
        assert_eq!(*sk1, *sk2);
        assert_eq!(pk1, pk2);
    }

    #[test]
    fn test_iterate_chain_steps_differ() {
        let (seed1, sk0, _) = iterate(b"chain seed").unwrap();
        let (seed2, sk1, _) = iterate(seed1.as_ref()).unwrap();

        assert_ne!(*seed1, *seed2);
        assert_ne!(*sk0, *sk1);
    }

    #[test]
    fn test_iterate_rejects_oversized_seed() {
        let seed = vec![0x5au8; MAX_SEED_LEN + 1];
        let err = iterate(&seed).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InputTooLong);
    }

    #[test]
    fn test_iterate_accepts_max_seed() {
        let seed = vec![0x5au8; MAX_SEED_LEN];
        assert!(iterate(&seed).is_ok());
    }

    #[test]
    fn test_secp256k1_hash_deterministic_and_spreading() {
        let d1 = secp256k1_hash(b"seed a").unwrap();
        let d2 = secp256k1_hash(b"seed a").unwrap();
        let d3 = secp256k1_hash(b"seed b").unwrap();

        assert_eq!(d1, d2);
        assert_ne!(d1, d3);
    }

    #[test]
    fn test_secp256k1_hash_differs_from_plain_sha256() {
        let seed = b"mixing seed";
        assert_ne!(secp256k1_hash(seed).unwrap(), sha256(seed));
    }

    #[test]
    fn test_key_pair_at_index_matches_manual_walk() {
        let seed = b"wallet seed";

        let (_, sk0, pk0) = iterate(seed).unwrap();
        let (first, _, _) = iterate(seed).unwrap();
        let (_, sk1, pk1) = iterate(first.as_ref()).unwrap();

        let (at0_sk, at0_pk) = key_pair_at_index(seed, 0).unwrap();
        let (at1_sk, at1_pk) = key_pair_at_index(seed, 1).unwrap();

        assert_eq!(*at0_sk, *sk0);
        assert_eq!(at0_pk, pk0);
        assert_eq!(*at1_sk, *sk1);
        assert_eq!(at1_pk, pk1);
    }

    #[test]
    fn test_key_pair_index_capped() {
        let err = key_pair_at_index(b"wallet seed", MAX_ADDRESS_INDEX + 1).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidInput);
    }

    #[test]
    fn test_derive_addresses_window() {
        let seed = b"wallet seed";
        let all = derive_addresses(seed, 0, 3).unwrap();
        let tail = derive_addresses(seed, 1, 2).unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(&all[1..], tail.as_slice());
    }

    #[test]
    fn test_derive_addresses_rejects_bad_ranges() {
        let seed = b"wallet seed";
        assert!(derive_addresses(seed, 0, 0).is_err());
        assert!(derive_addresses(seed, 99, 2).is_err());
        assert!(derive_addresses(seed, 0, 101).is_err());
    }
}
