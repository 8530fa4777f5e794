//! secp256k1 Curve Operations
//!
//! Wraps the curve backend behind the exact byte contracts the wallet
//! protocol needs:
//!
//! - scalar-to-point lift with compressed (33-byte) public keys
//! - recoverable ECDSA over 32-byte digests, with caller-supplied nonce
//!   data mixed into nonce generation
//! - public-key recovery from a compact signature plus recovery id
//! - ECDH returning the compressed shared point, not a hashed secret

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use zeroize::Zeroizing;

use crate::error::{WalletError, WalletResult};
use crate::types::{Digest, PublicKeyBytes, SecretKeyBytes, PUBKEY_LEN};

/// Derive the compressed public key for a secret key
///
/// Fails if the scalar is zero or not below the curve order; callers
/// relying on hashed scalars must surface that (astronomically rare) case
/// rather than mask it.
pub fn pubkey_from_seckey(seckey: &SecretKeyBytes) -> WalletResult<PublicKeyBytes> {
    let secp = Secp256k1::new();
    let sk = SecretKey::from_slice(seckey)
        .map_err(|e| WalletError::crypto_error(format!("Invalid secret key: {}", e)))?;

    let pk = PublicKey::from_secret_key(&secp, &sk);
    Ok(pk.serialize())
}

/// Sign a 32-byte digest, returning the compact signature and recovery id
///
/// `noncedata` is mixed into RFC 6979 nonce generation so the event loop
/// can vary signatures per request without touching the key or digest.
pub fn sign_recoverable(
    seckey: &SecretKeyBytes,
    digest: &Digest,
    noncedata: &[u8; 32],
) -> WalletResult<([u8; 64], u8)> {
    let secp = Secp256k1::new();
    let sk = SecretKey::from_slice(seckey)
        .map_err(|e| WalletError::signing_failed(format!("Invalid secret key: {}", e)))?;

    let msg = Message::from_digest(*digest);
    let sig = secp.sign_ecdsa_recoverable_with_noncedata(&msg, &sk, noncedata);

    let (recovery_id, serialized) = sig.serialize_compact();
    Ok((serialized, recovery_id.to_i32() as u8))
}

/// Recover the compressed public key from a digest and compact signature
pub fn recover(
    digest: &Digest,
    signature: &[u8; 64],
    recovery_id: u8,
) -> WalletResult<PublicKeyBytes> {
    let secp = Secp256k1::new();

    let rec_id = RecoveryId::from_i32(recovery_id as i32)
        .map_err(|e| WalletError::invalid_input(format!("Invalid recovery ID: {}", e)))?;

    let sig = RecoverableSignature::from_compact(signature, rec_id)
        .map_err(|e| WalletError::invalid_input(format!("Invalid signature: {}", e)))?;

    let msg = Message::from_digest(*digest);
    let pk = secp
        .recover_ecdsa(&msg, &sig)
        .map_err(|e| WalletError::crypto_error(format!("Recovery failed: {}", e)))?;

    Ok(pk.serialize())
}

/// ECDH: scalar-multiply `seckey` onto `remote_pubkey`, compress the result
///
/// The shared point is key material, so the uncompressed intermediate is
/// wiped before returning. Callers own wiping the returned key.
pub fn ecdh(
    remote_pubkey: &PublicKeyBytes,
    seckey: &SecretKeyBytes,
) -> WalletResult<PublicKeyBytes> {
    let sk = SecretKey::from_slice(seckey)
        .map_err(|e| WalletError::crypto_error(format!("Invalid secret key: {}", e)))?;

    let pk = PublicKey::from_slice(remote_pubkey)
        .map_err(|e| WalletError::crypto_error(format!("Invalid public key: {}", e)))?;

    // 64-byte x || y affine coordinates of pk * sk
    let shared = Zeroizing::new(secp256k1::ecdh::shared_secret_point(&pk, &sk));

    let mut compressed = [0u8; PUBKEY_LEN];
    compressed[0] = 0x02 | (shared[63] & 1);
    compressed[1..].copy_from_slice(&shared[..32]);
    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hashes::sha256;

    #[test]
    fn test_pubkey_is_compressed() {
        let seckey = sha256(b"test seed");
        let pubkey = pubkey_from_seckey(&seckey).unwrap();

        assert!(pubkey[0] == 0x02 || pubkey[0] == 0x03);
    }

    #[test]
    fn test_zero_seckey_rejected() {
        let result = pubkey_from_seckey(&[0u8; 32]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sign_and_recover_roundtrip() {
        let seckey = sha256(b"signing key");
        let pubkey = pubkey_from_seckey(&seckey).unwrap();
        let digest = sha256(b"message to sign");

        let (sig, recovery_id) = sign_recoverable(&seckey, &digest, &[0u8; 32]).unwrap();
        assert!(recovery_id < 4);

        let recovered = recover(&digest, &sig, recovery_id).unwrap();
        assert_eq!(pubkey, recovered);
    }

    #[test]
    fn test_noncedata_changes_signature() {
        let seckey = sha256(b"signing key");
        let digest = sha256(b"message to sign");

        let (sig_a, _) = sign_recoverable(&seckey, &digest, &[1u8; 32]).unwrap();
        let (sig_b, _) = sign_recoverable(&seckey, &digest, &[2u8; 32]).unwrap();
        assert_ne!(sig_a, sig_b);

        // Same nonce data reproduces the same signature
        let (sig_c, _) = sign_recoverable(&seckey, &digest, &[1u8; 32]).unwrap();
        assert_eq!(sig_a, sig_c);
    }

    #[test]
    fn test_ecdh_is_symmetric() {
        let sk1 = sha256(b"alice");
        let sk2 = sha256(b"bob");
        let pk1 = pubkey_from_seckey(&sk1).unwrap();
        let pk2 = pubkey_from_seckey(&sk2).unwrap();

        let shared1 = ecdh(&pk2, &sk1).unwrap();
        let shared2 = ecdh(&pk1, &sk2).unwrap();

        assert_eq!(shared1, shared2);
        assert!(shared1[0] == 0x02 || shared1[0] == 0x03);
    }
}
