//! Message and Digest Signing
//!
//! Produces the 65-byte recoverable signatures the network verifies, and
//! the recovery-side checks the device runs on incoming signatures. The
//! dispatch layer hands either raw message text or a pre-formed hex
//! digest; the format is detected, never flagged.

use crate::crypto::{self, sha256};
use crate::error::{WalletError, WalletResult};
use crate::security::memory::secure_compare;
use crate::types::{Digest, PublicKeyBytes, SecretKeyBytes, SignatureBytes, SIGNATURE_LEN};
use crate::utils::hex_format::{digest_from_hex, is_digest};
use crate::wallet::address::address_from_pubkey;
use crate::{log_info, log_warn};

/// Sign a 32-byte digest, producing `r(32) ‖ s(32) ‖ recovery_id(1)`
///
/// `nonce` is the per-request value supplied by the event loop; it is
/// folded into nonce generation so repeated requests over the same digest
/// produce distinct signatures. Fails with `SignFailed` when the curve
/// backend rejects the secret key.
///
/// A recovery id outside [0, 4) can only come from a broken curve
/// backend; that path panics instead of returning, so a release build
/// aborts rather than emit an unverifiable signature.
pub fn sign_digest(
    seckey: &SecretKeyBytes,
    digest: &Digest,
    nonce: u32,
) -> WalletResult<SignatureBytes> {
    let mut noncedata = [0u8; 32];
    noncedata[..4].copy_from_slice(&nonce.to_le_bytes());

    let (compact, recovery_id) = crypto::sign_recoverable(seckey, digest, &noncedata)?;
    assert!(
        recovery_id < 4,
        "curve backend returned recovery id {}",
        recovery_id
    );

    let mut signature = [0u8; SIGNATURE_LEN];
    signature[..64].copy_from_slice(&compact);
    signature[64] = recovery_id;
    Ok(signature)
}

/// The digest to sign for a piece of message text
///
/// A 64-hex-character string is taken as the digest itself; anything else
/// is hashed with SHA-256.
pub fn message_digest(message: &str) -> WalletResult<Digest> {
    if is_digest(message) {
        digest_from_hex(message)
    } else {
        Ok(sha256(message.as_bytes()))
    }
}

/// Sign message text, returning the signature as 130 lowercase hex chars
pub fn sign_message(seckey: &SecretKeyBytes, message: &str, nonce: u32) -> WalletResult<String> {
    let digest = message_digest(message)?;
    match sign_digest(seckey, &digest, nonce) {
        Ok(signature) => {
            log_info!("signing", "Signature success");
            Ok(hex::encode(signature))
        }
        Err(e) => {
            log_warn!("signing", "Signature failed");
            Err(e)
        }
    }
}

/// Recover the compressed public key that produced a signature
pub fn recover_pubkey(digest: &Digest, signature: &SignatureBytes) -> WalletResult<PublicKeyBytes> {
    let mut compact = [0u8; 64];
    compact.copy_from_slice(&signature[..64]);
    crypto::recover(digest, &compact, signature[64])
}

/// Check that a hex signature over a message belongs to an address
///
/// Recovers the public key, re-derives its Base58 address and compares in
/// constant time. `Ok(false)` means a well-formed signature by a
/// different key; malformed input is an error.
pub fn verify_message(address: &str, message: &str, signature_hex: &str) -> WalletResult<bool> {
    let bytes = hex::decode(signature_hex)?;
    let signature: SignatureBytes = bytes.try_into().map_err(|_| {
        WalletError::invalid_input(format!(
            "Signature must be {} bytes of hex",
            SIGNATURE_LEN
        ))
    })?;

    let digest = message_digest(message)?;
    let pubkey = recover_pubkey(&digest, &signature)?;
    let derived = address_from_pubkey(&pubkey);

    Ok(secure_compare(derived.as_bytes(), address.as_bytes()))
}
