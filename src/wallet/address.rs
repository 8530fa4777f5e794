//! Address Encoding
//!
//! Turns compressed public keys into the network's checksummed Base58
//! addresses, plus the Bitcoin-style address and WIF forms the device can
//! export for the same key material.
//!
//! Address layout (25 bytes before encoding):
//! `ripemd160(sha256(sha256(pubkey)))` ‖ version `0x00` ‖ 4-byte checksum,
//! where the checksum is the leading bytes of `sha256` over the first 21.

use zeroize::Zeroizing;

use crate::crypto::{double_sha256, ripemd160, sha256};
use crate::error::{WalletError, WalletResult};
use crate::types::{
    PublicKeyBytes, SecretKeyBytes, ADDRESS_BIN_LEN, ADDRESS_CHECKSUM_LEN, ADDRESS_MAX_LEN,
    RIPEMD160_LEN,
};

/// Encode a compressed public key as a checksummed Base58 address
pub fn address_from_pubkey(pubkey: &PublicKeyBytes) -> String {
    bs58::encode(address_bytes_from_pubkey(pubkey)).into_string()
}

/// Encode an address into a caller-provided buffer, returning bytes written
///
/// The buffer must hold the full encoded address; [`ADDRESS_MAX_LEN`]
/// bytes always suffice. Nothing is written on `BufferTooSmall`.
pub fn address_to_slice(pubkey: &PublicKeyBytes, out: &mut [u8]) -> WalletResult<usize> {
    let encoded = address_from_pubkey(pubkey);
    if encoded.len() > out.len() {
        return Err(WalletError::buffer_too_small(format!(
            "Address needs {} bytes, buffer holds {}",
            encoded.len(),
            out.len()
        )));
    }
    out[..encoded.len()].copy_from_slice(encoded.as_bytes());
    Ok(encoded.len())
}

/// The 25-byte binary form of an address
pub fn address_bytes_from_pubkey(pubkey: &PublicKeyBytes) -> [u8; ADDRESS_BIN_LEN] {
    let r1 = sha256(pubkey);
    let r2 = sha256(&r1);
    let digest = ripemd160(&r2);

    let mut address = [0u8; ADDRESS_BIN_LEN];
    address[..RIPEMD160_LEN].copy_from_slice(&digest);
    address[RIPEMD160_LEN] = 0; // version byte

    let checksum = sha256(&address[..RIPEMD160_LEN + 1]);
    address[RIPEMD160_LEN + 1..].copy_from_slice(&checksum[..ADDRESS_CHECKSUM_LEN]);
    address
}

/// Decode a Base58 address to its raw 20-byte hash
///
/// Matches the transaction wire contract: the version byte and checksum
/// tail are dropped without verification, and decodes shorter than 20
/// bytes are zero-padded on the right edge.
pub fn decode_address_raw(address: &str) -> WalletResult<[u8; RIPEMD160_LEN]> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|e| WalletError::invalid_address(format!("Base58 decode failed: {}", e)))?;
    if decoded.len() > ADDRESS_MAX_LEN {
        return Err(WalletError::invalid_address(format!(
            "Decoded address is {} bytes, limit is {}",
            decoded.len(),
            ADDRESS_MAX_LEN
        )));
    }

    let mut raw = [0u8; RIPEMD160_LEN];
    let take = decoded.len().min(RIPEMD160_LEN);
    raw[..take].copy_from_slice(&decoded[..take]);
    Ok(raw)
}

/// Encode a compressed public key as a Bitcoin P2PKH address
pub fn bitcoin_address_from_pubkey(pubkey: &PublicKeyBytes) -> String {
    let mut payload = Vec::with_capacity(1 + RIPEMD160_LEN + ADDRESS_CHECKSUM_LEN);
    payload.push(0x00); // mainnet version
    payload.extend_from_slice(&ripemd160(&sha256(pubkey)));

    let checksum = double_sha256(&payload);
    payload.extend_from_slice(&checksum[..ADDRESS_CHECKSUM_LEN]);

    bs58::encode(payload).into_string()
}

/// Encode a secret key in Bitcoin compressed-WIF form
pub fn bitcoin_wif_from_seckey(seckey: &SecretKeyBytes) -> String {
    let mut data = Zeroizing::new(Vec::with_capacity(34 + ADDRESS_CHECKSUM_LEN));
    data.push(0x80); // mainnet prefix
    data.extend_from_slice(seckey);
    data.push(0x01); // compressed flag

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..ADDRESS_CHECKSUM_LEN]);

    bs58::encode(&*data).into_string()
}
