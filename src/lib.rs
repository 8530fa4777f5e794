//! SkyWallet Core Library
//!
//! Cryptographic core of the SkyWallet hardware-wallet firmware: derives
//! signing key pairs deterministically from a seed, signs message and
//! transaction digests with recoverable secp256k1 ECDSA, and encodes
//! public keys into checksummed Base58 addresses. Derivation and hashing
//! reproduce the reference node byte for byte, so addresses and
//! signatures generated on-device are accepted by the network.
//!
//! # Architecture
//!
//! This crate provides:
//! - **wallet**: key derivation, address encoding, transaction hashing, signing
//! - **crypto**: hash and curve primitives behind fixed byte contracts
//! - **security**: entropy conditioning and constant-time comparison
//! - **utils**: digest text-format handling, redacting logger
//!
//! Transport framing, the message-dispatch protocol, PIN/button
//! confirmation and seed storage live in the surrounding firmware; this
//! crate only consumes raw seeds and digests and produces public keys,
//! addresses and signatures.
//!
//! # Security
//!
//! Secret-bearing buffers (derived secret keys, chained seeds, mixing
//! scratch) are wrapped in `zeroize` guards and wiped on every exit path.
//! Logging redacts anything that could carry key material.
//!
//! # Example
//!
//! ```rust,ignore
//! use skywallet_core::wallet;
//!
//! let (next_seed, seckey, pubkey) = wallet::iterate(seed)?;
//! let address = wallet::address_from_pubkey(&pubkey);
//! let signature = wallet::sign_digest(&seckey, &digest, nonce)?;
//! ```

pub mod crypto;
pub mod error;
pub mod security;
pub mod types;
pub mod utils;
pub mod wallet;

// Re-export key types for convenience
pub use error::{ErrorCode, WalletError, WalletResult};
pub use types::*;

// Re-export the wallet surface the dispatch layer consumes
pub use wallet::{
    address_from_pubkey,
    address_to_slice,
    bitcoin_address_from_pubkey,
    bitcoin_wif_from_seckey,
    decode_address_raw,
    derive_addresses,
    derive_pair,
    iterate,
    key_pair_at_index,
    message_digest,
    recover_pubkey,
    secp256k1_hash,
    sign_digest,
    sign_message,
    verify_message,
    Transaction,
    TransactionOutput,
};

// Re-export crypto utilities used by both the wallet layer and tests
pub use crypto::{ecdh, pubkey_from_seckey, sha256};

pub use security::{secure_compare, EntropyMixer};
pub use utils::{digest_from_hex, is_digest};
