//! Cryptographic Primitives
//!
//! Thin wrappers around the hash and curve backends:
//!
//! - `hashes`: SHA-256 (one-shot and two-buffer), double SHA-256, RIPEMD-160
//! - `secp256k1`: scalar-to-point lift, recoverable ECDSA, pubkey recovery,
//!   ECDH with compressed-point output
//!
//! Everything above this layer treats these as black boxes with fixed
//! input/output contracts.

pub mod hashes;
pub mod secp256k1;

pub use hashes::{double_sha256, ripemd160, sha256, sha256_two};
pub use secp256k1::{ecdh, pubkey_from_seckey, recover, sign_recoverable};
