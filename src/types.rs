//! Core byte-layout types and wire constants
//!
//! These sizes are part of the interoperability contract with the network
//! and with the transaction-building collaborator; changing any of them
//! requires a protocol version bump.

/// Secret key length in bytes (secp256k1 scalar)
pub const SECKEY_LEN: usize = 32;

/// Compressed public key length in bytes
pub const PUBKEY_LEN: usize = 33;

/// SHA-256 digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// RIPEMD-160 digest length in bytes
pub const RIPEMD160_LEN: usize = 20;

/// Recoverable signature length: r(32) + s(32) + recovery id(1)
pub const SIGNATURE_LEN: usize = 65;

/// Address checksum length in bytes
pub const ADDRESS_CHECKSUM_LEN: usize = 4;

/// Binary address length: RIPEMD-160 hash + version byte + checksum
pub const ADDRESS_BIN_LEN: usize = RIPEMD160_LEN + 1 + ADDRESS_CHECKSUM_LEN;

/// Maximum encoded address length, including a terminator slot
pub const ADDRESS_MAX_LEN: usize = 36;

/// Maximum seed length accepted by the key-pair iterator
pub const MAX_SEED_LEN: usize = 256;

/// Maximum number of transaction inputs
pub const TX_MAX_INPUTS: usize = 8;

/// Maximum number of transaction outputs
pub const TX_MAX_OUTPUTS: usize = 8;

/// Maximum address index reachable through the deterministic chain walk
pub const MAX_ADDRESS_INDEX: u32 = 99;

/// 32-byte secret key
pub type SecretKeyBytes = [u8; SECKEY_LEN];

/// 33-byte compressed public key
pub type PublicKeyBytes = [u8; PUBKEY_LEN];

/// 32-byte SHA-256 digest
pub type Digest = [u8; DIGEST_LEN];

/// 65-byte recoverable signature
pub type SignatureBytes = [u8; SIGNATURE_LEN];
