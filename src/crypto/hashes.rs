//! Hash helpers shared across derivation, addresses and transactions

use ripemd::Ripemd160;
use sha2::{Digest as _, Sha256};

use crate::types::{Digest, RIPEMD160_LEN};

/// SHA-256 over a single buffer
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 over the concatenation of two buffers
///
/// Streamed into one hasher state so no joined copy of the inputs is made.
pub fn sha256_two(msg1: &[u8], msg2: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(msg1);
    hasher.update(msg2);
    hasher.finalize().into()
}

/// SHA-256 applied twice, as used by checksummed Bitcoin-style encodings
pub fn double_sha256(data: &[u8]) -> Digest {
    sha256(&sha256(data))
}

/// RIPEMD-160 over a single buffer
pub fn ripemd160(data: &[u8]) -> [u8; RIPEMD160_LEN] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}
