//! Entropy Conditioning
//!
//! Mixes raw samples from the hardware RNG into uniformly distributed
//! 32-byte blocks. The chaining value lives in an explicit mixer owned by
//! the caller, so two request flows never share hidden state.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{sha256, sha256_two};
use crate::types::Digest;

/// SHA-256 based entropy mixer with an explicit chaining value
///
/// Each `mix` call folds the previous chaining value into the output and
/// advances it, so identical inputs produce different blocks across
/// calls. The chaining value is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EntropyMixer {
    prev: Digest,
}

impl EntropyMixer {
    /// A fresh mixer with a zeroed chaining value
    pub fn new() -> Self {
        Self { prev: [0u8; 32] }
    }

    /// Condition `input` into a 32-byte block and advance the chain
    pub fn mix(&mut self, input: &[u8]) -> Digest {
        let v1 = sha256(input);
        let v2 = sha256_two(&v1, &self.prev);
        let v3 = sha256_two(&v1, &v2);
        self.prev = v3;
        v2
    }
}

impl Default for EntropyMixer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_is_reproducible_per_state() {
        let mut a = EntropyMixer::new();
        let mut b = EntropyMixer::new();

        assert_eq!(a.mix(b"sample"), b.mix(b"sample"));
        assert_eq!(a.mix(b"sample"), b.mix(b"sample"));
    }

    #[test]
    fn test_chaining_changes_repeated_input() {
        let mut mixer = EntropyMixer::new();
        let first = mixer.mix(b"sample");
        let second = mixer.mix(b"sample");

        assert_ne!(first, second);
    }

    #[test]
    fn test_output_is_not_plain_hash() {
        let mut mixer = EntropyMixer::new();
        assert_ne!(mixer.mix(b"sample"), sha256(b"sample"));
    }
}
