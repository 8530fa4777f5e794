//! Digest Text Format
//!
//! The dispatch layer sends "sign this" requests as either raw message
//! text or an already-hashed digest in hex. There is no format flag on
//! the wire; the shape of the text decides.

use crate::error::WalletResult;
use crate::types::{Digest, DIGEST_LEN};

/// True when the text is exactly one SHA-256 digest in hex
pub fn is_digest(text: &str) -> bool {
    text.len() == 2 * DIGEST_LEN && text.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a 64-hex-character digest string
pub fn digest_from_hex(text: &str) -> WalletResult<Digest> {
    let bytes = hex::decode(text)?;
    bytes.try_into().map_err(|_| {
        crate::error::WalletError::invalid_input(format!(
            "Digest must be {} hex characters",
            2 * DIGEST_LEN
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digest_accepts_64_hex() {
        assert!(is_digest(&"ab".repeat(32)));
        assert!(is_digest(&"AB".repeat(32)));
    }

    #[test]
    fn test_is_digest_rejects_other_text() {
        assert!(!is_digest("hello"));
        assert!(!is_digest(&"ab".repeat(31)));
        assert!(!is_digest(&"ab".repeat(33)));
        assert!(!is_digest(&"zz".repeat(32)));
    }

    #[test]
    fn test_digest_from_hex_roundtrip() {
        let digest = [0xabu8; DIGEST_LEN];
        assert_eq!(digest_from_hex(&hex::encode(digest)).unwrap(), digest);
    }

    #[test]
    fn test_digest_from_hex_rejects_short_input() {
        assert!(digest_from_hex("abcd").is_err());
    }
}
