//! Unified error types for the wallet core
//!
//! All fallible operations in this crate report through this module so the
//! message-dispatch layer gets consistent, serializable failures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all wallet-core operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl WalletError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn input_too_long(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InputTooLong, msg)
    }

    pub fn capacity_exceeded(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CapacityExceeded, msg)
    }

    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAddress, msg)
    }

    pub fn signing_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SignFailed, msg)
    }

    pub fn buffer_too_small(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::BufferTooSmall, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn crypto_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CryptoError, msg)
    }
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for WalletError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InputTooLong,
    InvalidAddress,

    // Transaction errors
    CapacityExceeded,

    // Crypto errors
    CryptoError,
    SignFailed,

    // Output errors
    BufferTooSmall,

    // Parse errors
    HexError,
}

/// Result type alias for wallet-core operations
pub type WalletResult<T> = Result<T, WalletError>;

// Conversions from common error types

impl From<hex::FromHexError> for WalletError {
    fn from(e: hex::FromHexError) -> Self {
        WalletError::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<secp256k1::Error> for WalletError {
    fn from(e: secp256k1::Error) -> Self {
        WalletError::new(ErrorCode::CryptoError, format!("Secp256k1 error: {}", e))
    }
}

impl From<bs58::decode::Error> for WalletError {
    fn from(e: bs58::decode::Error) -> Self {
        WalletError::new(ErrorCode::InvalidAddress, format!("Base58 error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = WalletError::capacity_exceeded("Transaction input slots full")
            .with_details("8 of 8 inputs used");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("capacity_exceeded"));
        assert!(json.contains("Transaction input slots full"));
    }

    #[test]
    fn test_error_display() {
        let err = WalletError::input_too_long("Seed exceeds 256 bytes");
        let text = err.to_string();
        assert!(text.contains("InputTooLong"));
        assert!(text.contains("256"));
    }
}
