//! Wallet Core
//!
//! Deterministic key derivation, address encoding, transaction hashing
//! and signing. Everything here is synchronous and runs to completion;
//! the firmware event loop calls one operation at a time.

pub mod address;
pub mod derivation;
pub mod signing;
pub mod transaction;

pub use address::{
    address_from_pubkey, address_to_slice, bitcoin_address_from_pubkey, bitcoin_wif_from_seckey,
    decode_address_raw,
};
pub use derivation::{derive_addresses, derive_pair, iterate, key_pair_at_index, secp256k1_hash};
pub use signing::{message_digest, recover_pubkey, sign_digest, sign_message, verify_message};
pub use transaction::{Transaction, TransactionOutput};
