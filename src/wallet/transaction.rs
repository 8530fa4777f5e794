//! Transaction Hashing
//!
//! Bounded transaction structure and its canonical serialization. The
//! byte layout is an interoperability contract with the network: a single
//! count byte plus three bytes of padding before each section, 32-byte
//! input references, and per-output `0x00 ‖ address(20) ‖ coins(8 LE) ‖
//! hours(8 LE)`. The inner hash commits to that serialization, and each
//! input is signed over `SHA256(inner_hash ‖ input)`.

use crate::crypto::{sha256, sha256_two};
use crate::error::{WalletError, WalletResult};
use crate::types::{Digest, RIPEMD160_LEN, TX_MAX_INPUTS, TX_MAX_OUTPUTS};
use crate::wallet::address::decode_address_raw;

/// A single transaction output: amounts plus the destination address hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionOutput {
    pub coins: u64,
    pub hours: u64,
    pub address: [u8; RIPEMD160_LEN],
}

impl Default for TransactionOutput {
    fn default() -> Self {
        Self {
            coins: 0,
            hours: 0,
            address: [0u8; RIPEMD160_LEN],
        }
    }
}

/// A bounded, caller-owned transaction being prepared for signing
///
/// Lifecycle: start empty, append up to [`TX_MAX_INPUTS`] inputs and
/// [`TX_MAX_OUTPUTS`] outputs, then read the inner hash and per-input
/// signing digests. The inner hash is cached and recomputed lazily after
/// any mutation; a stale hash is never served.
#[derive(Debug, Clone)]
pub struct Transaction {
    inputs: [[u8; 32]; TX_MAX_INPUTS],
    outputs: [TransactionOutput; TX_MAX_OUTPUTS],
    nb_in: u8,
    nb_out: u8,
    inner_hash: Digest,
    has_inner_hash: bool,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Transaction {
    /// An empty transaction with no cached hash
    pub fn new() -> Self {
        Self {
            inputs: [[0u8; 32]; TX_MAX_INPUTS],
            outputs: [TransactionOutput::default(); TX_MAX_OUTPUTS],
            nb_in: 0,
            nb_out: 0,
            inner_hash: [0u8; 32],
            has_inner_hash: false,
        }
    }

    pub fn input_count(&self) -> usize {
        self.nb_in as usize
    }

    pub fn output_count(&self) -> usize {
        self.nb_out as usize
    }

    /// Append an input reference; the cached inner hash is invalidated
    pub fn add_input(&mut self, address: &[u8; 32]) -> WalletResult<()> {
        if self.input_count() == TX_MAX_INPUTS {
            return Err(WalletError::capacity_exceeded(format!(
                "Transaction holds at most {} inputs",
                TX_MAX_INPUTS
            )));
        }

        self.inputs[self.input_count()] = *address;
        self.nb_in += 1;
        self.has_inner_hash = false;
        Ok(())
    }

    /// Append an output; the destination is given in Base58 form
    ///
    /// Rejected adds (full slots, undecodable address) leave the
    /// transaction untouched.
    pub fn add_output(&mut self, coins: u32, hours: u32, address: &str) -> WalletResult<()> {
        if self.output_count() == TX_MAX_OUTPUTS {
            return Err(WalletError::capacity_exceeded(format!(
                "Transaction holds at most {} outputs",
                TX_MAX_OUTPUTS
            )));
        }

        let raw = decode_address_raw(address)?;
        self.outputs[self.output_count()] = TransactionOutput {
            coins: coins as u64,
            hours: hours as u64,
            address: raw,
        };
        self.nb_out += 1;
        self.has_inner_hash = false;
        Ok(())
    }

    /// The commitment hash over the canonical serialization
    ///
    /// Idempotent between mutations; recomputed on first use after one.
    pub fn inner_hash(&mut self) -> Digest {
        if !self.has_inner_hash {
            self.inner_hash = sha256(&self.serialize_inner());
            self.has_inner_hash = true;
        }
        self.inner_hash
    }

    /// The digest the signing service must sign for input `index`
    ///
    /// `SHA256(inner_hash ‖ inputs[index])` over the 64-byte concatenation.
    pub fn signing_digest(&mut self, index: usize) -> WalletResult<Digest> {
        if index >= self.input_count() {
            return Err(WalletError::invalid_input(format!(
                "Input index {} out of range, transaction has {} inputs",
                index,
                self.input_count()
            )));
        }

        let inner = self.inner_hash();
        Ok(sha256_two(&inner, &self.inputs[index]))
    }

    fn serialize_inner(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(
            2 * 4 + self.input_count() * 32 + self.output_count() * (1 + RIPEMD160_LEN + 8 + 8),
        );

        buf.push(self.nb_in);
        buf.extend_from_slice(&[0u8; 3]);
        for input in &self.inputs[..self.input_count()] {
            buf.extend_from_slice(input);
        }

        buf.push(self.nb_out);
        buf.extend_from_slice(&[0u8; 3]);
        for output in &self.outputs[..self.output_count()] {
            buf.push(0);
            buf.extend_from_slice(&output.address);
            buf.extend_from_slice(&output.coins.to_le_bytes());
            buf.extend_from_slice(&output.hours.to_le_bytes());
        }

        buf
    }
}
