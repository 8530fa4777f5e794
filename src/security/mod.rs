//! Security Utilities
//!
//! Entropy conditioning for the hardware RNG and constant-time
//! comparison for anything matched against attacker-supplied input.

pub mod entropy;
pub mod memory;

pub use entropy::EntropyMixer;
pub use memory::secure_compare;
