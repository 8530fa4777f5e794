//! Constant-time comparison

use subtle::ConstantTimeEq;

/// Compare two byte slices without a data-dependent early exit
///
/// Length mismatch returns immediately; lengths are not secret here.
pub fn secure_compare(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}
