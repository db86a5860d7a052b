//! Merkle inclusion-proof primitives.
//!
//! The hash function itself lives with the caller (the contract uses the
//! sha256 host function); this module only fixes the node-combination rule
//! so on-chain verification and off-chain tree construction cannot drift.

/// Concatenate two nodes in sorted order. Sorted-pair combination makes
/// proofs position-independent: the prover ships siblings only, no
/// left/right flags.
pub fn ordered_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 64] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo);
    buf[32..].copy_from_slice(hi);
    buf
}
