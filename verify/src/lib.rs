//! Hashing rules for the cumulative merkle distributor.
//!
//! A leaf commits to a `(claimant, cumulative amount)` pair and every internal node is the
//! hash of its two children in sorted order. Because pairs are sorted before hashing, a proof
//! is only the list of siblings on the path to the root; no left/right markers are needed.
//!
//! The on-chain program and the off-chain tree builder both link this crate so the two can
//! never disagree on how a leaf or a node is computed.
use solana_program::{hash::hashv, pubkey::Pubkey};

/// Length in bytes of a leaf, node or root.
pub const HASH_BYTES: usize = 32;

/// Encodes a claimant's cumulative entitlement into its leaf commitment.
///
/// `sha256(sha256(claimant || amount_be))`. The second hash keeps a leaf from ever being
/// equal to an internal node, which blocks second pre-image attacks where an internal node
/// is presented as a leaf.
pub fn hash_leaf(claimant: &Pubkey, amount: u64) -> [u8; HASH_BYTES] {
    let inner = hashv(&[&claimant.to_bytes(), &amount.to_be_bytes()]);
    hashv(&[&inner.to_bytes()]).to_bytes()
}

/// Hashes two nodes into their parent, smaller value first.
pub fn combine(a: &[u8; HASH_BYTES], b: &[u8; HASH_BYTES]) -> [u8; HASH_BYTES] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Returns true if `leaf` folded with every element of `proof`, in order, yields `root`.
pub fn verify(proof: &[[u8; HASH_BYTES]], root: [u8; HASH_BYTES], leaf: [u8; HASH_BYTES]) -> bool {
    let computed_hash = proof
        .iter()
        .fold(leaf, |acc, proof_element| combine(&acc, proof_element));
    computed_hash == root
}
