use alloy_primitives::{B256, keccak256};

/// Common hashing function for Merkle trees.
pub fn hash_concat(h1: &[u8], h2: &[u8]) -> B256 {
    ethereum_hashing::hash32_concat(h1, h2).into()
}

/// Single Keccak-256 over the concatenation of two 32-byte words.
///
/// Used by the voluntary exit records instead of a tree root.
pub fn domain_hash(h1: &B256, h2: &B256) -> B256 {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(h1.as_slice());
    preimage[32..].copy_from_slice(h2.as_slice());
    keccak256(preimage)
}
