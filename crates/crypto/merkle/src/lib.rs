//! Merkleization over 32-byte leaves, following
//! https://ethereum.github.io/consensus-specs/ssz/simple-serialize/#merkleization

use std::sync::LazyLock;

use alloy_primitives::B256;
use tracing::trace;

pub mod errors;
mod hash;
mod pack;

pub use errors::MerkleError;
pub use hash::{domain_hash, hash_concat};
pub use pack::{BYTES_PER_CHUNK, pack_bytes, packed_leaf, uint64_leaf};

/// Number of precomputed zero subtree roots, enough for any `usize` capacity.
pub const ZERO_HASHES_LEN: usize = usize::BITS as usize;

/// ``ZERO_HASHES[d]`` is the root of a tree of depth ``d`` whose leaves are all zero.
pub static ZERO_HASHES: LazyLock<Vec<B256>> = LazyLock::new(|| {
    let mut hashes = vec![B256::ZERO; ZERO_HASHES_LEN];
    for depth in 1..ZERO_HASHES_LEN {
        hashes[depth] = hash_concat(hashes[depth - 1].as_slice(), hashes[depth - 1].as_slice());
    }
    hashes
});

/// Root of an all-zero tree of the given depth, or `None` past ``ZERO_HASHES_LEN``.
pub fn zero_hash(depth: usize) -> Option<B256> {
    ZERO_HASHES.get(depth).copied()
}

/// Return the root of the binary tree formed from ``leaves``, right-padded with zero
/// leaves up to the next power of two of ``capacity``.
///
/// A capacity of zero behaves like a capacity of one. Padding is never materialised:
/// a missing right sibling at depth ``d`` is replaced by ``ZERO_HASHES[d]``.
pub fn merkleize(leaves: &[B256], capacity: usize) -> Result<B256, MerkleError> {
    if leaves.len() > capacity {
        return Err(MerkleError::TooManyLeaves {
            leaves: leaves.len(),
            capacity,
        });
    }

    let bottom_length = capacity
        .max(1)
        .checked_next_power_of_two()
        .ok_or(MerkleError::CapacityTooLarge(capacity))?;
    let depth = bottom_length.trailing_zeros() as usize;
    trace!(leaves = leaves.len(), capacity, depth, "merkleizing leaves");

    if leaves.is_empty() {
        return Ok(ZERO_HASHES[depth]);
    }

    let mut layer = leaves.to_vec();
    for level in 0..depth {
        layer = layer
            .chunks(2)
            .map(|pair| {
                let right = pair.get(1).copied().unwrap_or(ZERO_HASHES[level]);
                hash_concat(pair[0].as_slice(), right.as_slice())
            })
            .collect();
    }

    Ok(layer[0])
}
