use alloy_primitives::B256;

use crate::{errors::MerkleError, merkleize};

pub const BYTES_PER_CHUNK: usize = 32;

/// Leaf of a `uint64`: little-endian bytes in the low end of a zeroed chunk.
pub fn uint64_leaf(value: u64) -> B256 {
    let mut leaf = B256::ZERO;
    leaf[..8].copy_from_slice(&value.to_le_bytes());
    leaf
}

/// Split ``bytes`` into 32-byte chunks, zero-padding the last one on the right.
pub fn pack_bytes(bytes: &[u8]) -> Vec<B256> {
    bytes
        .chunks(BYTES_PER_CHUNK)
        .map(|chunk| {
            let mut leaf = B256::ZERO;
            leaf[..chunk.len()].copy_from_slice(chunk);
            leaf
        })
        .collect()
}

/// Root of a fixed-length byte vector longer than a single chunk (BLS public keys and
/// signatures), used as one leaf of the enclosing container.
///
/// 48 bytes pack into 2 chunks merkleized with capacity 2, 96 bytes into 3 chunks
/// merkleized with capacity 4.
pub fn packed_leaf(bytes: &[u8]) -> Result<B256, MerkleError> {
    if bytes.is_empty() {
        return Err(MerkleError::EmptyPackedValue);
    }
    let chunks = pack_bytes(bytes);
    merkleize(&chunks, chunks.len().next_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_concat;

    #[test]
    fn test_uint64_leaf_is_little_endian() {
        let leaf = uint64_leaf(0x0102_0304_0506_0708);
        assert_eq!(&leaf[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(leaf[8..].iter().all(|byte| *byte == 0));
        assert_eq!(uint64_leaf(0), B256::ZERO);
    }

    #[test]
    fn test_pack_bytes_pads_last_chunk() {
        let chunks = pack_bytes(&[0xFF; 48]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], B256::repeat_byte(0xFF));
        assert_eq!(&chunks[1][..16], &[0xFF; 16]);
        assert_eq!(&chunks[1][16..], &[0u8; 16]);
        assert_eq!(pack_bytes(&[0x11; 96]).len(), 3);
    }

    #[test]
    fn test_packed_leaf_of_public_key() {
        let pubkey = [0x5A; 48];
        let chunks = pack_bytes(&pubkey);
        assert_eq!(
            packed_leaf(&pubkey).unwrap(),
            hash_concat(chunks[0].as_slice(), chunks[1].as_slice())
        );
    }

    #[test]
    fn test_packed_leaf_of_signature() {
        let signature: Vec<u8> = (0..96).collect();
        let chunks = pack_bytes(&signature);
        let left = hash_concat(chunks[0].as_slice(), chunks[1].as_slice());
        let right = hash_concat(chunks[2].as_slice(), B256::ZERO.as_slice());
        assert_eq!(
            packed_leaf(&signature).unwrap(),
            hash_concat(left.as_slice(), right.as_slice())
        );
    }

    #[test]
    fn test_packed_leaf_rejects_empty_value() {
        assert_eq!(packed_leaf(&[]), Err(MerkleError::EmptyPackedValue));
    }
}
