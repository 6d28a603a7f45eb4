use clcodec_merkle::MerkleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SszError {
    #[error("buffer too small: expected at least {expected} bytes, got {actual}")]
    LowBufferSize { expected: usize, actual: usize },
    #[error("wrong {field} count: expected {expected}, got {actual}")]
    WrongCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("ssz decoding failed: {0:?}")]
    Decode(ssz::DecodeError),
    #[error("merkleization failed: {0}")]
    Merkle(#[from] MerkleError),
}
