use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("too many leaves: got {leaves}, capacity is {capacity}")]
    TooManyLeaves { leaves: usize, capacity: usize },
    #[error("capacity {0} has no power of two representable in usize")]
    CapacityTooLarge(usize),
    #[error("cannot pack an empty value into a leaf")]
    EmptyPackedValue,
}
