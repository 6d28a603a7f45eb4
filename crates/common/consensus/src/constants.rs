pub const BYTES_PER_PUBKEY: usize = 48;
pub const BYTES_PER_SIGNATURE: usize = 96;
pub const BYTES_PER_ROOT: usize = 32;
pub const BYTES_PER_UINT64: usize = 8;
pub const DEPOSIT_PROOF_LENGTH: usize = 33;
/// Capacity used when merkleizing a deposit proof, the next power of two above
/// ``DEPOSIT_PROOF_LENGTH``.
pub const DEPOSIT_PROOF_CAPACITY: usize = 64;
pub const SYNC_COMMITTEE_SIZE: usize = 512;
