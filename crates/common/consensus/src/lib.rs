#![warn(clippy::unwrap_used)]

pub mod bls;
pub mod codec;
pub mod constants;
pub mod deposit;
pub mod deposit_data;
pub mod errors;
pub mod sync_committee;
pub mod voluntary_exit;

pub use codec::FixedCodec;
pub use errors::SszError;
