//! Fixed-length BLS byte values. Points are carried as opaque bytes and never
//! validated here.

use alloy_primitives::FixedBytes;

use crate::constants::{BYTES_PER_PUBKEY, BYTES_PER_SIGNATURE};

pub type BLSPubkey = FixedBytes<BYTES_PER_PUBKEY>;
pub type BLSSignature = FixedBytes<BYTES_PER_SIGNATURE>;
