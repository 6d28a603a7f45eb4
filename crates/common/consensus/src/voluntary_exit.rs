//! Exit records are committed to with a single Keccak-256 over their leaves rather than
//! a Merkle tree. Peers compare these values, so the scheme must not be unified with
//! the tree-based roots of the other records.

use alloy_primitives::B256;
use clcodec_merkle::{domain_hash, packed_leaf, uint64_leaf};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

use crate::{
    bls::BLSSignature,
    codec::FixedCodec,
    constants::{BYTES_PER_SIGNATURE, BYTES_PER_UINT64},
    errors::SszError,
};

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize, Encode, Decode)]
pub struct VoluntaryExit {
    #[serde(with = "serde_utils::quoted_u64")]
    pub epoch: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub validator_index: u64,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize, Encode, Decode)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    pub signature: BLSSignature,
}

impl FixedCodec for VoluntaryExit {
    const SSZ_FIXED_LEN: usize = 2 * BYTES_PER_UINT64;

    fn hash_tree_root(&self) -> Result<B256, SszError> {
        Ok(domain_hash(
            &uint64_leaf(self.epoch),
            &uint64_leaf(self.validator_index),
        ))
    }
}

impl FixedCodec for SignedVoluntaryExit {
    const SSZ_FIXED_LEN: usize = VoluntaryExit::SSZ_FIXED_LEN + BYTES_PER_SIGNATURE;

    fn hash_tree_root(&self) -> Result<B256, SszError> {
        let exit_root = self.message.hash_tree_root()?;
        let signature_root = packed_leaf(self.signature.as_slice())?;
        Ok(domain_hash(&exit_root, &signature_root))
    }
}
