use alloy_primitives::B256;
use clcodec_merkle::{merkleize, packed_leaf, uint64_leaf};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

use crate::{
    bls::{BLSPubkey, BLSSignature},
    codec::FixedCodec,
    constants::{BYTES_PER_PUBKEY, BYTES_PER_ROOT, BYTES_PER_SIGNATURE, BYTES_PER_UINT64},
    errors::SszError,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Encode, Decode)]
pub struct DepositData {
    pub pubkey: BLSPubkey,
    pub withdrawal_credentials: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
    pub signature: BLSSignature,

    /// Cached hash tree root. Never encoded, and ignored by equality.
    #[serde(skip)]
    #[ssz(skip_serializing, skip_deserializing)]
    pub root: B256,
}

impl DepositData {
    /// Compute the hash tree root and store it in ``root``.
    pub fn update_root(&mut self) -> Result<B256, SszError> {
        self.root = self.hash_tree_root()?;
        Ok(self.root)
    }
}

impl PartialEq for DepositData {
    fn eq(&self, other: &Self) -> bool {
        self.pubkey == other.pubkey
            && self.withdrawal_credentials == other.withdrawal_credentials
            && self.amount == other.amount
            && self.signature == other.signature
    }
}

impl Eq for DepositData {}

impl FixedCodec for DepositData {
    const SSZ_FIXED_LEN: usize =
        BYTES_PER_PUBKEY + BYTES_PER_ROOT + BYTES_PER_UINT64 + BYTES_PER_SIGNATURE;

    fn hash_tree_root(&self) -> Result<B256, SszError> {
        let leaves = [
            packed_leaf(self.pubkey.as_slice())?,
            self.withdrawal_credentials,
            uint64_leaf(self.amount),
            packed_leaf(self.signature.as_slice())?,
        ];
        Ok(merkleize(&leaves, leaves.len())?)
    }
}
