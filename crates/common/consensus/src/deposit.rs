use alloy_primitives::B256;
use clcodec_merkle::merkleize;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{FixedVector, typenum::U33};

use crate::{
    codec::FixedCodec,
    constants::{BYTES_PER_ROOT, DEPOSIT_PROOF_CAPACITY, DEPOSIT_PROOF_LENGTH},
    deposit_data::DepositData,
    errors::SszError,
};

/// A deposit together with its Merkle branch against the deposit contract root.
/// The branch is carried, not verified.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct Deposit {
    pub proof: FixedVector<B256, U33>,
    pub data: DepositData,
}

impl FixedCodec for Deposit {
    const SSZ_FIXED_LEN: usize =
        DEPOSIT_PROOF_LENGTH * BYTES_PER_ROOT + DepositData::SSZ_FIXED_LEN;

    fn hash_tree_root(&self) -> Result<B256, SszError> {
        let proof_root = merkleize(&self.proof[..], DEPOSIT_PROOF_CAPACITY)?;
        let data_root = self.data.hash_tree_root()?;
        Ok(merkleize(&[proof_root, data_root], 2)?)
    }
}
