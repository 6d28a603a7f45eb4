//! Reference containers built with the `ethereum_ssz` and `tree_hash` derive macros,
//! mirroring the hand-written records in `clcodec-consensus`.

use alloy_primitives::{B256, FixedBytes};
use clcodec_consensus::{
    constants::{DEPOSIT_PROOF_LENGTH, SYNC_COMMITTEE_SIZE},
    deposit::Deposit,
    deposit_data::DepositData,
    sync_committee::SyncCommittee,
    voluntary_exit::{SignedVoluntaryExit, VoluntaryExit},
};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ssz_derive::{Decode, Encode};
use ssz_types::{
    FixedVector,
    typenum::{U33, U48, U96, U512},
};
use tree_hash_derive::TreeHash;

#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct ReferenceDepositData {
    pub pubkey: FixedVector<u8, U48>,
    pub withdrawal_credentials: B256,
    pub amount: u64,
    pub signature: FixedVector<u8, U96>,
}

#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct ReferenceDeposit {
    pub proof: FixedVector<B256, U33>,
    pub data: ReferenceDepositData,
}

#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct ReferenceVoluntaryExit {
    pub epoch: u64,
    pub validator_index: u64,
}

#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct ReferenceSignedVoluntaryExit {
    pub message: ReferenceVoluntaryExit,
    pub signature: FixedVector<u8, U96>,
}

#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct ReferenceSyncCommittee {
    pub pubkeys: FixedVector<FixedVector<u8, U48>, U512>,
    pub aggregate_pubkey: FixedVector<u8, U48>,
}

fn bytes_vector<const N: usize, L: ssz_types::typenum::Unsigned>(
    bytes: &FixedBytes<N>,
) -> FixedVector<u8, L> {
    FixedVector::from(bytes.to_vec())
}

impl From<&DepositData> for ReferenceDepositData {
    fn from(data: &DepositData) -> Self {
        Self {
            pubkey: bytes_vector(&data.pubkey),
            withdrawal_credentials: data.withdrawal_credentials,
            amount: data.amount,
            signature: bytes_vector(&data.signature),
        }
    }
}

impl From<&Deposit> for ReferenceDeposit {
    fn from(deposit: &Deposit) -> Self {
        Self {
            proof: FixedVector::from(deposit.proof.to_vec()),
            data: ReferenceDepositData::from(&deposit.data),
        }
    }
}

impl From<&VoluntaryExit> for ReferenceVoluntaryExit {
    fn from(exit: &VoluntaryExit) -> Self {
        Self {
            epoch: exit.epoch,
            validator_index: exit.validator_index,
        }
    }
}

impl From<&SignedVoluntaryExit> for ReferenceSignedVoluntaryExit {
    fn from(signed: &SignedVoluntaryExit) -> Self {
        Self {
            message: ReferenceVoluntaryExit::from(&signed.message),
            signature: bytes_vector(&signed.signature),
        }
    }
}

impl From<&SyncCommittee> for ReferenceSyncCommittee {
    fn from(committee: &SyncCommittee) -> Self {
        Self {
            pubkeys: FixedVector::from(
                committee
                    .pubkeys
                    .iter()
                    .map(bytes_vector::<48, U48>)
                    .collect::<Vec<_>>(),
            ),
            aggregate_pubkey: bytes_vector(&committee.aggregate_pubkey),
        }
    }
}

/// Deterministic record generator.
pub struct RecordGenerator {
    rng: ChaCha8Rng,
}

impl RecordGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn bytes<const N: usize>(&mut self) -> FixedBytes<N> {
        let mut bytes = [0u8; N];
        self.rng.fill_bytes(&mut bytes);
        FixedBytes::from(bytes)
    }

    pub fn deposit_data(&mut self) -> DepositData {
        DepositData {
            pubkey: self.bytes(),
            withdrawal_credentials: self.bytes(),
            amount: self.rng.random(),
            signature: self.bytes(),
            root: B256::ZERO,
        }
    }

    pub fn deposit(&mut self) -> Deposit {
        let proof = (0..DEPOSIT_PROOF_LENGTH)
            .map(|_| self.bytes())
            .collect::<Vec<B256>>();
        Deposit {
            proof: FixedVector::from(proof),
            data: self.deposit_data(),
        }
    }

    pub fn voluntary_exit(&mut self) -> VoluntaryExit {
        VoluntaryExit {
            epoch: self.rng.random(),
            validator_index: self.rng.random(),
        }
    }

    pub fn signed_voluntary_exit(&mut self) -> SignedVoluntaryExit {
        SignedVoluntaryExit {
            message: self.voluntary_exit(),
            signature: self.bytes(),
        }
    }

    pub fn sync_committee(&mut self) -> SyncCommittee {
        SyncCommittee {
            pubkeys: (0..SYNC_COMMITTEE_SIZE).map(|_| self.bytes()).collect(),
            aggregate_pubkey: self.bytes(),
        }
    }
}
