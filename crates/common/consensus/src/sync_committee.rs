use alloy_primitives::B256;
use clcodec_merkle::{merkleize, packed_leaf};
use serde::{Deserialize, Serialize};
use ssz::{Decode, Encode};

use crate::{
    bls::BLSPubkey,
    codec::FixedCodec,
    constants::{BYTES_PER_PUBKEY, SYNC_COMMITTEE_SIZE},
    errors::SszError,
};

/// Public keys of a sync committee and their aggregate.
///
/// ``pubkeys`` is a plain `Vec` so that a committee of the wrong size can be represented.
/// The raw `ssz::Encode` writes the keys as held; `FixedCodec::encode` and hashing reject
/// anything other than exactly ``SYNC_COMMITTEE_SIZE`` keys.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SyncCommittee {
    pub pubkeys: Vec<BLSPubkey>,
    pub aggregate_pubkey: BLSPubkey,
}

impl Default for SyncCommittee {
    fn default() -> Self {
        Self {
            pubkeys: vec![BLSPubkey::ZERO; SYNC_COMMITTEE_SIZE],
            aggregate_pubkey: BLSPubkey::ZERO,
        }
    }
}

impl Encode for SyncCommittee {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.reserve(self.ssz_bytes_len());
        for pubkey in &self.pubkeys {
            buf.extend_from_slice(pubkey.as_slice());
        }
        buf.extend_from_slice(self.aggregate_pubkey.as_slice());
    }

    fn ssz_bytes_len(&self) -> usize {
        (self.pubkeys.len() + 1) * BYTES_PER_PUBKEY
    }

    fn ssz_fixed_len() -> usize {
        <Self as FixedCodec>::SSZ_FIXED_LEN
    }
}

impl Decode for SyncCommittee {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
        let expected = <Self as Decode>::ssz_fixed_len();
        if bytes.len() != expected {
            return Err(ssz::DecodeError::InvalidByteLength {
                len: bytes.len(),
                expected,
            });
        }

        let (pubkey_bytes, aggregate_bytes) = bytes.split_at(SYNC_COMMITTEE_SIZE * BYTES_PER_PUBKEY);
        let pubkeys = pubkey_bytes
            .chunks_exact(BYTES_PER_PUBKEY)
            .map(BLSPubkey::from_ssz_bytes)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            pubkeys,
            aggregate_pubkey: BLSPubkey::from_ssz_bytes(aggregate_bytes)?,
        })
    }

    fn ssz_fixed_len() -> usize {
        <Self as FixedCodec>::SSZ_FIXED_LEN
    }
}

impl FixedCodec for SyncCommittee {
    const SSZ_FIXED_LEN: usize = SYNC_COMMITTEE_SIZE * BYTES_PER_PUBKEY + BYTES_PER_PUBKEY;

    fn validate(&self) -> Result<(), SszError> {
        if self.pubkeys.len() != SYNC_COMMITTEE_SIZE {
            return Err(SszError::WrongCount {
                field: "sync committee pubkey",
                expected: SYNC_COMMITTEE_SIZE,
                actual: self.pubkeys.len(),
            });
        }
        Ok(())
    }

    fn hash_tree_root(&self) -> Result<B256, SszError> {
        self.validate()?;
        let pubkey_leaves = self
            .pubkeys
            .iter()
            .map(|pubkey| packed_leaf(pubkey.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;
        let pubkeys_root = merkleize(&pubkey_leaves, SYNC_COMMITTEE_SIZE)?;
        let aggregate_root = packed_leaf(self.aggregate_pubkey.as_slice())?;
        Ok(merkleize(&[pubkeys_root, aggregate_root], 2)?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn committee_of(count: usize) -> SyncCommittee {
        SyncCommittee {
            pubkeys: (0..count)
                .map(|i| {
                    let mut pubkey = BLSPubkey::ZERO;
                    pubkey[..8].copy_from_slice(&(i as u64).to_le_bytes());
                    pubkey
                })
                .collect(),
            aggregate_pubkey: BLSPubkey::repeat_byte(0xEE),
        }
    }

    #[test]
    fn test_size() {
        let committee = committee_of(SYNC_COMMITTEE_SIZE);
        assert_eq!(SyncCommittee::SSZ_FIXED_LEN, 24624);
        assert_eq!(<SyncCommittee as Decode>::ssz_fixed_len(), 24624);
        assert_eq!(<SyncCommittee as Encode>::ssz_fixed_len(), 24624);
        assert_eq!(committee.size(), 24624);
        assert_eq!(committee.ssz_bytes_len(), 24624);
        assert_eq!(committee.encode().unwrap().len(), 24624);
    }

    #[test]
    fn test_roundtrip() {
        let committee = committee_of(SYNC_COMMITTEE_SIZE);
        let bytes = committee.encode().unwrap();
        assert_eq!(&bytes[24576..], &[0xEE; 48]);
        assert_eq!(SyncCommittee::decode(&bytes).unwrap(), committee);
        assert_eq!(bytes, committee.as_ssz_bytes());
    }

    #[rstest]
    #[case(0)]
    #[case(511)]
    #[case(513)]
    fn test_wrong_committee_size(#[case] count: usize) {
        let committee = committee_of(count);
        let expected = SszError::WrongCount {
            field: "sync committee pubkey",
            expected: SYNC_COMMITTEE_SIZE,
            actual: count,
        };

        let mut buf = vec![0xFF];
        assert_eq!(committee.encode_into(&mut buf), Err(expected.clone()));
        assert_eq!(buf, vec![0xFF]);
        assert_eq!(committee.encode(), Err(expected.clone()));
        assert_eq!(committee.hash_tree_root(), Err(expected));
    }

    #[test]
    fn test_appends_after_existing_bytes() {
        let committee = committee_of(SYNC_COMMITTEE_SIZE);
        let mut buf = vec![0x01, 0x02];
        committee.encode_into(&mut buf).unwrap();
        assert_eq!(buf.len(), 2 + SyncCommittee::SSZ_FIXED_LEN);
        assert_eq!(&buf[2..], &committee.encode().unwrap()[..]);
    }

    #[test]
    fn test_truncated_buffer() {
        let bytes = committee_of(SYNC_COMMITTEE_SIZE).encode().unwrap();
        assert_eq!(
            SyncCommittee::decode(&bytes[..24623]),
            Err(SszError::LowBufferSize {
                expected: 24624,
                actual: 24623
            })
        );
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let committee = committee_of(SYNC_COMMITTEE_SIZE);
        let mut bytes = committee.encode().unwrap();
        bytes.extend_from_slice(&[0xFF; 7]);
        assert_eq!(
            SyncCommittee::decode(&bytes).unwrap(),
            SyncCommittee::decode(&bytes[..committee.size()]).unwrap()
        );
        assert_eq!(SyncCommittee::decode(&bytes).unwrap(), committee);
    }

    #[rstest]
    #[case(24623)]
    #[case(24625)]
    fn test_raw_decode_requires_exact_length(#[case] len: usize) {
        assert_eq!(
            <SyncCommittee as Decode>::from_ssz_bytes(&vec![0u8; len]),
            Err(ssz::DecodeError::InvalidByteLength {
                len,
                expected: 24624
            })
        );
    }

    #[test]
    fn test_hash_tree_root_composition() {
        let committee = committee_of(SYNC_COMMITTEE_SIZE);
        let leaves = committee
            .pubkeys
            .iter()
            .map(|pubkey| packed_leaf(pubkey.as_slice()).unwrap())
            .collect::<Vec<_>>();
        let expected = merkleize(
            &[
                merkleize(&leaves, 512).unwrap(),
                packed_leaf(committee.aggregate_pubkey.as_slice()).unwrap(),
            ],
            2,
        )
        .unwrap();
        assert_eq!(committee.hash_tree_root().unwrap(), expected);
        assert_eq!(committee.hash_tree_root().unwrap(), committee.hash_tree_root().unwrap());
    }
}
