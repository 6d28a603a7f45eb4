use alloy_primitives::B256;
use ssz::{Decode, Encode};

use crate::errors::SszError;

/// Checked entry points over the `ssz` codecs of a fixed-size consensus record, plus its
/// hash tree root.
///
/// Every implementor has one encoded length, independent of its field values.
pub trait FixedCodec: Encode + Decode {
    const SSZ_FIXED_LEN: usize;

    fn size(&self) -> usize {
        Self::SSZ_FIXED_LEN
    }

    /// Invariants the `ssz` encoding relies on but the type cannot enforce itself.
    fn validate(&self) -> Result<(), SszError> {
        Ok(())
    }

    /// Append the encoding of `self` to `buf`. Nothing is written when validation fails.
    fn encode_into(&self, buf: &mut Vec<u8>) -> Result<(), SszError> {
        self.validate()?;
        self.ssz_append(buf);
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>, SszError> {
        let mut buf = Vec::with_capacity(Self::SSZ_FIXED_LEN);
        self.encode_into(&mut buf)?;
        Ok(buf)
    }

    /// Decode from the first `SSZ_FIXED_LEN` bytes of `bytes`. Trailing bytes are
    /// ignored.
    fn decode(bytes: &[u8]) -> Result<Self, SszError> {
        ensure_len(bytes, Self::SSZ_FIXED_LEN)?;
        Self::from_ssz_bytes(&bytes[..Self::SSZ_FIXED_LEN]).map_err(SszError::Decode)
    }

    /// Fork-aware decoding entry point. All layouts in this crate are identical
    /// across forks, so `version` is ignored.
    fn decode_with_version(bytes: &[u8], _version: u8) -> Result<Self, SszError> {
        Self::decode(bytes)
    }

    fn hash_tree_root(&self) -> Result<B256, SszError>;
}

/// Fail with [`SszError::LowBufferSize`] unless `bytes` holds at least `expected` bytes.
pub fn ensure_len(bytes: &[u8], expected: usize) -> Result<(), SszError> {
    if bytes.len() < expected {
        return Err(SszError::LowBufferSize {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_len() {
        assert!(ensure_len(&[0u8; 16], 16).is_ok());
        assert!(ensure_len(&[0u8; 17], 16).is_ok());
        assert_eq!(
            ensure_len(&[0u8; 15], 16),
            Err(SszError::LowBufferSize {
                expected: 16,
                actual: 15
            })
        );
    }
}
