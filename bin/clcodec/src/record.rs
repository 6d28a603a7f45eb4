use alloy_primitives::hex;
use clcodec_consensus::{
    FixedCodec, deposit::Deposit, deposit_data::DepositData, sync_committee::SyncCommittee,
    voluntary_exit::{SignedVoluntaryExit, VoluntaryExit},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::info;

use crate::{
    cli::{DecodeConfig, EncodeConfig, HashTreeRootConfig, RecordType, SizeConfig},
    io::{read_record, read_record_document, read_ssz_bytes, write_ssz_bytes},
};

/// Run `$body` with `$t` bound to the record type selected on the command line.
macro_rules! with_record_type {
    ($record_type:expr, $t:ident => $body:expr) => {
        match $record_type {
            RecordType::DepositData => {
                type $t = DepositData;
                $body
            }
            RecordType::Deposit => {
                type $t = Deposit;
                $body
            }
            RecordType::VoluntaryExit => {
                type $t = VoluntaryExit;
                $body
            }
            RecordType::SignedVoluntaryExit => {
                type $t = SignedVoluntaryExit;
                $body
            }
            RecordType::SyncCommittee => {
                type $t = SyncCommittee;
                $body
            }
        }
    };
}

pub fn fixed_len(record_type: RecordType) -> usize {
    with_record_type!(record_type, T => T::SSZ_FIXED_LEN)
}

pub fn run_size(config: SizeConfig) -> anyhow::Result<String> {
    Ok(fixed_len(config.record_type).to_string())
}

fn encode<T: FixedCodec + DeserializeOwned>(config: &EncodeConfig) -> anyhow::Result<String> {
    let record: T = read_record_document(&config.input)?;
    let ssz = record.encode()?;
    match &config.output {
        Some(output) => {
            write_ssz_bytes(output, &ssz)?;
            info!(path = %output.display(), bytes = ssz.len(), "encoded record");
            Ok(output.display().to_string())
        }
        None => Ok(hex::encode_prefixed(ssz)),
    }
}

pub fn run_encode(config: EncodeConfig) -> anyhow::Result<String> {
    with_record_type!(config.record_type, T => encode::<T>(&config))
}

fn decode<T: FixedCodec + Serialize>(config: &DecodeConfig) -> anyhow::Result<String> {
    let ssz = read_ssz_bytes(&config.input)?;
    let record = T::decode_with_version(&ssz, config.fork_version)?;
    info!(bytes = ssz.len(), "decoded record");
    Ok(serde_json::to_string_pretty(&record)?)
}

pub fn run_decode(config: DecodeConfig) -> anyhow::Result<String> {
    with_record_type!(config.record_type, T => decode::<T>(&config))
}

fn hash_tree_root<T: FixedCodec + DeserializeOwned>(
    config: &HashTreeRootConfig,
) -> anyhow::Result<String> {
    let record: T = read_record(&config.input, 0)?;
    let root = record.hash_tree_root()?;
    info!(%root, "computed hash tree root");
    Ok(root.to_string())
}

pub fn run_hash_tree_root(config: HashTreeRootConfig) -> anyhow::Result<String> {
    with_record_type!(config.record_type, T => hash_tree_root::<T>(&config))
}
