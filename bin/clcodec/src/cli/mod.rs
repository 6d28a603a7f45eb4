pub mod constants;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::constants::{DEFAULT_FORK_VERSION, DEFAULT_VERBOSITY};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (1=error, 2=warn, 3=info, 4=debug, 5=trace)
    #[arg(short, long, global = true, default_value_t = DEFAULT_VERBOSITY, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `EnvFilter` directive for the selected verbosity. Per-tree merkleization logs only
    /// show at level 5.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug,clcodec_merkle=info",
            _ => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the fixed SSZ length of a record type
    #[command(name = "size")]
    Size(SizeConfig),

    /// Encode a JSON or YAML record to SSZ
    #[command(name = "encode")]
    Encode(EncodeConfig),

    /// Decode an SSZ record and print it as JSON
    #[command(name = "decode")]
    Decode(DecodeConfig),

    /// Compute the hash tree root of a record
    #[command(name = "hash-tree-root")]
    HashTreeRoot(HashTreeRootConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordType {
    DepositData,
    Deposit,
    VoluntaryExit,
    SignedVoluntaryExit,
    SyncCommittee,
}

#[derive(Debug, Parser)]
pub struct SizeConfig {
    #[arg(long = "type", value_enum, help = "Record type")]
    pub record_type: RecordType,
}

#[derive(Debug, Parser)]
pub struct EncodeConfig {
    #[arg(long = "type", value_enum, help = "Record type")]
    pub record_type: RecordType,

    #[arg(long, help = "JSON or YAML file holding the record")]
    pub input: PathBuf,

    #[arg(
        long,
        help = "Where to write the SSZ bytes, snappy-compressed if the extension is .ssz_snappy. Prints hex when omitted"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct DecodeConfig {
    #[arg(long = "type", value_enum, help = "Record type")]
    pub record_type: RecordType,

    #[arg(long, help = "SSZ file, snappy-compressed if the extension is .ssz_snappy")]
    pub input: PathBuf,

    #[arg(long, help = "Fork version the bytes were produced under", default_value_t = DEFAULT_FORK_VERSION)]
    pub fork_version: u8,
}

#[derive(Debug, Parser)]
pub struct HashTreeRootConfig {
    #[arg(long = "type", value_enum, help = "Record type")]
    pub record_type: RecordType,

    #[arg(long, help = "Record as .json, .yaml, .ssz or .ssz_snappy")]
    pub input: PathBuf,
}
