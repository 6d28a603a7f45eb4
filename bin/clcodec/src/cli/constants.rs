pub const DEFAULT_FORK_VERSION: u8 = 0;
pub const DEFAULT_VERBOSITY: u8 = 3;
pub const SSZ_SNAPPY_EXTENSION: &str = "ssz_snappy";
