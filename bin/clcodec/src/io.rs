use std::{fs, path::Path};

use anyhow::{Context, anyhow, bail};
use clcodec_consensus::FixedCodec;
use serde::de::DeserializeOwned;
use snap::raw::{Decoder, Encoder};
use tracing::debug;

use crate::cli::constants::SSZ_SNAPPY_EXTENSION;

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|extension| extension.to_str())
}

/// Read SSZ bytes, decompressing them when the file is `.ssz_snappy`.
pub fn read_ssz_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if extension(path) == Some(SSZ_SNAPPY_EXTENSION) {
        let mut decoder = Decoder::new();
        let ssz = decoder
            .decompress_vec(&bytes)
            .map_err(|err| anyhow!("Failed to decompress {}: {err}", path.display()))?;
        debug!(compressed = bytes.len(), ssz = ssz.len(), "decompressed snappy input");
        return Ok(ssz);
    }
    Ok(bytes)
}

pub fn write_ssz_bytes(path: &Path, ssz: &[u8]) -> anyhow::Result<()> {
    let bytes = if extension(path) == Some(SSZ_SNAPPY_EXTENSION) {
        Encoder::new()
            .compress_vec(ssz)
            .map_err(|err| anyhow!("Failed to compress SSZ: {err}"))?
    } else {
        ssz.to_vec()
    };
    fs::write(path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote SSZ output");
    Ok(())
}

/// Parse a record from a JSON or YAML file.
pub fn read_record_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    match extension(path) {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|err| anyhow!("Failed to parse JSON from {}: {err}", path.display())),
        Some("yaml" | "yml") => serde_yaml::from_str(&contents)
            .map_err(|err| anyhow!("Failed to parse YAML from {}: {err}", path.display())),
        _ => bail!("Unsupported record document: {}", path.display()),
    }
}

/// Load a record from any supported file, choosing the format by extension.
pub fn read_record<T: FixedCodec + DeserializeOwned>(
    path: &Path,
    fork_version: u8,
) -> anyhow::Result<T> {
    match extension(path) {
        Some("ssz") | Some(SSZ_SNAPPY_EXTENSION) => {
            let ssz = read_ssz_bytes(path)?;
            if ssz.len() > T::SSZ_FIXED_LEN {
                debug!(
                    expected = T::SSZ_FIXED_LEN,
                    actual = ssz.len(),
                    "ignoring trailing bytes"
                );
            }
            T::decode_with_version(&ssz, fork_version)
                .map_err(|err| anyhow!("Failed to decode SSZ from {}: {err}", path.display()))
        }
        _ => read_record_document(path),
    }
}
