//! SHA-256 checksum utilities
//!
//! One canonical checksum format (`sha256:<hex>`) used to record which
//! source bytes a knowledge artifact was generated from.

use sha2::{Digest, Sha256};

use crate::{Error, NormalizedPath, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of a byte buffer.
pub fn compute_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
pub fn compute_file_checksum(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = std::fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    Ok(compute_checksum(&content))
}
