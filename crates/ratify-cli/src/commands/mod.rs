//! CLI command implementations.

use std::io::Read;

use anyhow::{Context, Result};

pub mod sign;
pub mod verify;

/// Reads the raw payload from a file, or from stdin when `path` is `-`.
///
/// The bytes are passed to signing/verification untouched; any decoding or
/// re-encoding here would change them and break the signature.
pub fn read_payload(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read payload from stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path).with_context(|| format!("Failed to read payload from {}", path))
    }
}
