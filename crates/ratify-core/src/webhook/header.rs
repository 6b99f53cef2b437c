//! Signature header parsing.

use crate::error::{RatifyError, Result};

/// A single scheme-tagged signature taken from a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeSignature {
    pub scheme: String,
    pub signature: String,
}

/// Parsed form of a signature header.
///
/// # Format
/// ```text
/// t=<unix_seconds>,v1=<hex_hmac_sha256>[,v1=<hex_hmac_sha256>...]
/// ```
///
/// Pairs may appear in any order. `t` is required exactly once. Every other
/// pair is kept as a scheme-tagged signature in encounter order; the verifier
/// decides which scheme it expects, so keys it does not recognize are simply
/// never matched. A header may carry several signatures under one scheme
/// (concurrent secrets during rotation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeader {
    pub timestamp: i64,
    pub signatures: Vec<SchemeSignature>,
}

impl SignedHeader {
    /// Parses a raw signature header, presented as bytes or text.
    ///
    /// Fails with [`RatifyError::HeaderParse`] when the input is not UTF-8,
    /// contains no `key=value` pairs, or the `t` pair is missing, repeated,
    /// or not an integer. Zero signatures for any particular scheme is not a
    /// parse failure; that check belongs to the verifier.
    pub fn parse(header: impl AsRef<[u8]>) -> Result<Self> {
        let text = std::str::from_utf8(header.as_ref()).map_err(|_| RatifyError::HeaderParse)?;

        let mut timestamp: Option<i64> = None;
        let mut signatures = Vec::new();

        for item in text.split(',') {
            let Some((key, value)) = item.split_once('=') else {
                continue;
            };

            if key == "t" {
                if timestamp.is_some() {
                    return Err(RatifyError::HeaderParse);
                }
                timestamp = Some(value.parse().map_err(|_| RatifyError::HeaderParse)?);
            } else {
                signatures.push(SchemeSignature {
                    scheme: key.to_string(),
                    signature: value.to_string(),
                });
            }
        }

        match timestamp {
            Some(timestamp) => Ok(Self { timestamp, signatures }),
            None => Err(RatifyError::HeaderParse),
        }
    }

    /// Returns the signatures tagged with the given scheme, in encounter order.
    pub fn signatures_for(&self, scheme: &str) -> impl Iterator<Item = &str> {
        self.signatures
            .iter()
            .filter(move |s| s.scheme == scheme)
            .map(|s| s.signature.as_str())
    }
}
