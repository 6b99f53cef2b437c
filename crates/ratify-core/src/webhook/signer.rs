//! Signature header generation.
//!
//! The sender-side counterpart of verification. Used by the CLI to produce
//! headers for endpoint testing, and by tests to build known-good input.

use crate::crypto::hmac_sha256_hex;
use crate::webhook::verifier::DEFAULT_SCHEME;

/// Builds the exact byte string signatures are computed over: the decimal
/// timestamp, a dot, then the raw payload bytes.
pub(crate) fn signed_payload(timestamp: i64, payload: &[u8]) -> Vec<u8> {
    let mut buf = timestamp.to_string().into_bytes();
    buf.push(b'.');
    buf.extend_from_slice(payload);
    buf
}

/// Signer producing headers that [`SignatureVerifier`] accepts.
///
/// [`SignatureVerifier`]: crate::webhook::SignatureVerifier
pub struct SignatureSigner<'a> {
    secret: &'a [u8],
    scheme: &'a str,
}

impl<'a> SignatureSigner<'a> {
    /// Creates a signer for the default `v1` scheme.
    pub fn new(secret: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self {
            secret: secret.as_ref(),
            scheme: DEFAULT_SCHEME,
        }
    }

    /// Overrides the signature scheme tag.
    pub fn with_scheme(mut self, scheme: &'a str) -> Self {
        self.scheme = scheme;
        self
    }

    /// Computes the lowercase hex signature for a payload at the given
    /// timestamp (unix seconds).
    pub fn signature(&self, payload: impl AsRef<[u8]>, timestamp: i64) -> String {
        hmac_sha256_hex(self.secret, &signed_payload(timestamp, payload.as_ref()))
    }

    /// Builds a complete signature header for a payload.
    pub fn header(&self, payload: impl AsRef<[u8]>, timestamp: i64) -> String {
        format!(
            "t={},{}={}",
            timestamp,
            self.scheme,
            self.signature(payload, timestamp)
        )
    }
}
