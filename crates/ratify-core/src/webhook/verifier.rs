//! Webhook signature verification.

use crate::crypto::{constant_time_eq, hmac_sha256_hex};
use crate::error::{RatifyError, Result};
use crate::webhook::header::SignedHeader;
use crate::webhook::signer::signed_payload;

/// Default signature scheme tag.
pub const DEFAULT_SCHEME: &str = "v1";

/// Default timestamp tolerance in seconds (five minutes).
///
/// Tolerance is opt-in per call; pass this when you have no reason to pick
/// a different window.
pub const DEFAULT_TOLERANCE: i64 = 300;

/// Verifier for timestamped HMAC-SHA256 signature headers.
///
/// The expected signature is HMAC-SHA256 over `"{timestamp}.{payload}"`,
/// keyed with the shared secret and hex-encoded. Comparison is constant-time,
/// and a header may carry several candidate signatures under the expected
/// scheme; any single match passes, which keeps deliveries verifiable while
/// a secret rotation is in flight.
///
/// The payload must be the raw, unmodified request body. Deserializing and
/// re-serializing the body before verification changes the bytes and breaks
/// the signature.
pub struct SignatureVerifier<'a> {
    secret: &'a [u8],
    scheme: &'a str,
}

impl<'a> SignatureVerifier<'a> {
    /// Creates a verifier for the default `v1` scheme.
    pub fn new(secret: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self {
            secret: secret.as_ref(),
            scheme: DEFAULT_SCHEME,
        }
    }

    /// Overrides the signature scheme to match against.
    pub fn with_scheme(mut self, scheme: &'a str) -> Self {
        self.scheme = scheme;
        self
    }

    /// Verifies a payload against its signature header.
    ///
    /// `tolerance` is the maximum allowed age in seconds of the signed
    /// timestamp; `None` skips the freshness check entirely, for callers
    /// that manage replay protection themselves.
    pub fn verify(
        &self,
        payload: impl AsRef<[u8]>,
        header: impl AsRef<[u8]>,
        tolerance: Option<i64>,
    ) -> Result<()> {
        self.verify_at(payload, header, tolerance, chrono::Utc::now().timestamp())
    }

    /// Verifies against an explicit `now` (unix seconds) instead of the
    /// system clock. Verification is a pure function of its arguments.
    pub fn verify_at(
        &self,
        payload: impl AsRef<[u8]>,
        header: impl AsRef<[u8]>,
        tolerance: Option<i64>,
        now: i64,
    ) -> Result<()> {
        let header = SignedHeader::parse(header)?;

        let candidates: Vec<&str> = header.signatures_for(self.scheme).collect();
        if candidates.is_empty() {
            return Err(RatifyError::NoSignaturesWithScheme);
        }

        let expected = hmac_sha256_hex(
            self.secret,
            &signed_payload(header.timestamp, payload.as_ref()),
        );

        if !candidates
            .iter()
            .any(|candidate| constant_time_eq(expected.as_bytes(), candidate.as_bytes()))
        {
            tracing::debug!(
                "Webhook signature mismatch: {} candidate(s) under scheme {}",
                candidates.len(),
                self.scheme
            );
            return Err(RatifyError::NoMatchingSignature);
        }

        if let Some(tolerance) = tolerance {
            let age = now - header.timestamp;
            if age > tolerance {
                tracing::debug!("Webhook timestamp too old: age {}s exceeds {}s", age, tolerance);
                return Err(RatifyError::TimestampOutsideTolerance);
            }
        }

        Ok(())
    }
}
