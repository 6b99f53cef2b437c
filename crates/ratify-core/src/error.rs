//! Error types for the Ratify core library.

use thiserror::Error;

/// Core error type for webhook verification.
///
/// The signature failures each carry a distinct, stable message so callers
/// can tell a malformed header, a missing scheme, a signature mismatch, and
/// a stale timestamp apart. `Json` is separate from all of them: it only
/// fires after the signature has already been verified.
#[derive(Error, Debug)]
pub enum RatifyError {
    #[error("Unable to extract timestamp and signatures from header")]
    HeaderParse,

    #[error("No signatures found with expected scheme")]
    NoSignaturesWithScheme,

    #[error("No signatures found matching the expected signature for payload")]
    NoMatchingSignature,

    #[error("Timestamp outside the tolerance zone")]
    TimestampOutsideTolerance,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Ratify operations.
pub type Result<T> = std::result::Result<T, RatifyError>;
