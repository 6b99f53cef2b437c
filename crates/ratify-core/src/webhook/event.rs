//! Event construction from verified webhook payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::webhook::verifier::SignatureVerifier;

/// A verified webhook event: the payload parsed as JSON.
///
/// No shape validation is performed beyond JSON parsing; providers include
/// at least an `id` field, exposed through [`Event::id`]. Everything else is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(pub Value);

impl Event {
    /// Returns the event's `id` field, if present and a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Consumes the event, returning the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Verifies the signature header and parses the payload into an [`Event`].
///
/// Signature failures propagate unchanged from the verifier; the payload is
/// only parsed after authentication succeeds, so a JSON error here means a
/// well-signed but malformed body. The payload must be the raw, unmodified
/// request body.
pub fn construct_event(
    payload: impl AsRef<[u8]>,
    header: impl AsRef<[u8]>,
    secret: impl AsRef<[u8]>,
    tolerance: Option<i64>,
) -> Result<Event> {
    construct_event_at(
        payload,
        header,
        secret,
        tolerance,
        chrono::Utc::now().timestamp(),
    )
}

/// [`construct_event`] with an explicit verification time (unix seconds).
pub fn construct_event_at(
    payload: impl AsRef<[u8]>,
    header: impl AsRef<[u8]>,
    secret: impl AsRef<[u8]>,
    tolerance: Option<i64>,
    now: i64,
) -> Result<Event> {
    let payload = payload.as_ref();

    SignatureVerifier::new(secret.as_ref()).verify_at(payload, header, tolerance, now)?;

    let value = serde_json::from_slice(payload)?;
    Ok(Event(value))
}
