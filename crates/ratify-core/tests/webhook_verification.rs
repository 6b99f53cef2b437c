//! End-to-end webhook verification tests for ratify-core.
//!
//! These exercise the public surface the way an HTTP handler would: raw body
//! bytes in, a signature header string in, an event (or a distinct error) out.

use ratify_core::RatifyError;
use ratify_core::webhook::{
    construct_event_at, DEFAULT_TOLERANCE, SignatureSigner, SignatureVerifier,
};

const SECRET: &str = "whsec_integration_secret";
const PAYLOAD: &str = r#"{"id":"evt_test_webhook","object":"event","data":{"amount":1000}}"#;
const NOW: i64 = 1700000000;

/// Helper to build a valid header for the shared payload.
fn valid_header(timestamp: i64) -> String {
    SignatureSigner::new(SECRET).header(PAYLOAD, timestamp)
}

// =============================================================================
// Signature Verification Tests
// =============================================================================

mod verification {
    use super::*;

    #[test]
    fn generated_headers_always_verify() {
        let verifier = SignatureVerifier::new(SECRET);

        for timestamp in [0, 12345, NOW - 5, NOW] {
            let header = valid_header(timestamp);
            assert!(
                verifier.verify_at(PAYLOAD, &header, None, NOW).is_ok(),
                "header for timestamp {} should verify",
                timestamp
            );
        }
    }

    #[test]
    fn flipping_any_signature_character_fails() {
        let header = valid_header(NOW);
        let (prefix, signature) = header.rsplit_once('=').unwrap();

        for i in 0..signature.len() {
            let mut chars: Vec<char> = signature.chars().collect();
            chars[i] = if chars[i] == '0' { '1' } else { '0' };
            let tampered: String = chars.into_iter().collect();
            let tampered_header = format!("{}={}", prefix, tampered);

            let result =
                SignatureVerifier::new(SECRET).verify_at(PAYLOAD, &tampered_header, None, NOW);
            assert!(
                matches!(result, Err(RatifyError::NoMatchingSignature)),
                "flipped character {} should fail signature matching",
                i
            );
        }
    }

    #[test]
    fn only_unexpected_schemes_present() {
        let header = SignatureSigner::new(SECRET)
            .with_scheme("v0")
            .header(PAYLOAD, NOW);

        let result = SignatureVerifier::new(SECRET).verify_at(PAYLOAD, &header, None, NOW);
        assert!(matches!(result, Err(RatifyError::NoSignaturesWithScheme)));
    }

    #[test]
    fn unparseable_headers_are_rejected() {
        let verifier = SignatureVerifier::new(SECRET);

        for header in ["", "bad_header", "I'm not even a real signature header"] {
            let result = verifier.verify_at(PAYLOAD, header, None, NOW);
            assert!(
                matches!(result, Err(RatifyError::HeaderParse)),
                "header {:?} should fail parsing",
                header
            );
        }
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let header = format!("{},k=ignored,order=asc", valid_header(NOW));

        assert!(
            SignatureVerifier::new(SECRET)
                .verify_at(PAYLOAD, &header, Some(10), NOW)
                .is_ok()
        );
    }

    #[test]
    fn rotation_one_valid_signature_among_many() {
        let other = SignatureSigner::new("whsec_retired_secret").signature(PAYLOAD, NOW);
        let header = format!("{},v1={},v1=potato", valid_header(NOW), other);

        assert!(
            SignatureVerifier::new(SECRET)
                .verify_at(PAYLOAD, &header, Some(10), NOW)
                .is_ok()
        );
    }

    #[test]
    fn secret_as_bytes_or_text() {
        let header = valid_header(NOW);

        assert!(
            SignatureVerifier::new(SECRET.as_bytes())
                .verify_at(PAYLOAD, &header, None, NOW)
                .is_ok()
        );
        assert!(
            SignatureVerifier::new(SECRET)
                .verify_at(PAYLOAD, &header, None, NOW)
                .is_ok()
        );
    }
}

// =============================================================================
// Tolerance Tests
// =============================================================================

mod tolerance {
    use super::*;

    #[test]
    fn stale_timestamp_fails_when_tolerance_given() {
        let result = SignatureVerifier::new(SECRET).verify_at(
            PAYLOAD,
            valid_header(NOW - 15),
            Some(10),
            NOW,
        );
        assert!(matches!(result, Err(RatifyError::TimestampOutsideTolerance)));
    }

    #[test]
    fn stale_timestamp_passes_when_tolerance_omitted() {
        assert!(
            SignatureVerifier::new(SECRET)
                .verify_at(PAYLOAD, valid_header(12345), None, NOW)
                .is_ok()
        );
    }

    #[test]
    fn age_exactly_at_tolerance_passes() {
        assert!(
            SignatureVerifier::new(SECRET)
                .verify_at(PAYLOAD, valid_header(NOW - 10), Some(10), NOW)
                .is_ok()
        );
    }

    #[test]
    fn future_timestamps_are_not_rejected() {
        assert!(
            SignatureVerifier::new(SECRET)
                .verify_at(PAYLOAD, valid_header(NOW + 60), Some(10), NOW)
                .is_ok()
        );
    }

    #[test]
    fn default_tolerance_is_five_minutes() {
        let verifier = SignatureVerifier::new(SECRET);

        assert!(
            verifier
                .verify_at(PAYLOAD, valid_header(NOW - 299), Some(DEFAULT_TOLERANCE), NOW)
                .is_ok()
        );
        assert!(matches!(
            verifier.verify_at(PAYLOAD, valid_header(NOW - 301), Some(DEFAULT_TOLERANCE), NOW),
            Err(RatifyError::TimestampOutsideTolerance)
        ));
    }
}

// =============================================================================
// Event Construction Tests
// =============================================================================

mod events {
    use super::*;

    #[test]
    fn valid_payload_and_header_yield_an_event() {
        let event = construct_event_at(PAYLOAD, valid_header(NOW), SECRET, Some(10), NOW).unwrap();

        assert_eq!(event.id(), Some("evt_test_webhook"));
        assert_eq!(event.0["data"]["amount"], 1000);
    }

    #[test]
    fn well_signed_invalid_json_is_a_json_error() {
        let body = "} I am not valid JSON; 123][";
        let header = SignatureSigner::new(SECRET).header(body, NOW);

        let result = construct_event_at(body, header, SECRET, Some(10), NOW);
        assert!(matches!(result, Err(RatifyError::Json(_))));
    }

    #[test]
    fn badly_signed_payload_is_a_signature_error() {
        let header = format!("t={},v1=bad_signature", NOW);

        let result = construct_event_at(PAYLOAD, header, SECRET, Some(10), NOW);
        assert!(matches!(result, Err(RatifyError::NoMatchingSignature)));
    }

    #[test]
    fn malformed_header_propagates_unchanged() {
        let result = construct_event_at(PAYLOAD, "bad_header", SECRET, None, NOW);
        assert!(matches!(result, Err(RatifyError::HeaderParse)));
    }

    #[test]
    fn bytes_and_text_inputs_yield_the_same_event() {
        let header = valid_header(NOW);

        let from_text =
            construct_event_at(PAYLOAD, header.as_str(), SECRET, Some(10), NOW).unwrap();
        let from_bytes =
            construct_event_at(PAYLOAD.as_bytes(), header.as_bytes(), SECRET.as_bytes(), Some(10), NOW)
                .unwrap();

        assert_eq!(from_text, from_bytes);
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            RatifyError::HeaderParse.to_string(),
            "Unable to extract timestamp and signatures from header"
        );
        assert_eq!(
            RatifyError::NoSignaturesWithScheme.to_string(),
            "No signatures found with expected scheme"
        );
        assert_eq!(
            RatifyError::NoMatchingSignature.to_string(),
            "No signatures found matching the expected signature for payload"
        );
        assert_eq!(
            RatifyError::TimestampOutsideTolerance.to_string(),
            "Timestamp outside the tolerance zone"
        );
    }
}
