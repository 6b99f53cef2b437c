//! Ratify Core Library
//!
//! Signature verification for inbound webhook deliveries: signature header
//! parsing, HMAC-SHA256 verification with replay protection, and event
//! construction from verified payloads.

pub mod crypto;
pub mod error;
pub mod webhook;

pub use error::{RatifyError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
