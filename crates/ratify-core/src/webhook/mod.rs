//! Webhook signature verification and event construction.

pub mod event;
pub mod header;
pub mod signer;
pub mod verifier;

pub use event::*;
pub use header::*;
pub use signer::*;
pub use verifier::*;
