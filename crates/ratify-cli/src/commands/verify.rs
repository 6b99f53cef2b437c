//! Verify a payload against its signature header.

use anyhow::Result;
use clap::Args;
use ratify_core::webhook::{construct_event, DEFAULT_TOLERANCE};

#[derive(Args)]
pub struct VerifyArgs {
    /// Path to the raw payload file, or `-` for stdin
    #[arg(long)]
    payload: String,

    /// Signature header value
    #[arg(long)]
    header: String,

    /// Webhook secret
    #[arg(long, env = "RATIFY_WEBHOOK_SECRET", hide_env_values = true)]
    secret: String,

    /// Maximum allowed age of the signed timestamp, in seconds
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: i64,

    /// Skip the timestamp freshness check
    #[arg(long)]
    no_tolerance: bool,
}

pub fn handle_verify_command(args: VerifyArgs) -> Result<()> {
    let payload = super::read_payload(&args.payload)?;
    let tolerance = if args.no_tolerance {
        None
    } else {
        Some(args.tolerance)
    };

    let event = construct_event(&payload, &args.header, &args.secret, tolerance)?;

    match event.id() {
        Some(id) => println!("Verified event {}", id),
        None => println!("Verified event (no id field)"),
    }

    Ok(())
}
