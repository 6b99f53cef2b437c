//! Generate a signature header for a payload.

use anyhow::Result;
use clap::Args;
use ratify_core::webhook::{SignatureSigner, DEFAULT_SCHEME};

#[derive(Args)]
pub struct SignArgs {
    /// Path to the raw payload file, or `-` for stdin
    #[arg(long)]
    payload: String,

    /// Webhook secret
    #[arg(long, env = "RATIFY_WEBHOOK_SECRET", hide_env_values = true)]
    secret: String,

    /// Timestamp to sign with, in unix seconds (defaults to now)
    #[arg(long)]
    timestamp: Option<i64>,

    /// Signature scheme tag
    #[arg(long, default_value = DEFAULT_SCHEME)]
    scheme: String,
}

pub fn handle_sign_command(args: SignArgs) -> Result<()> {
    let payload = super::read_payload(&args.payload)?;
    let timestamp = args
        .timestamp
        .unwrap_or_else(|| chrono::Utc::now().timestamp());

    let header = SignatureSigner::new(&args.secret)
        .with_scheme(&args.scheme)
        .header(&payload, timestamp);

    println!("{}", header);

    Ok(())
}
