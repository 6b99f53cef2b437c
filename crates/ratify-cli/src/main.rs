use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::sign::{handle_sign_command, SignArgs};
use commands::verify::{handle_verify_command, VerifyArgs};

#[derive(Parser)]
#[command(name = "ratify", version = ratify_core::VERSION)]
#[command(about = "Sign and verify webhook signature headers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a payload against its signature header
    Verify(VerifyArgs),

    /// Generate a signature header for a payload
    Sign(SignArgs),
}

fn main() -> Result<()> {
    // Load .env file if present (doesn't override existing env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Verify(args) => handle_verify_command(args),
        Commands::Sign(args) => handle_sign_command(args),
    }
}
