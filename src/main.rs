//! Cross-chain message publisher
//!
//! Publishes one UTF-8 message through a messaging protocol's core contract
//! on an EVM test network, then recovers the protocol-level message
//! identifier for the resulting transaction.
//!
//! # Workflow Overview
//!
//! ```text
//!   env + config          ┌──────────────────────────────────────────────┐
//!   ──────────────────────┼─▶ chain (wallet + RPC client)                │
//!                         │        │                                     │
//!                         │        ▼                                     │
//!                         │   publish (payload → entry point →           │
//!                         │            sign/submit/confirm, in order)    │
//!                         │        │ canonical tx hash                   │
//!                         │        ▼                                     │
//!   message identifier    │   resolve (bounded retry receipt query)      │
//!   ◀─────────────────────┼────────┘                                     │
//!                         └──────────────────────────────────────────────┘
//! ```
//!
//! Exit code 0 only when an identifier was resolved; 1 for every failure
//! kind.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use chain_messenger::config::loader::load_config;
use chain_messenger::config::MessengerConfig;
use chain_messenger::observability::logging::init_logging;
use chain_messenger::workflow::runner::run_from_config;

#[derive(Parser)]
#[command(name = "chain-messenger")]
#[command(about = "Publish a message through a cross-chain core contract", long_about = None)]
struct Cli {
    /// Message text to publish
    #[arg(default_value = "Hello from chain-messenger")]
    message: String,

    /// Path to a TOML configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured consistency level
    #[arg(long)]
    consistency_level: Option<u8>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => MessengerConfig::default(),
    };

    init_logging(&config.observability);

    tracing::info!(
        rpc_url = %config.chain.rpc_url,
        core_address = %config.protocol.core_address,
        emitter_chain = config.protocol.emitter_chain,
        "chain-messenger v0.1.0 starting"
    );

    match run_from_config(&config, &cli.message, cli.consistency_level).await {
        Ok(identifier) => {
            tracing::info!(identifier = %identifier, "Run complete");
            match serde_json::to_string_pretty(&identifier) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to encode identifier");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}
