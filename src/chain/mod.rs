//! Chain access subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variables (private key)
//!     → wallet.rs (key loading, signing)
//! Configuration (RPC URLs, timeouts)
//!     → client.rs (RPC connection with timeouts and failover)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{ChainConfig, ChainError, ChainId, ChainResult};
pub use wallet::Wallet;
