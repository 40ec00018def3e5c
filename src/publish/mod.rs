//! Publication subsystem.
//!
//! # Data Flow
//! ```text
//! message string
//!     → payload.rs (UTF-8 bytes, nonce, consistency level)
//!     → publisher.rs (entry point → unsigned transaction sequence)
//!     → submitter.rs (finalize, sign, broadcast, confirm — one at a time)
//!     → canonical transaction hash
//! ```

use alloy::primitives::TxHash;
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use crate::chain::types::ChainResult;

pub mod payload;
pub mod publisher;
pub mod submitter;

pub use payload::{Payload, PublicationParams};
pub use publisher::Publisher;
pub use submitter::ChainSubmitter;

/// Signs one unsigned transaction, submits it, and blocks until on-chain
/// acceptance is observed.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn sign_and_submit(&self, tx: TransactionRequest) -> ChainResult<TxHash>;
}
