//! Identifier resolution subsystem.
//!
//! # Data Flow
//! ```text
//! canonical transaction hash
//!     → resolver.rs (backoff, bounded attempts)
//!     → receipt.rs (receipt fetch, publish event decode)
//!     → MessageIdentifier
//! ```

use alloy::primitives::TxHash;
use async_trait::async_trait;

use crate::chain::types::ChainResult;
use crate::protocol::identifier::MessageIdentifier;

pub mod receipt;
pub mod resolver;

pub use receipt::ReceiptMessageQuery;
pub use resolver::IdentifierResolver;

/// Queries the chain for message identifiers associated with a transaction.
///
/// An empty result is not an error; the transaction may simply not be
/// observable yet.
#[async_trait]
pub trait MessageQuery: Send + Sync {
    async fn messages_for(&self, tx_hash: TxHash) -> ChainResult<Vec<MessageIdentifier>>;
}
