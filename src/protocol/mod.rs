//! Messaging protocol subsystem.
//!
//! # Data Flow
//! ```text
//! publish parameters (nonce, consistency level, payload bytes)
//!     → contract.rs (fee query, calldata, unsigned transaction sequence)
//!     → submitted by the publish subsystem
//!
//! confirmed transaction receipt
//!     → publish event logs decoded back into identifier.rs types
//! ```

use alloy::primitives::Address;
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use crate::chain::types::ChainResult;
use crate::publish::payload::{Payload, PublicationParams};

pub mod contract;
pub mod identifier;

pub use contract::CoreContract;
pub use identifier::MessageIdentifier;

/// The protocol's message-publish entry point.
///
/// Yields the ordered unsigned transactions that implement one publish
/// action. The sequence may contain more than one transaction (setup steps
/// before the publish itself); callers must submit them in order.
#[async_trait]
pub trait PublishEndpoint: Send + Sync {
    async fn publish_transactions(
        &self,
        sender: Address,
        payload: &Payload,
        params: PublicationParams,
    ) -> ChainResult<Vec<TransactionRequest>>;
}
