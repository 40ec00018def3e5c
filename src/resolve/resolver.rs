//! Message identifier resolution with bounded retries.
//!
//! The source chain's state takes time to become observable downstream, so
//! the resolver queries repeatedly: each attempt is preceded by an
//! exponentially growing backoff delay, and `IdentifierNotFound` is surfaced
//! only after every attempt has been exhausted.

use alloy::primitives::TxHash;
use tokio::time::sleep;

use crate::config::schema::ResolverConfig;
use crate::protocol::identifier::MessageIdentifier;
use crate::resilience::Backoff;
use crate::resolve::MessageQuery;
use crate::workflow::error::WorkflowError;

/// Resolves the message identifier for a published transaction.
pub struct IdentifierResolver<'a> {
    query: &'a dyn MessageQuery,
    max_attempts: u32,
    backoff: Backoff,
}

impl<'a> IdentifierResolver<'a> {
    /// Create a resolver over the given query with the configured retry
    /// policy.
    pub fn new(query: &'a dyn MessageQuery, config: &ResolverConfig) -> Self {
        Self {
            query,
            max_attempts: config.max_attempts,
            backoff: Backoff::new(config.base_delay_ms, config.max_delay_ms),
        }
    }

    /// Resolve the first message identifier associated with the transaction.
    ///
    /// Query errors count as failed attempts; they are retried like empty
    /// results.
    pub async fn resolve(&self, tx_hash: TxHash) -> Result<MessageIdentifier, WorkflowError> {
        for attempt in 1..=self.max_attempts {
            sleep(self.backoff.delay(attempt)).await;

            match self.query.messages_for(tx_hash).await {
                Ok(identifiers) => {
                    if let Some(identifier) = identifiers.into_iter().next() {
                        tracing::info!(
                            attempt,
                            identifier = %identifier,
                            "Message identifier resolved"
                        );
                        return Ok(identifier);
                    }
                    tracing::debug!(attempt, tx_hash = %tx_hash, "No message identifier yet");
                }
                Err(e) => {
                    tracing::warn!(attempt, tx_hash = %tx_hash, error = %e, "Identifier query failed");
                }
            }
        }

        Err(WorkflowError::IdentifierNotFound {
            tx_hash,
            attempts: self.max_attempts,
        })
    }
}
