//! Ordered publication of the transaction sequence.
//!
//! # Responsibilities
//! - Obtain the unsigned transaction sequence from the publish entry point
//! - Sign, submit and confirm each transaction strictly in order
//! - Select the canonical transaction identifier (the last accepted one)
//!
//! Later transactions may depend on state changes made by earlier ones, so
//! transaction i+1 is only signed after transaction i's acceptance. There is
//! no rollback: a failure mid-sequence surfaces as `PublicationFailed` and
//! already-accepted transactions stay on chain.

use alloy::primitives::{Address, TxHash};

use crate::protocol::PublishEndpoint;
use crate::publish::payload::{Payload, PublicationParams};
use crate::publish::TransactionSubmitter;
use crate::workflow::error::WorkflowError;

/// Drives one publish action through the entry point and submitter.
pub struct Publisher<'a> {
    endpoint: &'a dyn PublishEndpoint,
    submitter: &'a dyn TransactionSubmitter,
}

impl<'a> Publisher<'a> {
    /// Create a publisher over the given entry point and submitter.
    pub fn new(
        endpoint: &'a dyn PublishEndpoint,
        submitter: &'a dyn TransactionSubmitter,
    ) -> Self {
        Self { endpoint, submitter }
    }

    /// Publish the payload, returning the canonical transaction identifier.
    pub async fn publish(
        &self,
        sender: Address,
        payload: &Payload,
        params: PublicationParams,
    ) -> Result<TxHash, WorkflowError> {
        let txs = self
            .endpoint
            .publish_transactions(sender, payload, params)
            .await
            .map_err(|e| {
                WorkflowError::PublicationFailed(format!("publish entry point failed: {}", e))
            })?;

        if txs.is_empty() {
            return Err(WorkflowError::PublicationFailed(
                "publish entry point produced no transactions".to_string(),
            ));
        }

        let total = txs.len();
        tracing::info!(
            transactions = total,
            nonce = params.nonce,
            consistency_level = params.consistency_level,
            message = payload.text(),
            payload_bytes = payload.len(),
            "Submitting publish sequence"
        );

        let mut canonical = None;
        for (i, tx) in txs.into_iter().enumerate() {
            let tx_hash = self.submitter.sign_and_submit(tx).await.map_err(|e| {
                WorkflowError::PublicationFailed(format!(
                    "transaction {}/{} failed: {}",
                    i + 1,
                    total,
                    e
                ))
            })?;
            tracing::info!(index = i + 1, total, tx_hash = %tx_hash, "Transaction accepted");
            canonical = Some(tx_hash);
        }

        canonical.ok_or_else(|| {
            WorkflowError::PublicationFailed("no transaction was accepted".to_string())
        })
    }
}
