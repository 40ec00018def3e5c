//! Workflow orchestration.
//!
//! # Data Flow
//! ```text
//! configuration + environment
//!     → signer resolution (chain client + wallet)
//!     → payload build (bytes, nonce, consistency level)
//!     → publisher (ordered sign/submit/confirm)
//!     → identifier resolver (bounded retry query)
//!     → MessageIdentifier
//! ```
//!
//! Data flows strictly forward; no stage is reinvoked and there is no
//! cancellation mechanism. The run ends in `IdentifierResolved` or `Failed`.

use alloy::primitives::Address;
use tracing::Instrument;
use uuid::Uuid;

use crate::chain::client::ChainClient;
use crate::chain::wallet::Wallet;
use crate::config::schema::{MessengerConfig, ResolverConfig};
use crate::protocol::identifier::MessageIdentifier;
use crate::protocol::{CoreContract, PublishEndpoint};
use crate::publish::payload::{Payload, PublicationParams};
use crate::publish::{ChainSubmitter, Publisher, TransactionSubmitter};
use crate::resolve::{IdentifierResolver, MessageQuery, ReceiptMessageQuery};
use crate::workflow::error::WorkflowError;
use crate::workflow::state::RunState;

/// One single-shot workflow run over the three external seams.
pub struct WorkflowRun<'a> {
    publisher: Publisher<'a>,
    resolver: IdentifierResolver<'a>,
    state: RunState,
}

impl<'a> WorkflowRun<'a> {
    /// Assemble a run from the publish entry point, the transaction
    /// submitter and the identifier query.
    pub fn new(
        endpoint: &'a dyn PublishEndpoint,
        submitter: &'a dyn TransactionSubmitter,
        query: &'a dyn MessageQuery,
        resolver_config: &ResolverConfig,
    ) -> Self {
        Self {
            publisher: Publisher::new(endpoint, submitter),
            resolver: IdentifierResolver::new(query, resolver_config),
            state: RunState::Start,
        }
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    fn advance(&mut self, next: RunState) {
        tracing::debug!(from = %self.state, to = %next, "State transition");
        self.state = next;
    }

    /// Execute the workflow for a resolved signer address.
    pub async fn execute(
        &mut self,
        sender: Address,
        message: &str,
        consistency_level: u8,
    ) -> Result<MessageIdentifier, WorkflowError> {
        match self.try_execute(sender, message, consistency_level).await {
            Ok(identifier) => Ok(identifier),
            Err(e) => {
                self.advance(RunState::Failed);
                Err(e)
            }
        }
    }

    async fn try_execute(
        &mut self,
        sender: Address,
        message: &str,
        consistency_level: u8,
    ) -> Result<MessageIdentifier, WorkflowError> {
        self.advance(RunState::SignerReady);

        let payload = Payload::from_text(message);
        let params = PublicationParams::draw(consistency_level);
        self.advance(RunState::PayloadReady);

        let tx_hash = self.publisher.publish(sender, &payload, params).await?;
        self.advance(RunState::Published);
        // The submitter observes acceptance before returning
        self.advance(RunState::Confirmed);

        let identifier = self.resolver.resolve(tx_hash).await?;
        self.advance(RunState::IdentifierResolved);

        Ok(identifier)
    }
}

/// Resolve the signer, wire the production stages, and execute one run.
pub async fn run_from_config(
    config: &MessengerConfig,
    message: &str,
    consistency_override: Option<u8>,
) -> Result<MessageIdentifier, WorkflowError> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("run", run_id = %run_id);

    async {
        let client = ChainClient::new(config.chain.clone())
            .await
            .map_err(|e| WorkflowError::SignerUnavailable(e.to_string()))?;
        let wallet = Wallet::from_env(config.chain.chain_id)
            .map_err(|e| WorkflowError::SignerUnavailable(e.to_string()))?;

        let core_address: Address = config
            .protocol
            .core_address
            .parse()
            .map_err(|e| WorkflowError::Unexpected(format!("Invalid core address: {}", e)))?;

        let endpoint = CoreContract::new(client.clone(), core_address);
        let submitter = ChainSubmitter::new(client.clone(), wallet.clone());
        let query =
            ReceiptMessageQuery::new(client, core_address, config.protocol.emitter_chain);

        let consistency_level =
            consistency_override.unwrap_or(config.protocol.consistency_level);

        let mut run = WorkflowRun::new(&endpoint, &submitter, &query, &config.resolver);
        run.execute(wallet.address(), message, consistency_level)
            .await
    }
    .instrument(span)
    .await
}
