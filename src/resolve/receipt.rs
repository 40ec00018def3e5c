//! Receipt-log message identifier query.

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

use crate::chain::client::ChainClient;
use crate::chain::types::ChainResult;
use crate::protocol::contract::LogMessagePublished;
use crate::protocol::identifier::MessageIdentifier;
use crate::resolve::MessageQuery;

/// Recovers message identifiers by decoding publish events from the
/// transaction's receipt.
pub struct ReceiptMessageQuery {
    client: ChainClient,
    /// Only events emitted by this address count.
    core_address: Address,
    /// Protocol chain ID stamped into recovered identifiers.
    emitter_chain: u16,
}

impl ReceiptMessageQuery {
    /// Create a query bound to one core contract.
    pub fn new(client: ChainClient, core_address: Address, emitter_chain: u16) -> Self {
        Self {
            client,
            core_address,
            emitter_chain,
        }
    }
}

#[async_trait]
impl MessageQuery for ReceiptMessageQuery {
    async fn messages_for(&self, tx_hash: TxHash) -> ChainResult<Vec<MessageIdentifier>> {
        let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
            Some(r) => r,
            None => return Ok(Vec::new()),
        };

        let mut identifiers = Vec::new();
        for log in receipt.inner.logs() {
            if log.address() != self.core_address {
                continue;
            }
            // Try decoding LogMessagePublished
            if let Ok(decoded) = log.log_decode::<LogMessagePublished>() {
                let event = decoded.inner.data;
                identifiers.push(MessageIdentifier {
                    emitter_chain: self.emitter_chain,
                    emitter_address: event.sender,
                    sequence: event.sequence,
                });
            }
        }

        Ok(identifiers)
    }
}
