//! Core contract surface.
//!
//! # Responsibilities
//! - ABI types for the core contract's publish entry point and event
//! - Query the current per-message fee
//! - Build the unsigned transaction sequence for one publish action

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult};
use crate::protocol::PublishEndpoint;
use crate::publish::payload::{Payload, PublicationParams};

sol! {
    /// Emitted by the core contract for every published message.
    #[derive(Debug)]
    event LogMessagePublished(address indexed sender, uint64 sequence, uint32 nonce, bytes payload, uint8 consistencyLevel);

    /// Publish entry point on the core contract.
    function publishMessage(uint32 nonce, bytes payload, uint8 consistencyLevel) external payable returns (uint64 sequence);

    /// Per-message protocol fee, payable with the publish call.
    function messageFee() external view returns (uint256);
}

/// The deployed core contract on the source chain.
pub struct CoreContract {
    client: ChainClient,
    address: Address,
}

impl CoreContract {
    /// Bind to a deployed core contract.
    pub fn new(client: ChainClient, address: Address) -> Self {
        Self { client, address }
    }

    /// The contract's address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Query the current per-message fee from the contract.
    pub async fn message_fee(&self) -> ChainResult<U256> {
        let tx = TransactionRequest::default()
            .with_to(self.address)
            .with_input(Bytes::from(messageFeeCall {}.abi_encode()));
        let output = self.client.call(tx).await?;
        messageFeeCall::abi_decode_returns(&output)
            .map_err(|e| ChainError::Contract(format!("Bad messageFee response: {}", e)))
    }
}

#[async_trait]
impl PublishEndpoint for CoreContract {
    async fn publish_transactions(
        &self,
        sender: Address,
        payload: &Payload,
        params: PublicationParams,
    ) -> ChainResult<Vec<TransactionRequest>> {
        let fee = self.message_fee().await?;
        tracing::debug!(fee = %fee, "Queried message fee");

        let call = publishMessageCall {
            nonce: params.nonce,
            payload: Bytes::from(payload.bytes().to_vec()),
            consistencyLevel: params.consistency_level,
        };

        let tx = TransactionRequest::default()
            .with_from(sender)
            .with_to(self.address)
            .with_value(fee)
            .with_input(Bytes::from(call.abi_encode()));

        // A plain publish is a single transaction; approval-style setup
        // steps would precede it in this sequence.
        Ok(vec![tx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolEvent;

    #[test]
    fn test_publish_calldata_round_trip() {
        let call = publishMessageCall {
            nonce: 7,
            payload: Bytes::from_static(b"HelloTest-1"),
            consistencyLevel: 1,
        };
        let encoded = call.abi_encode();
        // Selector plus ABI-encoded arguments
        assert_eq!(encoded[..4], publishMessageCall::SELECTOR[..]);

        let decoded = publishMessageCall::abi_decode(&encoded).unwrap();
        assert_eq!(decoded.nonce, 7);
        assert_eq!(decoded.payload.as_ref(), &b"HelloTest-1"[..]);
        assert_eq!(decoded.consistencyLevel, 1);
    }

    #[test]
    fn test_event_signature_is_stable() {
        assert_eq!(
            LogMessagePublished::SIGNATURE,
            "LogMessagePublished(address,uint64,uint32,bytes,uint8)"
        );
    }
}
