//! Transaction finalization, signing, and confirmation monitoring.
//!
//! # Responsibilities
//! - Fill in nonce, gas price, gas limit and chain ID on unsigned transactions
//! - Sign locally and broadcast the raw transaction
//! - Poll receipts until the configured confirmation depth

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::TxHash;
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult, ConfirmationStatus};
use crate::chain::wallet::Wallet;
use crate::publish::TransactionSubmitter;

/// Signs and submits transactions through the chain client.
pub struct ChainSubmitter {
    client: ChainClient,
    wallet: Wallet,
}

impl ChainSubmitter {
    /// Create a new submitter.
    pub fn new(client: ChainClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// Complete an unsigned transaction with nonce, gas and chain ID.
    async fn finalize(&self, tx: TransactionRequest) -> ChainResult<TransactionRequest> {
        // Get current nonce from chain and sync wallet
        let chain_nonce = self
            .client
            .get_transaction_count(self.wallet.address())
            .await?;
        self.wallet.set_nonce(chain_nonce);

        let gas_price = self.client.get_gas_price().await?;
        let gas_price_gwei = gas_price / 1_000_000_000;

        let config = self.client.config();
        if gas_price_gwei > config.max_gas_price_gwei as u128 {
            return Err(ChainError::GasPriceTooHigh {
                current_gwei: gas_price_gwei as u64,
                max_gwei: config.max_gas_price_gwei,
            });
        }

        // Apply multiplier for safety margin
        let adjusted_gas_price = (gas_price as f64 * config.gas_price_multiplier) as u128;

        let nonce = self.wallet.get_and_increment_nonce();
        let gas_limit = self.client.estimate_gas(tx.clone()).await?;

        Ok(tx
            .with_nonce(nonce)
            .with_gas_price(adjusted_gas_price)
            .with_chain_id(self.wallet.chain_id())
            .with_gas_limit(gas_limit))
    }

    /// Wait for a transaction to reach the configured confirmation depth.
    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> ChainResult<ConfirmationStatus> {
        let required_confirmations = self.client.confirmation_blocks();
        let timeout_secs = self.client.config().confirmation_timeout_secs;
        let poll_interval = Duration::from_secs(2);

        let result = timeout(Duration::from_secs(timeout_secs), async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Ok(ConfirmationStatus::Failed(
                        "Transaction reverted".to_string(),
                    ));
                }

                let current_block = self.client.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = current_block.saturating_sub(tx_block) as u32;

                if confirmations >= required_confirmations {
                    return Ok(ConfirmationStatus::Confirmed {
                        block_number: tx_block,
                    });
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations,
                    required = required_confirmations,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(ChainError::ConfirmationTimeout(timeout_secs)),
        }
    }
}

#[async_trait]
impl TransactionSubmitter for ChainSubmitter {
    async fn sign_and_submit(&self, tx: TransactionRequest) -> ChainResult<TxHash> {
        let request = self.finalize(tx).await?;

        let envelope = request
            .build(&self.wallet.network_wallet())
            .await
            .map_err(|e| ChainError::Wallet(format!("Signing failed: {}", e)))?;

        let tx_hash = self
            .client
            .send_raw_transaction(&envelope.encoded_2718())
            .await?;
        tracing::info!(tx_hash = %tx_hash, "Transaction broadcast");

        match self.wait_for_confirmation(tx_hash).await? {
            ConfirmationStatus::Confirmed { block_number } => {
                tracing::info!(tx_hash = %tx_hash, block_number, "Transaction confirmed");
                Ok(tx_hash)
            }
            ConfirmationStatus::Failed(reason) => Err(ChainError::Reverted(reason)),
        }
    }
}
