//! Shared test doubles for the three workflow seams.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use chain_messenger::chain::types::{ChainError, ChainResult};
use chain_messenger::protocol::{MessageIdentifier, PublishEndpoint};
use chain_messenger::publish::payload::{Payload, PublicationParams};
use chain_messenger::publish::TransactionSubmitter;
use chain_messenger::resolve::MessageQuery;

/// Entry point double producing a fixed number of unsigned transactions.
///
/// Each transaction carries its sequence index as the nonce so submitters
/// can observe ordering.
pub struct ScriptedEndpoint {
    pub tx_count: usize,
    pub seen: Mutex<Option<(String, PublicationParams)>>,
}

impl ScriptedEndpoint {
    pub fn new(tx_count: usize) -> Self {
        Self {
            tx_count,
            seen: Mutex::new(None),
        }
    }
}

#[async_trait]
impl PublishEndpoint for ScriptedEndpoint {
    async fn publish_transactions(
        &self,
        _sender: Address,
        payload: &Payload,
        params: PublicationParams,
    ) -> ChainResult<Vec<TransactionRequest>> {
        *self.seen.lock().unwrap() = Some((payload.text().to_string(), params));
        Ok((0..self.tx_count)
            .map(|i| TransactionRequest::default().with_nonce(i as u64))
            .collect())
    }
}

/// Submitter double returning a scripted hash per call and recording the
/// order transactions arrive in.
pub struct RecordingSubmitter {
    hashes: Vec<TxHash>,
    pub seen_nonces: Mutex<Vec<u64>>,
    calls: AtomicU32,
}

impl RecordingSubmitter {
    pub fn new(hashes: Vec<TxHash>) -> Self {
        Self {
            hashes,
            seen_nonces: Mutex::new(Vec::new()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionSubmitter for RecordingSubmitter {
    async fn sign_and_submit(&self, tx: TransactionRequest) -> ChainResult<TxHash> {
        let i = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
        if let Some(nonce) = tx.nonce {
            self.seen_nonces.lock().unwrap().push(nonce);
        }
        self.hashes
            .get(i)
            .copied()
            .ok_or_else(|| ChainError::Rpc("unexpected submission".to_string()))
    }
}

/// Query double returning the same identifiers on every attempt.
pub struct ScriptedQuery {
    results: Vec<MessageIdentifier>,
    pub last_tx: Mutex<Option<TxHash>>,
    calls: AtomicU32,
}

impl ScriptedQuery {
    pub fn new(results: Vec<MessageIdentifier>) -> Self {
        Self {
            results,
            last_tx: Mutex::new(None),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageQuery for ScriptedQuery {
    async fn messages_for(&self, tx_hash: TxHash) -> ChainResult<Vec<MessageIdentifier>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_tx.lock().unwrap() = Some(tx_hash);
        Ok(self.results.clone())
    }
}
