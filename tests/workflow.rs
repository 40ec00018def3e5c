//! Workflow tests over doubles for the three external seams.

use alloy::primitives::{Address, TxHash};

use chain_messenger::config::schema::ResolverConfig;
use chain_messenger::protocol::MessageIdentifier;
use chain_messenger::publish::payload::NONCE_BOUND;
use chain_messenger::workflow::{RunState, WorkflowError, WorkflowRun};

mod common;
use common::{RecordingSubmitter, ScriptedEndpoint, ScriptedQuery};

fn fast_resolver_config() -> ResolverConfig {
    ResolverConfig {
        max_attempts: 2,
        base_delay_ms: 1,
        max_delay_ms: 1,
    }
}

fn sender() -> Address {
    "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap()
}

fn sample_identifier() -> MessageIdentifier {
    MessageIdentifier {
        emitter_chain: 10_002,
        emitter_address: "0x1111111111111111111111111111111111111111"
            .parse()
            .unwrap(),
        sequence: 42,
    }
}

#[tokio::test]
async fn empty_transaction_sequence_fails_before_resolution() {
    let endpoint = ScriptedEndpoint::new(0);
    let submitter = RecordingSubmitter::new(Vec::new());
    let query = ScriptedQuery::new(vec![sample_identifier()]);

    let mut run = WorkflowRun::new(&endpoint, &submitter, &query, &fast_resolver_config());
    let err = run.execute(sender(), "HelloTest-1", 1).await.unwrap_err();

    assert!(matches!(err, WorkflowError::PublicationFailed(_)));
    assert_eq!(run.state(), RunState::Failed);
    assert_eq!(submitter.calls(), 0, "nothing should be submitted");
    assert_eq!(query.calls(), 0, "the resolver must never run");
}

#[tokio::test]
async fn single_transaction_hash_is_canonical() {
    let tx_hash = TxHash::repeat_byte(0xab);
    let endpoint = ScriptedEndpoint::new(1);
    let submitter = RecordingSubmitter::new(vec![tx_hash]);
    let query = ScriptedQuery::new(vec![sample_identifier()]);

    let mut run = WorkflowRun::new(&endpoint, &submitter, &query, &fast_resolver_config());
    let identifier = run.execute(sender(), "HelloTest-1", 1).await.unwrap();

    assert_eq!(submitter.calls(), 1);
    assert_eq!(*query.last_tx.lock().unwrap(), Some(tx_hash));
    assert_eq!(identifier, sample_identifier());
}

#[tokio::test]
async fn two_transactions_submit_in_order_and_last_is_canonical() {
    let first = TxHash::repeat_byte(0x01);
    let second = TxHash::repeat_byte(0x02);
    let endpoint = ScriptedEndpoint::new(2);
    let submitter = RecordingSubmitter::new(vec![first, second]);
    let query = ScriptedQuery::new(vec![sample_identifier()]);

    let mut run = WorkflowRun::new(&endpoint, &submitter, &query, &fast_resolver_config());
    run.execute(sender(), "HelloTest-1", 1).await.unwrap();

    assert_eq!(submitter.calls(), 2);
    assert_eq!(
        *submitter.seen_nonces.lock().unwrap(),
        vec![0, 1],
        "transactions must be submitted in the order produced"
    );
    assert_eq!(
        *query.last_tx.lock().unwrap(),
        Some(second),
        "the last transaction's hash is the canonical identifier"
    );
}

#[tokio::test]
async fn empty_query_results_exhaust_attempts_then_fail() {
    let endpoint = ScriptedEndpoint::new(1);
    let submitter = RecordingSubmitter::new(vec![TxHash::repeat_byte(0xcd)]);
    let query = ScriptedQuery::new(Vec::new());

    let config = fast_resolver_config();
    let mut run = WorkflowRun::new(&endpoint, &submitter, &query, &config);
    let err = run.execute(sender(), "HelloTest-1", 1).await.unwrap_err();

    match err {
        WorkflowError::IdentifierNotFound { attempts, .. } => {
            assert_eq!(attempts, config.max_attempts);
        }
        other => panic!("expected IdentifierNotFound, got {}", other),
    }
    assert_eq!(run.state(), RunState::Failed);
    assert_eq!(query.calls(), config.max_attempts);
}

#[tokio::test]
async fn end_to_end_with_doubles_resolves_exact_identifier() {
    let tx_hash = TxHash::repeat_byte(0xab);
    let expected = sample_identifier();
    let endpoint = ScriptedEndpoint::new(1);
    let submitter = RecordingSubmitter::new(vec![tx_hash]);
    let query = ScriptedQuery::new(vec![expected]);

    let mut run = WorkflowRun::new(&endpoint, &submitter, &query, &fast_resolver_config());
    let identifier = run.execute(sender(), "HelloTest-1", 1).await.unwrap();

    assert_eq!(identifier, expected);
    assert_eq!(run.state(), RunState::IdentifierResolved);

    // The entry point saw the exact payload and parameters
    let seen = endpoint.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.0, "HelloTest-1");
    assert_eq!(seen.1.consistency_level, 1);
    assert!(seen.1.nonce < NONCE_BOUND);
}
