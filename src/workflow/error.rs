//! Workflow error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Errors terminating a workflow run.
///
/// Every stage fails fast: no stage retries a failed predecessor or
/// compensates for its partial effects.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Key material or RPC connectivity could not be established.
    #[error("Signer unavailable: {0}")]
    SignerUnavailable(String),

    /// The publish entry point, signing, or submission failed — including
    /// the degenerate case of an empty transaction sequence.
    #[error("Publication failed: {0}")]
    PublicationFailed(String),

    /// No message identifier became observable within the allowed attempts.
    #[error("No message identifier found for {tx_hash} after {attempts} attempts")]
    IdentifierNotFound { tx_hash: TxHash, attempts: u32 },

    /// Anything not classified above.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WorkflowError::SignerUnavailable("MESSENGER_PRIVATE_KEY not set".into());
        assert!(err.to_string().starts_with("Signer unavailable"));

        let err = WorkflowError::IdentifierNotFound {
            tx_hash: TxHash::repeat_byte(0xab),
            attempts: 5,
        };
        assert!(err.to_string().contains("after 5 attempts"));
    }
}
