//! Protocol-level message identifiers.

use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// The triple that uniquely identifies a published cross-chain message.
///
/// The sequence number is assigned by the protocol, monotonically increasing
/// per emitter address; this system only reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageIdentifier {
    /// Protocol-level identifier of the source chain.
    pub emitter_chain: u16,
    /// Chain-native address that published the message.
    pub emitter_address: Address,
    /// Per-emitter message counter assigned by the protocol.
    pub sequence: u64,
}

impl MessageIdentifier {
    /// The emitter address in the protocol's canonical 32-byte form
    /// (left-padded native address).
    pub fn universal_emitter(&self) -> B256 {
        self.emitter_address.into_word()
    }
}

impl std::fmt::Display for MessageIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.emitter_chain,
            self.universal_emitter(),
            self.sequence
        )
    }
}
