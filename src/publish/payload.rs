//! Message payload and publication parameters.
//!
//! Building a payload is pure and cannot fail for valid input: the message
//! string is UTF-8 encoded as-is, and the parameters are drawn once per run.

use rand::Rng;

/// Exclusive upper bound for the pseudorandom publish nonce.
pub const NONCE_BOUND: u32 = 1_000_000_000;

/// An immutable message payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Human-readable source string, kept for logging only.
    text: String,
    /// UTF-8 encoding of `text`; what actually goes on chain.
    bytes: Vec<u8>,
}

impl Payload {
    /// Build a payload from a message string.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// The raw payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The source string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Parameters accompanying one publish call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationParams {
    /// Distinguishes otherwise-identical publish calls; not cryptographic.
    pub nonce: u32,
    /// Finality level requested for the message.
    pub consistency_level: u8,
}

impl PublicationParams {
    /// Draw fresh parameters: a uniform nonce in [0, NONCE_BOUND) and the
    /// given consistency level.
    pub fn draw(consistency_level: u8) -> Self {
        Self {
            nonce: rand::thread_rng().gen_range(0..NONCE_BOUND),
            consistency_level,
        }
    }
}
