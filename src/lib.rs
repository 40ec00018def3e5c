//! Cross-chain message publication workflow library

pub mod chain;
pub mod config;
pub mod observability;
pub mod protocol;
pub mod publish;
pub mod resilience;
pub mod resolve;
pub mod workflow;

pub use config::MessengerConfig;
pub use protocol::MessageIdentifier;
pub use workflow::{RunState, WorkflowError, WorkflowRun};
