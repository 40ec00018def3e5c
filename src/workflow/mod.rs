//! Workflow subsystem.
//!
//! Ties the stages together into the single-shot run described by the state
//! machine in `state.rs`, and maps every stage failure into the error
//! taxonomy in `error.rs`.

pub mod error;
pub mod runner;
pub mod state;

pub use error::WorkflowError;
pub use runner::{run_from_config, WorkflowRun};
pub use state::RunState;
