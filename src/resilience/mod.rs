//! Resilience subsystem.
//!
//! # Design Decisions
//! - Waiting for downstream observability is a bounded retry with
//!   exponential backoff, not a fixed sleep
//! - Jitter avoids synchronized retry bursts against public RPC endpoints

pub mod backoff;

pub use backoff::Backoff;
