//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; fields over format strings
//! - A UUID run id spans the whole workflow
//! - No metrics endpoint: a run-to-completion tool has nothing to scrape

pub mod logging;
