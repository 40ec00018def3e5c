//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MessengerConfig (validated, immutable)
//!     → passed by reference into each subsystem
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; one run, one config
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ChainConfig;
pub use schema::MessengerConfig;
pub use schema::ProtocolConfig;
pub use schema::ResolverConfig;
