//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! messenger. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for the messenger.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MessengerConfig {
    /// Source chain connection settings.
    pub chain: ChainConfig,

    /// Messaging protocol settings (core contract, emitter chain).
    pub protocol: ProtocolConfig,

    /// Identifier resolver retry settings.
    pub resolver: ResolverConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Source chain connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Primary JSON-RPC endpoint.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoints, tried in order when the primary fails.
    pub failover_urls: Vec<String>,

    /// Expected EVM chain ID (verified against the RPC at startup).
    pub chain_id: u64,

    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Block depth required before a transaction counts as accepted.
    pub confirmation_blocks: u32,

    /// Maximum time to wait for one transaction's confirmation.
    pub confirmation_timeout_secs: u64,

    /// Safety multiplier applied to the quoted gas price.
    pub gas_price_multiplier: f64,

    /// Refuse to submit when the quoted gas price exceeds this (gwei).
    pub max_gas_price_gwei: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
            failover_urls: Vec::new(),
            chain_id: 11_155_111, // Sepolia
            rpc_timeout_secs: 10,
            confirmation_blocks: 1,
            confirmation_timeout_secs: 120,
            gas_price_multiplier: 1.2,
            max_gas_price_gwei: 100,
        }
    }
}

/// Messaging protocol configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProtocolConfig {
    /// Core contract address on the source chain.
    pub core_address: String,

    /// Protocol-level chain identifier reported in message identifiers.
    pub emitter_chain: u16,

    /// Finality level requested for published messages.
    pub consistency_level: u8,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            // Core contract on Sepolia.
            core_address: "0x4a8bC80Ed5a4067f1CCf107057b8270E0cC11A78".to_string(),
            emitter_chain: 10_002, // Sepolia's protocol chain ID
            consistency_level: 1,
        }
    }
}

/// Identifier resolver retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum query attempts before giving up.
    pub max_attempts: u32,

    /// Base backoff delay in milliseconds (doubles per attempt).
    pub base_delay_ms: u64,

    /// Backoff delay cap in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 2_000,
            max_delay_ms: 16_000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter, overridable via `RUST_LOG`.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "chain_messenger=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MessengerConfig::default();
        assert_eq!(config.chain.chain_id, 11_155_111);
        assert_eq!(config.chain.confirmation_blocks, 1);
        assert_eq!(config.protocol.emitter_chain, 10_002);
        assert_eq!(config.protocol.consistency_level, 1);
        assert_eq!(config.resolver.max_attempts, 5);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MessengerConfig = toml::from_str(
            r#"
            [chain]
            rpc_url = "http://localhost:8545"
            chain_id = 31337
            "#,
        )
        .unwrap();
        assert_eq!(config.chain.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain.chain_id, 31337);
        // Untouched sections keep their defaults
        assert_eq!(config.chain.rpc_timeout_secs, 10);
        assert_eq!(config.resolver.base_delay_ms, 2_000);
    }
}
