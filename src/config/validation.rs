//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and URLs actually parse
//! - Validate value ranges (timeouts > 0, attempts >= 1)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MessengerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;

use crate::config::schema::MessengerConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &MessengerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.chain.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError {
            field: "chain.rpc_url".into(),
            message: format!("invalid URL: {}", e),
        });
    }
    for (i, url) in config.chain.failover_urls.iter().enumerate() {
        if url.parse::<url::Url>().is_err() {
            errors.push(ValidationError {
                field: format!("chain.failover_urls[{}]", i),
                message: format!("invalid URL: {}", url),
            });
        }
    }
    if config.chain.chain_id == 0 {
        errors.push(ValidationError {
            field: "chain.chain_id".into(),
            message: "must be nonzero".into(),
        });
    }
    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "chain.rpc_timeout_secs".into(),
            message: "must be greater than zero".into(),
        });
    }
    if config.chain.confirmation_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "chain.confirmation_timeout_secs".into(),
            message: "must be greater than zero".into(),
        });
    }
    if config.chain.gas_price_multiplier < 1.0 {
        errors.push(ValidationError {
            field: "chain.gas_price_multiplier".into(),
            message: "must be at least 1.0".into(),
        });
    }
    if config.protocol.core_address.parse::<Address>().is_err() {
        errors.push(ValidationError {
            field: "protocol.core_address".into(),
            message: format!("invalid address: {}", config.protocol.core_address),
        });
    }
    if config.protocol.emitter_chain == 0 {
        errors.push(ValidationError {
            field: "protocol.emitter_chain".into(),
            message: "must be nonzero".into(),
        });
    }
    if config.resolver.max_attempts == 0 {
        errors.push(ValidationError {
            field: "resolver.max_attempts".into(),
            message: "must be at least 1".into(),
        });
    }
    if config.resolver.max_delay_ms < config.resolver.base_delay_ms {
        errors.push(ValidationError {
            field: "resolver.max_delay_ms".into(),
            message: "must not be below resolver.base_delay_ms".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::MessengerConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MessengerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = MessengerConfig::default();
        config.chain.rpc_url = "not a url".into();
        config.chain.chain_id = 0;
        config.protocol.core_address = "0xnope".into();
        config.resolver.max_attempts = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"chain.rpc_url"));
        assert!(fields.contains(&"protocol.core_address"));
    }

    #[test]
    fn test_backoff_cap_below_base_rejected() {
        let mut config = MessengerConfig::default();
        config.resolver.base_delay_ms = 5_000;
        config.resolver.max_delay_ms = 1_000;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "resolver.max_delay_ms");
    }
}
