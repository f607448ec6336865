//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use vidkeep_core::Config;

/// Validate critical configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server_port() == 0 {
        return Err(anyhow::anyhow!("PORT cannot be 0"));
    }

    if config.is_production() {
        if config.cors_origins().iter().any(|origin| origin == "*") {
            return Err(anyhow::anyhow!(
                "CORS configured to allow all origins (*) in production. \
                Set specific allowed origins via the CORS_ORIGINS environment variable."
            ));
        }

        if config.enable_testing_routes {
            tracing::warn!(
                "ENABLE_TESTING_ROUTES is on in production - DELETE /testing/all-data wipes every video"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = Config {
            server_port: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_wildcard_cors_rejected_in_production() {
        let config = Config {
            environment: "production".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            environment: "production".to_string(),
            cors_origins: vec!["https://app.example.com".to_string()],
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
