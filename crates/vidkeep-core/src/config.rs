//! Configuration module
//!
//! Service settings are read from the process environment (and an optional `.env` file).
//! Every setting has a default, so the service starts with no configuration at all.

use std::env;

const DEFAULT_PORT: u16 = 3003;
const DEFAULT_ENVIRONMENT: &str = "development";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Start the store with one sample video.
    pub seed_sample_video: bool,
    /// Mount `DELETE /testing/all-data`.
    pub enable_testing_routes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            cors_origins: vec!["*".to_string()],
            seed_sample_video: true,
            enable_testing_routes: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid PORT '{}': {}", raw, e))?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let cors_origins =
            parse_list(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        Ok(Self {
            server_port,
            environment,
            cors_origins,
            seed_sample_video: parse_flag(env::var("SEED_SAMPLE_VIDEO").ok().as_deref(), true),
            enable_testing_routes: parse_flag(
                env::var("ENABLE_TESTING_ROUTES").ok().as_deref(),
                true,
            ),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|s| s.trim().to_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
