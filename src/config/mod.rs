//! Configuration module for the People screen client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the portal API
    pub api_url: String,
    /// API key sent as x-api-key on every request (optional in dev)
    pub api_key: Option<String>,
    /// Organization whose members and admins are listed
    pub org_id: String,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url =
            env::var("PORTAL_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        let api_key = env::var("PORTAL_API_KEY").ok();

        let org_id = env::var("PORTAL_ORG_ID").unwrap_or_default();

        let http_timeout_secs = env::var("PORTAL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("PORTAL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            api_key,
            org_id,
            http_timeout_secs,
            log_level,
        }
    }
}
