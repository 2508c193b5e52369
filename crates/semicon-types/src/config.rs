// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{SemiconError, SemiconResult};

/// HTTP server configuration.
/// Every field is optional in the JSON file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (default: 0.0.0.0:8000)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Versioned API root under which all data routes are nested (default: /api/v1)
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Origins allowed by CORS. `"null"` admits pages opened from file://
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
    /// tracing EnvFilter directive used when RUST_LOG is unset (default: info)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}
fn default_api_prefix() -> String {
    "/api/v1".to_string()
}
fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:3000",
        "http://localhost:3001",
        "http://localhost:8085",
        "null",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: default_bind_addr(),
            api_prefix: default_api_prefix(),
            cors_origins: default_cors_origins(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> SemiconResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the router cannot be built from.
    pub fn validate(&self) -> SemiconResult<()> {
        if self.bind_addr.trim().is_empty() {
            return Err(SemiconError::ConfigError(
                "bind_addr must not be empty".to_string(),
            ));
        }
        if !self.api_prefix.starts_with('/') || self.api_prefix.len() < 2 {
            return Err(SemiconError::ConfigError(format!(
                "api_prefix must start with '/' and name a path, got '{}'",
                self.api_prefix
            )));
        }
        if self.api_prefix.ends_with('/') {
            return Err(SemiconError::ConfigError(format!(
                "api_prefix must not end with '/', got '{}'",
                self.api_prefix
            )));
        }
        if let Some(bad) = self
            .cors_origins
            .iter()
            .find(|o| o.is_empty() || o.chars().any(|c| c.is_whitespace()))
        {
            return Err(SemiconError::ConfigError(format!(
                "invalid CORS origin '{bad}'"
            )));
        }
        // Credentials are allowed, which rules out the wildcard origin.
        if self.cors_origins.iter().any(|o| o == "*") {
            return Err(SemiconError::ConfigError(
                "CORS origin '*' cannot be combined with credentials; list origins explicitly"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
