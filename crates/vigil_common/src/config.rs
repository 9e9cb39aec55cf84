//! Environment-injected configuration.
//!
//! Endpoints and keys come from the environment, not from this core:
//! the chat backend is a third-party service and the report API may be
//! deployed anywhere.

use serde::{Deserialize, Serialize};

/// Default daemon bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7870";

/// Chat endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub agent: String,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3001/api/v1/prediction".to_string(),
            api_key: None,
            agent: "vigil-assistant".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: std::env::var("VIGIL_CHAT_URL").unwrap_or(defaults.endpoint),
            api_key: std::env::var("VIGIL_CHAT_KEY").ok().filter(|k| !k.is_empty()),
            agent: std::env::var("VIGIL_CHAT_AGENT").unwrap_or(defaults.agent),
            timeout_secs: std::env::var("VIGIL_CHAT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

/// Where vigilctl finds the report API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportApiConfig {
    pub base_url: String,
}

impl Default for ReportApiConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://{}", DEFAULT_BIND_ADDR),
        }
    }
}

impl ReportApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("VIGIL_REPORT_URL")
                .unwrap_or_else(|_| Self::default().base_url),
        }
    }
}

/// Daemon bind address, overridable via VIGILD_ADDR
pub fn bind_addr() -> String {
    std::env::var("VIGILD_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}
