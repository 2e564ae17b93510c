//! Upstream provider configuration

use serde::{Deserialize, Serialize};

/// AviationStack API configuration.
///
/// The access key itself never lives in the config file; only the name of
/// the environment variable that holds it does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the AviationStack REST API
    pub base_url: String,
    /// Environment variable the access key is read from
    pub access_key_env: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://api.aviationstack.com/v1".to_string(),
            access_key_env: "AVIATIONSTACK_API_KEY".to_string(),
            timeout_seconds: 30,
        }
    }
}
