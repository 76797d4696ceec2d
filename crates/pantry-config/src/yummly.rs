//! Yummly (RapidAPI) credentials and endpoint.

use serde::{Deserialize, Serialize};

fn default_api_host() -> String {
    "yummly2.p.rapidapi.com".to_string()
}

fn default_base_url() -> String {
    "https://yummly2.p.rapidapi.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YummlyConfig {
    /// RapidAPI key, sent as `X-RapidAPI-Key`.
    #[serde(default)]
    pub api_key: String,

    /// RapidAPI host, sent as `X-RapidAPI-Host`.
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Base URL requests are issued against. Overridden in tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for YummlyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_host: default_api_host(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl YummlyConfig {
    /// Check if both credential headers can be sent.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_host.is_empty()
    }
}
