//! Client tunables shipped as static JSON next to the bundle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for game server endpoints, e.g. `/api`.
    pub api_base: String,
    /// Route prefixes closed while the server runs in test mode.
    pub restricted_prefixes: Vec<String>,
    pub blocked_message: String,
    pub toast_duration_ms: u64,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Placeholder image shown when an asset cannot be resolved.
    pub fallback_image: String,
    pub rounds_per_page: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            restricted_prefixes: vec!["/arena".into(), "/king".into(), "/pvp".into()],
            blocked_message: "测试模式下该功能未开放".to_string(),
            toast_duration_ms: 2000,
            confirm_label: "确定".to_string(),
            cancel_label: "取消".to_string(),
            fallback_image: "/assets/images/none.jpg".to_string(),
            rounds_per_page: 10,
        }
    }
}

impl ClientConfig {
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse `json`, logging and falling back to defaults on failure.
    #[must_use]
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            log::warn!("client config rejected, using defaults: {err}");
            Self::default()
        })
    }

    /// Join an endpoint onto [`Self::api_base`].
    #[must_use]
    pub fn api_url(&self, endpoint: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        format!("{base}/{endpoint}")
    }
}
