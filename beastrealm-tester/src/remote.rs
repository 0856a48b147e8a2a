use async_trait::async_trait;
use beastrealm_core::{ClientConfig, ConfigFetchError, GAME_CONFIG_ENDPOINT, GameConfig, GameConfigSource};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Absolute game-config URL for a server at `base_url`.
///
/// An absolute `api_base` in the client config wins over `base_url`.
pub fn game_config_url(base_url: &str, config: &ClientConfig) -> String {
    let endpoint = config.api_url(GAME_CONFIG_ENDPOINT);
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint;
    }
    let base = base_url.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{base}/{endpoint}")
}

/// Reads the server mode over HTTP.
#[derive(Debug, Clone)]
pub struct HttpConfigSource {
    client: reqwest::Client,
    url: String,
}

impl HttpConfigSource {
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl GameConfigSource for HttpConfigSource {
    async fn fetch_game_config(&self) -> Result<GameConfig, ConfigFetchError> {
        log::debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| ConfigFetchError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConfigFetchError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| ConfigFetchError::Request(err.to_string()))?;
        GameConfig::from_json(&body)
    }
}
