//! Game server calls and the payloads the client pages read.

use async_trait::async_trait;
use beastrealm_core::{
    BeastSummary, ConfigFetchError, GAME_CONFIG_ENDPOINT, GameConfig, GameConfigSource, ImageRef,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::dom;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Rejected(String),
}

impl From<ApiError> for ConfigFetchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status {
                status,
                status_text,
            } => Self::Status {
                status,
                status_text,
            },
            ApiError::Parse(err) => Self::Decode(err),
            ApiError::Request(msg) | ApiError::Rejected(msg) => Self::Request(msg),
        }
    }
}

#[allow(clippy::future_not_send)]
async fn read_json<T: DeserializeOwned>(response: web_sys::Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let text = dom::response_text(&response)
        .await
        .map_err(|err| ApiError::Request(dom::js_error_message(&err)))?;
    Ok(serde_json::from_str(&text)?)
}

/// GET `url` and decode the JSON body.
///
/// # Errors
/// Returns an error on network failure, a non-2xx status, or an undecodable body.
#[allow(clippy::future_not_send)]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| ApiError::Request(dom::js_error_message(&err)))?;
    read_json(response).await
}

/// POST `body` to `url` and decode the JSON reply.
///
/// # Errors
/// Same as [`get_json`], plus serialization failures of `body`.
#[allow(clippy::future_not_send)]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body)?;
    let response = dom::post_json(url, &body)
        .await
        .map_err(|err| ApiError::Request(dom::js_error_message(&err)))?;
    read_json(response).await
}

/// Feature flag source backed by `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfigSource {
    url: String,
}

impl HttpConfigSource {
    #[must_use]
    pub fn new(api_base: &str) -> Self {
        let base = api_base.trim_end_matches('/');
        Self {
            url: format!("{base}{GAME_CONFIG_ENDPOINT}"),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl GameConfigSource for HttpConfigSource {
    async fn fetch_game_config(&self) -> Result<GameConfig, ConfigFetchError> {
        Ok(get_json(&self.url).await?)
    }
}

/// Every game endpoint answers with `ok` plus either data or `error`.
pub trait Envelope {
    fn ok(&self) -> bool;
    fn error(&self) -> Option<&str>;

    /// # Errors
    /// Returns [`ApiError::Rejected`] when the server reported `ok: false`.
    fn accepted(self) -> Result<Self, ApiError>
    where
        Self: Sized,
    {
        if self.ok() {
            Ok(self)
        } else {
            let msg = self.error().unwrap_or("请求失败").to_string();
            Err(ApiError::Rejected(msg))
        }
    }
}

macro_rules! envelope {
    ($($ty:ty),* $(,)?) => {
        $(impl Envelope for $ty {
            fn ok(&self) -> bool {
                self.ok
            }

            fn error(&self) -> Option<&str> {
                self.error.as_deref()
            }
        })*
    };
}

envelope!(
    HandbookIndex,
    HandbookPetResponse,
    InventoryList,
    UseItemResponse,
    ReportResponse,
    BeastListResponse,
);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandbookEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandbookIndex {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub pets: Vec<HandbookEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillRef {
    pub name: String,
    #[serde(default)]
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandbookPet {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub nature: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillRef>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandbookPetResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub pet: Option<HandbookPet>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryItem {
    /// Bag record id.
    pub id: u64,
    pub item_id: u32,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_temporary: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryList {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseItemRequest {
    pub id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UseItemResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Round {
    pub round: u32,
    pub action: String,
    #[serde(default)]
    pub a_hp: i64,
    #[serde(default)]
    pub d_hp: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Battle {
    pub battle_num: u32,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub battles: Vec<Battle>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub report: Report,
}

/// `/beast/list`. Entries stay raw so aptitude aliases can be searched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BeastListResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(rename = "beastList", default)]
    pub beast_list: Vec<Value>,
}

impl BeastListResponse {
    /// Entries that decode as a summary, paired with their raw payload.
    #[must_use]
    pub fn beasts(&self) -> Vec<(BeastSummary, &Value)> {
        self.beast_list
            .iter()
            .filter_map(|raw| {
                BeastSummary::deserialize(raw)
                    .map_err(|err| log::warn!("skipping malformed beast entry: {err}"))
                    .ok()
                    .map(|summary| (summary, raw))
            })
            .collect()
    }
}
