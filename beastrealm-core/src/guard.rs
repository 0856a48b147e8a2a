//! Navigation gating on the server's test-mode flag.
//!
//! Competitive features are closed while the server runs a test window. The
//! flag is authoritative server-side and can flip without a client reload, so
//! it is fetched on every guarded navigation. A failed fetch fails open: this
//! gate is cosmetic and must not be reused for access control.

use crate::config::ClientConfig;
use crate::overlay::{OverlayStore, ToastKind};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endpoint (relative to the API base) reporting server mode.
pub const GAME_CONFIG_ENDPOINT: &str = "/auth/game-config";

fn default_ok() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_ok")]
    pub ok: bool,
    #[serde(default)]
    pub is_test_mode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ok: true,
            is_test_mode: false,
        }
    }
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object.
    pub fn from_json(body: &str) -> Result<Self, ConfigFetchError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigFetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where the guard gets the remote flag from.
#[async_trait(?Send)]
pub trait GameConfigSource {
    /// # Errors
    ///
    /// Returns an error when the server cannot be reached or answers garbage.
    async fn fetch_game_config(&self) -> Result<GameConfig, ConfigFetchError>;
}

#[async_trait(?Send)]
impl<S: GameConfigSource + ?Sized> GameConfigSource for std::rc::Rc<S> {
    async fn fetch_game_config(&self) -> Result<GameConfig, ConfigFetchError> {
        (**self).fetch_game_config().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Allowed,
    Blocked,
}

impl NavigationDecision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

pub struct RouteGuard<S> {
    source: S,
    overlay: OverlayStore,
    restricted: Vec<String>,
    blocked_message: String,
}

impl<S: GameConfigSource> RouteGuard<S> {
    #[must_use]
    pub fn new(source: S, overlay: OverlayStore, config: &ClientConfig) -> Self {
        Self {
            source,
            overlay,
            restricted: config.restricted_prefixes.clone(),
            blocked_message: config.blocked_message.clone(),
        }
    }

    #[must_use]
    pub fn is_restricted(&self, path: &str) -> bool {
        self.restricted
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Decide whether navigation to `path` may proceed.
    ///
    /// Unrestricted paths never reach the network. A blocked path raises a
    /// toast through the overlay store.
    pub async fn check(&self, path: &str) -> NavigationDecision {
        if !self.is_restricted(path) {
            return NavigationDecision::Allowed;
        }
        match self.source.fetch_game_config().await {
            Ok(config) if config.is_test_mode => {
                log::info!("navigation to {path} blocked: server in test mode");
                self.overlay
                    .alert(self.blocked_message.clone(), ToastKind::Info);
                NavigationDecision::Blocked
            }
            Ok(_) => NavigationDecision::Allowed,
            Err(err) => {
                log::error!("game config fetch failed, allowing {path}: {err}");
                NavigationDecision::Allowed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    enum Reply {
        TestMode(bool),
        Fail,
    }

    struct FakeSource {
        reply: Reply,
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl GameConfigSource for FakeSource {
        async fn fetch_game_config(&self) -> Result<GameConfig, ConfigFetchError> {
            self.calls.set(self.calls.get() + 1);
            match self.reply {
                Reply::TestMode(is_test_mode) => Ok(GameConfig {
                    ok: true,
                    is_test_mode,
                }),
                Reply::Fail => Err(ConfigFetchError::Request("offline".into())),
            }
        }
    }

    fn guard(reply: Reply) -> (RouteGuard<FakeSource>, OverlayStore) {
        let config = ClientConfig::default();
        let overlay = OverlayStore::new(Rc::new(ManualScheduler::new()), &config);
        let source = FakeSource {
            reply,
            calls: Cell::new(0),
        };
        (RouteGuard::new(source, overlay.clone(), &config), overlay)
    }

    #[test]
    fn test_mode_blocks_arena() {
        let (guard, overlay) = guard(Reply::TestMode(true));
        assert_eq!(
            block_on(guard.check("/arena/battle")),
            NavigationDecision::Blocked
        );
        let toast = overlay.snapshot().toast;
        assert!(toast.visible);
        assert_eq!(toast.message, "测试模式下该功能未开放");
    }

    #[test]
    fn live_mode_allows_arena() {
        let (guard, overlay) = guard(Reply::TestMode(false));
        assert!(block_on(guard.check("/king")).is_allowed());
        assert!(!overlay.snapshot().toast.visible);
        assert_eq!(guard.source.calls.get(), 1);
    }

    #[test]
    fn fetch_failure_fails_open_quietly() {
        let (guard, overlay) = guard(Reply::Fail);
        assert!(block_on(guard.check("/pvp/rank")).is_allowed());
        assert!(!overlay.snapshot().toast.visible);
    }

    #[test]
    fn unrestricted_paths_skip_the_fetch() {
        let (guard, _) = guard(Reply::TestMode(true));
        assert!(block_on(guard.check("/beast/42")).is_allowed());
        assert!(block_on(guard.check("/")).is_allowed());
        assert_eq!(guard.source.calls.get(), 0);
    }

    #[test]
    fn prefix_match_is_textual() {
        let (guard, _) = guard(Reply::TestMode(false));
        assert!(guard.is_restricted("/arena"));
        assert!(guard.is_restricted("/arena-streak"));
        assert!(guard.is_restricted("/kingdom"));
        assert!(!guard.is_restricted("/map/arena"));
    }

    #[test]
    fn game_config_tolerates_sparse_payloads() {
        let cfg = GameConfig::from_json(r#"{"is_test_mode":true}"#).expect("parses");
        assert!(cfg.ok && cfg.is_test_mode);
        let cfg = GameConfig::from_json("{}").expect("parses");
        assert_eq!(cfg, GameConfig::default());
        assert!(GameConfig::from_json("<html>").is_err());
    }
}
