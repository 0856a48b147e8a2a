//! Beastrealm client core
//!
//! Platform-agnostic logic for the Beastrealm browser client: game asset
//! resolution, the toast/dialog overlay store, remote-flag navigation gating
//! and the small helpers shared by feature pages. Nothing here touches the DOM;
//! browser bindings live in `beastrealm-web`.

pub mod assets;
pub mod beast;
pub mod config;
pub mod guard;
pub mod items;
pub mod loading;
pub mod overlay;
pub mod pagination;
pub mod timer;
pub mod toast;

pub use assets::{AssetIndex, ImageRef, ManifestError, key_variants, lookup, resolve};
pub use beast::{Aptitude, BeastSummary, aptitude_value, beast_label, find_beast};
pub use config::{ClientConfig, ConfigError};
pub use guard::{
    ConfigFetchError, GAME_CONFIG_ENDPOINT, GameConfig, GameConfigSource, NavigationDecision,
    RouteGuard,
};
pub use items::item_use_route;
pub use loading::{FieldState, PARTIAL_LOAD_FAILURE};
pub use overlay::{
    DialogAnswer, DialogError, DialogId, DialogMode, DialogOptions, DialogState, OverlayEvent,
    OverlayState, OverlayStore, SubscriptionId, ToastKind, ToastState,
};
pub use pagination::Paginator;
pub use timer::{ManualScheduler, Scheduler, TimerId, TimerTask};
pub use toast::{ToastEntry, ToastId, ToastLevel, ToastStack};
