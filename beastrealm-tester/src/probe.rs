use anyhow::{Context, Result};
use beastrealm_core::{
    AssetIndex, ClientConfig, GameConfigSource, ImageRef, NavigationDecision, OverlayStore,
    RouteGuard, key_variants,
};
use serde::Serialize;
use std::path::Path;

pub const BUNDLED_MANIFEST: &str =
    include_str!("../../beastrealm-web/static/assets/data/assets.json");
pub const BUNDLED_CONFIG: &str = include_str!("../../beastrealm-web/static/assets/data/client.json");

/// Load the asset index from `path`, or the manifest shipped with the web client.
pub fn load_index(path: Option<&Path>) -> Result<AssetIndex> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?,
        None => BUNDLED_MANIFEST.to_string(),
    };
    AssetIndex::from_manifest(&json, str::to_string).context("parsing asset manifest")
}

pub fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading client config {}", path.display()))?;
            ClientConfig::from_json(&json).context("parsing client config")
        }
        None => Ok(ClientConfig::from_json_or_default(BUNDLED_CONFIG)),
    }
}

/// Interpret a command-line image argument.
///
/// `-` stands for an absent reference, anything with a scheme is a URL, and
/// the rest are local keys.
pub fn parse_image_arg(arg: &str) -> Option<ImageRef> {
    if arg == "-" {
        return None;
    }
    if arg.contains("://") || arg.starts_with("//") || arg.starts_with("data:") {
        Some(ImageRef::url(arg))
    } else {
        Some(ImageRef::local(arg))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveRow {
    pub input: String,
    pub resolved: String,
    pub fallback: bool,
}

pub fn resolve_all(index: &AssetIndex, inputs: &[String], fallback: &str) -> Vec<ResolveRow> {
    inputs
        .iter()
        .map(|input| {
            let hit = index.lookup(parse_image_arg(input).as_ref());
            ResolveRow {
                input: input.clone(),
                fallback: hit.is_none(),
                resolved: hit.unwrap_or_else(|| fallback.to_string()),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantRow {
    pub variant: String,
    pub hits: Vec<String>,
}

/// Every alias of `key` with the indexed paths it matches.
pub fn variants_with_hits(index: &AssetIndex, key: &str) -> Vec<VariantRow> {
    key_variants(key)
        .into_iter()
        .map(|variant| {
            let hits = beastrealm_core::assets::candidate_paths(std::slice::from_ref(&variant))
                .into_iter()
                .filter(|path| index.get(path).is_some())
                .collect();
            VariantRow { variant, hits }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Open,
    Allowed,
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub path: String,
    pub status: RouteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast: Option<String>,
}

/// Run the guard over `paths`, collecting the toast each block raises.
pub async fn check_routes<S: GameConfigSource>(
    guard: &RouteGuard<S>,
    overlay: &OverlayStore,
    paths: &[String],
) -> Vec<RouteRow> {
    let mut rows = Vec::with_capacity(paths.len());
    for path in paths {
        if !guard.is_restricted(path) {
            rows.push(RouteRow {
                path: path.clone(),
                status: RouteStatus::Open,
                toast: None,
            });
            continue;
        }
        let status = match guard.check(path).await {
            NavigationDecision::Allowed => RouteStatus::Allowed,
            NavigationDecision::Blocked => RouteStatus::Blocked,
        };
        let toast = overlay.snapshot().toast;
        rows.push(RouteRow {
            path: path.clone(),
            status,
            toast: toast.visible.then_some(toast.message),
        });
        overlay.dismiss_toast();
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use beastrealm_core::{ConfigFetchError, GameConfig, ManualScheduler};
    use std::cell::Cell;
    use std::rc::Rc;

    struct StaticSource {
        test_mode: Option<bool>,
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl GameConfigSource for StaticSource {
        async fn fetch_game_config(&self) -> Result<GameConfig, ConfigFetchError> {
            self.calls.set(self.calls.get() + 1);
            match self.test_mode {
                Some(is_test_mode) => Ok(GameConfig {
                    ok: true,
                    is_test_mode,
                }),
                None => Err(ConfigFetchError::Request("connection refused".into())),
            }
        }
    }

    fn guard_with(test_mode: Option<bool>) -> (RouteGuard<Rc<StaticSource>>, OverlayStore, Rc<StaticSource>) {
        let config = ClientConfig::default();
        let overlay = OverlayStore::new(Rc::new(ManualScheduler::new()), &config);
        let source = Rc::new(StaticSource {
            test_mode,
            calls: Cell::new(0),
        });
        let guard = RouteGuard::new(source.clone(), overlay.clone(), &config);
        (guard, overlay, source)
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn image_args_classify() {
        assert_eq!(parse_image_arg("-"), None);
        assert_eq!(
            parse_image_arg("https://cdn.example.com/a.png"),
            Some(ImageRef::url("https://cdn.example.com/a.png"))
        );
        assert_eq!(parse_image_arg("pet3"), Some(ImageRef::local("pet3")));
    }

    #[test]
    fn bundled_manifest_resolves_aliases() {
        let index = load_index(None).expect("bundled manifest parses");
        let rows = resolve_all(
            &index,
            &paths(&["image7", "pet404", "-"]),
            "/assets/images/none.jpg",
        );
        assert_eq!(rows[0].resolved, "/assets/handbook/pet7.webp");
        assert!(!rows[0].fallback);
        assert!(rows[1].fallback);
        assert!(rows[2].fallback);
    }

    #[test]
    fn explicit_placeholder_path_counts_as_a_hit() {
        let index = load_index(None).expect("bundled manifest parses");
        let rows = resolve_all(
            &index,
            &paths(&["public/assets/images/none.jpg", "pet404"]),
            "/assets/images/none.jpg",
        );
        assert_eq!(rows[0].resolved, "/assets/images/none.jpg");
        assert!(!rows[0].fallback);
        assert_eq!(rows[1].resolved, "/assets/images/none.jpg");
        assert!(rows[1].fallback);
    }

    #[test]
    fn variants_report_where_each_alias_lands() {
        let index = load_index(None).expect("bundled manifest parses");
        let rows = variants_with_hits(&index, "pet4");
        assert_eq!(rows[0].variant, "pet4");
        assert_eq!(rows[1].variant, "image4");
        assert!(rows[1].hits.contains(&"/assets/images/image4.jpg".to_string()));
    }

    #[test]
    fn missing_manifest_file_is_reported() {
        let err = load_index(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("reading manifest"));
    }

    #[tokio::test]
    async fn test_mode_blocks_restricted_routes_only() {
        let (guard, overlay, source) = guard_with(Some(true));
        let rows = check_routes(&guard, &overlay, &paths(&["/handbook", "/arena/streak"])).await;
        assert_eq!(rows[0].status, RouteStatus::Open);
        assert_eq!(rows[1].status, RouteStatus::Blocked);
        assert_eq!(rows[1].toast.as_deref(), Some("测试模式下该功能未开放"));
        assert_eq!(source.calls.get(), 1);
        assert!(!overlay.snapshot().toast.visible);
    }

    #[tokio::test]
    async fn fetch_failure_fails_open() {
        let (guard, overlay, _) = guard_with(None);
        let rows = check_routes(&guard, &overlay, &paths(&["/pvp"])).await;
        assert_eq!(rows[0].status, RouteStatus::Allowed);
        assert_eq!(rows[0].toast, None);
    }
}
