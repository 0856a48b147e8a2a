//! Composition root shared with every page through a yew context provider.

use beastrealm_core::{AssetIndex, ClientConfig, ImageRef, OverlayStore, RouteGuard, Scheduler};
use std::rc::Rc;

use crate::api::HttpConfigSource;
use crate::paths;
use crate::scheduler::BrowserScheduler;

const CLIENT_JSON: &str = include_str!("../static/assets/data/client.json");
const ASSET_MANIFEST: &str = include_str!("../static/assets/data/assets.json");

/// Client tunables bundled with the build.
#[must_use]
pub fn bundled_config() -> ClientConfig {
    ClientConfig::from_json_or_default(CLIENT_JSON)
}

/// Index of bundled images. Keys and values are bundle paths; the deployment
/// base is applied when an `<img>` is rendered.
#[must_use]
pub fn bundled_assets() -> AssetIndex {
    AssetIndex::from_manifest(ASSET_MANIFEST, str::to_string).unwrap_or_else(|err| {
        log::error!("{err}; images will use the placeholder");
        AssetIndex::empty()
    })
}

#[derive(Clone)]
pub struct ClientContext {
    pub config: Rc<ClientConfig>,
    pub assets: Rc<AssetIndex>,
    pub scheduler: Rc<dyn Scheduler>,
    pub overlay: OverlayStore,
    pub guard: Rc<RouteGuard<HttpConfigSource>>,
}

impl PartialEq for ClientContext {
    fn eq(&self, other: &Self) -> bool {
        self.overlay == other.overlay
            && Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.assets, &other.assets)
            && Rc::ptr_eq(&self.guard, &other.guard)
    }
}

impl ClientContext {
    #[must_use]
    pub fn new(config: ClientConfig, assets: AssetIndex, scheduler: Rc<dyn Scheduler>) -> Self {
        let overlay = OverlayStore::new(scheduler.clone(), &config);
        let source = HttpConfigSource::new(&config.api_base);
        let guard = RouteGuard::new(source, overlay.clone(), &config);
        Self {
            config: Rc::new(config),
            assets: Rc::new(assets),
            scheduler,
            overlay,
            guard: Rc::new(guard),
        }
    }

    /// Context for the running app: bundled data and browser timers.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(bundled_config(), bundled_assets(), Rc::new(BrowserScheduler))
    }

    /// `src` for an image reference, falling back to the configured placeholder.
    #[must_use]
    pub fn image_src(&self, image: Option<&ImageRef>) -> String {
        paths::image_url(&self.assets.resolve(image, &self.config.fallback_image))
    }

    #[must_use]
    pub fn api_url(&self, endpoint: &str) -> String {
        self.config.api_url(endpoint)
    }
}

/// API URL for `endpoint`, using bundled config when rendered without a provider.
#[must_use]
pub fn endpoint_url(ctx: Option<&ClientContext>, endpoint: &str) -> String {
    ctx.map_or_else(
        || bundled_config().api_url(endpoint),
        |ctx| ctx.api_url(endpoint),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use beastrealm_core::ManualScheduler;

    fn context() -> ClientContext {
        ClientContext::new(
            bundled_config(),
            bundled_assets(),
            Rc::new(ManualScheduler::new()),
        )
    }

    #[test]
    fn bundled_data_parses() {
        assert_eq!(bundled_config(), ClientConfig::default());
        let assets = bundled_assets();
        assert_eq!(assets.len(), 11);
        assert!(assets.paths().all(|path| path.starts_with("/assets/")));
    }

    #[test]
    fn images_resolve_against_the_bundle() {
        let ctx = context();
        assert_eq!(
            ctx.image_src(Some(&ImageRef::local("image1"))),
            "/assets/handbook/pet1.gif"
        );
        assert_eq!(
            ctx.image_src(Some(&ImageRef::local("pet4"))),
            "/assets/images/image4.jpg"
        );
        assert_eq!(ctx.image_src(None), "/assets/images/none.jpg");
        assert_eq!(
            ctx.image_src(Some(&ImageRef::url("https://cdn.example/a.gif"))),
            "https://cdn.example/a.gif"
        );
    }

    #[test]
    fn contexts_compare_by_identity() {
        let ctx = context();
        assert!(ctx == ctx.clone());
        assert!(ctx != context());
    }

    #[test]
    fn guard_uses_configured_prefixes() {
        let ctx = context();
        assert!(ctx.guard.is_restricted("/king/ranking"));
        assert!(!ctx.guard.is_restricted("/handbook"));
        assert_eq!(ctx.api_url("/inventory/list"), "/api/inventory/list");
        assert_eq!(endpoint_url(None, "beast/list"), "/api/beast/list");
    }
}
