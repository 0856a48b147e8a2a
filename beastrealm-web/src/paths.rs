//! URLs for bundled files and the router, honoring the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/rpg` when served from a
//! subdirectory). Without it everything is root-anchored.

fn public_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_base())
}

/// Base path for the router, or `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_base())
}

/// Map a resolved image path to a browser URL.
///
/// Remote and data URLs pass through; root-anchored bundle paths get the
/// deployment base.
#[must_use]
pub fn image_url(resolved: &str) -> String {
    if is_external(resolved) {
        resolved.to_string()
    } else {
        asset_path(resolved)
    }
}

fn is_external(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("data:")
        || path.starts_with("blob:")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_anchored_without_base() {
        assert_eq!(
            asset_path("assets/handbook/pet1.gif"),
            "/assets/handbook/pet1.gif"
        );
        assert_eq!(asset_path("/assets/images/none.jpg"), "/assets/images/none.jpg");
    }

    #[test]
    fn base_is_prefixed_once() {
        assert_eq!(
            asset_path_with_base("/assets/images/image4.jpg", "/rpg/"),
            "/rpg/assets/images/image4.jpg"
        );
        assert_eq!(router_base_with_base("/rpg/"), Some("/rpg".to_string()));
        assert_eq!(router_base_with_base(" "), None);
        assert_eq!(router_base(), None);
    }

    #[test]
    fn external_images_pass_through() {
        assert_eq!(
            image_url("https://cdn.example/p.png"),
            "https://cdn.example/p.png"
        );
        assert_eq!(image_url("data:image/png;base64,AA"), "data:image/png;base64,AA");
        assert_eq!(image_url("/assets/images/none.jpg"), "/assets/images/none.jpg");
    }
}
