//! Game image resolution.
//!
//! Handbook and beast art is authored under two naming conventions (`pet<N>`
//! and `image<N>`) and lives in two bundled directories. Configuration data can
//! name either convention; [`resolve`] walks a fixed candidate order against
//! the bundled [`AssetIndex`] and falls back to a placeholder on a miss.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Bundled asset directories, in lookup priority order.
pub const ASSET_DIRS: [&str; 2] = ["/assets/handbook", "/assets/images"];

/// Supported image extensions, in lookup priority order.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["gif", "png", "jpg", "jpeg", "webp"];

/// Keys starting with this prefix name a file served from the public root.
pub const PUBLIC_PREFIX: &str = "public/";

static PET_KEY: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?i)^pet(\d+)$").ok());
static IMAGE_KEY: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?i)^image(\d+)$").ok());

/// Symbolic image reference as delivered by the game server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImageRef {
    Url {
        #[serde(default)]
        url: String,
    },
    Local {
        #[serde(default)]
        local_key: String,
    },
}

impl ImageRef {
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    #[must_use]
    pub fn local(local_key: impl Into<String>) -> Self {
        Self::Local {
            local_key: local_key.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("asset manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exact-match index of bundled images, keyed by normalized path
/// (`/assets/handbook/pet3.gif`) and yielding a loadable URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    entries: BTreeMap<String, String>,
}

impl AssetIndex {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index from `(path, url)` pairs.
    ///
    /// Only paths inside [`ASSET_DIRS`] whose file name starts with `pet` or
    /// `image` and carries a supported extension are admitted, matching what
    /// the bundler enumerates.
    pub fn from_entries<I, P, U>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, U)>,
        P: AsRef<str>,
        U: Into<String>,
    {
        let mut index = Self::default();
        for (path, url) in entries {
            let key = normalize_path(path.as_ref());
            if is_indexable(&key) {
                index.entries.insert(key, url.into());
            } else {
                log::debug!("asset index skipped {key}");
            }
        }
        index
    }

    /// Build the index from a JSON manifest: an array of bundle-relative file
    /// paths. `to_url` maps each normalized path to the URL the browser loads.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is not a JSON array of strings.
    pub fn from_manifest(
        json: &str,
        to_url: impl Fn(&str) -> String,
    ) -> Result<Self, ManifestError> {
        let paths: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::from_entries(paths.into_iter().map(|path| {
            let key = normalize_path(&path);
            let url = to_url(&key);
            (key, url)
        })))
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// See [`lookup`].
    #[must_use]
    pub fn lookup(&self, image: Option<&ImageRef>) -> Option<String> {
        lookup(self, image)
    }

    /// Resolve `image` against this index; see [`resolve`].
    #[must_use]
    pub fn resolve(&self, image: Option<&ImageRef>, fallback: &str) -> String {
        resolve(self, image, fallback)
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().replace('\\', "/");
    if trimmed.starts_with('/') {
        trimmed
    } else {
        format!("/{trimmed}")
    }
}

fn is_indexable(path: &str) -> bool {
    let Some((dir, file)) = path.rsplit_once('/') else {
        return false;
    };
    if !ASSET_DIRS.contains(&dir) {
        return false;
    }
    let lower = file.to_ascii_lowercase();
    (lower.starts_with("pet") || lower.starts_with("image")) && has_image_extension(&lower)
}

fn has_image_extension(path: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| path.len() > ext.len() + 1 && path.ends_with(&format!(".{ext}")))
}

fn split_extension(key: &str) -> (&str, Option<&str>) {
    match key.rsplit_once('.') {
        Some((base, ext)) if !ext.is_empty() => (base, Some(ext)),
        _ => (key, None),
    }
}

/// Expand a local key into every alias worth looking up, first-seen order.
///
/// `pet7` also yields `image7` and vice versa; an explicit extension is
/// carried over to the alias.
#[must_use]
pub fn key_variants(local_key: &str) -> Vec<String> {
    let key = local_key.trim();
    if key.is_empty() {
        return Vec::new();
    }

    let mut out: Vec<String> = Vec::new();
    let mut push = |value: String| {
        let value = value.trim().to_string();
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    };

    push(key.to_string());

    let (base, ext) = split_extension(key);
    let aliases = [(PET_KEY.as_ref(), "image"), (IMAGE_KEY.as_ref(), "pet")];
    for (pattern, alias) in aliases {
        if let Some(id) = pattern
            .and_then(|re| re.captures(base))
            .and_then(|caps| caps.get(1))
        {
            let id = id.as_str();
            push(format!("{alias}{id}"));
            if let Some(ext) = ext {
                push(format!("{alias}{id}.{ext}"));
            }
        }
    }

    out
}

/// Every concrete path tried for `variants`, in lookup order.
#[must_use]
pub fn candidate_paths(variants: &[String]) -> Vec<String> {
    let mut paths = Vec::new();
    for variant in variants {
        for dir in ASSET_DIRS {
            let base = format!("{dir}/{variant}");
            if variant.contains('.') {
                paths.push(base);
                continue;
            }
            for ext in IMAGE_EXTENSIONS {
                paths.push(format!("{base}.{ext}"));
            }
        }
    }
    paths
}

fn resolve_local(index: &AssetIndex, local_key: &str) -> Option<String> {
    let variants = key_variants(local_key);
    let first = variants.first()?;

    if let Some(hit) = candidate_paths(&variants)
        .iter()
        .find_map(|path| index.get(path))
    {
        return Some(hit.to_string());
    }

    // Explicit paths are returned unchecked; guessing here would 404 a lot.
    if let Some(rest) = first.strip_prefix(PUBLIC_PREFIX) {
        return Some(format!("/{rest}"));
    }
    if first.contains('/') && has_image_extension(first) {
        return Some(format!("/{first}"));
    }
    None
}

/// Resolve `image` without a placeholder; `None` means a miss.
///
/// Blank URLs count as misses.
#[must_use]
pub fn lookup(index: &AssetIndex, image: Option<&ImageRef>) -> Option<String> {
    match image? {
        ImageRef::Url { url } if url.trim().is_empty() => None,
        ImageRef::Url { url } => Some(url.clone()),
        ImageRef::Local { local_key } => resolve_local(index, local_key),
    }
}

/// Turn an image reference into a loadable path, or `fallback` on a miss.
///
/// Never fails and never performs I/O.
#[must_use]
pub fn resolve(index: &AssetIndex, image: Option<&ImageRef>, fallback: &str) -> String {
    lookup(index, image).unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &str = "/assets/images/none.jpg";

    fn index(paths: &[&str]) -> AssetIndex {
        AssetIndex::from_entries(paths.iter().map(|p| (*p, format!("/static{p}"))))
    }

    #[test]
    fn variants_cover_both_conventions() {
        assert_eq!(key_variants("pet7"), vec!["pet7", "image7"]);
        assert_eq!(key_variants("image7"), vec!["image7", "pet7"]);
        assert_eq!(
            key_variants("pet7.png"),
            vec!["pet7.png", "image7", "image7.png"]
        );
        assert_eq!(key_variants("  "), Vec::<String>::new());
        assert_eq!(key_variants("dragon"), vec!["dragon"]);
    }

    #[test]
    fn variants_are_stable_and_symmetric() {
        assert_eq!(key_variants("pet7"), key_variants("pet7"));
        let mut pet = key_variants("pet7");
        let mut image = key_variants("image7");
        pet.sort();
        image.sort();
        assert_eq!(pet, image);
    }

    #[test]
    fn variant_matching_ignores_case() {
        assert_eq!(key_variants("PET12"), vec!["PET12", "image12"]);
    }

    #[test]
    fn trailing_dot_is_not_an_extension() {
        assert_eq!(key_variants("pet3."), vec!["pet3."]);
    }

    #[test]
    fn candidates_expand_extensions_per_directory() {
        let paths = candidate_paths(&["pet1".to_string()]);
        assert_eq!(paths.len(), 10);
        assert_eq!(paths[0], "/assets/handbook/pet1.gif");
        assert_eq!(paths[4], "/assets/handbook/pet1.webp");
        assert_eq!(paths[5], "/assets/images/pet1.gif");

        let explicit = candidate_paths(&["pet1.png".to_string()]);
        assert_eq!(
            explicit,
            vec!["/assets/handbook/pet1.png", "/assets/images/pet1.png"]
        );
    }

    #[test]
    fn pet_key_finds_image_asset() {
        let idx = index(&["/assets/images/image42.png"]);
        let resolved = resolve(&idx, Some(&ImageRef::local("pet42")), NONE);
        assert_eq!(resolved, "/static/assets/images/image42.png");
    }

    #[test]
    fn handbook_directory_wins_over_images() {
        let idx = index(&["/assets/images/pet5.gif", "/assets/handbook/pet5.webp"]);
        let resolved = resolve(&idx, Some(&ImageRef::local("pet5")), NONE);
        assert_eq!(resolved, "/static/assets/handbook/pet5.webp");
    }

    #[test]
    fn literal_key_wins_over_alias() {
        let idx = index(&["/assets/images/image5.gif", "/assets/images/pet5.jpg"]);
        let resolved = resolve(&idx, Some(&ImageRef::local("pet5")), NONE);
        assert_eq!(resolved, "/static/assets/images/pet5.jpg");
    }

    #[test]
    fn misses_fall_back() {
        let idx = index(&["/assets/images/pet1.gif"]);
        assert_eq!(resolve(&idx, Some(&ImageRef::local("pet2")), NONE), NONE);
        assert_eq!(resolve(&idx, Some(&ImageRef::local("")), NONE), NONE);
        assert_eq!(resolve(&idx, None, NONE), NONE);
    }

    #[test]
    fn lookup_separates_hits_from_misses() {
        let idx = index(&["/assets/images/none.jpg", "/assets/handbook/pet2.gif"]);
        assert_eq!(
            idx.lookup(Some(&ImageRef::local("image2"))),
            Some("/static/assets/handbook/pet2.gif".to_string())
        );
        assert_eq!(idx.lookup(Some(&ImageRef::local("pet9"))), None);
        assert_eq!(idx.lookup(Some(&ImageRef::url("  "))), None);
        assert_eq!(idx.lookup(None), None);
        // A literal public path that happens to be the placeholder is still a hit.
        assert_eq!(
            idx.lookup(Some(&ImageRef::local("public/assets/images/none.jpg"))),
            Some(NONE.to_string())
        );
    }

    #[test]
    fn url_refs_pass_through() {
        let idx = index(&["/assets/images/pet1.gif"]);
        assert_eq!(
            resolve(&idx, Some(&ImageRef::url("https://cdn/x.png")), NONE),
            "https://cdn/x.png"
        );
        assert_eq!(resolve(&idx, Some(&ImageRef::url("   ")), NONE), NONE);
    }

    #[test]
    fn explicit_paths_are_returned_unchecked() {
        let idx = AssetIndex::empty();
        assert_eq!(
            resolve(&idx, Some(&ImageRef::local("public/img/banner.png")), NONE),
            "/img/banner.png"
        );
        assert_eq!(
            resolve(&idx, Some(&ImageRef::local("img/banner.webp")), NONE),
            "/img/banner.webp"
        );
        assert_eq!(
            resolve(&idx, Some(&ImageRef::local("img/banner.bmp")), NONE),
            NONE
        );
    }

    #[test]
    fn index_admits_only_enumerated_files() {
        let idx = index(&[
            "assets/handbook/pet1.gif",
            "/assets/images/image2.JPG",
            "/assets/images/logo.png",
            "/assets/other/pet3.png",
            "/assets/images/pet4.txt",
        ]);
        assert_eq!(idx.len(), 2);
        assert!(idx.get("/assets/handbook/pet1.gif").is_some());
        assert!(idx.get("/assets/images/image2.JPG").is_some());
    }

    #[test]
    fn manifest_maps_paths_to_urls() {
        let json = r#"["assets/handbook/pet1.gif", "assets/images/image9.png"]"#;
        let idx = AssetIndex::from_manifest(json, |p| format!("/play{p}"))
            .expect("manifest parses");
        assert_eq!(
            idx.get("/assets/images/image9.png"),
            Some("/play/assets/images/image9.png")
        );
        assert!(AssetIndex::from_manifest("{}", str::to_string).is_err());
    }

    #[test]
    fn image_ref_deserializes_server_payload() {
        let local: ImageRef =
            serde_json::from_str(r#"{"type":"local","local_key":"image3","url":""}"#)
                .expect("local payload");
        assert_eq!(local, ImageRef::local("image3"));
        let url: ImageRef =
            serde_json::from_str(r#"{"type":"url","url":"https://x/y.gif","local_key":""}"#)
                .expect("url payload");
        assert_eq!(url, ImageRef::url("https://x/y.gif"));
    }
}
