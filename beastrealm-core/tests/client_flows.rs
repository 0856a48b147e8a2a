use async_trait::async_trait;
use beastrealm_core::{
    AssetIndex, ClientConfig, ConfigFetchError, DialogAnswer, DialogOptions, GameConfig,
    GameConfigSource, ImageRef, ManualScheduler, NavigationDecision, OverlayEvent, OverlayStore,
    RouteGuard, ToastKind, key_variants,
};
use futures::FutureExt;
use futures::executor::block_on;
use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

const FALLBACK: &str = "/assets/images/none.jpg";

fn bundled_index() -> AssetIndex {
    AssetIndex::from_manifest(
        r#"[
            "assets/handbook/pet1.gif",
            "assets/handbook/image2.png",
            "assets/images/image3.webp",
            "assets/images/image4.jpeg",
            "assets/images/pet5.jpg"
        ]"#,
        |path| format!("/static{path}"),
    )
    .expect("fixture manifest parses")
}

#[test]
fn pet_keys_find_image_named_assets_in_either_directory() {
    let index = bundled_index();
    for (key, expected) in [
        ("pet2", "/static/assets/handbook/image2.png"),
        ("pet3", "/static/assets/images/image3.webp"),
        ("pet4", "/static/assets/images/image4.jpeg"),
        ("image5", "/static/assets/images/pet5.jpg"),
        ("pet3.webp", "/static/assets/images/image3.webp"),
    ] {
        assert_eq!(
            index.resolve(Some(&ImageRef::local(key)), FALLBACK),
            expected,
            "key {key}"
        );
    }
}

#[test]
fn unknown_local_keys_return_the_fallback_exactly() {
    let index = bundled_index();
    for key in ["pet99", "dragon", "image", "pet6.png", ""] {
        assert_eq!(index.resolve(Some(&ImageRef::local(key)), FALLBACK), FALLBACK);
    }
}

#[test]
fn url_references_ignore_the_index() {
    let index = bundled_index();
    let url = "https://cdn.example/pet1.gif";
    assert_eq!(index.resolve(Some(&ImageRef::url(url)), FALLBACK), url);
    assert_eq!(
        AssetIndex::empty().resolve(Some(&ImageRef::url(url)), FALLBACK),
        url
    );
}

#[test]
fn key_variants_are_repeatable_and_convention_symmetric() {
    assert_eq!(key_variants("pet7"), key_variants("pet7"));
    let pet: BTreeSet<_> = key_variants("pet7").into_iter().collect();
    let image: BTreeSet<_> = key_variants("image7").into_iter().collect();
    assert_eq!(pet, image);
}

fn overlay() -> (OverlayStore, ManualScheduler) {
    let clock = ManualScheduler::new();
    let store = OverlayStore::new(Rc::new(clock.clone()), &ClientConfig::default());
    (store, clock)
}

#[test]
fn back_to_back_toasts_dismiss_once() {
    let (store, clock) = overlay();
    let hides = Rc::new(Cell::new(0));
    let counter = hides.clone();
    store.subscribe(move |event| {
        if *event == OverlayEvent::ToastDismissed {
            counter.set(counter.get() + 1);
        }
    });

    store.show_toast("first", ToastKind::Info, Duration::from_millis(300));
    store.show_toast("second", ToastKind::Success, Duration::from_millis(300));
    clock.advance(Duration::from_millis(300));
    assert!(!store.snapshot().toast.visible);
    clock.advance(Duration::from_secs(10));
    assert_eq!(hides.get(), 1);
}

#[test]
fn confirm_resolves_once_on_close() {
    let (store, _) = overlay();
    let mut pending = Box::pin(store.confirm("x", DialogOptions::default()));
    assert!(pending.as_mut().now_or_never().is_none());

    store.close_dialog(DialogAnswer::Accept);
    store.close_dialog(DialogAnswer::Cancel);
    assert_eq!(pending.now_or_never(), Some(Ok(true)));
    assert!(!store.snapshot().dialog.visible);
}

struct CountingSource {
    reply: Option<bool>,
    calls: Rc<Cell<u32>>,
}

#[async_trait(?Send)]
impl GameConfigSource for CountingSource {
    async fn fetch_game_config(&self) -> Result<GameConfig, ConfigFetchError> {
        self.calls.set(self.calls.get() + 1);
        self.reply
            .map(|is_test_mode| GameConfig {
                ok: true,
                is_test_mode,
            })
            .ok_or_else(|| ConfigFetchError::Status {
                status: 502,
                status_text: "Bad Gateway".into(),
            })
    }
}

fn guard(reply: Option<bool>) -> (RouteGuard<CountingSource>, OverlayStore, Rc<Cell<u32>>) {
    let (store, _) = overlay();
    let calls = Rc::new(Cell::new(0));
    let source = CountingSource {
        reply,
        calls: calls.clone(),
    };
    let guard = RouteGuard::new(source, store.clone(), &ClientConfig::default());
    (guard, store, calls)
}

#[test]
fn arena_navigation_follows_the_remote_flag() {
    let (blocked, store, _) = guard(Some(true));
    assert_eq!(
        block_on(blocked.check("/arena/battle")),
        NavigationDecision::Blocked
    );
    assert!(store.snapshot().toast.visible);

    let (open, store, _) = guard(Some(false));
    assert_eq!(
        block_on(open.check("/arena/battle")),
        NavigationDecision::Allowed
    );
    assert!(!store.snapshot().toast.visible);

    let (failing, store, calls) = guard(None);
    assert_eq!(
        block_on(failing.check("/arena/battle")),
        NavigationDecision::Allowed
    );
    assert!(!store.snapshot().toast.visible);
    assert_eq!(calls.get(), 1);
}

#[test]
fn beast_pages_never_fetch_the_flag() {
    let (guard, _, calls) = guard(Some(true));
    assert!(block_on(guard.check("/beast/42")).is_allowed());
    assert_eq!(calls.get(), 0);
}
