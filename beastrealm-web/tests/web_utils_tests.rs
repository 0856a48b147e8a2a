use beastrealm_core::{ImageRef, ManualScheduler, item_use_route};
use beastrealm_web::context::{ClientContext, bundled_assets, bundled_config};
use beastrealm_web::router::Route;
use std::rc::Rc;

fn context() -> ClientContext {
    ClientContext::new(bundled_config(), bundled_assets(), Rc::new(ManualScheduler::new()))
}

#[test]
fn item_use_targets_are_routable() {
    let target = item_use_route(4004, "小喇叭").expect("trumpet has a route");
    assert_eq!(Route::from_app_path(target), Route::WorldChat);
    let target = item_use_route(0, "技能书·龙爪").expect("skill book has a route");
    assert_eq!(Route::from_app_path(target), Route::Beast);
}

#[test]
fn restricted_prefixes_cover_competitive_routes() {
    use yew_router::Routable;
    let ctx = context();
    for route in [Route::Arena, Route::ArenaStreak, Route::KingRanking, Route::Pvp] {
        assert!(ctx.guard.is_restricted(&route.to_path()), "{route:?}");
    }
    for route in [Route::Home, Route::Handbook, Route::Inventory, Route::Map] {
        assert!(!ctx.guard.is_restricted(&route.to_path()), "{route:?}");
    }
}

#[test]
fn image_sources_pass_remote_urls_through() {
    let ctx = context();
    let remote = ImageRef::url("https://cdn.example.com/pets/1.png");
    assert_eq!(ctx.image_src(Some(&remote)), "https://cdn.example.com/pets/1.png");
    assert!(ctx.image_src(None).ends_with("/assets/images/none.jpg"));
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use beastrealm_core::{ClientConfig, ManualScheduler, OverlayStore, Scheduler};
    use beastrealm_web::alert::install_alert_override;
    use beastrealm_web::dom;
    use beastrealm_web::scheduler::BrowserScheduler;
    use futures::channel::oneshot;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn dom_helpers_find_window() {
        assert!(dom::window().is_some());
        assert!(dom::document().is_some());
    }

    #[wasm_bindgen_test]
    fn alert_override_shows_toast_and_installs_once() {
        let overlay = OverlayStore::new(Rc::new(ManualScheduler::new()), &ClientConfig::default());
        assert!(install_alert_override(&overlay));
        assert!(!install_alert_override(&overlay));

        let window = dom::window().expect("window");
        let alert: js_sys::Function = js_sys::Reflect::get(&window, &JsValue::from_str("alert"))
            .expect("alert property")
            .dyn_into()
            .expect("alert is callable");
        alert
            .call1(&window, &JsValue::from_str("背包已满"))
            .expect("alert call");

        let toast = overlay.snapshot().toast;
        assert!(toast.visible);
        assert_eq!(toast.message, "背包已满");
    }

    #[wasm_bindgen_test]
    async fn browser_scheduler_runs_tasks() {
        let (tx, rx) = oneshot::channel::<()>();
        BrowserScheduler.schedule(
            Duration::from_millis(1),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        rx.await.expect("timer fired");
    }
}
