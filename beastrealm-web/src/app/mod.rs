pub mod routing;

use beastrealm_core::loading::LOADING_TEXT;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::alert::install_alert_override;
use crate::components::overlay::OverlayHost;
use crate::context::ClientContext;
use crate::pages::battle_report::DragonPalaceReportPage;
use crate::pages::beast::{BeastDetailPage, BeastListPage};
use crate::pages::feature::FeaturePage;
use crate::pages::handbook::{HandbookPage, HandbookPetPage};
use crate::pages::home::HomePage;
use crate::pages::inventory::InventoryPage;
use crate::pages::not_found::NotFound;
use crate::paths;
use crate::router::Route;
pub use routing::use_route_guard;

/// Root component: builds the client context once, provides it to every
/// page, and mounts the router and overlay host.
#[function_component(App)]
pub fn app() -> Html {
    let ctx = use_memo((), |_| ClientContext::bundled());

    {
        let ctx = ctx.clone();
        use_effect_with((), move |_| {
            install_alert_override(&ctx.overlay);
        });
    }

    html! {
        <ContextProvider<ClientContext> context={(*ctx).clone()}>
            <BrowserRouter basename={paths::router_base().map(AttrValue::from)}>
                <AppShell />
            </BrowserRouter>
        </ContextProvider<ClientContext>>
    }
}

#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let ready = use_route_guard();
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    });

    html! {
        <>
            <main id="main" role="main">
                if ready {
                    <Switch<Route> render={move |route| switch(route, &on_go_home)} />
                } else {
                    <section class="panel status" aria-busy="true"><p>{ LOADING_TEXT }</p></section>
                }
            </main>
            <OverlayHost />
        </>
    }
}

fn switch(route: Route, on_go_home: &Callback<()>) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Handbook => html! { <HandbookPage /> },
        Route::HandbookPet { id } => html! { <HandbookPetPage {id} /> },
        Route::Inventory => html! { <InventoryPage /> },
        Route::Beast => html! { <BeastListPage /> },
        Route::BeastDetail { id } => html! { <BeastDetailPage {id} /> },
        Route::DragonPalaceReport => html! { <DragonPalaceReportPage /> },
        Route::NotFound => html! { <NotFound on_go_home={on_go_home.clone()} /> },
        route @ (Route::Login
        | Route::Map
        | Route::WorldChat
        | Route::Arena
        | Route::ArenaBattle
        | Route::ArenaStreak
        | Route::King
        | Route::KingRanking
        | Route::Pvp) => html! { <FeaturePage {route} /> },
    }
}
