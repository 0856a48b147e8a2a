use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const ENTRIES: [Route; 8] = [
    Route::Handbook,
    Route::Inventory,
    Route::Beast,
    Route::Map,
    Route::WorldChat,
    Route::Arena,
    Route::King,
    Route::Pvp,
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="panel home">
            <h1>{ "幻兽世界" }</h1>
            <ul class="home__menu">
                { for ENTRIES.iter().map(|route| html! {
                    <li><Link<Route> to={route.clone()}>{ route.title() }</Link<Route>></li>
                }) }
            </ul>
        </section>
    }
}
