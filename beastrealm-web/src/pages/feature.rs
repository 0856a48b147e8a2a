use beastrealm_core::loading::UNAVAILABLE_TEXT;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct FeaturePageProps {
    pub route: Route,
}

/// Placeholder for screens this client routes to but does not render yet.
#[function_component(FeaturePage)]
pub fn feature_page(props: &FeaturePageProps) -> Html {
    html! {
        <section class="panel feature">
            <h1>{ props.route.title() }</h1>
            <p class="muted">{ UNAVAILABLE_TEXT }</p>
            <Link<Route> to={Route::Home}>{ "返回首页" }</Link<Route>>
        </section>
    }
}
