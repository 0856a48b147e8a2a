use beastrealm_core::{Aptitude, BeastSummary, FieldState, aptitude_value, beast_label, find_beast};
use serde_json::Value;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::BeastListResponse;
use crate::components::status::status_line;
use crate::context::{ClientContext, endpoint_url};
use crate::hooks::use_api;
use crate::router::Route;

#[must_use]
pub const fn aptitude_label(aptitude: Aptitude) -> &'static str {
    match aptitude {
        Aptitude::Hp => "气血资质",
        Aptitude::Speed => "速度资质",
        Aptitude::PhysicalAttack => "物攻资质",
        Aptitude::PhysicalDefense => "物防资质",
        Aptitude::MagicAttack => "法攻资质",
        Aptitude::MagicDefense => "法防资质",
    }
}

#[hook]
fn use_beast_list() -> (FieldState<BeastListResponse>, Callback<()>) {
    let ctx = use_context::<ClientContext>();
    use_api::<BeastListResponse>(endpoint_url(ctx.as_ref(), "/beast/list"))
}

#[function_component(BeastListPage)]
pub fn beast_list_page() -> Html {
    let (state, on_retry) = use_beast_list();
    let Some(list) = state.ready() else {
        return status_line(&state, &on_retry);
    };
    html! {
        <section class="panel beasts">
            <h1>{ "幻兽" }</h1>
            <ul>
                { for list.beasts().into_iter().map(|(beast, _)| html! {
                    <li key={beast.id_text()}>
                        <Link<Route> to={Route::BeastDetail { id: beast.id_text() }}>
                            { beast_label(Some(&beast)) }
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BeastDetailPageProps {
    pub id: String,
}

#[function_component(BeastDetailPage)]
pub fn beast_detail_page(props: &BeastDetailPageProps) -> Html {
    let (state, on_retry) = use_beast_list();
    let Some(list) = state.ready() else {
        return status_line(&state, &on_retry);
    };
    let beasts = list.beasts();
    let summaries: Vec<BeastSummary> = beasts.iter().map(|(summary, _)| summary.clone()).collect();
    let found = find_beast(&summaries, &props.id);
    let raw = found.and_then(|found| {
        beasts
            .iter()
            .find(|(summary, _)| summary == found)
            .map(|(_, raw)| (*raw).clone())
    });
    html! {
        <BeastDetailView beast={found.cloned()} raw={raw.unwrap_or(Value::Null)} />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BeastDetailViewProps {
    pub beast: Option<BeastSummary>,
    /// Full `/beast/list` entry the aptitudes are read from.
    pub raw: Value,
}

#[function_component(BeastDetailView)]
pub fn beast_detail_view(props: &BeastDetailViewProps) -> Html {
    html! {
        <section class="panel beast-detail">
            <h1>{ beast_label(props.beast.as_ref()) }</h1>
            <dl class="beast-detail__aptitudes">
                { for Aptitude::ALL.into_iter().map(|aptitude| html! {
                    <div key={aptitude.key()}>
                        <dt>{ aptitude_label(aptitude) }</dt>
                        <dd>{ aptitude_value(&props.raw, aptitude).to_string() }</dd>
                    </div>
                }) }
            </dl>
            <Link<Route> to={Route::Beast}>{ "返回" }</Link<Route>>
        </section>
    }
}
