use beastrealm_core::{FieldState, Paginator};
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{Battle, Report, ReportResponse};
use crate::components::pagination::Pager;
use crate::components::status::status_line;
use crate::context::{ClientContext, endpoint_url};
use crate::hooks::use_api;

#[derive(Debug, Default, Deserialize)]
struct ReportQuery {
    #[serde(default)]
    stage: u32,
}

#[function_component(DragonPalaceReportPage)]
pub fn dragon_palace_report_page() -> Html {
    let ctx = use_context::<ClientContext>();
    let stage = use_location()
        .and_then(|location| location.query::<ReportQuery>().ok())
        .unwrap_or_default()
        .stage;
    let url = endpoint_url(ctx.as_ref(), &format!("/dragonpalace/report?stage={stage}"));
    let (state, on_retry) = use_api::<ReportResponse>(url);
    let per_page = ctx.map_or(10, |ctx| ctx.config.rounds_per_page);
    let Some(response) = state.ready() else {
        return status_line(&state, &on_retry);
    };
    html! { <BattleReportView report={response.report.clone()} {per_page} /> }
}

/// The battle at tab `selected`, or the first one when a shorter report
/// replaced the one the tab was picked from.
#[must_use]
pub fn selected_battle(battles: &[Battle], selected: usize) -> Option<(usize, &Battle)> {
    battles
        .get(selected)
        .map(|battle| (selected, battle))
        .or_else(|| battles.first().map(|battle| (0, battle)))
}

#[derive(Properties, PartialEq, Clone)]
pub struct BattleReportViewProps {
    pub report: Report,
    #[prop_or(10)]
    pub per_page: usize,
}

/// Battle tabs over a paged round log.
#[function_component(BattleReportView)]
pub fn battle_report_view(props: &BattleReportViewProps) -> Html {
    let selected = use_state(|| 0_usize);
    let paginator = use_state(|| Paginator::new(props.per_page));

    {
        let selected = selected.clone();
        let paginator = paginator.clone();
        use_effect_with(props.report.clone(), move |_| {
            selected.set(0);
            let mut reset = *paginator;
            reset.reset();
            paginator.set(reset);
        });
    }

    let Some((current, battle)) = selected_battle(&props.report.battles, *selected) else {
        return html! { <section class="panel report"><p class="muted">{ "暂无战报" }</p></section> };
    };

    let tabs = props.report.battles.iter().enumerate().map(|(idx, b)| {
        let on_click = {
            let selected = selected.clone();
            let paginator = paginator.clone();
            Callback::from(move |_| {
                selected.set(idx);
                let mut reset = *paginator;
                reset.reset();
                paginator.set(reset);
            })
        };
        let class = classes!("tab", (idx == current).then_some("tab-active"));
        html! { <button type="button" class={class} onclick={on_click}>{ format!("第{}场", b.battle_num) }</button> }
    });

    let on_page = {
        let paginator = paginator.clone();
        let len = battle.rounds.len();
        Callback::from(move |page: usize| {
            let mut next = *paginator;
            if next.go_to(page, len) {
                paginator.set(next);
            }
        })
    };

    html! {
        <section class="panel report">
            <h1>{ "详细战报" }</h1>
            <div class="tabs" role="tablist">{ for tabs }</div>
            <ol class="report__rounds">
                { for paginator.page_items(&battle.rounds).iter().map(|round| html! {
                    <li key={round.round}>
                        <span class="report__round">{ format!("第{}回合", round.round) }</span>
                        <span>{ round.action.clone() }</span>
                    </li>
                }) }
            </ol>
            <Pager paginator={*paginator} len={battle.rounds.len()} on_change={on_page} />
            if !battle.result.is_empty() {
                <p class="report__result">{ battle.result.clone() }</p>
            }
        </section>
    }
}
