use beastrealm_core::{DialogOptions, FieldState, Scheduler, item_use_route};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, Envelope, InventoryItem, InventoryList, UseItemRequest, UseItemResponse};
use crate::components::status::status_line;
use crate::components::toast_stack::{ToastStackView, use_toast_stack};
use crate::context::{ClientContext, endpoint_url};
use crate::hooks::use_api;
use crate::router::Route;
use crate::scheduler::BrowserScheduler;

#[function_component(InventoryPage)]
pub fn inventory_page() -> Html {
    let ctx = use_context::<ClientContext>();
    let (state, reload) = use_api::<InventoryList>(endpoint_url(ctx.as_ref(), "/inventory/list"));
    let navigator = use_navigator();
    let scheduler: Rc<dyn Scheduler> = match ctx.as_ref() {
        Some(ctx) => ctx.scheduler.clone(),
        None => Rc::new(BrowserScheduler),
    };
    let toasts = use_toast_stack(scheduler);
    let on_retry = reload.clone();

    let on_use = {
        let toasts = toasts.clone();
        Callback::from(move |item: InventoryItem| {
            if let Some(path) = item_use_route(item.item_id, &item.name) {
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&Route::from_app_path(path));
                }
                return;
            }
            let Some(ctx) = ctx.clone() else {
                return;
            };
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let question = format!("确定使用{}吗？", item.name);
                match ctx.overlay.confirm(question, DialogOptions::default()).await {
                    Ok(true) => {}
                    Ok(false) => return,
                    Err(err) => {
                        log::debug!("use of {} not confirmed: {err}", item.name);
                        return;
                    }
                }
                let request = UseItemRequest {
                    id: item.id,
                    quantity: 1,
                };
                let url = ctx.api_url("/inventory/use");
                let reply = api::post_json::<_, UseItemResponse>(&url, &request)
                    .await
                    .and_then(UseItemResponse::accepted);
                match reply {
                    Ok(reply) => {
                        toasts.success(reply.message.unwrap_or_else(|| "使用成功".to_string()));
                        reload.emit(());
                    }
                    Err(err) => {
                        toasts.error(err.to_string());
                    }
                }
            });
        })
    };

    html! {
        <>
            <ToastStackView entries={toasts.entries()} on_dismiss={Some(toasts.dismiss_callback())} />
            <InventoryView {state} {on_use} {on_retry} />
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct InventoryViewProps {
    pub state: FieldState<InventoryList>,
    pub on_use: Callback<InventoryItem>,
    #[prop_or_default]
    pub on_retry: Callback<()>,
}

#[function_component(InventoryView)]
pub fn inventory_view(props: &InventoryViewProps) -> Html {
    let Some(list) = props.state.ready() else {
        return status_line(&props.state, &props.on_retry);
    };
    if list.items.is_empty() {
        return html! { <section class="panel inventory"><p class="muted">{ "背包空空如也" }</p></section> };
    }
    html! {
        <section class="panel inventory">
            <h1>{ "背包" }</h1>
            <ul class="inventory__list">
                { for list.items.iter().map(|item| {
                    let on_click = {
                        let cb = props.on_use.clone();
                        let item = item.clone();
                        Callback::from(move |_| cb.emit(item.clone()))
                    };
                    html! {
                        <li key={item.id} class="inventory__item">
                            <span class="inventory__name">{ format!("{}×{}", item.name, item.quantity) }</span>
                            if !item.description.is_empty() {
                                <span class="inventory__desc">{ item.description.clone() }</span>
                            }
                            <button type="button" onclick={on_click}>{ "使用" }</button>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
