use beastrealm_core::Paginator;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PagerProps {
    pub paginator: Paginator,
    /// Length of the list being paged.
    pub len: usize,
    /// Receives the requested zero-based page.
    pub on_change: Callback<usize>,
}

/// Previous/next pager with a page counter, hidden for single-page lists.
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let total = props.paginator.total_pages(props.len);
    if total <= 1 {
        return Html::default();
    }
    let current = props.paginator.current();
    let go_to = |page: usize| {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(page))
    };
    html! {
        <div class="join pager" role="group" aria-label="分页">
            <button class="join-item btn" disabled={!props.paginator.has_prev()}
                onclick={go_to(current.saturating_sub(1))}>{ "上一页" }</button>
            <span class="join-item pager__count">{ format!("{}/{}", current + 1, total) }</span>
            <button class="join-item btn" disabled={!props.paginator.has_next(props.len)}
                onclick={go_to(current + 1)}>{ "下一页" }</button>
        </div>
    }
}
