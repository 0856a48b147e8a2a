use beastrealm_core::FieldState;
use beastrealm_core::loading::{FAILED_TEXT, LOADING_TEXT, UNAVAILABLE_TEXT};
use yew::prelude::*;

/// Loading / failure line with a retry button on failure.
pub fn status_line<T>(state: &FieldState<T>, on_retry: &Callback<()>) -> Html {
    let text = match state {
        FieldState::Loading => LOADING_TEXT,
        FieldState::Failed => FAILED_TEXT,
        FieldState::Unavailable => UNAVAILABLE_TEXT,
        FieldState::Ready(_) => return Html::default(),
    };
    let retry = state.is_failed().then(|| {
        let cb = on_retry.clone();
        html! { <button type="button" onclick={Callback::from(move |_| cb.emit(()))}>{ "重试" }</button> }
    });
    html! {
        <section class="panel status" aria-busy={matches!(state, FieldState::Loading).to_string()}>
            <p>{ text }</p>
            { retry.unwrap_or_default() }
        </section>
    }
}
