//! Renders the overlay store: a single toast and at most one modal dialog.

use beastrealm_core::{DialogAnswer, DialogMode, OverlayState};
use yew::prelude::*;

use crate::context::ClientContext;

#[derive(Properties, PartialEq, Clone)]
pub struct OverlayViewProps {
    pub state: OverlayState,
    pub on_answer: Callback<DialogAnswer>,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub on_dismiss_toast: Callback<()>,
}

/// Stateless view of an [`OverlayState`] snapshot.
#[function_component(OverlayView)]
pub fn overlay_view(props: &OverlayViewProps) -> Html {
    let toast = &props.state.toast;
    let dialog = &props.state.dialog;

    let toast_html = if toast.visible {
        let on_click = {
            let cb = props.on_dismiss_toast.clone();
            Callback::from(move |_| cb.emit(()))
        };
        html! {
            <div class={classes!("toast", format!("toast--{}", toast.kind.as_str()))}
                 role="status" aria-live="polite" onclick={on_click}>
                { toast.message.clone() }
            </div>
        }
    } else {
        Html::default()
    };

    let dialog_html = if dialog.visible {
        html! {
            <DialogView
                mode={dialog.mode}
                message={AttrValue::from(dialog.message.clone())}
                input={AttrValue::from(dialog.input.clone())}
                placeholder={AttrValue::from(dialog.placeholder.clone())}
                confirm_label={AttrValue::from(dialog.confirm_label.clone())}
                cancel_label={AttrValue::from(dialog.cancel_label.clone())}
                on_answer={props.on_answer.clone()}
                on_input={props.on_input.clone()}
            />
        }
    } else {
        Html::default()
    };

    html! {
        <>
            { toast_html }
            { dialog_html }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct DialogProps {
    mode: DialogMode,
    message: AttrValue,
    input: AttrValue,
    placeholder: AttrValue,
    confirm_label: AttrValue,
    cancel_label: AttrValue,
    on_answer: Callback<DialogAnswer>,
    on_input: Callback<String>,
}

#[function_component(DialogView)]
fn dialog_view(props: &DialogProps) -> Html {
    let input_ref = use_node_ref();
    {
        let input_ref = input_ref.clone();
        use_effect_with(props.mode, move |_| {
            if let Some(el) = input_ref.cast::<web_sys::HtmlInputElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    let answer = |value: DialogAnswer| {
        let cb = props.on_answer.clone();
        Callback::from(move |_: MouseEvent| cb.emit(value))
    };
    let on_keydown = {
        let cb = props.on_answer.clone();
        let prompt = props.mode == DialogMode::Prompt;
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => {
                e.prevent_default();
                cb.emit(DialogAnswer::Cancel);
            }
            "Enter" if prompt => {
                e.prevent_default();
                cb.emit(DialogAnswer::Accept);
            }
            _ => {}
        })
    };
    let on_input = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    html! {
        <div class="modal-backdrop" role="presentation">
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="overlay-dialog-message"
                 onkeydown={on_keydown}>
                <p id="overlay-dialog-message" class="modal__body">{ props.message.clone() }</p>
                if props.mode == DialogMode::Prompt {
                    <input
                        ref={input_ref}
                        class="modal__input"
                        type="text"
                        value={props.input.clone()}
                        placeholder={props.placeholder.clone()}
                        oninput={on_input}
                    />
                }
                <div class="modal__actions">
                    <button type="button" class="modal__cancel" onclick={answer(DialogAnswer::Cancel)}>
                        { props.cancel_label.clone() }
                    </button>
                    <button type="button" class="modal__confirm" onclick={answer(DialogAnswer::Accept)}>
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Subscribes to the context's overlay store and re-renders on every change.
#[function_component(OverlayHost)]
pub fn overlay_host() -> Html {
    let Some(ctx) = use_context::<ClientContext>() else {
        return Html::default();
    };
    let overlay = ctx.overlay;
    let refresh = use_force_update();

    {
        let overlay = overlay.clone();
        use_effect_with(overlay.clone(), move |_| {
            let id = overlay.subscribe(move |_| refresh.force_update());
            move || overlay.unsubscribe(id)
        });
    }

    let on_answer = {
        let overlay = overlay.clone();
        Callback::from(move |answer: DialogAnswer| overlay.close_dialog(answer))
    };
    let on_input = {
        let overlay = overlay.clone();
        Callback::from(move |value: String| overlay.set_dialog_input(value))
    };
    let on_dismiss_toast = {
        let overlay = overlay.clone();
        Callback::from(move |()| overlay.dismiss_toast())
    };

    html! {
        <OverlayView
            state={overlay.snapshot()}
            {on_answer}
            {on_input}
            {on_dismiss_toast}
        />
    }
}
