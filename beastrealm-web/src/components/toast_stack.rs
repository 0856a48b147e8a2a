use beastrealm_core::{Scheduler, ToastEntry, ToastId, ToastLevel, ToastStack};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastStackViewProps {
    pub entries: Vec<ToastEntry>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<ToastId>>,
}

#[function_component(ToastStackView)]
pub fn toast_stack_view(props: &ToastStackViewProps) -> Html {
    if props.entries.is_empty() {
        return Html::default();
    }
    html! {
        <div class="toast toast-end toast-top" role="status" aria-live="polite">
            { for props.entries.iter().map(|entry| {
                let dismiss_btn = props.on_dismiss.as_ref().map(|cb| {
                    let id = entry.id;
                    let cb = cb.clone();
                    let on_click = Callback::from(move |_| cb.emit(id));
                    html! { <button class="btn btn-ghost btn-xs" aria-label="关闭" onclick={on_click}>{"✕"}</button> }
                }).unwrap_or_default();
                html! {
                    <div key={entry.id.0} class={classes!("alert", entry.level.css_class())}>
                        <span>{ entry.message.clone() }</span>
                        { dismiss_btn }
                    </div>
                }
            }) }
        </div>
    }
}

/// Page-local toast stack whose entries remove themselves after their duration.
#[derive(Clone)]
pub struct ToastStackHandle {
    stack: Rc<RefCell<ToastStack>>,
    scheduler: Rc<dyn Scheduler>,
    refresh: UseForceUpdateHandle,
}

impl ToastStackHandle {
    pub fn push(&self, message: impl Into<String>, level: ToastLevel) -> ToastId {
        let (id, dismiss_after) = self.stack.borrow_mut().push(message, level, None);
        if let Some(delay) = dismiss_after {
            let stack = Rc::downgrade(&self.stack);
            let refresh = self.refresh.clone();
            self.scheduler.schedule(
                delay,
                Box::new(move || {
                    let Some(stack) = stack.upgrade() else {
                        return;
                    };
                    let removed = stack.borrow_mut().remove(id);
                    if removed {
                        refresh.force_update();
                    }
                }),
            );
        }
        self.refresh.force_update();
        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastLevel::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastLevel::Error)
    }

    pub fn remove(&self, id: ToastId) {
        if self.stack.borrow_mut().remove(id) {
            self.refresh.force_update();
        }
    }

    #[must_use]
    pub fn entries(&self) -> Vec<ToastEntry> {
        self.stack.borrow().entries().to_vec()
    }

    #[must_use]
    pub fn dismiss_callback(&self) -> Callback<ToastId> {
        let handle = self.clone();
        Callback::from(move |id| handle.remove(id))
    }
}

#[hook]
pub fn use_toast_stack(scheduler: Rc<dyn Scheduler>) -> ToastStackHandle {
    let stack = use_mut_ref(ToastStack::new);
    let refresh = use_force_update();
    ToastStackHandle {
        stack,
        scheduler,
        refresh,
    }
}
