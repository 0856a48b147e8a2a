//! In-page replacements for the platform `alert` / `confirm` / `prompt`.
//!
//! [`OverlayStore`] owns the toast and dialog state for one composition root.
//! Clones share state, so the store can be handed to every page through a
//! context provider. All mutation happens on the UI thread.
//!
//! Dialogs are request/response pairs keyed by [`DialogId`]. Opening a dialog
//! while another is pending rejects the earlier request with
//! [`DialogError::Superseded`]; callers are never left awaiting forever.

use crate::config::ClientConfig;
use crate::timer::{Scheduler, TimerId};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
    pub pending_dismiss: Option<TimerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    #[default]
    Confirm,
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialogId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogState {
    pub visible: bool,
    pub id: Option<DialogId>,
    pub mode: DialogMode,
    pub message: String,
    pub input: String,
    pub placeholder: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Snapshot of everything the overlay host renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub toast: ToastState,
    pub dialog: DialogState,
}

/// Per-call overrides; unset fields use the store's configured labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogOptions {
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub placeholder: Option<String>,
}

impl DialogOptions {
    #[must_use]
    pub fn labels(confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        Self {
            confirm_label: Some(confirm.into()),
            cancel_label: Some(cancel.into()),
            placeholder: None,
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAnswer {
    Accept,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("dialog {0:?} was replaced by a newer dialog")]
    Superseded(DialogId),
    #[error("dialog {0:?} was abandoned before an answer")]
    Abandoned(DialogId),
}

/// Change notifications for hosts that re-render on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    ToastShown,
    ToastDismissed,
    DialogOpened(DialogId),
    DialogInput(DialogId),
    DialogClosed(DialogId),
    DialogRejected(DialogId, DialogError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&OverlayEvent)>;
type Reply = Result<Option<String>, DialogError>;

struct PendingDialog {
    id: DialogId,
    reply: oneshot::Sender<Reply>,
}

struct Inner {
    state: OverlayState,
    pending: Option<PendingDialog>,
    next_dialog: u64,
    next_listener: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    toast_duration: Duration,
    confirm_label: String,
    cancel_label: String,
}

#[derive(Clone)]
pub struct OverlayStore {
    inner: Rc<RefCell<Inner>>,
    scheduler: Rc<dyn Scheduler>,
}

impl std::fmt::Debug for OverlayStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayStore")
            .field("state", &self.inner.borrow().state)
            .finish_non_exhaustive()
    }
}

impl PartialEq for OverlayStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl OverlayStore {
    #[must_use]
    pub fn new(scheduler: Rc<dyn Scheduler>, config: &ClientConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: OverlayState::default(),
                pending: None,
                next_dialog: 0,
                next_listener: 0,
                listeners: Vec::new(),
                toast_duration: Duration::from_millis(config.toast_duration_ms),
                confirm_label: config.confirm_label.clone(),
                cancel_label: config.cancel_label.clone(),
            })),
            scheduler,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> OverlayState {
        self.inner.borrow().state.clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&OverlayEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_listener += 1;
        let id = SubscriptionId(inner.next_listener);
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(sub, _)| *sub != id);
    }

    /// Show `message`, replacing any visible toast and its dismiss timer.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) {
        let stale = {
            let mut inner = self.inner.borrow_mut();
            let toast = &mut inner.state.toast;
            toast.visible = true;
            toast.message = message.into();
            toast.kind = kind;
            toast.pending_dismiss.take()
        };
        if let Some(id) = stale {
            self.scheduler.cancel(id);
        }

        let weak = Rc::downgrade(&self.inner);
        let timer = self.scheduler.schedule(
            duration,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    hide_toast(&inner);
                }
            }),
        );
        self.inner.borrow_mut().state.toast.pending_dismiss = Some(timer);
        notify(&self.inner, &OverlayEvent::ToastShown);
    }

    /// Toast with the configured default duration; stands in for `window.alert`.
    pub fn alert(&self, message: impl Into<String>, kind: ToastKind) {
        let duration = self.inner.borrow().toast_duration;
        self.show_toast(message, kind, duration);
    }

    /// Hide the toast now, cancelling its timer.
    pub fn dismiss_toast(&self) {
        let timer = self.inner.borrow_mut().state.toast.pending_dismiss.take();
        if let Some(id) = timer {
            self.scheduler.cancel(id);
        }
        hide_toast(&self.inner);
    }

    /// Ask a yes/no question. Resolves to `true` on accept, `false` on cancel.
    ///
    /// The dialog opens immediately, before the returned future is polled.
    pub fn confirm(
        &self,
        message: impl Into<String>,
        options: DialogOptions,
    ) -> impl Future<Output = Result<bool, DialogError>> + 'static {
        let (id, reply) =
            self.open_dialog(DialogMode::Confirm, message.into(), String::new(), options);
        async move { await_reply(id, reply).await.map(|answer| answer.is_some()) }
    }

    /// Ask for text. Resolves to the entered text on accept, `None` on cancel.
    pub fn prompt(
        &self,
        message: impl Into<String>,
        default_value: impl Into<String>,
        options: DialogOptions,
    ) -> impl Future<Output = Result<Option<String>, DialogError>> + 'static {
        let (id, reply) = self.open_dialog(
            DialogMode::Prompt,
            message.into(),
            default_value.into(),
            options,
        );
        async move { await_reply(id, reply).await }
    }

    pub fn set_dialog_input(&self, value: impl Into<String>) {
        let id = {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.dialog.visible {
                return;
            }
            inner.state.dialog.input = value.into();
            inner.state.dialog.id
        };
        if let Some(id) = id {
            notify(&self.inner, &OverlayEvent::DialogInput(id));
        }
    }

    /// Answer the open dialog. Does nothing when no dialog is open.
    pub fn close_dialog(&self, answer: DialogAnswer) {
        let open = self.inner.borrow().state.dialog.id;
        if let Some(id) = open {
            self.close_dialog_with(id, answer);
        }
    }

    /// Answer dialog `id`; returns `false` if it is no longer the open dialog.
    pub fn close_dialog_with(&self, id: DialogId, answer: DialogAnswer) -> bool {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.state.dialog.id != Some(id) {
                return false;
            }
            let dialog = std::mem::take(&mut inner.state.dialog);
            let reply = match answer {
                DialogAnswer::Accept => Some(dialog.input),
                DialogAnswer::Cancel => None,
            };
            inner.pending.take().map(|pending| (pending, reply))
        };
        if let Some((pending, reply)) = pending {
            // The caller may have dropped its future; nothing to deliver then.
            let _ = pending.reply.send(Ok(reply));
        }
        notify(&self.inner, &OverlayEvent::DialogClosed(id));
        true
    }

    /// Hide the open dialog and reject its caller with [`DialogError::Abandoned`].
    pub fn abandon_dialog(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.state.dialog = DialogState::default();
            inner.pending.take()
        };
        if let Some(pending) = pending {
            reject(&self.inner, pending, DialogError::Abandoned);
        }
    }

    fn open_dialog(
        &self,
        mode: DialogMode,
        message: String,
        input: String,
        options: DialogOptions,
    ) -> (DialogId, oneshot::Receiver<Reply>) {
        let (sender, receiver) = oneshot::channel();
        let (id, displaced) = {
            let mut inner = self.inner.borrow_mut();
            inner.next_dialog += 1;
            let id = DialogId(inner.next_dialog);
            let dialog = DialogState {
                visible: true,
                id: Some(id),
                mode,
                message,
                input,
                placeholder: options.placeholder.unwrap_or_default(),
                confirm_label: options
                    .confirm_label
                    .unwrap_or_else(|| inner.confirm_label.clone()),
                cancel_label: options
                    .cancel_label
                    .unwrap_or_else(|| inner.cancel_label.clone()),
            };
            inner.state.dialog = dialog;
            let displaced = inner.pending.replace(PendingDialog { id, reply: sender });
            (id, displaced)
        };
        if let Some(previous) = displaced {
            log::warn!("dialog {:?} superseded by {id:?}", previous.id);
            reject(&self.inner, previous, DialogError::Superseded);
        }
        notify(&self.inner, &OverlayEvent::DialogOpened(id));
        (id, receiver)
    }
}

async fn await_reply(id: DialogId, reply: oneshot::Receiver<Reply>) -> Reply {
    // A dropped sender means the store itself went away.
    reply.await.unwrap_or(Err(DialogError::Abandoned(id)))
}

fn reject(
    inner: &Rc<RefCell<Inner>>,
    pending: PendingDialog,
    error: impl FnOnce(DialogId) -> DialogError,
) {
    let error = error(pending.id);
    let _ = pending.reply.send(Err(error));
    notify(inner, &OverlayEvent::DialogRejected(pending.id, error));
}

fn hide_toast(inner: &Rc<RefCell<Inner>>) {
    let was_visible = {
        let mut guard = inner.borrow_mut();
        let toast = &mut guard.state.toast;
        let was_visible = toast.visible;
        toast.visible = false;
        toast.message.clear();
        toast.pending_dismiss = None;
        was_visible
    };
    if was_visible {
        notify(inner, &OverlayEvent::ToastDismissed);
    }
}

fn notify(inner: &Rc<RefCell<Inner>>, event: &OverlayEvent) {
    let listeners: Vec<Listener> = inner
        .borrow()
        .listeners
        .iter()
        .map(|(_, listener)| Rc::clone(listener))
        .collect();
    for listener in listeners {
        listener(event);
    }
}
