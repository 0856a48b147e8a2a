//! `setTimeout`-backed [`Scheduler`] for the overlay store and toast stack.

use beastrealm_core::{Scheduler, TimerId, TimerTask};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;

/// Browser timer ids are the handles returned by `setTimeout`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

fn delay_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId {
        let Some(window) = dom::window() else {
            log::warn!("no window; dropping timer task");
            return TimerId(0);
        };
        let callback = Closure::once_into_js(move || task());
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms(delay),
        ) {
            Ok(handle) => TimerId(u64::try_from(handle).unwrap_or_default()),
            Err(err) => {
                log::error!("setTimeout failed: {}", dom::js_error_message(&err));
                TimerId(0)
            }
        }
    }

    fn cancel(&self, id: TimerId) {
        let (Some(window), Ok(handle)) = (dom::window(), i32::try_from(id.0)) else {
            return;
        };
        window.clear_timeout_with_handle(handle);
    }
}
