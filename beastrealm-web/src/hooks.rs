//! Data loading for pages backed by a single game endpoint.

use beastrealm_core::FieldState;
use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::api::{self, Envelope};

/// Orders async work started from effects. Each start takes a ticket, and
/// only the holder of the newest ticket may commit its result.
#[derive(Debug, Clone, Default)]
pub struct Tickets(Rc<Cell<u64>>);

impl Tickets {
    pub fn issue(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Fetch `url` whenever it changes, and again each time the returned callback fires.
///
/// Responses to superseded requests are dropped.
#[hook]
pub fn use_api<T>(url: String) -> (FieldState<T>, Callback<()>)
where
    T: DeserializeOwned + Envelope + Clone + 'static,
{
    let state = use_state(|| FieldState::<T>::Loading);
    let generation = use_state(|| 0_u32);
    let tickets = (*use_memo((), |_| Tickets::default())).clone();

    {
        let state = state.clone();
        use_effect_with((url, *generation), move |(url, _)| {
            let url = url.clone();
            let ticket = tickets.issue();
            if !matches!(*state, FieldState::Loading) {
                state.set(FieldState::Loading);
            }
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::get_json::<T>(&url).await.and_then(T::accepted);
                if !tickets.is_current(ticket) {
                    log::debug!("dropping stale response from {url}");
                    return;
                }
                state.set(FieldState::from_result(&url, result));
            });
        });
    }

    let reload = Callback::from(move |()| generation.set(*generation + 1));
    ((*state).clone(), reload)
}

#[cfg(test)]
mod tests {
    use super::Tickets;

    #[test]
    fn only_the_newest_ticket_commits() {
        let tickets = Tickets::default();
        let slow = tickets.issue();
        let fast = tickets.issue();
        // The later request answers first and commits.
        assert!(tickets.is_current(fast));
        // The earlier one answers afterwards and must not overwrite it.
        assert!(!tickets.is_current(slow));
    }

    #[test]
    fn clones_share_one_counter() {
        let tickets = Tickets::default();
        let handle = tickets.clone();
        let first = tickets.issue();
        assert!(handle.is_current(first));
        handle.issue();
        assert!(!tickets.is_current(first));
    }
}
