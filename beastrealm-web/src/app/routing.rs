//! Remote-flag gating of route changes.
//!
//! yew-router commits a navigation before anything can veto it, so the hook
//! holds back rendering of restricted routes until the guard allows them and
//! replaces a blocked route with the last unrestricted one.

use beastrealm_core::NavigationDecision;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::ClientContext;
use crate::hooks::Tickets;
use crate::router::Route;

/// Where to send the user after a blocked navigation.
///
/// Only unrestricted routes qualify: redirecting to a restricted one would be
/// blocked again and leave nothing to render.
#[must_use]
pub fn redirect_target(
    last_allowed: Option<&Route>,
    is_restricted: impl Fn(&Route) -> bool,
) -> Route {
    last_allowed
        .filter(|route| !is_restricted(route))
        .cloned()
        .unwrap_or(Route::Home)
}

/// Whether `route` may render now: unrestricted, or already cleared by the guard.
#[must_use]
pub fn may_render(ctx: &ClientContext, route: &Route, cleared: Option<&Route>) -> bool {
    !ctx.guard.is_restricted(&route.to_path()) || cleared == Some(route)
}

/// What the hook does with one guard decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardStep {
    /// Route cleared to render, if any.
    pub cleared: Option<Route>,
    /// Replacement location for a blocked navigation.
    pub redirect: Option<Route>,
    /// Fallback for the next blocked navigation.
    pub last_allowed: Option<Route>,
}

/// Fold a guard decision for `route` into the hook's state.
///
/// Restricted routes are never remembered as a fallback, since the flag that
/// let them through may have flipped by the time they are needed.
#[must_use]
pub fn settle(
    route: &Route,
    decision: NavigationDecision,
    last_allowed: Option<&Route>,
    is_restricted: impl Fn(&Route) -> bool,
) -> GuardStep {
    match decision {
        NavigationDecision::Allowed => GuardStep {
            cleared: Some(route.clone()),
            redirect: None,
            last_allowed: if is_restricted(route) {
                last_allowed.cloned()
            } else {
                Some(route.clone())
            },
        },
        NavigationDecision::Blocked => GuardStep {
            cleared: None,
            redirect: Some(redirect_target(last_allowed, is_restricted)),
            last_allowed: last_allowed.cloned(),
        },
    }
}

/// Run the navigation guard on every route change. Returns `true` once the
/// current route may render.
#[hook]
pub fn use_route_guard() -> bool {
    let ctx = use_context::<ClientContext>();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let cleared = use_state(|| None::<Route>);
    let last_allowed = use_mut_ref(|| None::<Route>);
    let tickets = (*use_memo((), |_| Tickets::default())).clone();

    {
        let ctx = ctx.clone();
        let cleared = cleared.clone();
        use_effect_with(route.clone(), move |route| {
            let (Some(ctx), Some(route)) = (ctx, route.clone()) else {
                return;
            };
            // Dialogs belong to the page that opened them.
            ctx.overlay.abandon_dialog();
            if (*cleared).as_ref() != Some(&route) {
                cleared.set(None);
            }
            let ticket = tickets.issue();
            wasm_bindgen_futures::spawn_local(async move {
                let decision = ctx.guard.check(&route.to_path()).await;
                if !tickets.is_current(ticket) {
                    log::debug!("discarding stale guard result for {route:?}");
                    return;
                }
                let step = settle(&route, decision, last_allowed.borrow().as_ref(), |r| {
                    ctx.guard.is_restricted(&r.to_path())
                });
                *last_allowed.borrow_mut() = step.last_allowed;
                if step.cleared.is_some() {
                    cleared.set(step.cleared);
                }
                if let (Some(target), Some(nav)) = (step.redirect, navigator) {
                    nav.replace(&target);
                }
            });
        });
    }

    match (ctx.as_ref(), route.as_ref()) {
        (Some(ctx), Some(route)) => may_render(ctx, route, (*cleared).as_ref()),
        _ => true,
    }
}
