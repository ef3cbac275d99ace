//! Async glue between the REST client and `Listing` stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list-view loads and mutates its items through these two helpers,
//! which apply the session epoch guard and the listing's own tickets before
//! touching any signal.

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::listing::{Keyed, Listing};
use crate::state::session::SessionState;
use crate::util::session;

/// Fetch a list with the live token and apply it if still wanted.
pub fn load_listing<T, F, Fut>(session: RwSignal<SessionState>, listing: RwSignal<Listing<T>>, fetch: F)
where
    T: Keyed + Clone + Send + Sync + 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some((ticket, token)) = session::credentials(session) else {
        return;
    };
    let Some(fetch_ticket) = listing.try_update(Listing::begin_fetch) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = fetch(token).await;
            let Some(result) = session::settle(session, ticket, result) else {
                return;
            };
            listing.try_update(|l| l.finish_fetch(fetch_ticket, result.map_err(|e| e.to_string())));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, token, fetch, fetch_ticket);
    }
}

/// Fetch one response that fills two lists (e.g. pending + accepted
/// connections). Both lists share the outcome.
pub fn load_pair<A, B, F, Fut>(
    session: RwSignal<SessionState>,
    first: RwSignal<Listing<A>>,
    second: RwSignal<Listing<B>>,
    fetch: F,
) where
    A: Keyed + Clone + Send + Sync + 'static,
    B: Keyed + Clone + Send + Sync + 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<(Vec<A>, Vec<B>), ApiError>> + 'static,
{
    let Some((ticket, token)) = session::credentials(session) else {
        return;
    };
    let (Some(first_ticket), Some(second_ticket)) =
        (first.try_update(Listing::begin_fetch), second.try_update(Listing::begin_fetch))
    else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = fetch(token).await;
            let Some(result) = session::settle(session, ticket, result) else {
                return;
            };
            match result {
                Ok((a, b)) => {
                    first.try_update(|l| l.finish_fetch(first_ticket, Ok(a)));
                    second.try_update(|l| l.finish_fetch(second_ticket, Ok(b)));
                }
                Err(e) => {
                    let message = e.to_string();
                    first.try_update(|l| l.finish_fetch(first_ticket, Err(message.clone())));
                    second.try_update(|l| l.finish_fetch(second_ticket, Err(message)));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, token, fetch, first_ticket, second_ticket);
    }
}

/// Run one item action with an optimistic patch.
///
/// Refused while the item already has an action in flight. On success the
/// patch stands (or `on_success` re-fetches / removes the item); on failure
/// it is rolled back and the server message becomes the list error.
pub fn run_item_action<T, R, F, Fut, P, S>(
    session: RwSignal<SessionState>,
    listing: RwSignal<Listing<T>>,
    id: &str,
    optimistic: P,
    call: F,
    on_success: S,
) where
    T: Keyed + Clone + Send + Sync + 'static,
    R: 'static,
    P: FnOnce(&mut T),
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
    S: FnOnce(R) + 'static,
{
    run_reconciled_action(session, listing, id, optimistic, call, |_: &R| None, on_success);
}

/// [`run_item_action`] for calls that answer with the canonical record:
/// whatever `canonical` extracts replaces the optimistic copy.
pub fn run_reconciled_action<T, R, F, Fut, P, C, S>(
    session: RwSignal<SessionState>,
    listing: RwSignal<Listing<T>>,
    id: &str,
    optimistic: P,
    call: F,
    canonical: C,
    on_success: S,
) where
    T: Keyed + Clone + Send + Sync + 'static,
    R: 'static,
    P: FnOnce(&mut T),
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
    C: FnOnce(&R) -> Option<T> + 'static,
    S: FnOnce(R) + 'static,
{
    let Some((ticket, token)) = session::credentials(session) else {
        return;
    };
    let action = listing
        .try_update(|l| {
            let action = l.begin_action(id)?;
            l.patch(&action, optimistic);
            Some(action)
        })
        .flatten();
    let Some(action) = action else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = call(token).await;
            let Some(result) = session::settle(session, ticket, result) else {
                return;
            };
            match result {
                Ok(value) => {
                    let record = canonical(&value);
                    listing.try_update(|l| l.reconcile(action, record));
                    on_success(value);
                }
                Err(e) => {
                    leptos::logging::warn!("action failed: {e:?}");
                    listing.try_update(|l| l.rollback(action, e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, token, call, canonical, on_success, action);
    }
}

/// Run a form submission with the live token and hand back its result.
pub fn submit<R, F, Fut, D>(session: RwSignal<SessionState>, call: F, done: D)
where
    R: 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
    D: FnOnce(Result<R, ApiError>) + 'static,
{
    let Some((ticket, token)) = session::credentials(session) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = call(token).await;
            if let Some(result) = session::settle(session, ticket, result) {
                done(result);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, token, call, done);
    }
}
