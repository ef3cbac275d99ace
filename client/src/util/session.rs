//! Session flows: restore, login/register completion, profile checks, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writers of `RwSignal<SessionState>`. Pages call these instead of
//! touching the session store directly, so token persistence and the
//! epoch guard stay in one place.
//!
//! ERROR HANDLING
//! ==============
//! A failed profile fetch (any error, including transport failures) and any
//! 401 on an authenticated call end the session. Results that arrive after
//! the session moved on are dropped.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::session::{SessionState, SessionTicket};
use crate::util::token_storage;

/// Leave `Checking` using the persisted token.
pub fn restore(session: RwSignal<SessionState>) {
    let stored = token_storage::load();
    if let Some(ticket) = session.try_update(|s| s.restore(stored)).flatten() {
        load_profile(session, ticket);
    } else {
        token_storage::clear();
    }
}

/// Adopt a token issued by login or register and load its profile.
pub fn complete_auth(session: RwSignal<SessionState>, token: String) {
    token_storage::save(&token);
    if let Some(ticket) = session.try_update(|s| s.accept_token(token)) {
        load_profile(session, ticket);
    }
}

/// Re-read the profile for the live token (after a profile edit).
pub fn refresh_profile(session: RwSignal<SessionState>) {
    if let Some(ticket) = session.with_untracked(SessionState::ticket) {
        load_profile(session, ticket);
    }
}

/// Fetch `/api/profile` under `ticket`. Failure logs the session out.
pub fn load_profile(session: RwSignal<SessionState>, ticket: SessionTicket) {
    let token = session.with_untracked(|s| s.is_current(ticket).then(|| s.token().map(str::to_owned)).flatten());
    let Some(token) = token else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_profile(&token).await {
                Ok(profile) => {
                    session.update(|s| {
                        s.profile_loaded(ticket, profile);
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("profile check failed: {e:?}");
                    expire(session, ticket);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Explicit logout. No server call.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::logout);
    token_storage::clear();
}

/// The token under `ticket` was rejected; end that session if still live.
pub fn expire(session: RwSignal<SessionState>, ticket: SessionTicket) {
    if session.try_update(|s| s.invalidate(ticket)).unwrap_or(false) {
        token_storage::clear();
    }
}

/// Token and ticket for starting an authenticated call.
pub fn credentials(session: RwSignal<SessionState>) -> Option<(SessionTicket, String)> {
    session.with_untracked(SessionState::credentials)
}

/// Check an authenticated result against the session it started under.
///
/// `None` means the caller must drop the result: either the session moved
/// on, or the server answered 401 and the session was expired here.
pub fn settle<T>(
    session: RwSignal<SessionState>,
    ticket: SessionTicket,
    result: Result<T, ApiError>,
) -> Option<Result<T, ApiError>> {
    if !session.with_untracked(|s| s.is_current(ticket)) {
        return None;
    }
    if matches!(&result, Err(e) if e.is_unauthorized()) {
        expire(session, ticket);
        return None;
    }
    Some(result)
}
