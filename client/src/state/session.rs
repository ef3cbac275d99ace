//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<SessionState>` context by the root component.
//! Views read the token and profile from it; only the session flow helpers
//! in `util::session` write to it.
//!
//! DESIGN
//! ======
//! Every token change bumps `epoch`. Async work captures a [`SessionTicket`]
//! when it starts and may only touch the session (or any view state) while
//! that ticket is still current, so a request that resolves after logout
//! cannot bring a signed-in view back.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Profile;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup: the persisted token has not been inspected yet.
    #[default]
    Checking,
    /// No token. Only the auth screen renders.
    LoggedOut,
    /// Token held, profile fetch in flight.
    Authenticating,
    /// Token held and profile loaded.
    LoggedIn,
}

/// Proof that async work was started under a particular token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTicket {
    epoch: u64,
}

/// Token + profile for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
    user: Option<Profile>,
    phase: SessionPhase,
    epoch: u64,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }

    /// Ticket for the current token, if any.
    pub fn ticket(&self) -> Option<SessionTicket> {
        self.token.as_ref().map(|_| SessionTicket { epoch: self.epoch })
    }

    /// Ticket and a copy of the token, for starting an authenticated request.
    pub fn credentials(&self) -> Option<(SessionTicket, String)> {
        let token = self.token.clone()?;
        Some((SessionTicket { epoch: self.epoch }, token))
    }

    /// Whether `ticket` still refers to the live token.
    pub fn is_current(&self, ticket: SessionTicket) -> bool {
        self.token.is_some() && ticket.epoch == self.epoch
    }

    /// Startup transition from `Checking` using the persisted token.
    ///
    /// Returns the ticket to load the profile with, or `None` when there
    /// was nothing to restore.
    pub fn restore(&mut self, stored: Option<String>) -> Option<SessionTicket> {
        match stored.filter(|t| !t.trim().is_empty()) {
            Some(token) => Some(self.accept_token(token)),
            None => {
                self.clear();
                None
            }
        }
    }

    /// Adopt a freshly issued token (login, register or restore).
    ///
    /// Any profile from a previous token is dropped; the session stays in
    /// `Authenticating` until [`Self::profile_loaded`].
    pub fn accept_token(&mut self, token: String) -> SessionTicket {
        self.epoch += 1;
        self.token = Some(token);
        self.user = None;
        self.phase = SessionPhase::Authenticating;
        SessionTicket { epoch: self.epoch }
    }

    /// Apply a successful profile fetch. Stale tickets are ignored.
    pub fn profile_loaded(&mut self, ticket: SessionTicket, profile: Profile) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.user = Some(profile);
        self.phase = SessionPhase::LoggedIn;
        true
    }

    /// The token was rejected (profile fetch failed or any call answered
    /// 401). Clears token and profile. Stale tickets are ignored.
    pub fn invalidate(&mut self, ticket: SessionTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.clear();
        true
    }

    /// Explicit user logout. Always succeeds, no server call.
    pub fn logout(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if self.token.is_some() {
            self.epoch += 1;
        }
        self.token = None;
        self.user = None;
        self.phase = SessionPhase::LoggedOut;
    }
}
