use super::*;

fn kenya_profile() -> Profile {
    Profile {
        user_id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "A B".to_owned(),
        country: "Kenya".to_owned(),
        age: 22,
        ..Profile::default()
    }
}

fn logged_in() -> SessionState {
    let mut state = SessionState::default();
    let ticket = state.accept_token("tok".to_owned());
    assert!(state.profile_loaded(ticket, kenya_profile()));
    state
}

// =============================================================
// Defaults + restore
// =============================================================

#[test]
fn default_session_is_checking_without_token() {
    let state = SessionState::default();
    assert_eq!(state.phase(), SessionPhase::Checking);
    assert!(state.token().is_none());
    assert!(state.user().is_none());
    assert!(state.ticket().is_none());
}

#[test]
fn restore_without_token_logs_out() {
    let mut state = SessionState::default();
    assert!(state.restore(None).is_none());
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
}

#[test]
fn restore_ignores_blank_token() {
    let mut state = SessionState::default();
    assert!(state.restore(Some("  ".to_owned())).is_none());
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
}

#[test]
fn restore_with_token_starts_profile_fetch() {
    let mut state = SessionState::default();
    let ticket = state.restore(Some("stored".to_owned())).unwrap();
    assert_eq!(state.phase(), SessionPhase::Authenticating);
    assert_eq!(state.token(), Some("stored"));
    assert!(state.is_current(ticket));
}

// =============================================================
// Login / register
// =============================================================

#[test]
fn register_then_profile_populates_user() {
    let mut state = SessionState::default();
    state.restore(None);
    let ticket = state.accept_token("issued".to_owned());
    assert_eq!(state.phase(), SessionPhase::Authenticating);

    assert!(state.profile_loaded(ticket, kenya_profile()));
    assert_eq!(state.phase(), SessionPhase::LoggedIn);
    assert_eq!(state.user().map(|u| u.country.as_str()), Some("Kenya"));
}

#[test]
fn user_only_present_with_token() {
    let state = logged_in();
    assert!(state.user().is_some());
    assert!(state.token().is_some());
}

#[test]
fn credentials_carry_current_ticket_and_token() {
    let state = logged_in();
    let (ticket, token) = state.credentials().unwrap();
    assert_eq!(token, "tok");
    assert!(state.is_current(ticket));
}

// =============================================================
// Invalidation
// =============================================================

#[test]
fn profile_failure_after_login_logs_out() {
    let mut state = SessionState::default();
    let ticket = state.accept_token("bad".to_owned());
    assert!(state.invalidate(ticket));
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert!(state.token().is_none());
    assert!(state.user().is_none());
}

#[test]
fn profile_failure_while_logged_in_logs_out() {
    let mut state = logged_in();
    let ticket = state.ticket().unwrap();
    assert!(state.invalidate(ticket));
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert!(state.user().is_none());
}

#[test]
fn stale_invalidation_does_not_touch_new_session() {
    let mut state = SessionState::default();
    let old = state.accept_token("first".to_owned());
    let new = state.accept_token("second".to_owned());
    assert!(!state.invalidate(old));
    assert_eq!(state.token(), Some("second"));
    assert!(state.profile_loaded(new, kenya_profile()));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn login_logout_sequences_end_logged_out() {
    let mut state = SessionState::default();
    for round in 0..5 {
        let ticket = state.accept_token(format!("tok-{round}"));
        state.profile_loaded(ticket, kenya_profile());
        if round % 2 == 0 {
            state.logout();
        }
    }
    state.logout();
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert!(state.token().is_none());
    assert!(state.user().is_none());
}

#[test]
fn logout_while_fetch_in_flight_blocks_late_profile() {
    let mut state = SessionState::default();
    let ticket = state.accept_token("tok".to_owned());
    state.logout();

    assert!(!state.profile_loaded(ticket, kenya_profile()));
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert!(state.user().is_none());
}

#[test]
fn logout_during_list_fetch_invalidates_its_ticket() {
    let mut state = logged_in();
    let (ticket, _token) = state.credentials().unwrap();
    state.logout();
    assert!(!state.is_current(ticket));

    // Logging back in does not revive the old ticket either.
    state.accept_token("tok".to_owned());
    assert!(!state.is_current(ticket));
}

#[test]
fn logout_is_idempotent() {
    let mut state = logged_in();
    state.logout();
    let snapshot = state.clone();
    state.logout();
    assert_eq!(state, snapshot);
}
