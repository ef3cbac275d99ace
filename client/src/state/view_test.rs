use super::*;

// =============================================================
// View
// =============================================================

#[test]
fn view_default_is_home() {
    assert_eq!(View::default(), View::Home);
}

#[test]
fn slugs_round_trip_for_every_view() {
    for view in View::ALL {
        assert_eq!(View::from_slug(view.slug()), Some(view));
    }
}

#[test]
fn slugs_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for view in View::ALL {
        assert!(seen.insert(view.slug()), "duplicate slug {}", view.slug());
    }
}

#[test]
fn unknown_slug_is_none() {
    assert_eq!(View::from_slug("settings"), None);
    assert_eq!(View::from_slug(""), None);
    assert_eq!(View::from_slug("Jobs"), None);
}

#[test]
fn nav_sections_are_their_own_section() {
    for view in View::NAV {
        assert_eq!(view.section(), view);
    }
}

#[test]
fn sub_views_highlight_parent_section() {
    assert_eq!(View::MyApplications.section(), View::Jobs);
    assert_eq!(View::PostJob.section(), View::Organization);
    assert_eq!(View::CreateProject.section(), View::Funding);
    assert_eq!(View::CivicForums.section(), View::Civic);
    assert_eq!(View::Mentorship.section(), View::Education);
    assert_eq!(View::Messages.section(), View::Connections);
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_shows_home() {
    let ui = UiState::default();
    assert_eq!(ui.view, View::Home);
    assert!(ui.conversation.is_none());
    assert!(!ui.mobile_menu_open);
}

#[test]
fn set_view_is_idempotent() {
    let mut once = UiState::default();
    once.set_view(View::Jobs);

    let mut twice = UiState::default();
    twice.set_view(View::Jobs);
    twice.set_view(View::Jobs);

    assert_eq!(once, twice);
}

#[test]
fn set_view_closes_mobile_menu() {
    let mut ui = UiState { mobile_menu_open: true, ..UiState::default() };
    ui.set_view(View::Civic);
    assert!(!ui.mobile_menu_open);
}

#[test]
fn requested_view_keeps_current_view_on_unknown_name() {
    let mut ui = UiState::default();
    assert!(ui.request_view("funding"));
    ui.apply_pending_view();
    assert_eq!(ui.view, View::Funding);
    assert!(!ui.request_view("not-a-view"));
    ui.apply_pending_view();
    assert_eq!(ui.view, View::Funding);
}

#[test]
fn open_conversation_switches_to_messages() {
    let mut ui = UiState::default();
    ui.open_conversation("u2".to_owned(), "Kofi".to_owned());
    assert_eq!(ui.view, View::Messages);
    assert_eq!(ui.conversation.as_ref().map(|c| c.name.as_str()), Some("Kofi"));
}

#[test]
fn reset_returns_to_home() {
    let mut ui = UiState::default();
    ui.open_conversation("u2".to_owned(), "Kofi".to_owned());
    ui.reset();
    assert_eq!(ui, UiState::default());
}

#[test]
fn deep_link_survives_logout_reset_until_sign_in() {
    let mut ui = UiState::default();
    assert!(ui.request_view("jobs"));
    assert_eq!(ui.view, View::Home);

    ui.reset();
    assert_eq!(ui.pending_view, Some(View::Jobs));

    ui.apply_pending_view();
    assert_eq!(ui.view, View::Jobs);
    assert_eq!(ui.pending_view, None);

    ui.reset();
    assert_eq!(ui.view, View::Home);
}

#[test]
fn unknown_deep_link_is_ignored() {
    let mut ui = UiState::default();
    assert!(!ui.request_view("settings"));
    ui.apply_pending_view();
    assert_eq!(ui.view, View::Home);
}
