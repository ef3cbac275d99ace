//! Top navigation bar for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session (for the avatar initial) and writes the view selector.
//! Logout goes through `util::session` so the stored token is cleared too.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::view::{UiState, View};
use crate::util::session;

#[component]
pub fn AppHeader() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let current_section = move || ui.get().view.section();
    let initial = move || session_state.with(|s| s.user().map_or('?', |u| u.initial()));
    let user_name = move || session_state.with(|s| s.user().map(|u| u.full_name.clone()).unwrap_or_default());

    let on_logout = move |_| session::logout(session_state);
    let toggle_menu = move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open);

    view! {
        <header class="app-header">
            <button class="app-header__brand" on:click=move |_| ui.update(|u| u.set_view(View::Home))>
                "AfriCore"
            </button>
            <button class="app-header__menu-toggle" aria-label="Toggle menu" on:click=toggle_menu>
                "☰"
            </button>
            <nav class="app-header__nav" class:app-header__nav--open=move || ui.get().mobile_menu_open>
                {View::NAV
                    .into_iter()
                    .map(|view| {
                        view! {
                            <button
                                class="app-header__link"
                                class:app-header__link--active=move || current_section() == view
                                on:click=move |_| ui.update(|u| u.set_view(view))
                            >
                                {view.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="app-header__user">
                <button
                    class="app-header__avatar"
                    title=user_name
                    on:click=move |_| ui.update(|u| u.set_view(View::Profile))
                >
                    {initial}
                </button>
                <button class="btn app-header__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
