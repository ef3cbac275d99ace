//! Signed-in landing view with navigation tiles into each feature area.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::view::{UiState, View};

/// `(view, heading, blurb, button)` for each landing tile.
pub const TILES: [(View, &str, &str, &str); 5] = [
    (View::Discover, "Youth Network", "Connect with young people across the continent.", "Connect"),
    (View::Jobs, "AfriWorkMesh", "Jobs and opportunities from startups to NGOs.", "Explore Jobs"),
    (View::Funding, "AfriFund DAO", "Back projects led by African youth.", "Fund Impact"),
    (View::Civic, "AfriVoice", "Shape policies and make your voice heard.", "Get Involved"),
    (View::Education, "EduNations", "Learn new skills with expert-led courses.", "Start Learning"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = move || session.with(|s| s.user().map(|u| u.full_name.clone()).unwrap_or_default());
    let country = move || session.with(|s| s.user().map(|u| u.country.clone()).unwrap_or_default());

    view! {
        <div class="home">
            <section class="home__welcome">
                <h1>"Welcome back, " {name} "!"</h1>
                <p>
                    "Connect with African youth across the continent and discover opportunities. "
                    "Build your network, learn new skills, fund projects, and engage in civic life."
                </p>
                <p class="home__country">{country}</p>
            </section>
            <section class="home__tiles">
                {TILES
                    .into_iter()
                    .map(|(view, heading, blurb, button)| {
                        view! {
                            <article class="tile">
                                <h3>{heading}</h3>
                                <p>{blurb}</p>
                                <button class="btn" on:click=move |_| ui.update(|u| u.set_view(view))>
                                    {button}
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
