//! Placeholder panel for sections without a backend yet.

use leptos::prelude::*;

#[component]
pub fn ComingSoon(title: &'static str, icon: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>{title}</h2>
            <div class="coming-soon">
                <div class="coming-soon__icon">{icon}</div>
                <h3>{format!("{title} Coming Soon!")}</h3>
                <p>{blurb}</p>
            </div>
        </div>
    }
}
