//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal is a single route. What renders under it is decided by the
//! session phase (auth screen vs. signed-in shell) and, once signed in, by
//! the `UiState::view` the header and pages switch between.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_query_map,
};

use crate::components::header::AppHeader;
use crate::pages::auth::AuthPage;
use crate::pages::civic::{CivicForumsPage, CivicPage, CreatePolicyPage, MyCivicPage};
use crate::pages::education::{CreateCoursePage, EducationPage, MentorshipPage, MyCoursesPage};
use crate::pages::funding::{CreateProjectPage, FundingPage, MyContributionsPage, MyProjectsPage};
use crate::pages::home::HomePage;
use crate::pages::jobs::{JobsPage, MyApplicationsPage};
use crate::pages::organization::{ManageApplicationsPage, OrganizationPage, PostJobPage};
use crate::pages::people::{ConnectionsPage, DiscoverPage, MessagesPage};
use crate::pages::profile::ProfilePage;
use crate::state::session::{SessionPhase, SessionState};
use crate::state::view::{UiState, View};
use crate::util::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and view contexts and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/africore.css"/>
        <Title text="AfriCore"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionRoot/>
            </Routes>
        </Router>
    }
}

/// Phase switch: loading, auth screen or the signed-in shell.
#[component]
fn SessionRoot() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();

    let phase = Memo::new(move |_| session.with(SessionState::phase));

    Effect::new(move || session::restore(session));

    // `?view=jobs` deep links into a section once signed in.
    Effect::new(move || {
        if let Some(slug) = query.with(|q| q.get("view")) {
            ui.update(|u| {
                u.request_view(&slug);
            });
            if phase.get_untracked() == SessionPhase::LoggedIn {
                ui.update(UiState::apply_pending_view);
            }
        }
    });

    Effect::new(move || match phase.get() {
        SessionPhase::LoggedOut => ui.update(UiState::reset),
        SessionPhase::LoggedIn => ui.update(UiState::apply_pending_view),
        SessionPhase::Checking | SessionPhase::Authenticating => {}
    });

    move || match phase.get() {
        SessionPhase::Checking | SessionPhase::Authenticating => {
            view! { <div class="loading-screen">"Loading AfriCore..."</div> }.into_any()
        }
        SessionPhase::LoggedOut => view! { <AuthPage/> }.into_any(),
        SessionPhase::LoggedIn => view! { <SignedInShell/> }.into_any(),
    }
}

#[component]
fn SignedInShell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let current = Memo::new(move |_| ui.with(|u| u.view));

    view! {
        <div class="app">
            <AppHeader/>
            <main class="app__main">{move || dispatch(current.get())}</main>
        </div>
    }
}

/// Render the page for `current`.
fn dispatch(current: View) -> AnyView {
    match current {
        View::Home => view! { <HomePage/> }.into_any(),
        View::Profile => view! { <ProfilePage/> }.into_any(),
        View::Discover => view! { <DiscoverPage/> }.into_any(),
        View::Connections => view! { <ConnectionsPage/> }.into_any(),
        View::Messages => view! { <MessagesPage/> }.into_any(),
        View::Jobs => view! { <JobsPage/> }.into_any(),
        View::MyApplications => view! { <MyApplicationsPage/> }.into_any(),
        View::Organization => view! { <OrganizationPage/> }.into_any(),
        View::PostJob => view! { <PostJobPage/> }.into_any(),
        View::ManageApplications => view! { <ManageApplicationsPage/> }.into_any(),
        View::Funding => view! { <FundingPage/> }.into_any(),
        View::MyProjects => view! { <MyProjectsPage/> }.into_any(),
        View::CreateProject => view! { <CreateProjectPage/> }.into_any(),
        View::MyContributions => view! { <MyContributionsPage/> }.into_any(),
        View::Civic => view! { <CivicPage/> }.into_any(),
        View::MyCivic => view! { <MyCivicPage/> }.into_any(),
        View::CreatePolicy => view! { <CreatePolicyPage/> }.into_any(),
        View::CivicForums => view! { <CivicForumsPage/> }.into_any(),
        View::Education => view! { <EducationPage/> }.into_any(),
        View::MyCourses => view! { <MyCoursesPage/> }.into_any(),
        View::CreateCourse => view! { <CreateCoursePage/> }.into_any(),
        View::Mentorship => view! { <MentorshipPage/> }.into_any(),
    }
}
