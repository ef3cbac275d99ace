//! Job seeker views: the job board and the user's own applications.
//!
//! Applying is optimistic: the card flips to "Applied" straight away and only
//! reverts if `POST /api/jobs/{id}/apply` fails.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;

use crate::components::field::TextArea;
use crate::components::filter_bar::FilterBar;
use crate::components::list_status::ListStatus;
use crate::net::api;
use crate::net::types::{Application, ApplicationStatus, Job, JobApplicationRequest};
use crate::pages::form::{join_list, parse_list};
use crate::pages::options::{APPLICATION_STATUSES, JOB_TYPES, LOCATION_TYPES, label_for};
use crate::state::filter::ListFilter;
use crate::state::listing::Listing;
use crate::state::session::SessionState;
use crate::state::view::{UiState, View};
use crate::util::listing::{load_listing, run_item_action};

/// Which job feed the board shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobFeed {
    #[default]
    All,
    Recommended,
}

/// Build the apply request; the portfolio field accepts a comma list.
pub fn application_request(job_id: &str, cover_letter: &str, portfolio: &str) -> JobApplicationRequest {
    JobApplicationRequest {
        job_id: job_id.to_owned(),
        cover_letter: cover_letter.trim().to_owned(),
        portfolio_links: parse_list(portfolio).join(", "),
    }
}

/// CSS modifier for an application status badge.
pub fn status_class(status: &ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Accepted => "badge badge--ok",
        ApplicationStatus::Rejected => "badge badge--error",
        ApplicationStatus::Shortlisted | ApplicationStatus::Reviewed => "badge badge--info",
        ApplicationStatus::Pending | ApplicationStatus::Other(_) => "badge",
    }
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let jobs = RwSignal::new(Listing::<Job>::default());
    let filter = RwSignal::new(ListFilter::default());
    let feed = RwSignal::new(JobFeed::All);
    let applying = RwSignal::new(None::<String>);
    let cover_letter = RwSignal::new(String::new());
    let portfolio = RwSignal::new(String::new());

    Effect::new(move || match feed.get() {
        JobFeed::All => load_listing(session, jobs, |token| async move { api::fetch_jobs(&token, "").await }),
        JobFeed::Recommended => {
            load_listing(session, jobs, |token| async move { api::fetch_recommended_jobs(&token).await });
        }
    });

    let visible = move || filter.with(|f| jobs.with(|l| l.visible(f)));

    let apply = move |job_id: String| {
        let req = application_request(&job_id, &cover_letter.get_untracked(), &portfolio.get_untracked());
        applying.set(None);
        cover_letter.set(String::new());
        portfolio.set(String::new());
        run_item_action(
            session,
            jobs,
            &job_id,
            |job| job.has_applied = true,
            move |token| async move { api::apply_to_job(&token, &req).await },
            |_| {},
        );
    };

    view! {
        <div class="jobs">
            <section class="banner banner--jobs">
                <h1>"AfriWorkMesh"</h1>
                <p>"Discover job opportunities across Africa. From tech startups to NGOs, find your career match."</p>
                <div class="banner__actions">
                    <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::Organization))>
                        "Post a Job"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| ui.update(|u| u.set_view(View::MyApplications))>
                        "My Applications"
                    </button>
                </div>
            </section>
            <div class="tabs">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || feed.get() == JobFeed::All
                    on:click=move |_| feed.set(JobFeed::All)
                >
                    "All Jobs"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || feed.get() == JobFeed::Recommended
                    on:click=move |_| feed.set(JobFeed::Recommended)
                >
                    "Recommended"
                </button>
            </div>
            <FilterBar filter=filter categories=JOB_TYPES placeholder="Search jobs"/>
            <ListStatus
                loading=Signal::derive(move || jobs.with(Listing::loading))
                error=Signal::derive(move || jobs.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || visible().is_empty())
                empty_message="No jobs match your search yet."
            />
            <div class="card-grid">
                <For each=visible key=|j| (j.job_id.clone(), j.has_applied) let:job>
                    {
                        let id = job.job_id.clone();
                        let pending_id = id.clone();
                        let open_id = id.clone();
                        let is_open_id = id.clone();
                        let pending = Signal::derive(move || jobs.with(|l| l.is_pending(&pending_id)));
                        let is_open = Signal::derive(move || applying.with(|a| a.as_deref() == Some(is_open_id.as_str())));
                        let applied = job.has_applied;
                        view! {
                            <article class="card job-card">
                                <h3>{job.title.clone()}</h3>
                                <p class="card__meta">
                                    {format!(
                                        "{} • {} • {} {}",
                                        job.organization_name,
                                        label_for(JOB_TYPES, &job.job_type),
                                        label_for(LOCATION_TYPES, &job.location_type),
                                        job.location,
                                    )}
                                </p>
                                <p>{job.description.clone()}</p>
                                <p class="card__tags">{join_list(&job.skills_required)}</p>
                                <p class="card__meta">{job.salary_range.clone()}</p>
                                <Show
                                    when=move || is_open.get()
                                    fallback=move || {
                                        let open_id = open_id.clone();
                                        view! {
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || applied || pending.get()
                                                on:click=move |_| applying.set(Some(open_id.clone()))
                                            >
                                                {if applied { "Applied" } else { "Apply" }}
                                            </button>
                                        }
                                    }
                                >
                                    {
                                        let id = id.clone();
                                        view! {
                                            <TextArea label="Cover letter" value=cover_letter/>
                                            <TextArea label="Portfolio links" value=portfolio placeholder="Comma separated"/>
                                            <button class="btn btn--primary" on:click=move |_| apply(id.clone())>
                                                "Submit Application"
                                            </button>
                                            <button class="btn" on:click=move |_| applying.set(None)>
                                                "Cancel"
                                            </button>
                                        }
                                    }
                                </Show>
                            </article>
                        }
                    }
                </For>
            </div>
        </div>
    }
}

#[component]
pub fn MyApplicationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let applications = RwSignal::new(Listing::<Application>::default());
    let filter = RwSignal::new(ListFilter::default());

    Effect::new(move || {
        load_listing(session, applications, |token| async move { api::fetch_my_applications(&token).await });
    });

    let visible = move || filter.with(|f| applications.with(|l| l.visible(f)));

    view! {
        <div class="panel">
            <h2>"My Applications"</h2>
            <FilterBar filter=filter categories=APPLICATION_STATUSES placeholder="Search applications"/>
            <ListStatus
                loading=Signal::derive(move || applications.with(Listing::loading))
                error=Signal::derive(move || applications.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || visible().is_empty())
                empty_message="Your job applications will appear here."
            />
            <For each=visible key=|a| (a.application_id.clone(), a.status.clone()) let:app>
                <article class="card">
                    <h3>{app.job_title.clone()}</h3>
                    <p class="card__meta">{app.organization_name.clone()}</p>
                    <span class=status_class(&app.status)>{label_for(APPLICATION_STATUSES, app.status.as_str())}</span>
                    <p class="card__meta">{app.applied_at.clone()}</p>
                </article>
            </For>
        </div>
    }
}
