//! Crowdfunding views: browse and back projects, manage my projects, create
//! a project and list my contributions.
//!
//! SYSTEM CONTEXT
//! ==============
//! A contribution bumps `current_funding` and `backers_count` locally as soon
//! as it is submitted; once the server accepts it, the project is re-read
//! from `GET /api/projects/{id}` and that record replaces the local copy.
//!
//! TRADE-OFFS
//! ==========
//! Deleting a project is not optimistic: the card stays disabled until the
//! server confirms, then it is removed.

#[cfg(test)]
#[path = "funding_test.rs"]
mod funding_test;

use leptos::prelude::*;

use crate::components::field::{FormMessage, SelectField, TextArea, TextField};
use crate::components::filter_bar::{CategoryOption, FilterBar};
use crate::components::list_status::ListStatus;
use crate::components::progress_bar::ProgressBar;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Contribution, ContributionRequest, NewProject, Project};
use crate::pages::form::{parse_amount, parse_list, parse_whole, required};
use crate::pages::options::{PROJECT_CATEGORIES, choices, label_for};
use crate::state::filter::ListFilter;
use crate::state::listing::Listing;
use crate::state::session::SessionState;
use crate::state::view::{UiState, View};
use crate::util::listing::{load_listing, run_item_action, run_reconciled_action, submit};

const FUNDING_GOAL_TYPES: &[CategoryOption] = &[("fixed", "Fixed goal"), ("flexible", "Flexible goal")];

/// Build a contribution request from the inline form.
///
/// # Errors
///
/// Returns the inline message when the amount is not a positive number.
pub fn contribution_request(
    project_id: &str,
    amount: &str,
    anonymous: bool,
    message: &str,
) -> Result<ContributionRequest, String> {
    Ok(ContributionRequest {
        project_id: project_id.to_owned(),
        amount: parse_amount("Amount", amount, false)?,
        anonymous,
        message: message.trim().to_owned(),
    })
}

/// "$1,250 raised of $5,000" style summary.
/// Server copy of a project the user has just backed; `has_contributed`
/// holds whatever the record says.
pub fn confirmed_contribution(mut project: Project) -> Project {
    project.has_contributed = true;
    project
}

pub fn funding_summary(project: &Project) -> String {
    format!(
        "${} raised of ${}",
        group_thousands(project.current_funding),
        group_thousands(project.funding_goal)
    )
}

fn group_thousands(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = amount.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Raw project creation fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub funding_goal: String,
    pub funding_goal_type: String,
    pub duration_months: String,
    pub location: String,
    pub impact_description: String,
    pub budget_breakdown: String,
    pub milestones: String,
    pub team_members: String,
    pub risks_challenges: String,
    pub sustainability_plan: String,
}

impl ProjectForm {
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<NewProject, String> {
        let funding_goal_type = match self.funding_goal_type.trim() {
            "" => "fixed".to_owned(),
            other => other.to_owned(),
        };
        Ok(NewProject {
            title: required("Project title", &self.title)?,
            description: required("Description", &self.description)?,
            category: required("Category", &self.category)?,
            funding_goal: parse_amount("Funding goal", &self.funding_goal, false)?,
            funding_goal_type,
            duration_months: parse_whole("Duration", &self.duration_months, 1, 120)?,
            location: required("Location", &self.location)?,
            impact_description: required("Impact description", &self.impact_description)?,
            budget_breakdown: self.budget_breakdown.trim().to_owned(),
            milestones: parse_list(&self.milestones),
            images: Vec::new(),
            team_members: self.team_members.trim().to_owned(),
            risks_challenges: self.risks_challenges.trim().to_owned(),
            sustainability_plan: self.sustainability_plan.trim().to_owned(),
        })
    }
}

#[component]
pub fn FundingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let projects = RwSignal::new(Listing::<Project>::default());
    let filter = RwSignal::new(ListFilter::default());
    let backing = RwSignal::new(None::<String>);
    let amount = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let anonymous = RwSignal::new(false);
    let message = RwSignal::new(None::<Result<String, String>>);

    let reload = move || load_listing(session, projects, |token| async move { api::fetch_projects(&token, "").await });
    Effect::new(move || reload());

    let visible = move || filter.with(|f| projects.with(|l| l.visible(f)));

    let contribute = move |project_id: String| {
        let req = match contribution_request(
            &project_id,
            &amount.get_untracked(),
            anonymous.get_untracked(),
            &note.get_untracked(),
        ) {
            Ok(req) => req,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        let value = req.amount;
        backing.set(None);
        amount.set(String::new());
        note.set(String::new());
        anonymous.set(false);
        message.set(None);
        let id = project_id.clone();
        run_reconciled_action(
            session,
            projects,
            &project_id,
            |p| p.record_contribution(value),
            move |token| async move {
                api::contribute(&token, &req).await?;
                let project = api::fetch_project(&token, &id).await?;
                Ok::<_, ApiError>(confirmed_contribution(project))
            },
            |project: &Project| Some(project.clone()),
            |_| {},
        );
    };

    view! {
        <div class="funding">
            <section class="banner banner--funding">
                <h1>"AfriFund DAO"</h1>
                <p>"Fund impactful projects across Africa. Support innovation, education, environment, and community development led by African youth."</p>
                <div class="banner__actions">
                    <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::CreateProject))>
                        "Create Project"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| ui.update(|u| u.set_view(View::MyProjects))>
                        "My Projects"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| ui.update(|u| u.set_view(View::MyContributions))>
                        "My Contributions"
                    </button>
                </div>
            </section>
            <FilterBar filter=filter categories=PROJECT_CATEGORIES placeholder="Search projects"/>
            <ListStatus
                loading=Signal::derive(move || projects.with(Listing::loading))
                error=Signal::derive(move || projects.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || visible().is_empty())
                empty_message="No projects match your search yet."
            />
            <div class="card-grid">
                <For
                    each=visible
                    key=|p| (p.project_id.clone(), p.backers_count, p.has_contributed)
                    let:project
                >
                    {
                        let id = project.project_id.clone();
                        let pending_id = id.clone();
                        let open_id = id.clone();
                        let is_open_id = id.clone();
                        let pending = Signal::derive(move || projects.with(|l| l.is_pending(&pending_id)));
                        let is_open = Signal::derive(move || backing.with(|b| b.as_deref() == Some(is_open_id.as_str())));
                        let percent = project.progress_percent();
                        view! {
                            <article class="card project-card">
                                <h3>{project.title.clone()}</h3>
                                <p class="card__meta">
                                    {format!(
                                        "{} • {} • by {}",
                                        label_for(PROJECT_CATEGORIES, &project.category),
                                        project.location,
                                        project.creator_name,
                                    )}
                                </p>
                                <p>{project.description.clone()}</p>
                                <ProgressBar percent=Signal::derive(move || percent)/>
                                <p class="card__meta">
                                    {format!("{} • {} backers", funding_summary(&project), project.backers_count)}
                                </p>
                                {project.has_contributed.then(|| view! { <span class="badge badge--ok">"Backed"</span> })}
                                <Show
                                    when=move || is_open.get()
                                    fallback=move || {
                                        let open_id = open_id.clone();
                                        view! {
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || pending.get()
                                                on:click=move |_| {
                                                    message.set(None);
                                                    backing.set(Some(open_id.clone()));
                                                }
                                            >
                                                {move || if pending.get() { "Contributing..." } else { "Contribute" }}
                                            </button>
                                        }
                                    }
                                >
                                    {
                                        let id = id.clone();
                                        view! {
                                            <TextField label="Amount (USD)" value=amount kind="number"/>
                                            <TextArea label="Message" value=note placeholder="Optional"/>
                                            <label class="field field--inline">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || anonymous.get()
                                                    on:change=move |ev| anonymous.set(event_target_checked(&ev))
                                                />
                                                "Contribute anonymously"
                                            </label>
                                            <FormMessage message=message/>
                                            <button class="btn btn--primary" on:click=move |_| contribute(id.clone())>
                                                "Confirm"
                                            </button>
                                            <button class="btn" on:click=move |_| backing.set(None)>
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
pub fn MyProjectsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let projects = RwSignal::new(Listing::<Project>::default());

    Effect::new(move || {
        load_listing(session, projects, |token| async move { api::fetch_my_projects(&token).await });
    });

    let delete = move |project_id: String| {
        let id = project_id.clone();
        let removed = project_id.clone();
        run_item_action(
            session,
            projects,
            &project_id,
            |_| {},
            move |token| async move { api::delete_project(&token, &id).await },
            move |_| {
                projects.try_update(|l| l.remove(&removed));
            },
        );
    };

    view! {
        <div class="panel">
            <h2>"My Projects"</h2>
            <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::CreateProject))>
                "Create Project"
            </button>
            <ListStatus
                loading=Signal::derive(move || projects.with(Listing::loading))
                error=Signal::derive(move || projects.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || projects.with(|l| l.items().is_empty()))
                empty_message="You have not created any projects yet."
            />
            <For each=move || projects.with(|l| l.items().to_vec()) key=|p| p.project_id.clone() let:project>
                {
                    let id = project.project_id.clone();
                    let pending_id = id.clone();
                    let pending = Signal::derive(move || projects.with(|l| l.is_pending(&pending_id)));
                    let percent = project.progress_percent();
                    view! {
                        <article class="card">
                            <h3>{project.title.clone()}</h3>
                            <p class="card__meta">{project.status.clone()}</p>
                            <ProgressBar percent=Signal::derive(move || percent)/>
                            <p class="card__meta">{funding_summary(&project)}</p>
                            <button
                                class="btn btn--danger"
                                disabled=move || pending.get()
                                on:click=move |_| delete(id.clone())
                            >
                                {move || if pending.get() { "Deleting..." } else { "Delete" }}
                            </button>
                        </article>
                    }
                }
            </For>
        </div>
    }
}

#[component]
pub fn CreateProjectPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let message = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let funding_goal = RwSignal::new(String::new());
    let funding_goal_type = RwSignal::new("fixed".to_owned());
    let duration_months = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let impact_description = RwSignal::new(String::new());
    let budget_breakdown = RwSignal::new(String::new());
    let milestones = RwSignal::new(String::new());
    let team_members = RwSignal::new(String::new());
    let risks_challenges = RwSignal::new(String::new());
    let sustainability_plan = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProjectForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            funding_goal: funding_goal.get_untracked(),
            funding_goal_type: funding_goal_type.get_untracked(),
            duration_months: duration_months.get_untracked(),
            location: location.get_untracked(),
            impact_description: impact_description.get_untracked(),
            budget_breakdown: budget_breakdown.get_untracked(),
            milestones: milestones.get_untracked(),
            team_members: team_members.get_untracked(),
            risks_challenges: risks_challenges.get_untracked(),
            sustainability_plan: sustainability_plan.get_untracked(),
        };
        let project = match form.validate() {
            Ok(project) => project,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        busy.set(true);
        submit(
            session,
            move |token| async move { api::create_project(&token, &project).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => ui.update(|u| u.set_view(View::MyProjects)),
                    Err(e) => message.set(Some(Err(e.to_string()))),
                }
            },
        );
    };

    view! {
        <div class="panel">
            <h2>"Create Project"</h2>
            <form class="form" on:submit=on_create>
                <TextField label="Project Title" value=title/>
                <TextArea label="Description" value=description/>
                <SelectField label="Category" value=category options=choices(PROJECT_CATEGORIES) blank="Select category"/>
                <TextField label="Funding Goal (USD)" value=funding_goal kind="number"/>
                <SelectField label="Goal Type" value=funding_goal_type options=FUNDING_GOAL_TYPES/>
                <TextField label="Duration (months)" value=duration_months kind="number"/>
                <TextField label="Location" value=location/>
                <TextArea label="Expected Impact" value=impact_description/>
                <TextArea label="Budget Breakdown" value=budget_breakdown/>
                <TextArea label="Milestones" value=milestones placeholder="One per line"/>
                <TextArea label="Team Members" value=team_members/>
                <TextArea label="Risks and Challenges" value=risks_challenges/>
                <TextArea label="Sustainability Plan" value=sustainability_plan/>
                <FormMessage message=message/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Project" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn MyContributionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let contributions = RwSignal::new(Listing::<Contribution>::default());

    Effect::new(move || {
        load_listing(session, contributions, |token| async move { api::fetch_my_contributions(&token).await });
    });

    let total = move || contributions.with(|l| l.items().iter().map(|c| c.amount).sum::<f64>());

    view! {
        <div class="panel">
            <h2>"My Contributions"</h2>
            <p class="card__meta">{move || format!("Total contributed: ${}", group_thousands(total()))}</p>
            <ListStatus
                loading=Signal::derive(move || contributions.with(Listing::loading))
                error=Signal::derive(move || contributions.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || contributions.with(|l| l.items().is_empty()))
                empty_message="Projects you back will appear here."
            />
            <For
                each=move || contributions.with(|l| l.items().to_vec())
                key=|c| c.contribution_id.clone()
                let:contribution
            >
                <article class="card">
                    <h3>{contribution.project_title.clone()}</h3>
                    <p class="card__meta">
                        {format!("${} • {}", group_thousands(contribution.amount), contribution.created_at)}
                    </p>
                    <p>{contribution.message.clone()}</p>
                    {contribution.anonymous.then(|| view! { <span class="badge">"Anonymous"</span> })}
                </article>
            </For>
        </div>
    }
}
