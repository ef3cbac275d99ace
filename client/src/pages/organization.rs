//! Employer views: organization registration, job posting and reviewing
//! applications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GET /api/organizations` returns every organization; the portal keeps the
//! ones owned by the signed-in user. Status changes on applications are
//! optimistic and reconcile against the server's acknowledgement.

#[cfg(test)]
#[path = "organization_test.rs"]
mod organization_test;

use leptos::prelude::*;

use crate::components::field::{FormMessage, SelectField, TextArea, TextField};
use crate::components::filter_bar::FilterBar;
use crate::components::list_status::ListStatus;
use crate::net::api;
use crate::net::types::{Application, ApplicationStatus, NewJob, NewOrganization, Organization};
use crate::pages::form::{parse_list, parse_optional_year, required};
use crate::pages::jobs::status_class;
use crate::pages::options::{
    APPLICATION_STATUSES, COUNTRIES, JOB_TYPES, LOCATION_TYPES, ORGANIZATION_TYPES, choices, label_for,
};
use crate::state::filter::ListFilter;
use crate::state::listing::Listing;
use crate::state::session::SessionState;
use crate::state::view::{UiState, View};
use crate::util::listing::{load_listing, run_item_action, submit};

/// Raw organization registration fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrganizationForm {
    pub name: String,
    pub description: String,
    pub organization_type: String,
    pub country: String,
    pub website: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub size: String,
    pub founded_year: String,
}

impl OrganizationForm {
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<NewOrganization, String> {
        let contact_email = required("Contact email", &self.contact_email)?;
        if !contact_email.contains('@') {
            return Err("Enter a valid contact email.".to_owned());
        }
        Ok(NewOrganization {
            name: required("Organization name", &self.name)?,
            description: required("Description", &self.description)?,
            organization_type: required("Organization type", &self.organization_type)?,
            country: required("Country", &self.country)?,
            website: self.website.trim().to_owned(),
            contact_email,
            contact_phone: self.contact_phone.trim().to_owned(),
            size: self.size.trim().to_owned(),
            founded_year: parse_optional_year("Founded year", &self.founded_year)?,
        })
    }
}

/// Raw job posting fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub job_type: String,
    pub job_category: String,
    pub location_type: String,
    pub location: String,
    pub salary_range: String,
    pub skills_required: String,
    pub experience_level: String,
    pub benefits: String,
}

impl JobForm {
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<NewJob, String> {
        Ok(NewJob {
            title: required("Job title", &self.title)?,
            description: required("Description", &self.description)?,
            requirements: parse_list(&self.requirements),
            job_type: required("Job type", &self.job_type)?,
            job_category: self.job_category.trim().to_owned(),
            location_type: required("Location type", &self.location_type)?,
            location: self.location.trim().to_owned(),
            salary_range: self.salary_range.trim().to_owned(),
            skills_required: parse_list(&self.skills_required),
            experience_level: self.experience_level.trim().to_owned(),
            benefits: self.benefits.trim().to_owned(),
        })
    }
}

/// Organizations owned by `user_id`.
pub fn owned_by(orgs: &[Organization], user_id: &str) -> Vec<Organization> {
    orgs.iter().filter(|o| o.owner_id == user_id).cloned().collect()
}

#[component]
pub fn OrganizationPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let orgs = RwSignal::new(Listing::<Organization>::default());
    let message = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let organization_type = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let contact_email = RwSignal::new(String::new());
    let contact_phone = RwSignal::new(String::new());
    let size = RwSignal::new(String::new());
    let founded_year = RwSignal::new(String::new());

    let reload = move || load_listing(session, orgs, |token| async move { api::fetch_organizations(&token, "").await });
    Effect::new(move || reload());

    let mine = move || {
        let me = session.with(|s| s.user().map(|u| u.user_id.clone()).unwrap_or_default());
        orgs.with(|l| owned_by(l.items(), &me))
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = OrganizationForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            organization_type: organization_type.get_untracked(),
            country: country.get_untracked(),
            website: website.get_untracked(),
            contact_email: contact_email.get_untracked(),
            contact_phone: contact_phone.get_untracked(),
            size: size.get_untracked(),
            founded_year: founded_year.get_untracked(),
        };
        let org = match form.validate() {
            Ok(org) => org,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        busy.set(true);
        submit(
            session,
            move |token| async move { api::register_organization(&token, &org).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => {
                        for field in [name, description, website, contact_email, contact_phone, size, founded_year] {
                            field.set(String::new());
                        }
                        message.set(Some(Ok("Organization registered successfully".to_owned())));
                        reload();
                    }
                    Err(e) => message.set(Some(Err(e.to_string()))),
                }
            },
        );
    };

    view! {
        <div class="panel organization">
            <h2>"Organization Portal"</h2>
            <p>"Register your organization to post jobs and connect with talented African youth."</p>
            <div class="banner__actions">
                <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::PostJob))>
                    "Post a Job"
                </button>
                <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::ManageApplications))>
                    "Manage Applications"
                </button>
            </div>
            <section>
                <h3>"My Organizations"</h3>
                <ListStatus
                    loading=Signal::derive(move || orgs.with(Listing::loading))
                    error=Signal::derive(move || orgs.with(|l| l.error().map(str::to_owned)))
                    is_empty=Signal::derive(move || mine().is_empty())
                    empty_message="You have not registered an organization yet."
                />
                <For each=mine key=|o| o.organization_id.clone() let:org>
                    <article class="card">
                        <h4>{org.name.clone()}</h4>
                        <p class="card__meta">
                            {format!("{} • {}", label_for(ORGANIZATION_TYPES, &org.organization_type), org.country)}
                        </p>
                        <p>{org.description.clone()}</p>
                        {org.verified.then(|| view! { <span class="badge badge--ok">"Verified"</span> })}
                    </article>
                </For>
            </section>
            <section>
                <h3>"Register Organization"</h3>
                <form class="form" on:submit=on_register>
                    <TextField label="Organization Name" value=name/>
                    <TextArea label="Description" value=description/>
                    <SelectField label="Type" value=organization_type options=ORGANIZATION_TYPES blank="Select type"/>
                    <SelectField label="Country" value=country options=COUNTRIES blank="Select country"/>
                    <TextField label="Website" value=website kind="url"/>
                    <TextField label="Contact Email" value=contact_email kind="email"/>
                    <TextField label="Contact Phone" value=contact_phone kind="tel"/>
                    <TextField label="Size" value=size placeholder="e.g. 1-10 employees"/>
                    <TextField label="Founded Year" value=founded_year kind="number"/>
                    <FormMessage message=message/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
            </section>
        </div>
    }
}

#[component]
pub fn PostJobPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let message = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let requirements = RwSignal::new(String::new());
    let job_type = RwSignal::new(String::new());
    let job_category = RwSignal::new(String::new());
    let location_type = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let salary_range = RwSignal::new(String::new());
    let skills_required = RwSignal::new(String::new());
    let experience_level = RwSignal::new(String::new());
    let benefits = RwSignal::new(String::new());

    let on_post = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = JobForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            requirements: requirements.get_untracked(),
            job_type: job_type.get_untracked(),
            job_category: job_category.get_untracked(),
            location_type: location_type.get_untracked(),
            location: location.get_untracked(),
            salary_range: salary_range.get_untracked(),
            skills_required: skills_required.get_untracked(),
            experience_level: experience_level.get_untracked(),
            benefits: benefits.get_untracked(),
        };
        let job = match form.validate() {
            Ok(job) => job,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        busy.set(true);
        submit(
            session,
            move |token| async move { api::post_job(&token, &job).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => ui.update(|u| u.set_view(View::Jobs)),
                    Err(e) => message.set(Some(Err(e.to_string()))),
                }
            },
        );
    };

    view! {
        <div class="panel">
            <h2>"Post Job"</h2>
            <form class="form" on:submit=on_post>
                <TextField label="Job Title" value=title/>
                <TextArea label="Description" value=description/>
                <TextArea label="Requirements" value=requirements placeholder="One per line"/>
                <SelectField label="Job Type" value=job_type options=choices(JOB_TYPES) blank="Select type"/>
                <TextField label="Category" value=job_category placeholder="e.g. technology"/>
                <SelectField label="Location Type" value=location_type options=LOCATION_TYPES blank="Select"/>
                <TextField label="Location" value=location/>
                <TextField label="Salary Range" value=salary_range/>
                <TextField label="Skills Required" value=skills_required placeholder="Comma separated"/>
                <TextField label="Experience Level" value=experience_level/>
                <TextArea label="Benefits" value=benefits/>
                <FormMessage message=message/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Posting..." } else { "Post Job" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn ManageApplicationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let applications = RwSignal::new(Listing::<Application>::default());
    let filter = RwSignal::new(ListFilter::default());

    Effect::new(move || {
        load_listing(session, applications, |token| async move {
            api::fetch_organization_applications(&token).await
        });
    });

    let visible = move || filter.with(|f| applications.with(|l| l.visible(f)));

    let set_status = move |application_id: String, status: ApplicationStatus| {
        let id = application_id.clone();
        let patched = status.clone();
        run_item_action(
            session,
            applications,
            &application_id,
            |app| app.status = patched,
            move |token| async move { api::update_application_status(&token, &id, status).await },
            |_| {},
        );
    };

    view! {
        <div class="panel">
            <h2>"Manage Applications"</h2>
            <FilterBar filter=filter categories=APPLICATION_STATUSES placeholder="Search applicants"/>
            <ListStatus
                loading=Signal::derive(move || applications.with(Listing::loading))
                error=Signal::derive(move || applications.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || visible().is_empty())
                empty_message="Applications to your jobs will appear here."
            />
            <For each=visible key=|a| (a.application_id.clone(), a.status.clone()) let:app>
                {
                    let id = app.application_id.clone();
                    let pending_id = id.clone();
                    let pending = Signal::derive(move || applications.with(|l| l.is_pending(&pending_id)));
                    view! {
                        <article class="card">
                            <h3>{app.applicant_name.clone()}</h3>
                            <p class="card__meta">{app.job_title.clone()}</p>
                            <p>{app.cover_letter.clone()}</p>
                            <p class="card__tags">{app.portfolio_links.clone()}</p>
                            <span class=status_class(&app.status)>
                                {label_for(APPLICATION_STATUSES, app.status.as_str())}
                            </span>
                            <select
                                class="field__input"
                                disabled=move || pending.get()
                                prop:value=app.status.as_str().to_owned()
                                on:change=move |ev| {
                                    let status = ApplicationStatus::parse(&event_target_value(&ev));
                                    if status.is_reviewable() {
                                        set_status(id.clone(), status);
                                    }
                                }
                            >
                                {ApplicationStatus::REVIEWABLE
                                    .into_iter()
                                    .map(|s| {
                                        let value = s.as_str().to_owned();
                                        let label = label_for(APPLICATION_STATUSES, &value);
                                        view! { <option value=value>{label}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </article>
                    }
                }
            </For>
        </div>
    }
}
