//! Profile view: shows and edits the signed-in user's record.
//!
//! Saving sends `PUT /api/profile` with the whole record, then re-reads
//! `/api/profile` so the session holds what the server stored.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::field::{FormMessage, SelectField, TextArea, TextField};
use crate::net::types::{Profile, ProfileUpdate};
use crate::pages::auth::{MAX_AGE, MIN_AGE};
use crate::pages::form::{join_list, parse_list, parse_whole, required};
use crate::pages::options::COUNTRIES;
use crate::state::session::SessionState;
use crate::util::{listing, session};

/// Editable profile fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub country: String,
    pub age: String,
    pub bio: String,
    pub skills: String,
    pub interests: String,
    pub education: String,
    pub goals: String,
    pub current_projects: String,
    pub languages: String,
    pub phone: String,
    pub linkedin: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            country: profile.country.clone(),
            age: profile.age.to_string(),
            bio: profile.bio.clone(),
            skills: join_list(&profile.skills),
            interests: join_list(&profile.interests),
            education: profile.education.clone(),
            goals: profile.goals.clone(),
            current_projects: profile.current_projects.clone(),
            languages: join_list(&profile.languages),
            phone: profile.phone.clone(),
            linkedin: profile.linkedin.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<ProfileUpdate, String> {
        Ok(ProfileUpdate {
            full_name: required("Full name", &self.full_name)?,
            country: required("Country", &self.country)?,
            age: parse_whole("Age", &self.age, MIN_AGE, MAX_AGE)?,
            bio: self.bio.trim().to_owned(),
            skills: parse_list(&self.skills),
            interests: parse_list(&self.interests),
            education: self.education.trim().to_owned(),
            goals: self.goals.trim().to_owned(),
            current_projects: self.current_projects.trim().to_owned(),
            languages: parse_list(&self.languages),
            phone: self.phone.trim().to_owned(),
            linkedin: self.linkedin.trim().to_owned(),
        })
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<Result<String, String>>);

    let initial = session_state.with_untracked(|s| s.user().map(ProfileForm::from_profile).unwrap_or_default());
    let full_name = RwSignal::new(initial.full_name);
    let country = RwSignal::new(initial.country);
    let age = RwSignal::new(initial.age);
    let bio = RwSignal::new(initial.bio);
    let skills = RwSignal::new(initial.skills);
    let interests = RwSignal::new(initial.interests);
    let education = RwSignal::new(initial.education);
    let goals = RwSignal::new(initial.goals);
    let current_projects = RwSignal::new(initial.current_projects);
    let languages = RwSignal::new(initial.languages);
    let phone = RwSignal::new(initial.phone);
    let linkedin = RwSignal::new(initial.linkedin);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProfileForm {
            full_name: full_name.get_untracked(),
            country: country.get_untracked(),
            age: age.get_untracked(),
            bio: bio.get_untracked(),
            skills: skills.get_untracked(),
            interests: interests.get_untracked(),
            education: education.get_untracked(),
            goals: goals.get_untracked(),
            current_projects: current_projects.get_untracked(),
            languages: languages.get_untracked(),
            phone: phone.get_untracked(),
            linkedin: linkedin.get_untracked(),
        };
        let update = match form.validate() {
            Ok(update) => update,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        busy.set(true);
        listing::submit(
            session_state,
            move |token| async move { crate::net::api::update_profile(&token, &update).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => {
                        session::refresh_profile(session_state);
                        editing.set(false);
                        message.set(Some(Ok("Profile updated successfully".to_owned())));
                    }
                    Err(e) => message.set(Some(Err(e.to_string()))),
                }
            },
        );
    };

    let user = move || session_state.with(|s| s.user().cloned()).unwrap_or_default();

    view! {
        <div class="panel profile">
            <h2>"My Profile"</h2>
            <FormMessage message=message/>
            <Show
                when=move || editing.get()
                fallback=move || {
                    let u = user();
                    let skills_text = if u.skills.is_empty() {
                        "No skills added yet. Edit your profile to add skills.".to_owned()
                    } else {
                        join_list(&u.skills)
                    };
                    view! {
                        <dl class="profile__details">
                            <dt>"Full Name"</dt>
                            <dd>{u.full_name}</dd>
                            <dt>"Country"</dt>
                            <dd>{u.country}</dd>
                            <dt>"Age"</dt>
                            <dd>{format!("{} years old", u.age)}</dd>
                            <dt>"Email"</dt>
                            <dd>{u.email}</dd>
                            <dt>"Bio"</dt>
                            <dd>{u.bio}</dd>
                            <dt>"Skills"</dt>
                            <dd>{skills_text}</dd>
                            <dt>"Interests"</dt>
                            <dd>{join_list(&u.interests)}</dd>
                            <dt>"Languages"</dt>
                            <dd>{join_list(&u.languages)}</dd>
                        </dl>
                        <button class="btn" on:click=move |_| editing.set(true)>
                            "Edit Profile"
                        </button>
                    }
                }
            >
                <form class="profile__form" on:submit=on_save>
                    <TextField label="Full Name" value=full_name/>
                    <SelectField label="Country" value=country options=COUNTRIES/>
                    <TextField label="Age" value=age kind="number"/>
                    <TextArea label="Bio" value=bio/>
                    <TextField label="Skills" value=skills placeholder="Comma separated"/>
                    <TextField label="Interests" value=interests placeholder="Comma separated"/>
                    <TextField label="Education" value=education/>
                    <TextArea label="Goals" value=goals/>
                    <TextArea label="Current Projects" value=current_projects/>
                    <TextField label="Languages" value=languages placeholder="Comma separated"/>
                    <TextField label="Phone" value=phone kind="tel"/>
                    <TextField label="LinkedIn" value=linkedin kind="url"/>
                    <div class="form-actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                        <button class="btn" type="button" on:click=move |_| editing.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
