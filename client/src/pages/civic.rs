//! Civic engagement views: policy proposals, voting, feedback and the
//! user's participation summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Votes and feedback patch the policy's counters locally, then the list is
//! re-fetched so the counts reflect every participant, not just this one.

#[cfg(test)]
#[path = "civic_test.rs"]
mod civic_test;

use leptos::prelude::*;

use crate::components::coming_soon::ComingSoon;
use crate::components::field::{FormMessage, SelectField, TextArea, TextField};
use crate::components::filter_bar::FilterBar;
use crate::components::list_status::ListStatus;
use crate::net::api;
use crate::net::types::{CivicParticipation, NewPolicy, Policy, PolicyFeedback, PolicyVote, VoteType};
use crate::pages::form::{parse_list, required};
use crate::pages::options::{FEEDBACK_TYPES, POLICY_CATEGORIES, PROPOSAL_TYPES, choices, label_for};
use crate::state::filter::ListFilter;
use crate::state::listing::Listing;
use crate::state::session::SessionState;
use crate::state::view::{UiState, View};
use crate::util::listing::{load_listing, run_item_action, submit};

/// Build the vote body for `policy_id`.
pub fn vote_request(policy_id: &str, vote: VoteType) -> PolicyVote {
    PolicyVote { policy_id: policy_id.to_owned(), vote_type: vote, comment: String::new() }
}

/// Build the feedback body from the inline form.
///
/// # Errors
///
/// Returns the inline message when the feedback text is blank.
pub fn feedback_request(
    policy_id: &str,
    feedback_type: &str,
    content: &str,
    impact_assessment: &str,
    alternative_suggestion: &str,
) -> Result<PolicyFeedback, String> {
    let feedback_type = match feedback_type.trim() {
        "" => "suggestion".to_owned(),
        other => other.to_owned(),
    };
    Ok(PolicyFeedback {
        policy_id: policy_id.to_owned(),
        feedback_type,
        content: required("Feedback", content)?,
        impact_assessment: impact_assessment.trim().to_owned(),
        alternative_suggestion: alternative_suggestion.trim().to_owned(),
    })
}

/// "12 support • 3 oppose • 4 comments" tally line.
pub fn tally(policy: &Policy) -> String {
    format!(
        "{} support • {} oppose • {} comments",
        policy.support_count, policy.oppose_count, policy.feedback_count
    )
}

/// Raw policy proposal fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub proposal_type: String,
    pub target_location: String,
    pub expected_impact: String,
    pub implementation_timeline: String,
    pub resources_needed: String,
    pub supporting_documents: String,
}

impl PolicyForm {
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<NewPolicy, String> {
        Ok(NewPolicy {
            title: required("Policy title", &self.title)?,
            description: required("Description", &self.description)?,
            category: required("Category", &self.category)?,
            proposal_type: required("Proposal type", &self.proposal_type)?,
            target_location: required("Target location", &self.target_location)?,
            expected_impact: required("Expected impact", &self.expected_impact)?,
            implementation_timeline: self.implementation_timeline.trim().to_owned(),
            resources_needed: self.resources_needed.trim().to_owned(),
            supporting_documents: parse_list(&self.supporting_documents),
        })
    }
}

#[component]
pub fn CivicPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let policies = RwSignal::new(Listing::<Policy>::default());
    let filter = RwSignal::new(ListFilter::default());
    let reviewing = RwSignal::new(None::<String>);
    let feedback_type = RwSignal::new("suggestion".to_owned());
    let content = RwSignal::new(String::new());
    let impact = RwSignal::new(String::new());
    let alternative = RwSignal::new(String::new());
    let message = RwSignal::new(None::<Result<String, String>>);

    let reload = move || load_listing(session, policies, |token| async move { api::fetch_policies(&token, "").await });
    Effect::new(move || reload());

    let visible = move || filter.with(|f| policies.with(|l| l.visible(f)));

    let vote = move |policy_id: String, vote: VoteType| {
        let body = vote_request(&policy_id, vote);
        run_item_action(
            session,
            policies,
            &policy_id,
            |p| p.record_vote(vote),
            move |token| async move { api::vote_on_policy(&token, &body).await },
            move |_| reload(),
        );
    };

    let send_feedback = move |policy_id: String| {
        let body = match feedback_request(
            &policy_id,
            &feedback_type.get_untracked(),
            &content.get_untracked(),
            &impact.get_untracked(),
            &alternative.get_untracked(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        reviewing.set(None);
        for field in [content, impact, alternative] {
            field.set(String::new());
        }
        message.set(None);
        run_item_action(
            session,
            policies,
            &policy_id,
            Policy::record_feedback,
            move |token| async move { api::submit_policy_feedback(&token, &body).await },
            move |_| reload(),
        );
    };

    view! {
        <div class="civic">
            <section class="banner banner--civic">
                <h1>"AfriVoice"</h1>
                <p>"Your voice matters! Engage in policy discussions, provide feedback on governance, and help shape the future of Africa through democratic participation."</p>
                <div class="banner__actions">
                    <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::CreatePolicy))>
                        "Propose Policy"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| ui.update(|u| u.set_view(View::MyCivic))>
                        "My Participation"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| ui.update(|u| u.set_view(View::CivicForums))>
                        "Forums"
                    </button>
                </div>
            </section>
            <FilterBar filter=filter categories=POLICY_CATEGORIES placeholder="Search policies"/>
            <ListStatus
                loading=Signal::derive(move || policies.with(Listing::loading))
                error=Signal::derive(move || policies.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || visible().is_empty())
                empty_message="No policy proposals match your search yet."
            />
            <div class="card-grid">
                <For
                    each=visible
                    key=|p| {
                        (p.policy_id.clone(), p.support_count, p.oppose_count, p.feedback_count, p.has_participated)
                    }
                    let:policy
                >
                    {
                        let id = policy.policy_id.clone();
                        let pending_id = id.clone();
                        let open_id = id.clone();
                        let is_open_id = id.clone();
                        let support_id = id.clone();
                        let oppose_id = id.clone();
                        let pending = Signal::derive(move || policies.with(|l| l.is_pending(&pending_id)));
                        let is_open = Signal::derive(move || reviewing.with(|r| r.as_deref() == Some(is_open_id.as_str())));
                        let participated = policy.has_participated;
                        view! {
                            <article class="card policy-card">
                                <h3>{policy.title.clone()}</h3>
                                <p class="card__meta">
                                    {format!(
                                        "{} • {} • {} • by {}",
                                        label_for(POLICY_CATEGORIES, &policy.category),
                                        label_for(PROPOSAL_TYPES, &policy.proposal_type),
                                        policy.target_location,
                                        policy.author_name,
                                    )}
                                </p>
                                <p>{policy.description.clone()}</p>
                                <p class="card__meta">{tally(&policy)}</p>
                                {participated.then(|| view! { <span class="badge badge--ok">"Participated"</span> })}
                                <div class="card__actions">
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || pending.get() || participated
                                        on:click=move |_| vote(support_id.clone(), VoteType::Support)
                                    >
                                        "Support"
                                    </button>
                                    <button
                                        class="btn"
                                        disabled=move || pending.get() || participated
                                        on:click=move |_| vote(oppose_id.clone(), VoteType::Oppose)
                                    >
                                        "Oppose"
                                    </button>
                                </div>
                                <Show
                                    when=move || is_open.get()
                                    fallback=move || {
                                        let open_id = open_id.clone();
                                        view! {
                                            <button
                                                class="btn btn--outline"
                                                disabled=move || pending.get()
                                                on:click=move |_| {
                                                    message.set(None);
                                                    reviewing.set(Some(open_id.clone()));
                                                }
                                            >
                                                "Give Feedback"
                                            </button>
                                        }
                                    }
                                >
                                    {
                                        let id = id.clone();
                                        view! {
                                            <SelectField label="Type" value=feedback_type options=FEEDBACK_TYPES/>
                                            <TextArea label="Feedback" value=content/>
                                            <TextArea label="Impact assessment" value=impact placeholder="Optional"/>
                                            <TextArea label="Alternative suggestion" value=alternative placeholder="Optional"/>
                                            <FormMessage message=message/>
                                            <button class="btn btn--primary" on:click=move |_| send_feedback(id.clone())>
                                                "Submit Feedback"
                                            </button>
                                            <button class="btn" on:click=move |_| reviewing.set(None)>
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
pub fn MyCivicPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let summary = RwSignal::new(None::<CivicParticipation>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        submit(
            session,
            |token| async move { api::fetch_civic_participation(&token).await },
            move |result| {
                loading.try_set(false);
                match result {
                    Ok(s) => {
                        summary.try_set(Some(s));
                    }
                    Err(e) => {
                        error.try_set(Some(e.to_string()));
                    }
                }
            },
        );
    });

    view! {
        <div class="panel">
            <h2>"My Civic Participation"</h2>
            <ListStatus
                loading=loading.into()
                error=error.into()
                is_empty=Signal::derive(move || summary.with(Option::is_none))
                empty_message="No participation recorded yet."
            />
            {move || {
                summary
                    .get()
                    .map(|s| {
                        view! {
                            <div class="stats">
                                <div class="stat">
                                    <span class="stat__value">{s.total_points}</span>
                                    <span class="stat__label">"Points"</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__value">{s.participation_level.clone()}</span>
                                    <span class="stat__label">"Level"</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__value">{s.votes_cast}</span>
                                    <span class="stat__label">"Votes cast"</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__value">{s.feedback_given}</span>
                                    <span class="stat__label">"Feedback given"</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__value">{s.policies_proposed}</span>
                                    <span class="stat__label">"Policies proposed"</span>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn CreatePolicyPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let message = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let proposal_type = RwSignal::new(String::new());
    let target_location = RwSignal::new(String::new());
    let expected_impact = RwSignal::new(String::new());
    let implementation_timeline = RwSignal::new(String::new());
    let resources_needed = RwSignal::new(String::new());
    let supporting_documents = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = PolicyForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            proposal_type: proposal_type.get_untracked(),
            target_location: target_location.get_untracked(),
            expected_impact: expected_impact.get_untracked(),
            implementation_timeline: implementation_timeline.get_untracked(),
            resources_needed: resources_needed.get_untracked(),
            supporting_documents: supporting_documents.get_untracked(),
        };
        let policy = match form.validate() {
            Ok(policy) => policy,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        busy.set(true);
        submit(
            session,
            move |token| async move { api::create_policy(&token, &policy).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => ui.update(|u| u.set_view(View::Civic)),
                    Err(e) => message.set(Some(Err(e.to_string()))),
                }
            },
        );
    };

    view! {
        <div class="panel">
            <h2>"Propose Policy"</h2>
            <form class="form" on:submit=on_create>
                <TextField label="Policy Title" value=title/>
                <TextArea label="Description" value=description/>
                <SelectField label="Category" value=category options=choices(POLICY_CATEGORIES) blank="Select category"/>
                <SelectField label="Proposal Type" value=proposal_type options=PROPOSAL_TYPES blank="Select type"/>
                <TextField label="Target Location" value=target_location placeholder="e.g. Accra, Ghana"/>
                <TextArea label="Expected Impact" value=expected_impact/>
                <TextField label="Implementation Timeline" value=implementation_timeline/>
                <TextArea label="Resources Needed" value=resources_needed/>
                <TextArea label="Supporting Documents" value=supporting_documents placeholder="Links, one per line"/>
                <FormMessage message=message/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Proposal" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn CivicForumsPage() -> impl IntoView {
    view! {
        <ComingSoon
            title="Civic Forums"
            icon="💬"
            blurb="Engage in discussions about civic issues and governance."
        />
    }
}
