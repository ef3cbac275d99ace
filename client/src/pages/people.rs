//! People views: member discovery, connections and direct messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Discover narrows the member list server-side (country, skill) and then
//! client-side (free text). Connections lists incoming requests and accepted
//! peers. Messages shows the thread with the peer chosen from Connections.

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

use leptos::prelude::*;

use crate::components::field::{FormMessage, SelectField, TextArea, TextField};
use crate::components::filter_bar::FilterBar;
use crate::components::list_status::ListStatus;
use crate::net::api;
use crate::net::types::{ConnectRequest, Connection, Member, Message, NewMessage, PendingRequest};
use crate::pages::form::{join_list, required};
use crate::pages::options::COUNTRIES;
use crate::state::filter::ListFilter;
use crate::state::listing::Listing;
use crate::state::session::SessionState;
use crate::state::view::{UiState, View};
use crate::util::listing::{load_listing, load_pair, run_item_action, submit};

/// Default note attached to a connection request.
pub const CONNECT_NOTE: &str = "Hi! I'd like to connect with you on AfriCore.";

/// One-line summary of a chat peer: country, then bio when present.
pub fn peer_headline(member: &Member) -> String {
    let bio = member.bio.trim();
    match (member.country.trim(), bio) {
        ("", bio) => bio.to_owned(),
        (country, "") => country.to_owned(),
        (country, bio) => format!("{country} • {bio}"),
    }
}

/// Label for a member card's connect button.
pub fn connect_label(member: &Member, pending: bool) -> &'static str {
    if pending {
        "Sending..."
    } else if member.connection_requested {
        "Request Sent"
    } else {
        "Connect"
    }
}

/// Placeholder record shown in the thread until the server copy arrives.
pub fn local_message(sender_id: &str, recipient_id: &str, content: &str) -> Message {
    Message {
        message_id: format!("local-{}", uuid::Uuid::new_v4()),
        sender_id: sender_id.to_owned(),
        recipient_id: recipient_id.to_owned(),
        content: content.to_owned(),
        created_at: String::new(),
        read: false,
    }
}

/// Whether `message` was sent by `me`, for left/right alignment.
pub fn is_outgoing(message: &Message, me: &str) -> bool {
    message.sender_id == me
}

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let members = RwSignal::new(Listing::<Member>::default());
    let filter = RwSignal::new(ListFilter::default());
    let country = RwSignal::new(String::new());
    let skill = RwSignal::new(String::new());
    let applied = RwSignal::new((String::new(), String::new()));

    Effect::new(move || {
        let (country, skill) = applied.get();
        load_listing(session, members, move |token| async move {
            api::fetch_members(&token, &country, &skill).await
        });
    });

    let visible = move || filter.with(|f| members.with(|l| l.visible(f)));

    let connect = move |user_id: String| {
        let target = user_id.clone();
        run_item_action(
            session,
            members,
            &user_id,
            |m| m.connection_requested = true,
            move |token| async move {
                let req = ConnectRequest { target_user_id: target, message: CONNECT_NOTE.to_owned() };
                api::send_connection_request(&token, &req).await
            },
            |_| {},
        );
    };

    view! {
        <div class="panel discover">
            <h2>"Discover African Youth"</h2>
            <p>"Connect with young people across Africa. Build your network and collaborate on projects."</p>
            <div class="discover__server-filters">
                <SelectField label="Country" value=country options=COUNTRIES blank="Any country"/>
                <TextField label="Skill" value=skill placeholder="e.g. Python"/>
                <button class="btn" on:click=move |_| applied.set((country.get_untracked(), skill.get_untracked()))>
                    "Apply"
                </button>
            </div>
            <FilterBar filter=filter placeholder="Search by name, bio or skill"/>
            <ListStatus
                loading=Signal::derive(move || members.with(Listing::loading))
                error=Signal::derive(move || members.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || visible().is_empty())
                empty_message="No members match your search yet."
            />
            <div class="card-grid">
                <For each=visible key=|m| (m.user_id.clone(), m.connection_requested) let:member>
                    {
                        let id = member.user_id.clone();
                        let pending_id = id.clone();
                        let pending = Signal::derive(move || members.with(|l| l.is_pending(&pending_id)));
                        let label_member = member.clone();
                        view! {
                            <article class="card member-card">
                                <h3>{member.full_name.clone()}</h3>
                                <p class="card__meta">{format!("{} • {}", member.country, member.age)}</p>
                                <p>{member.bio.clone()}</p>
                                <p class="card__tags">{join_list(&member.skills)}</p>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || pending.get() || member.connection_requested
                                    on:click=move |_| connect(id.clone())
                                >
                                    {move || connect_label(&label_member, pending.get())}
                                </button>
                            </article>
                        }
                    }
                </For>
            </div>
        </div>
    }
}

#[component]
pub fn ConnectionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pending = RwSignal::new(Listing::<PendingRequest>::default());
    let accepted = RwSignal::new(Listing::<Connection>::default());

    let reload = move || {
        load_pair(session, pending, accepted, |token| async move {
            let resp = api::fetch_connections(&token).await?;
            Ok((resp.pending_requests, resp.connections))
        });
    };
    Effect::new(move || reload());

    let accept = move |connection_id: String| {
        let id = connection_id.clone();
        run_item_action(
            session,
            pending,
            &connection_id,
            |r| r.status = "accepted".to_owned(),
            move |token| async move { api::accept_connection(&token, &id).await },
            move |_| reload(),
        );
    };

    view! {
        <div class="panel connections">
            <h2>"My Connections"</h2>
            <section>
                <h3>"Pending Requests"</h3>
                <ListStatus
                    loading=Signal::derive(move || pending.with(Listing::loading))
                    error=Signal::derive(move || pending.with(|l| l.error().map(str::to_owned)))
                    is_empty=Signal::derive(move || pending.with(|l| l.items().is_empty()))
                    empty_message="No pending requests."
                />
                <For each=move || pending.with(|l| l.items().to_vec()) key=|r| (r.connection_id.clone(), r.status.clone()) let:request>
                    {
                        let id = request.connection_id.clone();
                        let busy_id = id.clone();
                        let busy = Signal::derive(move || pending.with(|l| l.is_pending(&busy_id)));
                        let done = request.status == "accepted";
                        view! {
                            <article class="card">
                                <h4>{request.requester_name.clone()}</h4>
                                <p class="card__meta">{request.requester_country.clone()}</p>
                                <p>{request.message.clone()}</p>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get() || done
                                    on:click=move |_| accept(id.clone())
                                >
                                    {if done { "Accepted" } else { "Accept" }}
                                </button>
                            </article>
                        }
                    }
                </For>
            </section>
            <section>
                <h3>"Connected"</h3>
                <ListStatus
                    loading=Signal::derive(move || accepted.with(Listing::loading))
                    error=Signal::derive(move || accepted.with(|l| l.error().map(str::to_owned)))
                    is_empty=Signal::derive(move || accepted.with(|l| l.items().is_empty()))
                    empty_message="Your network will appear here once you start connecting."
                />
                <For each=move || accepted.with(|l| l.items().to_vec()) key=|c| c.connection_id.clone() let:peer>
                    {
                        let user_id = peer.other_user_id.clone();
                        let name = peer.other_user_name.clone();
                        view! {
                            <article class="card">
                                <h4>{peer.other_user_name.clone()}</h4>
                                <p class="card__meta">{peer.other_user_country.clone()}</p>
                                <button
                                    class="btn"
                                    on:click=move |_| ui.update(|u| u.open_conversation(user_id.clone(), name.clone()))
                                >
                                    "Message"
                                </button>
                            </article>
                        }
                    }
                </For>
            </section>
        </div>
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let thread = RwSignal::new(Listing::<Message>::default());
    let draft = RwSignal::new(String::new());
    let message = RwSignal::new(None::<Result<String, String>>);
    let peer_profile = RwSignal::new(None::<Member>);

    let peer = move || ui.with(|u| u.conversation.clone());
    let me = move || session.with(|s| s.user().map(|u| u.user_id.clone()).unwrap_or_default());

    let reload = move || {
        let Some(peer) = ui.with_untracked(|u| u.conversation.clone()) else {
            return;
        };
        load_listing(session, thread, move |token| async move {
            api::fetch_messages(&token, &peer.user_id).await
        });
    };
    let peer_id = Memo::new(move |_| ui.with(|u| u.conversation.as_ref().map(|c| c.user_id.clone())));
    Effect::new(move || {
        let Some(user_id) = peer_id.get() else {
            return;
        };
        reload();
        peer_profile.set(None);
        submit(
            session,
            move |token| async move { api::fetch_user(&token, &user_id).await },
            move |result| match result {
                Ok(member) => {
                    peer_profile.try_set(Some(member));
                }
                Err(e) => leptos::logging::warn!("peer profile fetch failed: {e:?}"),
            },
        );
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(peer) = ui.with_untracked(|u| u.conversation.clone()) else {
            return;
        };
        let content = match required("Message", &draft.get_untracked()) {
            Ok(content) => content,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        let sender = session.with_untracked(|s| s.user().map(|u| u.user_id.clone()).unwrap_or_default());
        let placeholder = local_message(&sender, &peer.user_id, &content);
        let placeholder_id = placeholder.message_id.clone();
        thread.update(|l| l.push(placeholder));
        draft.set(String::new());
        message.set(None);

        let body = NewMessage { recipient_id: peer.user_id, content };
        submit(
            session,
            move |token| async move { api::send_message(&token, &body).await },
            move |result| {
                thread.try_update(|l| l.remove(&placeholder_id));
                match result {
                    Ok(_) => reload(),
                    Err(e) => message.set(Some(Err(e.to_string()))),
                }
            },
        );
    };

    view! {
        <div class="panel messages">
            <Show
                when=move || peer().is_some()
                fallback=move || {
                    view! {
                        <p>"Pick a connection to start a conversation."</p>
                        <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::Connections))>
                            "Go to Connections"
                        </button>
                    }
                }
            >
                <h2>{move || peer().map(|p| format!("Chat with {}", p.name)).unwrap_or_default()}</h2>
                <p class="messages__peer">{move || peer_profile.with(|p| p.as_ref().map(peer_headline).unwrap_or_default())}</p>
                <ListStatus
                    loading=Signal::derive(move || thread.with(Listing::loading))
                    error=Signal::derive(move || thread.with(|l| l.error().map(str::to_owned)))
                    is_empty=Signal::derive(move || thread.with(|l| l.items().is_empty()))
                    empty_message="No messages yet. Say hello!"
                />
                <ul class="messages__thread">
                    <For each=move || thread.with(|l| l.items().to_vec()) key=|m| m.message_id.clone() let:msg>
                        <li class="message" class:message--outgoing=is_outgoing(&msg, &me())>
                            <p>{msg.content.clone()}</p>
                            <span class="message__time">{msg.created_at.clone()}</span>
                        </li>
                    </For>
                </ul>
                <form class="messages__compose" on:submit=on_send>
                    <TextArea label="Message" value=draft placeholder="Write a message..."/>
                    <FormMessage message=message/>
                    <button class="btn btn--primary" type="submit">
                        "Send"
                    </button>
                </form>
            </Show>
        </div>
    }
}
