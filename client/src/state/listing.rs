//! Generic list store shared by every feature list-view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one `RwSignal<Listing<T>>`. The async glue in
//! `util::listing` drives the transitions; components only read.
//!
//! DESIGN
//! ======
//! Fetches and actions hand out tickets. A fetch result is applied only for
//! the newest fetch ticket, and each item can have at most one action in
//! flight. Optimistic patches keep a snapshot of the pre-patch record so a
//! failed action can put it back.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::{HashMap, HashSet};

use crate::net::types::{
    Application, Connection, Contribution, Course, Job, Member, Message, Organization, PendingRequest, Policy,
    Project,
};
use crate::state::filter::{Filterable, ListFilter, apply_filter};

/// Records addressable by a stable server id.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Proof of which fetch a result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

/// Handle for one in-flight item action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionTicket {
    id: String,
}

impl ActionTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Items plus loading/error flags and in-flight action bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    fetch_seq: u64,
    pending: HashSet<String>,
    snapshots: HashMap<String, T>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            fetch_seq: 0,
            pending: HashSet::new(),
            snapshots: HashMap::new(),
        }
    }
}

impl<T: Keyed + Clone> Listing<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Start a fetch. Any earlier fetch still in flight becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_seq += 1;
        self.loading = true;
        self.error = None;
        FetchTicket { seq: self.fetch_seq }
    }

    /// Apply a fetch result. Returns `false` for a stale ticket.
    ///
    /// On success the list is replaced wholesale, except items with an
    /// action still in flight keep their optimistic copy. On failure the
    /// previous items stay visible beside the error.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<T>, String>) -> bool {
        if ticket.seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(fresh) => {
                let optimistic: HashMap<String, T> = self
                    .items
                    .iter()
                    .filter(|item| self.pending.contains(item.key()))
                    .map(|item| (item.key().to_owned(), item.clone()))
                    .collect();
                self.items = fresh
                    .into_iter()
                    .map(|item| optimistic.get(item.key()).cloned().unwrap_or(item))
                    .collect();
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Reserve `id` for an action. `None` while another action on the same
    /// item is still in flight.
    pub fn begin_action(&mut self, id: &str) -> Option<ActionTicket> {
        if !self.pending.insert(id.to_owned()) {
            return None;
        }
        self.error = None;
        Some(ActionTicket { id: id.to_owned() })
    }

    /// Optimistically mutate the item for an in-flight action. The first
    /// patch per action snapshots the original.
    pub fn patch(&mut self, ticket: &ActionTicket, f: impl FnOnce(&mut T)) {
        let Some(item) = self.items.iter_mut().find(|item| item.key() == ticket.id) else {
            return;
        };
        self.snapshots.entry(ticket.id.clone()).or_insert_with(|| item.clone());
        f(item);
    }

    /// Action succeeded. A canonical record from the server replaces the
    /// optimistic one; otherwise the patch stands.
    pub fn reconcile(&mut self, ticket: ActionTicket, canonical: Option<T>) {
        self.pending.remove(&ticket.id);
        self.snapshots.remove(&ticket.id);
        if let Some(record) = canonical {
            if let Some(item) = self.items.iter_mut().find(|item| item.key() == ticket.id) {
                *item = record;
            }
        }
    }

    /// Action failed. Restores the pre-patch snapshot and records `message`.
    pub fn rollback(&mut self, ticket: ActionTicket, message: String) {
        self.pending.remove(&ticket.id);
        if let Some(original) = self.snapshots.remove(&ticket.id) {
            if let Some(item) = self.items.iter_mut().find(|item| item.key() == ticket.id) {
                *item = original;
            }
        }
        self.error = Some(message);
    }

    /// Drop an item locally (after a successful delete).
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.key() != id);
        self.snapshots.remove(id);
    }

    /// Append a record created locally (e.g. a sent message).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

}

impl<T: Keyed + Filterable + Clone> Listing<T> {
    /// Items passing `filter`, in server order.
    pub fn visible(&self, filter: &ListFilter) -> Vec<T> {
        apply_filter(&self.items, filter)
    }
}

impl Keyed for Member {
    fn key(&self) -> &str {
        &self.user_id
    }
}

impl Keyed for PendingRequest {
    fn key(&self) -> &str {
        &self.connection_id
    }
}

impl Keyed for Connection {
    fn key(&self) -> &str {
        &self.connection_id
    }
}

impl Keyed for Message {
    fn key(&self) -> &str {
        &self.message_id
    }
}

impl Keyed for Job {
    fn key(&self) -> &str {
        &self.job_id
    }
}

impl Keyed for Application {
    fn key(&self) -> &str {
        &self.application_id
    }
}

impl Keyed for Organization {
    fn key(&self) -> &str {
        &self.organization_id
    }
}

impl Keyed for Project {
    fn key(&self) -> &str {
        &self.project_id
    }
}

impl Keyed for Contribution {
    fn key(&self) -> &str {
        &self.contribution_id
    }
}

impl Keyed for Policy {
    fn key(&self) -> &str {
        &self.policy_id
    }
}

impl Keyed for Course {
    fn key(&self) -> &str {
        &self.course_id
    }
}
