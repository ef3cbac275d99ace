//! Client-side search and category filtering for list views.
//!
//! Filters never mutate the list; they only decide what is shown.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::{Application, Course, Job, Member, Policy, Project};

/// Search box text plus the selected category (empty = all).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub query: String,
    pub category: String,
}

impl ListFilter {
    /// Nothing typed and no category picked.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.category.is_empty()
    }

    /// Whether `item` passes both the text search and the category.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.matches_category(item) && self.matches_query(item)
    }

    fn matches_category<T: Filterable>(&self, item: &T) -> bool {
        self.category.is_empty() || item.category() == self.category
    }

    fn matches_query<T: Filterable>(&self, item: &T) -> bool {
        let needle = self.query.trim().to_lowercase();
        needle.is_empty() || item.search_text().iter().any(|field| field.to_lowercase().contains(&needle))
    }
}

/// A record that can be searched and grouped.
pub trait Filterable {
    /// Free-text fields the search box looks at.
    fn search_text(&self) -> Vec<&str>;
    /// Value compared against [`ListFilter::category`].
    fn category(&self) -> &str;
}

/// Items passing `filter`, in their original order.
pub fn apply_filter<T: Filterable + Clone>(items: &[T], filter: &ListFilter) -> Vec<T> {
    items.iter().filter(|item| filter.matches(*item)).cloned().collect()
}

impl Filterable for Job {
    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.title.as_str(), self.description.as_str(), self.organization_name.as_str()];
        text.extend(self.skills_required.iter().map(String::as_str));
        text
    }

    fn category(&self) -> &str {
        &self.job_type
    }
}

impl Filterable for Project {
    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.location.as_str()]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Filterable for Policy {
    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.target_location.as_str()]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Filterable for Course {
    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.title.as_str(), self.description.as_str(), self.instructor_name.as_str()];
        text.extend(self.skills_gained.iter().map(String::as_str));
        text
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Filterable for Member {
    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.full_name.as_str(), self.bio.as_str(), self.country.as_str()];
        text.extend(self.skills.iter().map(String::as_str));
        text.extend(self.interests.iter().map(String::as_str));
        text
    }

    fn category(&self) -> &str {
        &self.country
    }
}

impl Filterable for Application {
    fn search_text(&self) -> Vec<&str> {
        vec![self.job_title.as_str(), self.applicant_name.as_str(), self.organization_name.as_str()]
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }
}
