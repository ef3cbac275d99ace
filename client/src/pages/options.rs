//! Fixed choice lists for selects and category filters.
//!
//! Values are the lowercase strings the backend stores; an empty value in a
//! filter list means "all".

use crate::components::filter_bar::CategoryOption;

pub const COUNTRIES: &[CategoryOption] = &[
    ("Nigeria", "Nigeria"),
    ("Kenya", "Kenya"),
    ("Ghana", "Ghana"),
    ("South Africa", "South Africa"),
    ("Ethiopia", "Ethiopia"),
    ("Egypt", "Egypt"),
    ("Morocco", "Morocco"),
    ("Uganda", "Uganda"),
    ("Tanzania", "Tanzania"),
    ("Algeria", "Algeria"),
    ("Other", "Other"),
];

pub const JOB_TYPES: &[CategoryOption] = &[
    ("", "All types"),
    ("full_time", "Full time"),
    ("part_time", "Part time"),
    ("contract", "Contract"),
    ("internship", "Internship"),
    ("volunteer", "Volunteer"),
];

pub const LOCATION_TYPES: &[CategoryOption] =
    &[("remote", "Remote"), ("onsite", "On-site"), ("hybrid", "Hybrid")];

pub const ORGANIZATION_TYPES: &[CategoryOption] = &[
    ("startup", "Startup"),
    ("ngo", "NGO"),
    ("company", "Company"),
    ("government", "Government"),
    ("educational", "Educational"),
];

pub const PROJECT_CATEGORIES: &[CategoryOption] = &[
    ("", "All categories"),
    ("education", "Education"),
    ("technology", "Technology"),
    ("agriculture", "Agriculture"),
    ("health", "Health"),
    ("environment", "Environment"),
    ("community", "Community"),
];

pub const POLICY_CATEGORIES: &[CategoryOption] = &[
    ("", "All categories"),
    ("education", "Education"),
    ("employment", "Employment"),
    ("health", "Health"),
    ("governance", "Governance"),
    ("environment", "Environment"),
    ("technology", "Technology"),
];

pub const PROPOSAL_TYPES: &[CategoryOption] = &[
    ("youth_initiative", "Youth initiative"),
    ("policy_reform", "Policy reform"),
    ("new_policy", "New policy"),
];

pub const FEEDBACK_TYPES: &[CategoryOption] =
    &[("suggestion", "Suggestion"), ("concern", "Concern"), ("support", "Support")];

pub const COURSE_CATEGORIES: &[CategoryOption] = &[
    ("", "All categories"),
    ("technology", "Technology"),
    ("business", "Business"),
    ("agriculture", "Agriculture"),
    ("health", "Health"),
    ("arts", "Arts"),
    ("leadership", "Leadership"),
];

pub const COURSE_LEVELS: &[CategoryOption] =
    &[("beginner", "Beginner"), ("intermediate", "Intermediate"), ("advanced", "Advanced")];

pub const APPLICATION_STATUSES: &[CategoryOption] = &[
    ("", "All statuses"),
    ("pending", "Pending"),
    ("reviewed", "Reviewed"),
    ("shortlisted", "Shortlisted"),
    ("accepted", "Accepted"),
    ("rejected", "Rejected"),
];

/// Select options without the leading "all" entry.
pub fn choices(options: &'static [CategoryOption]) -> &'static [CategoryOption] {
    match options.first() {
        Some(("", _)) => &options[1..],
        _ => options,
    }
}

/// Display label for a stored value, falling back to the raw value.
pub fn label_for(options: &'static [CategoryOption], value: &str) -> String {
    options
        .iter()
        .find(|(v, _)| !v.is_empty() && *v == value)
        .map_or_else(|| value.to_owned(), |(_, label)| (*label).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_drop_all_entry() {
        assert_eq!(choices(JOB_TYPES)[0].0, "full_time");
        assert_eq!(choices(LOCATION_TYPES).len(), LOCATION_TYPES.len());
    }

    #[test]
    fn label_for_known_and_unknown() {
        assert_eq!(label_for(JOB_TYPES, "full_time"), "Full time");
        assert_eq!(label_for(JOB_TYPES, "gig"), "gig");
        assert_eq!(label_for(JOB_TYPES, ""), "");
    }

    #[test]
    fn kenya_is_a_country_choice() {
        assert!(COUNTRIES.iter().any(|(value, _)| *value == "Kenya"));
    }
}
