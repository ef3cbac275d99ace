use super::*;
use crate::net::types::ApplicationStatus;

fn job(id: &str, title: &str, job_type: &str) -> Job {
    Job { job_id: id.to_owned(), title: title.to_owned(), job_type: job_type.to_owned(), ..Job::default() }
}

fn jobs() -> Vec<Job> {
    vec![
        job("J1", "Solar Technician", "full_time"),
        job("J2", "Data Analyst", "internship"),
        Job {
            skills_required: vec!["Rust".to_owned()],
            ..job("J3", "Backend Engineer", "full_time")
        },
    ]
}

fn ids(items: &[Job]) -> Vec<&str> {
    items.iter().map(|j| j.job_id.as_str()).collect()
}

#[test]
fn empty_filter_keeps_everything() {
    let items = jobs();
    let filter = ListFilter::default();
    assert!(filter.is_empty());
    assert_eq!(apply_filter(&items, &filter), items);
}

#[test]
fn query_is_case_insensitive_substring() {
    let filter = ListFilter { query: "SOLAR".to_owned(), ..ListFilter::default() };
    assert_eq!(ids(&apply_filter(&jobs(), &filter)), vec!["J1"]);
}

#[test]
fn query_searches_list_fields() {
    let filter = ListFilter { query: "rust".to_owned(), ..ListFilter::default() };
    assert_eq!(ids(&apply_filter(&jobs(), &filter)), vec!["J3"]);
}

#[test]
fn whitespace_query_is_ignored() {
    let filter = ListFilter { query: "   ".to_owned(), ..ListFilter::default() };
    assert_eq!(apply_filter(&jobs(), &filter).len(), 3);
}

#[test]
fn category_must_match_exactly() {
    let filter = ListFilter { category: "full_time".to_owned(), ..ListFilter::default() };
    assert_eq!(ids(&apply_filter(&jobs(), &filter)), vec!["J1", "J3"]);
}

#[test]
fn query_and_category_combine() {
    let filter = ListFilter { query: "engineer".to_owned(), category: "internship".to_owned() };
    assert!(apply_filter(&jobs(), &filter).is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let filter = ListFilter { query: "a".to_owned(), category: "full_time".to_owned() };
    let once = apply_filter(&jobs(), &filter);
    let twice = apply_filter(&once, &filter);
    assert_eq!(once, twice);
}

#[test]
fn filtering_does_not_touch_input() {
    let items = jobs();
    let before = items.clone();
    let filter = ListFilter { query: "data".to_owned(), ..ListFilter::default() };
    let _ = apply_filter(&items, &filter);
    assert_eq!(items, before);
}

#[test]
fn projects_filter_by_category() {
    let items = vec![
        Project { project_id: "P1".to_owned(), category: "agriculture".to_owned(), ..Project::default() },
        Project { project_id: "P2".to_owned(), category: "technology".to_owned(), ..Project::default() },
    ];
    let filter = ListFilter { category: "technology".to_owned(), ..ListFilter::default() };
    let kept = apply_filter(&items, &filter);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].project_id, "P2");
}

#[test]
fn policies_search_target_location() {
    let items = vec![Policy { policy_id: "X".to_owned(), target_location: "Lagos".to_owned(), ..Policy::default() }];
    let filter = ListFilter { query: "lagos".to_owned(), ..ListFilter::default() };
    assert_eq!(apply_filter(&items, &filter).len(), 1);
}

#[test]
fn members_search_skills_and_interests() {
    let member = Member {
        user_id: "u".to_owned(),
        skills: vec!["Design".to_owned()],
        interests: vec!["Farming".to_owned()],
        ..Member::default()
    };
    for query in ["design", "farm"] {
        let filter = ListFilter { query: query.to_owned(), ..ListFilter::default() };
        assert_eq!(apply_filter(std::slice::from_ref(&member), &filter).len(), 1);
    }
}

#[test]
fn applications_filter_by_status() {
    let items = vec![
        Application { application_id: "A1".to_owned(), status: ApplicationStatus::Pending, ..Application::default() },
        Application { application_id: "A2".to_owned(), status: ApplicationStatus::Accepted, ..Application::default() },
    ];
    let filter = ListFilter { category: "accepted".to_owned(), ..ListFilter::default() };
    let kept = apply_filter(&items, &filter);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].application_id, "A2");
}

#[test]
fn courses_search_instructor() {
    let items = vec![Course { course_id: "C1".to_owned(), instructor_name: "Amina".to_owned(), ..Course::default() }];
    let filter = ListFilter { query: "amina".to_owned(), ..ListFilter::default() };
    assert_eq!(apply_filter(&items, &filter).len(), 1);
}

#[test]
fn category_alone_makes_filter_active() {
    assert!(ListFilter { query: "   ".to_owned(), ..ListFilter::default() }.is_empty());
    assert!(!ListFilter { category: "internship".to_owned(), ..ListFilter::default() }.is_empty());
}
