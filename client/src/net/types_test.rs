use super::*;

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_decodes_sparse_document() {
    let raw = r#"{"user_id":"u1","email":"a@b.com","full_name":"A B","country":"Kenya","age":22}"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.country, "Kenya");
    assert_eq!(profile.age, 22);
    assert!(profile.skills.is_empty());
    assert_eq!(profile.bio, "");
}

#[test]
fn profile_initial_uppercases_first_letter() {
    let profile = Profile { full_name: "amara okafor".to_owned(), ..Profile::default() };
    assert_eq!(profile.initial(), 'A');
}

#[test]
fn profile_initial_falls_back_when_name_missing() {
    assert_eq!(Profile::default().initial(), 'U');
}

#[test]
fn profile_update_carries_editable_fields_only() {
    let profile = Profile {
        user_id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "A B".to_owned(),
        country: "Ghana".to_owned(),
        age: 30,
        skills: vec!["rust".to_owned()],
        ..Profile::default()
    };
    let body = serde_json::to_value(ProfileUpdate::from(&profile)).unwrap();
    assert_eq!(body["full_name"], "A B");
    assert_eq!(body["skills"], serde_json::json!(["rust"]));
    assert!(body.get("user_id").is_none());
    assert!(body.get("email").is_none());
}

#[test]
fn token_response_tolerates_missing_token_type() {
    let token: TokenResponse = serde_json::from_str(r#"{"access_token":"t-1"}"#).unwrap();
    assert_eq!(token.access_token, "t-1");
    assert_eq!(token.token_type, "");
}

// =============================================================
// Funding progress
// =============================================================

fn project(goal: f64, current: f64) -> Project {
    Project { funding_goal: goal, current_funding: current, ..Project::default() }
}

#[test]
fn progress_percent_is_ratio_of_goal() {
    assert!((project(5000.0, 1250.0).progress_percent() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn progress_percent_clamps_overfunded_projects() {
    assert!((project(100.0, 250.0).progress_percent() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn progress_percent_clamps_negative_funding() {
    assert!(project(100.0, -20.0).progress_percent().abs() < f64::EPSILON);
}

#[test]
fn progress_percent_zero_goal_reports_zero() {
    assert!(project(0.0, 50.0).progress_percent().abs() < f64::EPSILON);
    assert!(project(-10.0, 50.0).progress_percent().abs() < f64::EPSILON);
}

#[test]
fn progress_percent_stays_in_range_for_many_inputs() {
    for goal in [0.5, 1.0, 10.0, 1e9] {
        for current in [-1e9, -1.0, 0.0, 0.25, 1.0, 1e12, f64::INFINITY] {
            let pct = project(goal, current).progress_percent();
            assert!((0.0..=100.0).contains(&pct), "goal={goal} current={current} pct={pct}");
        }
    }
}

#[test]
fn record_contribution_updates_totals() {
    let mut p = project(1000.0, 100.0);
    p.record_contribution(50.0);
    assert!((p.current_funding - 150.0).abs() < f64::EPSILON);
    assert_eq!(p.backers_count, 1);
    assert!(p.has_contributed);
}

// =============================================================
// Civic
// =============================================================

#[test]
fn record_vote_increments_matching_counter() {
    let mut policy = Policy::default();
    policy.record_vote(VoteType::Support);
    policy.record_vote(VoteType::Oppose);
    policy.record_vote(VoteType::Support);
    assert_eq!(policy.support_count, 2);
    assert_eq!(policy.oppose_count, 1);
    assert!(policy.has_participated);
}

#[test]
fn vote_type_serializes_lowercase() {
    let vote = PolicyVote { policy_id: "p1".to_owned(), vote_type: VoteType::Oppose, comment: String::new() };
    let body = serde_json::to_value(vote).unwrap();
    assert_eq!(body["vote_type"], "oppose");
}

// =============================================================
// Applications
// =============================================================

#[test]
fn application_status_keeps_unknown_values_verbatim() {
    let app: Application = serde_json::from_str(r#"{"application_id":"a1","status":"archived"}"#).unwrap();
    assert_eq!(app.status, ApplicationStatus::Other("archived".to_owned()));
    assert_eq!(app.status.as_str(), "archived");
    assert!(!app.status.is_reviewable());

    let body = serde_json::to_value(ApplicationStatusUpdate { status: app.status }).unwrap();
    assert_eq!(body["status"], "archived");
}

#[test]
fn application_status_serializes_known_values_lowercase() {
    let body = serde_json::to_value(ApplicationStatusUpdate { status: ApplicationStatus::Shortlisted }).unwrap();
    assert_eq!(body["status"], "shortlisted");
}

#[test]
fn application_status_defaults_to_pending() {
    let app: Application = serde_json::from_str(r#"{"application_id":"a1"}"#).unwrap();
    assert_eq!(app.status, ApplicationStatus::Pending);
}

#[test]
fn application_status_parse_matches_as_str() {
    for status in ApplicationStatus::REVIEWABLE {
        assert_eq!(ApplicationStatus::parse(status.as_str()), status);
    }
    assert_eq!(ApplicationStatus::parse("nope"), ApplicationStatus::Other("nope".to_owned()));
}

// =============================================================
// Client-only flags
// =============================================================

#[test]
fn member_connection_flag_is_not_sent() {
    let member = Member { user_id: "u2".to_owned(), connection_requested: true, ..Member::default() };
    let body = serde_json::to_value(member).unwrap();
    assert!(body.get("connection_requested").is_none());
}

#[test]
fn course_is_free_when_price_zero() {
    let course = Course { price: 0.0, ..Course::default() };
    assert!(course.is_free());
    let paid = Course { price: 15.0, ..Course::default() };
    assert!(!paid.is_free());
}
