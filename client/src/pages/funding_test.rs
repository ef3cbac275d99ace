use super::*;

fn project_form() -> ProjectForm {
    ProjectForm {
        title: "Solar Classrooms".to_owned(),
        description: "Solar panels for rural schools".to_owned(),
        category: "education".to_owned(),
        funding_goal: "$5,000".to_owned(),
        duration_months: "6".to_owned(),
        location: "Kisumu, Kenya".to_owned(),
        impact_description: "Evening study for 400 pupils".to_owned(),
        milestones: "Survey\nInstall\nTrain".to_owned(),
        ..ProjectForm::default()
    }
}

#[test]
fn contribution_request_parses_amount() {
    let req = contribution_request("p1", "$1,250", true, "  Go team ").unwrap();
    assert_eq!(req.project_id, "p1");
    assert!((req.amount - 1250.0).abs() < f64::EPSILON);
    assert!(req.anonymous);
    assert_eq!(req.message, "Go team");
}

#[test]
fn contribution_request_rejects_zero_and_text() {
    assert!(contribution_request("p1", "0", false, "").is_err());
    assert!(contribution_request("p1", "lots", false, "").is_err());
    assert!(contribution_request("p1", "-5", false, "").is_err());
}

#[test]
fn project_form_builds_request() {
    let project = project_form().validate().unwrap();
    assert!((project.funding_goal - 5000.0).abs() < f64::EPSILON);
    assert_eq!(project.funding_goal_type, "fixed");
    assert_eq!(project.duration_months, 6);
    assert_eq!(project.milestones, vec!["Survey", "Install", "Train"]);
    assert!(project.images.is_empty());
}

#[test]
fn project_form_keeps_chosen_goal_type() {
    let form = ProjectForm { funding_goal_type: "flexible".to_owned(), ..project_form() };
    assert_eq!(form.validate().unwrap().funding_goal_type, "flexible");
}

#[test]
fn project_form_bounds_duration() {
    let form = ProjectForm { duration_months: "0".to_owned(), ..project_form() };
    assert_eq!(form.validate().unwrap_err(), "Duration must be between 1 and 120.");
}

#[test]
fn project_form_requires_category() {
    let form = ProjectForm { category: String::new(), ..project_form() };
    assert_eq!(form.validate().unwrap_err(), "Category is required.");
}

#[test]
fn funding_summary_groups_thousands() {
    let project = Project { current_funding: 1250.0, funding_goal: 1_000_000.0, ..Project::default() };
    assert_eq!(funding_summary(&project), "$1,250 raised of $1,000,000");
}

#[test]
fn group_thousands_handles_small_and_negative() {
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(999.4), "999");
    assert_eq!(group_thousands(-20.0), "0");
    assert_eq!(group_thousands(123_456.0), "123,456");
}

#[test]
fn confirmed_contribution_keeps_server_totals() {
    let server = Project {
        project_id: "p1".to_owned(),
        current_funding: 1_300.0,
        backers_count: 9,
        ..Project::default()
    };
    let merged = confirmed_contribution(server);
    assert!(merged.has_contributed);
    assert!((merged.current_funding - 1_300.0).abs() < f64::EPSILON);
    assert_eq!(merged.backers_count, 9);
}
