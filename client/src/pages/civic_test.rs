use super::*;

#[test]
fn vote_request_carries_choice() {
    let vote = vote_request("p9", VoteType::Oppose);
    assert_eq!(vote.policy_id, "p9");
    assert_eq!(vote.vote_type, VoteType::Oppose);
    assert_eq!(vote.comment, "");
}

#[test]
fn feedback_requires_content() {
    assert_eq!(feedback_request("p1", "concern", "   ", "", "").unwrap_err(), "Feedback is required.");
}

#[test]
fn feedback_defaults_type_and_trims() {
    let fb = feedback_request("p1", "", " More clinics ", " big ", "").unwrap();
    assert_eq!(fb.feedback_type, "suggestion");
    assert_eq!(fb.content, "More clinics");
    assert_eq!(fb.impact_assessment, "big");
    assert_eq!(fb.alternative_suggestion, "");
}

#[test]
fn tally_reads_counts() {
    let policy = Policy { support_count: 12, oppose_count: 3, feedback_count: 4, ..Policy::default() };
    assert_eq!(tally(&policy), "12 support • 3 oppose • 4 comments");
}

#[test]
fn policy_form_builds_request() {
    let form = PolicyForm {
        title: "Youth Digital Skills Fund".to_owned(),
        description: "Fund coding clubs".to_owned(),
        category: "education".to_owned(),
        proposal_type: "new_policy".to_owned(),
        target_location: "Ghana".to_owned(),
        expected_impact: "10k trained youth".to_owned(),
        supporting_documents: "https://a.org/brief.pdf\nhttps://b.org/data.csv".to_owned(),
        ..PolicyForm::default()
    };
    let policy = form.validate().unwrap();
    assert_eq!(policy.supporting_documents.len(), 2);
    assert_eq!(policy.implementation_timeline, "");
}

#[test]
fn policy_form_requires_proposal_type() {
    let form = PolicyForm {
        title: "T".to_owned(),
        description: "D".to_owned(),
        category: "health".to_owned(),
        ..PolicyForm::default()
    };
    assert_eq!(form.validate().unwrap_err(), "Proposal type is required.");
}
