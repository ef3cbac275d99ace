use super::*;

#[test]
fn application_request_trims_and_joins_links() {
    let req = application_request("J1", "  I am keen.  ", "https://a.dev,\nhttps://b.dev, ");
    assert_eq!(req.job_id, "J1");
    assert_eq!(req.cover_letter, "I am keen.");
    assert_eq!(req.portfolio_links, "https://a.dev, https://b.dev");
}

#[test]
fn application_request_allows_empty_fields() {
    let req = application_request("J1", "", "");
    assert_eq!(req.cover_letter, "");
    assert_eq!(req.portfolio_links, "");
}

#[test]
fn status_badges_differ_by_outcome() {
    assert_eq!(status_class(&ApplicationStatus::Accepted), "badge badge--ok");
    assert_eq!(status_class(&ApplicationStatus::Rejected), "badge badge--error");
    assert_eq!(status_class(&ApplicationStatus::Pending), "badge");
    assert_eq!(status_class(&ApplicationStatus::Other("archived".to_owned())), "badge");
}

#[test]
fn default_feed_is_all_jobs() {
    assert_eq!(JobFeed::default(), JobFeed::All);
}
