use super::*;

// =============================================================
// Paths + query
// =============================================================

#[test]
fn item_paths_format_expected_endpoints() {
    assert_eq!(user_path("u2"), "/api/user/u2");
    assert_eq!(connection_accept_path("c1"), "/api/connection/c1/accept");
    assert_eq!(messages_path("u9"), "/api/messages/u9");
    assert_eq!(job_apply_path("J1"), "/api/jobs/J1/apply");
    assert_eq!(application_status_path("a7"), "/api/applications/a7/status");
    assert_eq!(project_path("p3"), "/api/projects/p3");
    assert_eq!(project_contribute_path("p3"), "/api/projects/p3/contribute");
    assert_eq!(policy_vote_path("pol"), "/api/policies/pol/vote");
    assert_eq!(policy_feedback_path("pol"), "/api/policies/pol/feedback");
    assert_eq!(course_enroll_path("c2"), "/api/courses/c2/enroll");
}

#[test]
fn non_empty_query_drops_blank_values_and_trims() {
    let query = non_empty_query(&[("country", "  Kenya "), ("skill", "   ")]);
    assert_eq!(query, vec![("country", "Kenya".to_owned())]);
}

#[test]
fn non_empty_query_keeps_order() {
    let query = non_empty_query(&[("country", "Ghana"), ("skill", "rust")]);
    assert_eq!(query, vec![("country", "Ghana".to_owned()), ("skill", "rust".to_owned())]);
}

// =============================================================
// Headers
// =============================================================

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn idempotency_keys_are_fresh_uuids() {
    let a = new_idempotency_key();
    let b = new_idempotency_key();
    assert_ne!(a, b);
    assert!(uuid::Uuid::parse_str(&a).is_ok());
}

#[test]
fn action_calls_are_idempotent_and_authenticated() {
    let call = Call::action(Method::Post, "/api/connect", "tok");
    assert!(call.idempotent);
    assert_eq!(call.token, Some("tok"));

    let call = Call::get("/api/jobs", "tok");
    assert!(!call.idempotent);

    let call = Call::public_post("/api/login");
    assert_eq!(call.token, None);
    assert!(!call.idempotent);
}

// =============================================================
// decode_body
// =============================================================

#[test]
fn decode_body_parses_success_payload() {
    let token: TokenResponse = decode_body(200, r#"{"access_token":"t","token_type":"bearer"}"#).unwrap();
    assert_eq!(token.access_token, "t");
}

#[test]
fn decode_body_maps_error_status_to_server_error() {
    let err = decode_body::<TokenResponse>(400, r#"{"detail":"Email already registered"}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::Server { status: 400, detail: "Email already registered".to_owned() }
    );
}

#[test]
fn decode_body_reports_shape_mismatch() {
    let err = decode_body::<TokenResponse>(200, r#"{"token":"t"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_body_accepts_empty_acknowledgement() {
    let ack: Ack = decode_body(200, "").unwrap();
    assert_eq!(ack, Ack::default());
}

#[test]
fn decode_body_unwraps_list_envelope() {
    let resp: JobsResponse = decode_body(200, r#"{"jobs":[{"job_id":"J1","title":"Dev"}]}"#).unwrap();
    assert_eq!(resp.jobs.len(), 1);
    assert_eq!(resp.jobs[0].job_id, "J1");
    assert!(!resp.jobs[0].has_applied);
}
