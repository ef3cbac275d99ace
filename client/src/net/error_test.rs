use super::*;

#[test]
fn detail_message_reads_string_detail() {
    assert_eq!(
        detail_message(r#"{"detail":"Email already registered"}"#),
        Some("Email already registered".to_owned())
    );
}

#[test]
fn detail_message_joins_validation_list() {
    let body = r#"{"detail":[{"loc":["body","age"],"msg":"value is not a valid integer"},{"msg":"field required"}]}"#;
    assert_eq!(
        detail_message(body),
        Some("value is not a valid integer; field required".to_owned())
    );
}

#[test]
fn detail_message_ignores_non_json_and_blank() {
    assert_eq!(detail_message("Internal Server Error"), None);
    assert_eq!(detail_message(r#"{"detail":"   "}"#), None);
    assert_eq!(detail_message(r#"{"error":"x"}"#), None);
}

#[test]
fn from_response_prefers_server_detail() {
    let err = ApiError::from_response(401, r#"{"detail":"Incorrect email or password"}"#);
    assert_eq!(err.to_string(), "Incorrect email or password");
    assert!(err.is_unauthorized());
}

#[test]
fn from_response_falls_back_to_status() {
    let err = ApiError::from_response(500, "oops");
    assert_eq!(err.to_string(), "request failed: 500");
    assert_eq!(err.status(), Some(500));
    assert!(!err.is_unauthorized());
}

#[test]
fn network_error_displays_generic_message() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    assert_eq!(err.status(), None);
}

#[test]
fn forbidden_is_not_treated_as_expired_session() {
    let err = ApiError::from_response(403, r#"{"detail":"You can only message connected users"}"#);
    assert!(!err.is_unauthorized());
}
