use super::*;

#[test]
fn from_response_reads_token_endpoint_shape() {
    let err = AuthError::from_response(
        400,
        r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
    );
    assert_eq!(
        err,
        AuthError::Api {
            status: 400,
            code: Some("invalid_grant".to_owned()),
            message: "Invalid login credentials".to_owned(),
        }
    );
}

#[test]
fn from_response_prefers_msg_over_other_keys() {
    let err = AuthError::from_response(
        422,
        r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered","message":"ignored"}"#,
    );
    assert_eq!(err.to_string(), "User already registered");
    assert!(matches!(err, AuthError::Api { code: Some(ref c), .. } if c == "user_already_exists"));
}

#[test]
fn from_response_uses_message_key() {
    let err = AuthError::from_response(500, r#"{"message":"upstream down"}"#);
    assert_eq!(err.to_string(), "upstream down");
}

#[test]
fn from_response_falls_back_to_plain_body() {
    let err = AuthError::from_response(502, "Bad Gateway");
    assert_eq!(err.to_string(), "Bad Gateway");
}

#[test]
fn from_response_falls_back_to_status_for_empty_or_unknown_json() {
    assert_eq!(AuthError::from_response(503, "").to_string(), "HTTP 503");
    assert_eq!(AuthError::from_response(404, r#"{"detail":1}"#).to_string(), "HTTP 404");
}

#[test]
fn not_configured_displays_connect_message() {
    assert_eq!(AuthError::NotConfigured.to_string(), NOT_CONFIGURED_MESSAGE);
}

#[test]
fn unexpected_covers_transport_failures_only() {
    assert!(AuthError::Network("offline".into()).is_unexpected());
    assert!(AuthError::Decode("eof".into()).is_unexpected());
    assert!(!AuthError::NotConfigured.is_unexpected());
    assert!(!AuthError::from_response(400, "{}").is_unexpected());
}

#[test]
fn status_only_for_api_errors() {
    assert_eq!(AuthError::from_response(401, "{}").status(), Some(401));
    assert_eq!(AuthError::NotConfigured.status(), None);
}
