use super::*;

#[test]
fn translate_invalid_credentials() {
    assert_eq!(translate("Invalid login credentials"), INVALID_CREDENTIALS);
}

#[test]
fn translate_matches_substrings() {
    assert_eq!(translate("AuthApiError: User already registered"), ALREADY_REGISTERED);
    assert_eq!(translate("Password should be at least 6 characters."), WEAK_PASSWORD);
}

#[test]
fn translate_passes_unknown_messages_through() {
    assert_eq!(translate("Email rate limit exceeded"), "Email rate limit exceeded");
    assert_eq!(translate(""), "");
}

#[test]
fn error_message_translates_api_errors() {
    let err = AuthError::from_response(
        400,
        r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
    );
    assert_eq!(error_message(&err), "Email ou senha incorretos");
}

#[test]
fn error_message_for_missing_configuration() {
    assert_eq!(error_message(&AuthError::NotConfigured), CONNECT_FIRST);
}

#[test]
fn error_message_hides_transport_details() {
    assert_eq!(error_message(&AuthError::Network("TypeError: Failed to fetch".into())), UNEXPECTED_ERROR);
    assert_eq!(error_message(&AuthError::Decode("expected value".into())), UNEXPECTED_ERROR);
}
