use super::*;
use gotrue::messages::{INVALID_CREDENTIALS, SIGN_OUT_ERROR};

#[test]
fn sign_up_confirmation_uses_success_tone() {
    assert_eq!(notice_tone(SIGN_UP_SUCCESS), "notice--success");
}

#[test]
fn everything_else_uses_error_tone() {
    assert_eq!(notice_tone(INVALID_CREDENTIALS), "notice--error");
    assert_eq!(notice_tone(SIGN_OUT_ERROR), "notice--error");
    assert_eq!(notice_tone("raw provider text"), "notice--error");
}
