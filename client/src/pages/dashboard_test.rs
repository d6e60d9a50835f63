use super::*;
use time::macros::{datetime, offset};

fn user() -> User {
    User {
        id: "5b1c7a0e-0000-4000-8000-000000000001".to_owned(),
        email: Some("ana@example.com".to_owned()),
        role: Some("authenticated".to_owned()),
        last_sign_in_at: Some(datetime!(2024-03-10 15:45:30 UTC)),
        created_at: None,
        email_confirmed_at: None,
    }
}

#[test]
fn user_rows_show_email_id_and_last_login() {
    let rows = user_rows(&user(), offset!(-3));
    assert_eq!(rows[0], ("Email:", "ana@example.com".to_owned()));
    assert_eq!(rows[1], ("ID:", "5b1c7a0e-0000-4000-8000-000000000001".to_owned()));
    assert_eq!(rows[2], ("Último login:", "10/03/2024, 12:45:30".to_owned()));
}

#[test]
fn user_rows_first_access_without_last_login() {
    let mut user = user();
    user.last_sign_in_at = None;
    assert_eq!(user_rows(&user, UtcOffset::UTC)[2].1, "Primeiro acesso");
}

#[test]
fn user_rows_placeholder_without_email() {
    let mut user = user();
    user.email = None;
    assert_eq!(user_rows(&user, UtcOffset::UTC)[0].1, "—");
}

#[test]
fn feature_cards_are_profile_security_activity() {
    let titles: Vec<&str> = FEATURE_CARDS.iter().map(|(title, _, _)| *title).collect();
    assert_eq!(titles, vec!["Perfil", "Segurança", "Atividades"]);
}
