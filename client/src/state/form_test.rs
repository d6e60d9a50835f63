use super::*;

fn filled() -> LoginFormState {
    LoginFormState {
        email: "ana@example.com".to_owned(),
        password: "segredo1".to_owned(),
        mode: AuthMode::SignIn,
        show_password: true,
    }
}

#[test]
fn default_state_is_sign_in_with_hidden_password() {
    let state = LoginFormState::default();
    assert_eq!(state.mode, AuthMode::SignIn);
    assert!(!state.show_password);
    assert_eq!(state.password_input_type(), "password");
}

#[test]
fn toggle_mode_keeps_other_fields_and_changes_submit_label() {
    let mut state = filled();
    let before = state.clone();
    let label_before = state.mode.submit_label(false);

    state.toggle_mode();

    assert_eq!(state.mode, AuthMode::SignUp);
    assert_eq!(state.email, before.email);
    assert_eq!(state.password, before.password);
    assert_eq!(state.show_password, before.show_password);
    assert_ne!(state.mode.submit_label(false), label_before);
    assert_eq!(state.mode.submit_label(false), "Criar Conta");

    state.toggle_mode();
    assert_eq!(state, before);
}

#[test]
fn submit_labels_per_mode_and_busy_flag() {
    assert_eq!(AuthMode::SignIn.submit_label(false), "Entrar");
    assert_eq!(AuthMode::SignIn.submit_label(true), "Entrando...");
    assert_eq!(AuthMode::SignUp.submit_label(false), "Criar Conta");
    assert_eq!(AuthMode::SignUp.submit_label(true), "Criando conta...");
}

#[test]
fn headings_and_toggle_links_follow_mode() {
    assert_eq!(AuthMode::SignIn.heading(), "Bem-vindo de volta");
    assert_eq!(AuthMode::SignUp.heading(), "Criar Conta");
    assert_eq!(AuthMode::SignIn.toggle_label(), "Não tem conta? Crie uma agora");
    assert_eq!(AuthMode::SignUp.toggle_label(), "Já tem uma conta? Entre aqui");
}

#[test]
fn toggle_password_visibility_switches_input_type() {
    let mut state = LoginFormState::default();
    state.toggle_password_visibility();
    assert_eq!(state.password_input_type(), "text");
    state.toggle_password_visibility();
    assert_eq!(state.password_input_type(), "password");
}

#[test]
fn submission_carries_values_verbatim() {
    let mut state = filled();
    state.email = "  padded@example.com ".to_owned();
    state.toggle_mode();
    let submission = state.submission();
    assert_eq!(submission.email, "  padded@example.com ");
    assert_eq!(submission.password, "segredo1");
    assert!(submission.is_sign_up());
}

#[test]
fn submit_disabled_while_loading() {
    assert!(submit_disabled(true));
    assert!(!submit_disabled(false));
}
