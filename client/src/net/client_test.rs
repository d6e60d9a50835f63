use futures::executor::block_on;
use gotrue::ProviderConfig;

use super::*;

#[test]
fn from_config_without_provider_is_stub() {
    let client = AuthClient::from_config(ClientConfig::default());
    assert!(!client.is_configured());
}

#[test]
fn from_config_with_provider_is_connected() {
    let client = AuthClient::from_config(ClientConfig {
        provider: ProviderConfig::new("https://abc.supabase.co", "anon"),
    });
    assert!(client.is_configured());
}

#[test]
fn stub_rejects_every_action_as_not_configured() {
    let client = AuthClient::Unconfigured;
    assert_eq!(block_on(client.sign_in_with_password("a@b.com", "secret")), Err(AuthError::NotConfigured));
    assert_eq!(block_on(client.sign_up("a@b.com", "secret")), Err(AuthError::NotConfigured));
    assert_eq!(block_on(client.sign_out()), Err(AuthError::NotConfigured));
}

#[test]
fn stub_has_no_session() {
    assert_eq!(block_on(AuthClient::Unconfigured.get_session()), Ok(None));
}

#[test]
fn stub_subscription_is_inert() {
    AuthClient::Unconfigured.on_auth_state_change(|_, _| panic!("stub never emits")).unsubscribe();
}

#[test]
fn stub_initialize_reports_no_session() {
    assert_eq!(block_on(AuthClient::Unconfigured.initialize()), Ok(None));
}
