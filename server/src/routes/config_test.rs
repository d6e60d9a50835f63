use super::*;
use gotrue::ProviderConfig;

#[tokio::test]
async fn client_config_reports_provider() {
    let provider = ProviderConfig::new("https://abc123.supabase.co", "anon").expect("config");
    let Json(body) = client_config(State(AppState::new(Some(provider.clone())))).await;
    assert_eq!(body.provider, Some(provider));
}

#[tokio::test]
async fn client_config_without_provider_is_null() {
    let Json(body) = client_config(State(AppState::new(None))).await;
    assert!(!body.is_configured());
    assert_eq!(serde_json::to_value(&body).expect("json"), serde_json::json!({ "provider": null }));
}
