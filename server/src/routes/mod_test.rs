use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

async fn get_path(router: Router, path: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes.to_vec())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_path(api_routes(AppState::default()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn config_endpoint_serves_provider_json() {
    let provider = gotrue::ProviderConfig::new("https://abc123.supabase.co/", "anon-key");
    let (status, body) = get_path(api_routes(AppState::new(provider)), "/api/config").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(json["provider"]["url"], "https://abc123.supabase.co");
    assert_eq!(json["provider"]["anon_key"], "anon-key");
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let (status, _) = get_path(api_routes(AppState::default()), "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_layers_gzip_json_when_accepted() {
    let provider = gotrue::ProviderConfig::new("https://abc123.supabase.co", "anon-key");
    let router = with_http_layers(api_routes(AppState::new(provider)));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/config")
                .header("accept-encoding", "gzip")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-encoding").map(|v| v.as_bytes()), Some(&b"gzip"[..]));
}
