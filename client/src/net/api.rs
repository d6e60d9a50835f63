//! REST helpers for talking to the hosting server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): resolves to the unconfigured document, since the
//! provider is only ever contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A failed config fetch degrades to "not configured" instead of surfacing
//! an error, matching the behavior when the server has no provider set.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gotrue::ClientConfig;

pub const CONFIG_ENDPOINT: &str = "/api/config";

#[cfg(any(test, feature = "hydrate"))]
fn config_request_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

/// Fetch the provider configuration published by the server.
pub async fn fetch_client_config() -> ClientConfig {
    #[cfg(feature = "hydrate")]
    {
        match request_client_config().await {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; running without auth provider");
                ClientConfig::default()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ClientConfig::default()
    }
}

#[cfg(feature = "hydrate")]
async fn request_client_config() -> Result<ClientConfig, String> {
    let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(config_request_failed_message(resp.status()));
    }
    resp.json::<ClientConfig>().await.map_err(|e| e.to_string())
}
