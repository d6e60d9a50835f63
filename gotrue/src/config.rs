//! Provider configuration resolved from the environment.
//!
//! The browser never reads environment variables itself: the server resolves
//! a [`ProviderConfig`] at startup and publishes it as a [`ClientConfig`]
//! document that the client fetches before building its auth client.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const URL_VARS: [&str; 2] = ["SUPABASE_URL", "VITE_SUPABASE_URL"];
pub const ANON_KEY_VARS: [&str; 2] = ["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];

/// Project URL and public (anon) API key for the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub url: String,
    pub anon_key: String,
}

impl ProviderConfig {
    /// Build a config, returning `None` when either value is blank.
    #[must_use]
    pub fn new(url: &str, anon_key: &str) -> Option<Self> {
        let url = url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();
        if url.is_empty() || anon_key.is_empty() {
            return None;
        }
        Some(Self { url: url.to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Resolve the provider from `SUPABASE_URL` / `SUPABASE_ANON_KEY`,
    /// falling back to the `VITE_`-prefixed names.
    ///
    /// Missing values are not an error: the app runs against the
    /// unconfigured stub instead.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let url = first_env(&URL_VARS)?;
        let anon_key = first_env(&ANON_KEY_VARS)?;
        Self::new(&url, &anon_key)
    }

    /// Absolute URL of a GoTrue endpoint, e.g. `endpoint("signup")`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    /// First DNS label of the project host (`abc123` for
    /// `https://abc123.supabase.co`).
    #[must_use]
    pub fn project_ref(&self) -> &str {
        let without_scheme = self.url.split_once("://").map_or(self.url.as_str(), |(_, rest)| rest);
        let host = without_scheme.split(['/', ':']).next().unwrap_or_default();
        match host.split('.').next() {
            Some(label) if !label.is_empty() => label,
            _ => "local",
        }
    }

    /// Browser storage key under which the session is persisted.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }
}

fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

/// Document served at `/api/config` for the browser build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub provider: Option<ProviderConfig>,
}

impl ClientConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }
}
