//! Provider error type.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the UI can show originates here. API errors keep the
//! provider's own message text so the pt-BR table in [`crate::messages`]
//! can match on it; transport failures are kept apart because the UI
//! replaces them with a generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

pub const NOT_CONFIGURED_MESSAGE: &str = "Please connect to Supabase first";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No provider URL/key was supplied; the stub client is in use.
    #[error("Please connect to Supabase first")]
    NotConfigured,
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, code: Option<String>, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response could not be decoded.
    #[error("invalid provider response: {0}")]
    Decode(String),
}

impl AuthError {
    /// Build an [`AuthError::Api`] from a non-success status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|json| first_string(json, &["msg", "message", "error_description", "error"]))
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty() && parsed.is_none()).then(|| trimmed.to_owned())
            })
            .unwrap_or_else(|| format!("HTTP {status}"));
        let code = parsed.as_ref().and_then(|json| first_string(json, &["error_code", "error"]));
        Self::Api { status, code, message }
    }

    /// Transport or decoding failure, shown to users as a generic error.
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Decode(_))
    }

    /// HTTP status for API errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn first_string(json: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| json.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}
