//! GoTrue REST wire types.
//!
//! DESIGN
//! ======
//! Only the fields the app reads are typed; everything else the provider
//! sends is ignored so schema additions on the provider side never break
//! decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::error::AuthError;

/// Seconds before `expires_at` at which a session is treated as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 10;

/// Read-only snapshot of the provider's user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque provider identifier (UUID string).
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_sign_in_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub email_confirmed_at: Option<OffsetDateTime>,
}

/// Provider-issued session bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds, relative to issuance.
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute expiry in unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// Fill `expires_at` from `expires_in` when the provider omitted it.
    #[must_use]
    pub fn with_expiry(mut self, now_unix: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now_unix.saturating_add(self.expires_in));
        }
        self
    }

    /// True once the session is within [`EXPIRY_MARGIN_SECS`] of expiring.
    /// A session without any expiry information is never considered expired.
    #[must_use]
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at.is_some_and(|at| at.saturating_sub(now_unix) <= EXPIRY_MARGIN_SECS)
    }
}

/// Result of a sign-in or sign-up call.
///
/// Sign-up returns a user without a session when the project requires email
/// confirmation before the first login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: Option<User>,
    pub session: Option<Session>,
}

impl AuthResponse {
    #[must_use]
    pub fn from_session(session: Session) -> Self {
        Self { user: Some(session.user.clone()), session: Some(session) }
    }

    /// Decode a `/signup` response body.
    ///
    /// The provider answers with a full session when auto-confirm is on, and
    /// with the bare user object (or `{ "user": ... }`) otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Decode`] if the body matches none of those shapes.
    pub fn from_signup_body(body: Value) -> Result<Self, AuthError> {
        if body.get("access_token").is_some() {
            let session: Session = serde_json::from_value(body).map_err(|e| AuthError::Decode(e.to_string()))?;
            return Ok(Self::from_session(session));
        }
        let user_value = match body.get("user") {
            Some(inner) if inner.is_object() => inner.clone(),
            _ => body,
        };
        let user: User = serde_json::from_value(user_value).map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(Self { user: Some(user), session: None })
    }
}

/// Auth-state change notification pushed to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

impl AuthEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialSession => "INITIAL_SESSION",
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
        }
    }
}
