//! Browser client for the GoTrue REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted
//! in `localStorage`.
//! Server-side (SSR): every request resolves to a network error and no
//! session is ever found, so server rendering always shows the loading view.
//!
//! DESIGN
//! ======
//! Each operation is a single request with no timeout or retry. The only
//! follow-up request is the one-shot refresh inside [`GoTrueClient::get_session`]
//! when the stored session has expired.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use gotrue::{AuthError, AuthEvent, AuthListeners, AuthResponse, ProviderConfig, Session, Subscription};
use serde_json::Value;

use crate::util::{clock, storage};

pub(crate) const SIGNUP_PATH: &str = "signup";
pub(crate) const PASSWORD_GRANT_PATH: &str = "token?grant_type=password";
pub(crate) const REFRESH_GRANT_PATH: &str = "token?grant_type=refresh_token";
pub(crate) const LOGOUT_PATH: &str = "logout";

/// Connected provider client. Cloning shares the listener registry.
#[derive(Clone, Debug)]
pub struct GoTrueClient {
    config: ProviderConfig,
    listeners: AuthListeners,
}

impl GoTrueClient {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self { config, listeners: AuthListeners::new() }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Register an auth-state listener.
    pub fn on_auth_state_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(AuthEvent, Option<&Session>) + Send + Sync + 'static,
    {
        self.listeners.subscribe(callback)
    }

    /// `POST /auth/v1/signup`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error (e.g. already registered, weak password)
    /// or a transport error.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let body = credentials_body(email, password);
        let value = send(&self.config, SIGNUP_PATH, None, Some(body)).await?.unwrap_or(Value::Null);
        let response = AuthResponse::from_signup_body(value)?;
        Ok(self.settle_sign_up(response))
    }

    /// A sign-up that returned a session is a sign-in: persist and emit.
    /// Without a session (email confirmation pending) nothing changes locally.
    fn settle_sign_up(&self, mut response: AuthResponse) -> AuthResponse {
        if let Some(session) = response.session.take() {
            let session = session.with_expiry(clock::now_unix());
            self.persist(&session);
            self.listeners.emit(AuthEvent::SignedIn, Some(&session));
            response.session = Some(session);
        }
        response
    }

    /// `POST /auth/v1/token?grant_type=password`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error (e.g. invalid credentials) or a transport
    /// error.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let body = credentials_body(email, password);
        let value = send(&self.config, PASSWORD_GRANT_PATH, None, Some(body)).await?;
        let session = decode_session(value)?;
        self.persist(&session);
        self.listeners.emit(AuthEvent::SignedIn, Some(&session));
        Ok(AuthResponse::from_session(session))
    }

    /// `POST /auth/v1/logout`, then clear the local session.
    ///
    /// A 401/403/404 from the provider means the session is already gone
    /// server-side; the local session is cleared anyway.
    ///
    /// # Errors
    ///
    /// Returns any other provider or transport error, leaving the local
    /// session in place.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.stored_session() {
            match send(&self.config, LOGOUT_PATH, Some(&session.access_token), None).await {
                Ok(_) => {}
                Err(e) if session_already_gone(&e) => {}
                Err(e) => return Err(e),
            }
        }
        storage::remove(&self.config.storage_key());
        self.listeners.emit(AuthEvent::SignedOut, None);
        Ok(())
    }

    /// Current session from storage, refreshed once if it has expired.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the refresh request could not be sent;
    /// the stored session is kept for the next attempt. A refresh rejected
    /// by the provider clears the stored session and yields `Ok(None)`.
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.stored_session() else {
            return Ok(None);
        };
        if !session.is_expired(clock::now_unix()) {
            return Ok(Some(session));
        }

        let body = serde_json::json!({ "refresh_token": session.refresh_token });
        let result = send(&self.config, REFRESH_GRANT_PATH, None, Some(body)).await.and_then(decode_session);
        self.settle_refresh(RefreshOutcome::from_result(result))
    }

    /// Resolve the stored session and report it to listeners as
    /// `INITIAL_SESSION`, once, when the app starts.
    ///
    /// # Errors
    ///
    /// See [`GoTrueClient::get_session`]; listeners are not notified on error.
    pub async fn initialize(&self) -> Result<Option<Session>, AuthError> {
        let session = self.get_session().await?;
        self.listeners.emit(AuthEvent::InitialSession, session.as_ref());
        Ok(session)
    }

    fn settle_refresh(&self, outcome: RefreshOutcome) -> Result<Option<Session>, AuthError> {
        match outcome {
            RefreshOutcome::Replace(refreshed) => {
                self.persist(&refreshed);
                self.listeners.emit(AuthEvent::TokenRefreshed, Some(&refreshed));
                Ok(Some(refreshed))
            }
            RefreshOutcome::Keep(e) => Err(e),
            RefreshOutcome::Clear(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("session refresh rejected: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                storage::remove(&self.config.storage_key());
                Ok(None)
            }
        }
    }

    fn stored_session(&self) -> Option<Session> {
        storage::load_json(&self.config.storage_key())
    }

    fn persist(&self, session: &Session) {
        storage::save_json(&self.config.storage_key(), session);
    }
}

/// What happens to the stored session after a refresh attempt.
#[derive(Debug, PartialEq, Eq)]
enum RefreshOutcome {
    /// The provider issued a new session.
    Replace(Session),
    /// The provider rejected the refresh token; the session is dead.
    Clear(AuthError),
    /// The request never completed; retry on the next lookup.
    Keep(AuthError),
}

impl RefreshOutcome {
    fn from_result(result: Result<Session, AuthError>) -> Self {
        match result {
            Ok(session) => Self::Replace(session),
            Err(e) if e.is_unexpected() => Self::Keep(e),
            Err(e) => Self::Clear(e),
        }
    }
}

fn credentials_body(email: &str, password: &str) -> Value {
    serde_json::json!({ "email": email, "password": password })
}

fn decode_session(value: Option<Value>) -> Result<Session, AuthError> {
    let value = value.ok_or_else(|| AuthError::Decode("empty session response".to_owned()))?;
    let session: Session = serde_json::from_value(value).map_err(|e| AuthError::Decode(e.to_string()))?;
    Ok(session.with_expiry(clock::now_unix()))
}

fn session_already_gone(err: &AuthError) -> bool {
    matches!(err.status(), Some(401 | 403 | 404))
}

/// Issue a `POST` against `path`. Returns the decoded JSON body, or `None`
/// for an empty body (e.g. `204 No Content` from `/logout`).
async fn send(
    config: &ProviderConfig,
    path: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> Result<Option<Value>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(path);
        let token = bearer.unwrap_or(&config.anon_key);
        log::debug!("POST {url}");
        let builder = gloo_net::http::Request::post(&url)
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {token}"));
        let request = match body {
            Some(body) => builder.json(&body).map_err(|e| AuthError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| AuthError::Network(e.to_string()))?,
        };
        let resp = request.send().await.map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let ok = resp.ok();
        let text = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        if !ok {
            log::warn!("POST {url} failed: {status}");
            return Err(AuthError::from_response(status, &text));
        }
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text).map(Some).map_err(|e| AuthError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, path, bearer, body);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}
