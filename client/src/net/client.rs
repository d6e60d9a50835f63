//! Provider handle used by the auth hook: a live GoTrue client, or the stub
//! installed when the server has no provider configured.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use gotrue::{AuthError, AuthEvent, AuthResponse, ClientConfig, Session, Subscription};

use super::provider::GoTrueClient;

#[derive(Clone, Debug)]
pub enum AuthClient {
    Connected(GoTrueClient),
    /// Every action fails with [`AuthError::NotConfigured`]; there is never a
    /// session and no events are delivered.
    Unconfigured,
}

impl AuthClient {
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        config.provider.map_or(Self::Unconfigured, |provider| Self::Connected(GoTrueClient::new(provider)))
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// # Errors
    ///
    /// See [`GoTrueClient::sign_up`]; the stub always fails.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        match self {
            Self::Connected(client) => client.sign_up(email, password).await,
            Self::Unconfigured => Err(AuthError::NotConfigured),
        }
    }

    /// # Errors
    ///
    /// See [`GoTrueClient::sign_in_with_password`]; the stub always fails.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        match self {
            Self::Connected(client) => client.sign_in_with_password(email, password).await,
            Self::Unconfigured => Err(AuthError::NotConfigured),
        }
    }

    /// # Errors
    ///
    /// See [`GoTrueClient::sign_out`]; the stub always fails.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        match self {
            Self::Connected(client) => client.sign_out().await,
            Self::Unconfigured => Err(AuthError::NotConfigured),
        }
    }

    /// # Errors
    ///
    /// See [`GoTrueClient::get_session`]; the stub never fails.
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        match self {
            Self::Connected(client) => client.get_session().await,
            Self::Unconfigured => Ok(None),
        }
    }

    /// # Errors
    ///
    /// See [`GoTrueClient::initialize`]; the stub reports no session and
    /// has no listeners to notify.
    pub async fn initialize(&self) -> Result<Option<Session>, AuthError> {
        match self {
            Self::Connected(client) => client.initialize().await,
            Self::Unconfigured => Ok(None),
        }
    }

    pub fn on_auth_state_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(AuthEvent, Option<&Session>) + Send + Sync + 'static,
    {
        match self {
            Self::Connected(client) => client.on_auth_state_change(callback),
            Self::Unconfigured => Subscription::inert(),
        }
    }
}
