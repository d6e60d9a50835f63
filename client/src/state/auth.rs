//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth` runs once at the root. It resolves the provider client,
//! subscribes to auth-state events for the lifetime of the component tree,
//! then loads the current session. Pages read the tri-state status through
//! `use_auth` and call the sign-in/up/out operations on the same handle.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gotrue::messages::{SIGN_UP_SUCCESS, error_message};
use gotrue::{AuthError, AuthEvent, AuthResponse, Session, User};
use leptos::prelude::*;

use crate::net::client::AuthClient;
use crate::state::form::AuthMode;

/// Tri-state session snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl AuthStatus {
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        session.map_or(Self::Unauthenticated, |s| Self::Authenticated(s.user.clone()))
    }

    /// Status after a provider event; each event replaces the snapshot.
    #[must_use]
    pub fn after_event(event: AuthEvent, session: Option<&Session>) -> Self {
        match event {
            AuthEvent::SignedOut => Self::Unauthenticated,
            AuthEvent::InitialSession | AuthEvent::SignedIn | AuthEvent::TokenRefreshed => {
                Self::from_session(session)
            }
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Message shown at the root after a submit completes.
///
/// Errors are translated; a successful sign-up confirms the new account;
/// a successful sign-in needs no message since the dashboard replaces the form.
#[must_use]
pub fn submit_feedback(mode: AuthMode, outcome: &Result<AuthResponse, AuthError>) -> Option<String> {
    match outcome {
        Err(e) => Some(error_message(e)),
        Ok(_) if mode.is_sign_up() => Some(SIGN_UP_SUCCESS.to_owned()),
        Ok(_) => None,
    }
}

/// Handle to the root auth context.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    status: RwSignal<AuthStatus>,
    client: RwSignal<Option<AuthClient>>,
}

impl AuthHandle {
    fn new() -> Self {
        Self { status: RwSignal::new(AuthStatus::Loading), client: RwSignal::new(None) }
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn user(&self) -> Option<User> {
        self.status.with(|s| s.user().cloned())
    }

    pub fn loading(&self) -> bool {
        self.status.with(AuthStatus::is_loading)
    }

    fn client(&self) -> AuthClient {
        self.client.get_untracked().unwrap_or(AuthClient::Unconfigured)
    }

    /// A response carrying a session signs the user in; anything else
    /// leaves the snapshot as it was.
    fn settle(self, result: Result<AuthResponse, AuthError>) -> Result<AuthResponse, AuthError> {
        if let Ok(AuthResponse { session: Some(session), .. }) = &result {
            self.status.set(AuthStatus::from_session(Some(session)));
        }
        result
    }

    /// # Errors
    ///
    /// Forwards the provider's error unchanged.
    pub async fn sign_in(self, email: String, password: String) -> Result<AuthResponse, AuthError> {
        self.settle(self.client().sign_in_with_password(&email, &password).await)
    }

    /// # Errors
    ///
    /// Forwards the provider's error unchanged.
    pub async fn sign_up(self, email: String, password: String) -> Result<AuthResponse, AuthError> {
        self.settle(self.client().sign_up(&email, &password).await)
    }

    /// # Errors
    ///
    /// Forwards the provider's error unchanged; the snapshot is kept.
    pub async fn sign_out(self) -> Result<(), AuthError> {
        self.client().sign_out().await?;
        self.status.set(AuthStatus::Unauthenticated);
        Ok(())
    }
}

/// Install the auth context and start resolving the session.
///
/// Server rendering never resolves: the status stays `Loading` until the
/// browser build takes over.
pub fn provide_auth() -> AuthHandle {
    let handle = AuthHandle::new();
    provide_context(handle);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::{Arc, Mutex, PoisonError};

        use gotrue::Subscription;

        let slot: Arc<Mutex<Option<Subscription>>> = Arc::default();
        let cleanup_slot = slot.clone();
        on_cleanup(move || {
            let subscription = cleanup_slot.lock().unwrap_or_else(PoisonError::into_inner).take();
            if let Some(subscription) = subscription {
                subscription.unsubscribe();
            }
        });

        leptos::task::spawn_local(async move {
            let client = AuthClient::from_config(crate::net::api::fetch_client_config().await);
            if !client.is_configured() {
                log::warn!("auth provider not configured");
            }

            let status = handle.status;
            let subscription = client.on_auth_state_change(move |event, session| {
                log::debug!("auth event {}", event.as_str());
                status.set(AuthStatus::after_event(event, session));
            });
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(subscription);
            handle.client.set(Some(client.clone()));

            let session = client.initialize().await.unwrap_or_else(|e| {
                log::warn!("session lookup failed: {e}");
                None
            });
            status.set(AuthStatus::from_session(session.as_ref()));
        });
    }

    handle
}

/// Auth handle installed by [`provide_auth`].
///
/// Panics if called outside the root component tree.
pub fn use_auth() -> AuthHandle {
    expect_context::<AuthHandle>()
}
