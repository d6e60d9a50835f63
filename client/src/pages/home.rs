//! Root route: spinner, login form, or dashboard depending on auth status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the root-level message and the in-flight flag for form submissions.
//! The form and dashboard only render what they are handed.

use leptos::prelude::*;

use crate::components::spinner::LoadingScreen;
use crate::pages::dashboard::Dashboard;
use crate::pages::login::LoginForm;
use crate::state::auth::{AuthStatus, use_auth};
use crate::state::form::AuthSubmission;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let auth_loading = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let handle_auth = Callback::new(move |submission: AuthSubmission| {
        auth_loading.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let AuthSubmission { email, password, mode } = submission;
            let outcome = if mode.is_sign_up() {
                auth.sign_up(email, password).await
            } else {
                auth.sign_in(email, password).await
            };
            if let Err(e) = &outcome {
                log::info!("{} failed: {e}", if mode.is_sign_up() { "sign-up" } else { "sign-in" });
            }
            message.set(crate::state::auth::submit_feedback(mode, &outcome));
            auth_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    });

    let handle_sign_out = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.sign_out().await {
                Ok(()) => message.set(None),
                Err(e) => {
                    log::warn!("sign-out failed: {e}");
                    message.set(Some(gotrue::messages::SIGN_OUT_ERROR.to_owned()));
                }
            }
        });
    });

    move || match auth.status() {
        AuthStatus::Loading => view! { <LoadingScreen/> }.into_any(),
        AuthStatus::Authenticated(user) => {
            view! { <Dashboard user=user on_sign_out=handle_sign_out notice=message/> }.into_any()
        }
        AuthStatus::Unauthenticated => {
            view! { <LoginForm on_submit=handle_auth loading=auth_loading error=message/> }.into_any()
        }
    }
}
