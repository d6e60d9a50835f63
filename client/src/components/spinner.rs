//! Loading indicators.

use leptos::prelude::*;

/// Inline spinning ring; `small` renders the button-sized variant.
#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let class = if small { "spinner spinner--small" } else { "spinner" };
    view! { <div class=class aria-hidden="true"></div> }
}

/// Full-page placeholder shown while the session is being resolved.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="auth-page auth-page--centered">
            <div class="auth-card auth-card--loading" role="status">
                <Spinner/>
                <p class="auth-card__muted">"Carregando..."</p>
            </div>
        </div>
    }
}
