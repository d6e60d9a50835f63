//! Banner for root-level auth messages (errors and the sign-up confirmation).

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use gotrue::messages::SIGN_UP_SUCCESS;
use leptos::prelude::*;

/// CSS modifier for a message: the sign-up confirmation is the only
/// non-error text the root ever shows.
pub(crate) fn notice_tone(message: &str) -> &'static str {
    if message == SIGN_UP_SUCCESS { "notice--success" } else { "notice--error" }
}

/// Renders `message` verbatim when present.
#[component]
pub fn Notice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            {move || {
                let text = message.get().unwrap_or_default();
                let class = format!("notice {}", notice_tone(&text));
                view! {
                    <div class=class role="alert">
                        <p class="notice__text">{text}</p>
                    </div>
                }
            }}
        </Show>
    }
}
