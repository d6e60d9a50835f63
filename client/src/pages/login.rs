//! Email + password form that toggles between sign-in and sign-up.
//!
//! DESIGN
//! ======
//! Pure controlled-input view: submission goes to the caller's callback, and
//! the loading flag and message text come from the root. No network calls
//! originate here.

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::spinner::Spinner;
use crate::state::form::{AuthSubmission, LoginFormState, submit_disabled};

#[component]
pub fn LoginForm(
    on_submit: Callback<AuthSubmission>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());
    let mode = move || form.with(|f| f.mode);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submit_disabled(loading.get_untracked()) {
            return;
        }
        on_submit.run(form.with_untracked(LoginFormState::submission));
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__badge" aria-hidden="true"></div>
                    <h1 class="auth-card__title">{move || mode().heading()}</h1>
                    <p class="auth-card__muted">{move || mode().subtitle()}</p>
                </div>

                <Notice message=error/>

                <form class="auth-form" on:submit=on_form_submit>
                    <label class="auth-form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="email"
                        placeholder="seu@email.com"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="password">"Senha"</label>
                    <div class="auth-form__password">
                        <input
                            id="password"
                            class="auth-form__input"
                            type=move || form.with(LoginFormState::password_input_type)
                            placeholder="••••••••"
                            required
                            minlength="6"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <button
                            class="auth-form__reveal"
                            type="button"
                            aria-label=move || {
                                if form.with(|f| f.show_password) { "Ocultar senha" } else { "Mostrar senha" }
                            }
                            on:click=move |_| form.update(LoginFormState::toggle_password_visibility)
                        >
                            {move || if form.with(|f| f.show_password) { "🙈" } else { "👁" }}
                        </button>
                    </div>

                    <button class="auth-form__submit" type="submit" disabled=move || submit_disabled(loading.get())>
                        <Show when=move || loading.get()>
                            <Spinner small=true/>
                        </Show>
                        {move || mode().submit_label(loading.get())}
                    </button>
                </form>

                <div class="auth-card__footer">
                    <button class="auth-card__toggle" type="button" on:click=move |_| form.update(LoginFormState::toggle_mode)>
                        {move || mode().toggle_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
