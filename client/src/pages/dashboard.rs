//! Authenticated landing view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the root once a session exists. Everything shown comes from
//! the props; sign-out is delegated to the root.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use gotrue::User;
use gotrue::display::format_last_sign_in;
use leptos::prelude::*;
use time::UtcOffset;

use crate::components::notice::Notice;
use crate::util::clock;

pub(crate) const FEATURE_CARDS: [(&str, &str, &str); 3] = [
    ("Perfil", "Gerencie suas informações pessoais e preferências", "feature-card--blue"),
    ("Segurança", "Configure autenticação e opções de segurança", "feature-card--green"),
    ("Atividades", "Visualize seu histórico de atividades recentes", "feature-card--purple"),
];

/// Label/value pairs for the user information panel.
pub(crate) fn user_rows(user: &User, offset: UtcOffset) -> [(&'static str, String); 3] {
    [
        ("Email:", user.email.clone().unwrap_or_else(|| "—".to_owned())),
        ("ID:", user.id.clone()),
        ("Último login:", format_last_sign_in(user.last_sign_in_at, offset)),
    ]
}

#[component]
pub fn Dashboard(
    user: User,
    on_sign_out: Callback<()>,
    /// Root-level message (sign-up confirmation or sign-out failure).
    #[prop(into)]
    notice: Signal<Option<String>>,
) -> impl IntoView {
    let rows = user_rows(&user, clock::viewer_offset());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div class="dashboard-page__brand">
                    <div class="dashboard-page__badge" aria-hidden="true"></div>
                    <h1>"Dashboard"</h1>
                </div>
                <button class="dashboard-page__sign-out" type="button" on:click=move |_| on_sign_out.run(())>
                    "Sair"
                </button>
            </header>

            <main class="dashboard-page__main">
                <Notice message=notice/>

                <section class="dashboard-card">
                    <div class="dashboard-card__welcome">
                        <h2>"Login realizado com sucesso!"</h2>
                        <p class="auth-card__muted">"Bem-vindo ao sistema"</p>
                    </div>
                    <div class="user-info">
                        <h3>"Informações do Usuário"</h3>
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="user-info__row">
                                        <span class="user-info__label">{label}</span>
                                        <span class="user-info__value">{value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="feature-grid">
                    {FEATURE_CARDS
                        .into_iter()
                        .map(|(title, body, tone)| {
                            view! {
                                <div class=format!("feature-card {tone}")>
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>
            </main>
        </div>
    }
}
