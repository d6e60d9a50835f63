//! pt-BR user-facing strings and the provider error translation table.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::error::AuthError;

pub const INVALID_CREDENTIALS: &str = "Email ou senha incorretos";
pub const ALREADY_REGISTERED: &str = "Este email já está cadastrado. Tente fazer login.";
pub const WEAK_PASSWORD: &str = "A senha deve ter pelo menos 6 caracteres";
pub const SIGN_UP_SUCCESS: &str = "Conta criada com sucesso! Você já está logado.";
pub const UNEXPECTED_ERROR: &str = "Erro inesperado. Tente novamente.";
pub const SIGN_OUT_ERROR: &str = "Erro ao sair. Tente novamente.";
pub const CONNECT_FIRST: &str =
    "Por favor, conecte ao Supabase primeiro definindo SUPABASE_URL e SUPABASE_ANON_KEY no servidor.";

/// Known provider substrings, checked in order.
const TRANSLATIONS: [(&str, &str); 3] = [
    ("Invalid login credentials", INVALID_CREDENTIALS),
    ("User already registered", ALREADY_REGISTERED),
    ("Password should be at least 6 characters", WEAK_PASSWORD),
];

/// Translate a raw provider message; unknown messages pass through as-is.
#[must_use]
pub fn translate(message: &str) -> String {
    TRANSLATIONS
        .iter()
        .find(|(needle, _)| message.contains(needle))
        .map_or_else(|| message.to_owned(), |(_, localized)| (*localized).to_owned())
}

/// Text shown for a failed auth action.
#[must_use]
pub fn error_message(err: &AuthError) -> String {
    match err {
        AuthError::NotConfigured => CONNECT_FIRST.to_owned(),
        e if e.is_unexpected() => UNEXPECTED_ERROR.to_owned(),
        e => translate(&e.to_string()),
    }
}
