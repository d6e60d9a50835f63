//! Login/sign-up form input state.
//!
//! DESIGN
//! ======
//! Plain data with label helpers so the form component stays a thin view and
//! the mode/label rules are testable without a DOM.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn is_sign_up(self) -> bool {
        matches!(self, Self::SignUp)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Bem-vindo de volta",
            Self::SignUp => "Criar Conta",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::SignIn => "Entre na sua conta para continuar",
            Self::SignUp => "Crie sua conta para começar",
        }
    }

    /// Submit button text; `busy` while the parent reports loading.
    #[must_use]
    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::SignIn, false) => "Entrar",
            (Self::SignIn, true) => "Entrando...",
            (Self::SignUp, false) => "Criar Conta",
            (Self::SignUp, true) => "Criando conta...",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Não tem conta? Crie uma agora",
            Self::SignUp => "Já tem uma conta? Entre aqui",
        }
    }
}

/// Values handed to the submit callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSubmission {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
}

impl AuthSubmission {
    #[must_use]
    pub fn is_sign_up(&self) -> bool {
        self.mode.is_sign_up()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
    pub show_password: bool,
}

impl LoginFormState {
    /// Switch between sign-in and sign-up; every other field is kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    #[must_use]
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    #[must_use]
    pub fn submission(&self) -> AuthSubmission {
        AuthSubmission { email: self.email.clone(), password: self.password.clone(), mode: self.mode }
    }
}

/// Submit stays disabled while the parent reports an auth call in flight.
#[must_use]
pub fn submit_disabled(loading: bool) -> bool {
    loading
}
