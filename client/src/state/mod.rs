//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session snapshot shared through context; `form` holds the
//! transient inputs of the login/sign-up view.

pub mod auth;
pub mod form;
