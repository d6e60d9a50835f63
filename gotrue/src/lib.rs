//! Shared model for the hosted auth provider (Supabase Auth / GoTrue).
//!
//! This crate owns the pieces used by both `server` and `client`: provider
//! configuration, the REST wire types, the error type, the pt-BR message
//! table, and the auth-state listener registry. It performs no I/O; the
//! browser transport lives in `client::net::provider`.

pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod messages;
pub mod types;

pub use config::{ClientConfig, ProviderConfig};
pub use error::AuthError;
pub use events::{AuthListeners, Subscription};
pub use types::{AuthEvent, AuthResponse, Session, User};
