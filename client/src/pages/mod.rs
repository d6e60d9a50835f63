//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! `home` is the only route; it decides between the login form and the
//! dashboard and owns the state both of them render.

pub mod dashboard;
pub mod home;
pub mod login;
