//! Networking modules for the hosting server and the auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches the provider configuration from the server, `provider` talks
//! to the provider, and `client` picks between the live provider and the
//! unconfigured stub.

pub mod api;
pub mod client;
pub mod provider;
