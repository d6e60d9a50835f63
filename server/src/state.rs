//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared data is the provider configuration resolved at startup.

use std::sync::Arc;

use gotrue::{ClientConfig, ProviderConfig};

/// Clone is required by Axum; inner data is Arc-wrapped.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub client_config: Arc<ClientConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(provider: Option<ProviderConfig>) -> Self {
        Self { client_config: Arc::new(ClientConfig { provider }) }
    }
}
