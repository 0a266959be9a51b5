use std::sync::Arc;

use crate::services::providers::TextGenerationProvider;

/// Shared application state
///
/// Read-only after startup: the provider is built once from environment
/// configuration and the static catalog lives in the fallback module, so no
/// locking is needed across requests.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TextGenerationProvider>,
}

impl AppState {
    /// Creates application state around a text-generation provider
    pub fn new(provider: Arc<dyn TextGenerationProvider>) -> Self {
        Self { provider }
    }
}
