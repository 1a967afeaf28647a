use std::sync::Arc;

use crate::admission::AdmissionGate;
use crate::config::{AppConfig, ServerConfig};
use crate::dispatcher::Dispatcher;
use crate::providers::ProviderRegistry;

/// Shared state of the HTTP layer
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub registry: Arc<ProviderRegistry>,
    pub gate: AdmissionGate,
    pub server: Arc<ServerConfig>,
}

impl AppState {
    /// State with the built-in vendors configured from `config`.
    pub fn new(config: &AppConfig) -> Self {
        let registry = Arc::new(ProviderRegistry::from_config(config));
        Self::with_registry(registry, config.server.clone())
    }

    /// State around an existing registry.
    pub fn with_registry(registry: Arc<ProviderRegistry>, server: ServerConfig) -> Self {
        let dispatcher = Dispatcher::from_config(Arc::clone(&registry), &server);
        Self {
            dispatcher: Arc::new(dispatcher),
            registry,
            gate: AdmissionGate::new(server.single_flight),
            server: Arc::new(server),
        }
    }
}
