//! Common test utilities
//!
//! Shared fixtures for the integration tests: a mock backend wired to the
//! built-in page registry behind a scenario-scoped dispatcher.

use selkey::actions::ActionDispatcher;
use selkey::backend::MockBackend;
use selkey::config::Config;
use selkey::pages::default_registry;
use std::sync::Arc;

/// Config with tight timing so failure paths don't stall the suite
pub fn test_config() -> Config {
    Config {
        command_timeout: 200,
        poll_interval: 10,
        ..Config::default()
    }
}

/// Build a dispatcher over a fresh mock backend and the built-in registry
pub async fn setup_dispatcher(url: &str) -> (Arc<MockBackend>, ActionDispatcher) {
    selkey::logging::init("warn");

    let backend = Arc::new(MockBackend::new());
    backend.set_url(url).await;

    let registry = Arc::new(default_registry().await);
    let dispatcher = ActionDispatcher::new(backend.clone(), registry, test_config());

    (backend, dispatcher)
}
