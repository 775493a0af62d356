//! Action dispatcher
//!
//! Single entry point for test steps: resolves a locator key through the
//! locator service, builds the executor variant matching the resolved
//! selector kind, and invokes the requested operation. One dispatcher per
//! scenario; `reset` clears scenario-scoped state between runs.

use crate::backend::WebBackend;
use crate::config::Config;
use crate::locator::LocatorService;
use crate::pages::PageRegistry;
use crate::Result;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::executor::ActionExecutor;
use super::ActionKind;

/// Locator-to-action dispatch engine
pub struct ActionDispatcher {
    backend: Arc<dyn WebBackend>,
    registry: Arc<PageRegistry>,
    locator: LocatorService,
    config: Config,
}

impl ActionDispatcher {
    /// Create a new dispatcher for one scenario
    pub fn new(backend: Arc<dyn WebBackend>, registry: Arc<PageRegistry>, config: Config) -> Self {
        let locator = LocatorService::new(backend.clone(), registry.clone());
        Self {
            backend,
            registry,
            locator,
            config,
        }
    }

    /// Resolve `key` and perform `action` against the resolved element
    ///
    /// `text` carries the payload for actions that need one and is ignored
    /// by the rest.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, key: &str, action: ActionKind, text: Option<&str>) -> Result<()> {
        debug!("Getting locator for: {}", key);
        let resolved = self.locator.resolve_selector(key).await?;
        debug!(
            "Resolved selector: {} ({})",
            resolved.selector, resolved.kind
        );

        let executor = ActionExecutor::for_kind(resolved.kind, self.backend.clone(), &self.config);
        let text = text.unwrap_or("");

        match action {
            ActionKind::FieldContains => executor.field_contains(&resolved.selector, text).await,
            ActionKind::EnterText => executor.enter_text(&resolved.selector, text).await,
            ActionKind::Click => executor.click(&resolved.selector).await,
            ActionKind::ShouldBeVisible => executor.should_be_visible(&resolved.selector).await,
            ActionKind::ShouldNotExist => executor.should_not_exist(&resolved.selector).await,
            ActionKind::SelectOption => executor.select_option(&resolved.selector, text).await,
        }
    }

    /// Assert the field resolved from `key` has exactly the given text
    pub async fn validate_field_text(&self, key: &str, text: &str) -> Result<()> {
        self.dispatch(key, ActionKind::FieldContains, Some(text)).await
    }

    /// Clear and type into the element resolved from `key`
    pub async fn enter_text(&self, key: &str, text: &str) -> Result<()> {
        self.dispatch(key, ActionKind::EnterText, Some(text)).await
    }

    /// Click the element resolved from `key`
    pub async fn click(&self, key: &str) -> Result<()> {
        self.dispatch(key, ActionKind::Click, None).await
    }

    /// Assert the element resolved from `key` is visible
    pub async fn should_be_visible(&self, key: &str) -> Result<()> {
        self.dispatch(key, ActionKind::ShouldBeVisible, None).await
    }

    /// Assert no element matches the selector resolved from `key`
    pub async fn should_not_exist(&self, key: &str) -> Result<()> {
        self.dispatch(key, ActionKind::ShouldNotExist, None).await
    }

    /// Select an option on the control resolved from `key`
    pub async fn select_option(&self, key: &str, value: &str) -> Result<()> {
        self.dispatch(key, ActionKind::SelectOption, Some(value)).await
    }

    /// Pin page-object resolution to a fixed context key
    ///
    /// Call when the current URL does not map onto a registered page object.
    pub async fn set_override_locator(&self, page_key: &str) {
        self.registry.set_override(page_key).await;
    }

    /// Return to URL-derived page-object resolution
    pub async fn stop_override_locator(&self) {
        self.registry.clear_override().await;
    }

    /// Reset scenario-scoped state; call between independent scenarios
    pub async fn reset(&self) {
        self.registry.reset().await;
    }
}
