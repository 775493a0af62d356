//! Page registry and override state
//!
//! Maps page-context keys to page objects and carries the manual override
//! that pins resolution to a fixed context regardless of the current URL.
//! The registry is a per-scenario value: each scenario builds (or clones the
//! setup of) its own, so override state cannot bleed across scenarios.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::PageObject;

/// Manual page-context override
#[derive(Debug, Clone, Default)]
struct OverrideState {
    page_key: Option<String>,
    active: bool,
}

/// Registry of page objects keyed by page-context key
///
/// The empty string denotes the default/home page. Override mutations are
/// last-write-wins.
#[derive(Default)]
pub struct PageRegistry {
    pages: RwLock<HashMap<String, Arc<dyn PageObject>>>,
    override_state: RwLock<OverrideState>,
}

impl PageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page object under a context key
    pub async fn register(&self, context_key: &str, page: Arc<dyn PageObject>) {
        self.pages
            .write()
            .await
            .insert(context_key.to_string(), page);
    }

    /// Look up the page object for a context key
    pub async fn get(&self, context_key: &str) -> Option<Arc<dyn PageObject>> {
        self.pages.read().await.get(context_key).cloned()
    }

    /// Pin resolution to `page_key` regardless of the current URL
    ///
    /// Used when the URL does not map onto a registered page object.
    pub async fn set_override(&self, page_key: &str) {
        debug!("Setting page object override to {:?}", page_key);
        let mut state = self.override_state.write().await;
        state.page_key = Some(page_key.to_string());
        state.active = true;
    }

    /// Clear the override so URL-derived resolution resumes
    pub async fn clear_override(&self) {
        debug!("Page objects resume default behavior based on current url");
        let mut state = self.override_state.write().await;
        state.active = false;
        state.page_key = None;
    }

    /// The pinned context key, or `None` when no override is active
    pub async fn override_key(&self) -> Option<String> {
        let state = self.override_state.read().await;
        if state.active {
            state.page_key.clone()
        } else {
            None
        }
    }

    /// Reset scenario-scoped state; call between independent scenarios
    pub async fn reset(&self) {
        self.clear_override().await;
    }
}
