//! Locator service
//!
//! Resolves a locator key into a selector and its kind by deriving the active
//! page context from the current URL (or a manual override) and delegating to
//! that page's locator tables. This is the only place URL parsing and
//! override precedence are decided.

use crate::backend::WebBackend;
use crate::pages::PageRegistry;
use crate::{Error, Result};
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

use super::LocatorDescriptor;

/// Locator resolution service
pub struct LocatorService {
    backend: Arc<dyn WebBackend>,
    registry: Arc<PageRegistry>,
}

impl LocatorService {
    /// Create a new locator service
    pub fn new(backend: Arc<dyn WebBackend>, registry: Arc<PageRegistry>) -> Self {
        Self { backend, registry }
    }

    /// Resolve a locator key into a selector and its kind
    ///
    /// Reads the current URL (the sole suspension point of resolution),
    /// computes the page-context key, looks the page up in the registry and
    /// asks it for the locator. Referentially transparent for a fixed URL
    /// and override state.
    #[instrument(skip(self))]
    pub async fn resolve_selector(&self, key: &str) -> Result<LocatorDescriptor> {
        let url = self.backend.current_url().await?;

        let context = match self.registry.override_key().await {
            Some(page_key) => page_key,
            None => page_context_from_url(&url)?,
        };

        let page = self
            .registry
            .get(&context)
            .await
            .ok_or_else(|| Error::page_not_registered(&context))?;

        let descriptor = page.locators(key)?;
        debug!(
            "Resolved {} on page {:?} to {} ({})",
            key, context, descriptor.selector, descriptor.kind
        );

        Ok(descriptor)
    }
}

/// Derive the page-context key from a URL: the first path segment after the
/// origin, or the empty string when the URL has none.
pub fn page_context_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;
    Ok(parsed
        .path_segments()
        .and_then(|mut segments| segments.next())
        .unwrap_or("")
        .to_string())
}
