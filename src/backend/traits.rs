//! Web-interaction backend traits
//!
//! This module defines the abstract interface between the dispatch engine and
//! whatever drives the actual browser.

use crate::locator::SelectorKind;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// One `<option>` entry of a native selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionInfo {
    /// The option's value attribute
    pub value: String,
    /// The option's visible text
    pub label: String,
}

/// Handle to a located DOM element
///
/// All interaction primitives operate on handles produced by
/// [`WebBackend::find`]; a handle stays bound to the element it was resolved
/// from.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Get element ID
    fn id(&self) -> &str;

    /// Click the element
    async fn click(&self) -> Result<()>;

    /// Type text into the element
    async fn type_text(&self, text: &str) -> Result<()>;

    /// Clear the element's current content
    async fn clear(&self) -> Result<()>;

    /// Scroll the element into view
    async fn scroll_into_view(&self) -> Result<()>;

    /// Check if the element is visible
    async fn is_visible(&self) -> Result<bool>;

    /// Get the element's text content
    async fn text(&self) -> Result<String>;

    /// Get the element's tag name, lowercase
    async fn tag_name(&self) -> Result<String>;

    /// Enumerate the options of a native selection control
    async fn options(&self) -> Result<Vec<OptionInfo>>;

    /// Select the option whose value attribute equals `value`
    async fn select_by_value(&self, value: &str) -> Result<()>;
}

/// Web-interaction backend
///
/// Supplies the current URL and element location by CSS rule or XPath
/// expression. Lookup misses are `Ok(None)` / empty, not errors; deciding
/// whether absence is a failure belongs to the caller.
#[async_trait]
pub trait WebBackend: Send + Sync {
    /// Get the URL of the current page
    async fn current_url(&self) -> Result<String>;

    /// Find the first element matching the selector
    async fn find(
        &self,
        kind: SelectorKind,
        selector: &str,
    ) -> Result<Option<Arc<dyn ElementHandle>>>;

    /// Find all elements matching the selector, in document order
    async fn find_all(
        &self,
        kind: SelectorKind,
        selector: &str,
    ) -> Result<Vec<Arc<dyn ElementHandle>>>;

    /// Count elements matching the selector
    async fn count(&self, kind: SelectorKind, selector: &str) -> Result<usize> {
        Ok(self.find_all(kind, selector).await?.len())
    }
}
