//! Mock backend implementation for testing
//!
//! This module provides an in-memory implementation of the backend traits so
//! the dispatch engine can be exercised without a browser. Elements are
//! registered under the selector they should answer to and record every
//! interaction for later inspection.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::traits::{ElementHandle, OptionInfo, WebBackend};
use crate::locator::SelectorKind;
use crate::Result;

/// Mutable element state behind the handle
#[derive(Debug, Default)]
struct ElementState {
    text: String,
    value: String,
    visible: bool,
    cleared: bool,
    clicks: u32,
    scrolled: bool,
    selected: Option<String>,
}

/// Mock element reference
#[derive(Debug)]
pub struct MockElement {
    id: String,
    tag_name: String,
    options: Vec<OptionInfo>,
    state: RwLock<ElementState>,
}

impl MockElement {
    /// Create a new visible mock element with the given tag name
    pub fn new(tag_name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tag_name: tag_name.to_string(),
            options: Vec::new(),
            state: RwLock::new(ElementState {
                visible: true,
                ..ElementState::default()
            }),
        }
    }

    /// Set the element's text content
    pub fn with_text(mut self, text: &str) -> Self {
        self.state.get_mut().text = text.to_string();
        self
    }

    /// Mark the element as hidden
    pub fn hidden(mut self) -> Self {
        self.state.get_mut().visible = false;
        self
    }

    /// Attach native selection-control options
    pub fn with_options(mut self, options: Vec<OptionInfo>) -> Self {
        self.options = options;
        self
    }

    /// Current input value, as accumulated by [`ElementHandle::type_text`]
    pub async fn value(&self) -> String {
        self.state.read().await.value.clone()
    }

    /// Whether [`ElementHandle::clear`] has been called
    pub async fn was_cleared(&self) -> bool {
        self.state.read().await.cleared
    }

    /// Whether the element has been scrolled into view
    pub async fn was_scrolled(&self) -> bool {
        self.state.read().await.scrolled
    }

    /// Number of clicks received
    pub async fn click_count(&self) -> u32 {
        self.state.read().await.clicks
    }

    /// Value selected via [`ElementHandle::select_by_value`], if any
    pub async fn selected_value(&self) -> Option<String> {
        self.state.read().await.selected.clone()
    }

    /// Replace the element's text content (for simulating page updates)
    pub async fn set_text(&self, text: &str) {
        self.state.write().await.text = text.to_string();
    }

    /// Toggle visibility (for simulating page updates)
    pub async fn set_visible(&self, visible: bool) {
        self.state.write().await.visible = visible;
    }
}

#[async_trait]
impl ElementHandle for MockElement {
    fn id(&self) -> &str {
        &self.id
    }

    async fn click(&self) -> Result<()> {
        self.state.write().await.clicks += 1;
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<()> {
        self.state.write().await.value.push_str(text);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.value.clear();
        state.cleared = true;
        Ok(())
    }

    async fn scroll_into_view(&self) -> Result<()> {
        self.state.write().await.scrolled = true;
        Ok(())
    }

    async fn is_visible(&self) -> Result<bool> {
        Ok(self.state.read().await.visible)
    }

    async fn text(&self) -> Result<String> {
        Ok(self.state.read().await.text.clone())
    }

    async fn tag_name(&self) -> Result<String> {
        Ok(self.tag_name.clone())
    }

    async fn options(&self) -> Result<Vec<OptionInfo>> {
        Ok(self.options.clone())
    }

    async fn select_by_value(&self, value: &str) -> Result<()> {
        self.state.write().await.selected = Some(value.to_string());
        Ok(())
    }
}

/// Mock web-interaction backend
///
/// Holds a settable current URL and a table of elements keyed by the
/// selector they answer to.
#[derive(Default)]
pub struct MockBackend {
    url: RwLock<String>,
    elements: RwLock<HashMap<(SelectorKind, String), Vec<Arc<MockElement>>>>,
}

impl MockBackend {
    /// Create a new mock backend at `about:blank`
    pub fn new() -> Self {
        Self {
            url: RwLock::new("about:blank".to_string()),
            elements: RwLock::new(HashMap::new()),
        }
    }

    /// Set the current URL
    pub async fn set_url(&self, url: &str) {
        *self.url.write().await = url.to_string();
    }

    /// Register an element under the selector it should answer to
    pub async fn insert(&self, kind: SelectorKind, selector: &str, element: Arc<MockElement>) {
        self.elements
            .write()
            .await
            .entry((kind, selector.to_string()))
            .or_default()
            .push(element);
    }

    /// Remove every element registered under the selector
    pub async fn remove(&self, kind: SelectorKind, selector: &str) {
        self.elements
            .write()
            .await
            .remove(&(kind, selector.to_string()));
    }
}

#[async_trait]
impl WebBackend for MockBackend {
    async fn current_url(&self) -> Result<String> {
        Ok(self.url.read().await.clone())
    }

    async fn find(
        &self,
        kind: SelectorKind,
        selector: &str,
    ) -> Result<Option<Arc<dyn ElementHandle>>> {
        Ok(self
            .elements
            .read()
            .await
            .get(&(kind, selector.to_string()))
            .and_then(|matches| matches.first())
            .map(|element| element.clone() as Arc<dyn ElementHandle>))
    }

    async fn find_all(
        &self,
        kind: SelectorKind,
        selector: &str,
    ) -> Result<Vec<Arc<dyn ElementHandle>>> {
        Ok(self
            .elements
            .read()
            .await
            .get(&(kind, selector.to_string()))
            .map(|matches| {
                matches
                    .iter()
                    .map(|element| element.clone() as Arc<dyn ElementHandle>)
                    .collect()
            })
            .unwrap_or_default())
    }
}
