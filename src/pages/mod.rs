//! Page objects and the page registry
//!
//! A page object is a named pair of lookup tables, one per selector kind,
//! mapping semantic locator keys to selector strings for a single logical
//! page. Pages are registered under a page-context key; the empty string
//! denotes the default/home page.

pub mod builtin;
pub mod registry;

#[cfg(test)]
mod tests;

pub use builtin::{default_registry, HomePage, HomestarPage, WikiArticlePage, WikipediaPage};
pub use registry::PageRegistry;

use crate::locator::{LocatorDescriptor, SelectorKind};
use crate::{Error, Result};
use std::collections::HashMap;

/// One logical page's locator tables
///
/// Implementors provide the two table accessors; resolution order is fixed
/// here: the CSS table is consulted first, then the XPath table, first match
/// wins. A key present in both tables of the same page is not a supported
/// configuration.
pub trait PageObject: Send + Sync {
    /// The page's name, used in error messages
    fn name(&self) -> &str;

    /// Look the key up in the page's CSS table
    fn css(&self, key: &str) -> Option<&str>;

    /// Look the key up in the page's XPath table
    fn xpath(&self, key: &str) -> Option<&str>;

    /// Resolve a locator key to a selector and its kind
    fn locators(&self, key: &str) -> Result<LocatorDescriptor> {
        if let Some(selector) = self.css(key) {
            return Ok(LocatorDescriptor::new(selector, SelectorKind::Css));
        }
        if let Some(selector) = self.xpath(key) {
            return Ok(LocatorDescriptor::new(selector, SelectorKind::XPath));
        }
        Err(Error::locator_not_found(self.name(), key))
    }
}

/// Runtime-defined page object backed by owned maps
///
/// Built-in pages use static tables; this type is for pages assembled at
/// runtime, typically by test authors registering their own pages.
#[derive(Debug, Default)]
pub struct MapPage {
    name: String,
    css: HashMap<String, String>,
    xpath: HashMap<String, String>,
}

impl MapPage {
    /// Create an empty page with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            css: HashMap::new(),
            xpath: HashMap::new(),
        }
    }

    /// Add a CSS table entry
    pub fn with_css(mut self, key: &str, selector: &str) -> Self {
        self.css.insert(key.to_string(), selector.to_string());
        self
    }

    /// Add an XPath table entry
    pub fn with_xpath(mut self, key: &str, selector: &str) -> Self {
        self.xpath.insert(key.to_string(), selector.to_string());
        self
    }
}

impl PageObject for MapPage {
    fn name(&self) -> &str {
        &self.name
    }

    fn css(&self, key: &str) -> Option<&str> {
        self.css.get(key).map(String::as_str)
    }

    fn xpath(&self, key: &str) -> Option<&str> {
        self.xpath.get(key).map(String::as_str)
    }
}
