//! Locator resolution layer
//!
//! Maps semantic locator keys onto concrete selectors. The selector kind is
//! decided exactly once, at resolution time; callers downstream never branch
//! on it themselves.

pub mod service;


pub use service::LocatorService;

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Strategy used to find an element on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    /// CSS rule, e.g. `#name`
    Css,
    /// XPath expression, e.g. `//h1`
    XPath,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorKind::Css => write!(f, "CSS"),
            SelectorKind::XPath => write!(f, "XPATH"),
        }
    }
}

impl FromStr for SelectorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CSS" => Ok(SelectorKind::Css),
            "XPATH" => Ok(SelectorKind::XPath),
            other => Err(Error::UnsupportedSelectorKind(other.to_string())),
        }
    }
}

/// Immutable result of resolving a locator key against the active page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorDescriptor {
    /// The concrete selector string
    pub selector: String,
    /// The strategy the selector should be located with
    pub kind: SelectorKind,
}

impl LocatorDescriptor {
    /// Create a new descriptor
    pub fn new<S: Into<String>>(selector: S, kind: SelectorKind) -> Self {
        Self {
            selector: selector.into(),
            kind,
        }
    }
}
