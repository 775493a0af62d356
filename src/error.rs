//! Unified error types for Selkey

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Selkey
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP errors from the resource tracker
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parse errors
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Locator key absent from both tables of the active page
    #[error("Unable to find CSS or XPATH locator in {page}: {key}")]
    LocatorNotFound { page: String, key: String },

    /// No page object registered for the context key
    #[error("No page object registered for context: {0:?}")]
    PageNotRegistered(String),

    /// Resolved selector matched nothing during an action expecting presence
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Selector kind outside the supported set reached the executor factory
    #[error("Unsupported selector kind: {0}")]
    UnsupportedSelectorKind(String),

    /// Action kind outside the supported set reached the dispatch table
    #[error("Unrecognized action kind: {0}")]
    UnrecognizedActionKind(String),

    /// Assertion failed against the live page
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Web-interaction backend failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// Resource tracker failure
    #[error("Tracker error: {0}")]
    Tracker(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new locator not found error
    pub fn locator_not_found<P: Into<String>, K: Into<String>>(page: P, key: K) -> Self {
        Error::LocatorNotFound {
            page: page.into(),
            key: key.into(),
        }
    }

    /// Create a new page not registered error
    pub fn page_not_registered<S: Into<String>>(context: S) -> Self {
        Error::PageNotRegistered(context.into())
    }

    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(msg: S) -> Self {
        Error::ElementNotFound(msg.into())
    }

    /// Create a new assertion error
    pub fn assertion<S: Into<String>>(msg: S) -> Self {
        Error::Assertion(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new backend error
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Error::Backend(msg.into())
    }

    /// Create a new tracker error
    pub fn tracker<S: Into<String>>(msg: S) -> Self {
        Error::Tracker(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}
