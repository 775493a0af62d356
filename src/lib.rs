//! Selkey: keyword-driven UI test automation core
//!
//! Test steps refer to on-screen elements by a stable semantic name. The core
//! resolves that name to a concrete selector strategy based on the active
//! logical page and executes a typed interaction against the resolved
//! element, delegating all browser work to a pluggable web-interaction
//! backend.

pub mod config;
pub mod error;
pub mod logging;

pub mod actions;
pub mod backend;
pub mod dates;
pub mod locator;
pub mod pages;
pub mod tracker;

// Re-exports
pub use actions::{ActionDispatcher, ActionKind};
pub use config::Config;
pub use error::{Error, Result};
pub use locator::{LocatorDescriptor, LocatorService, SelectorKind};
pub use pages::{PageObject, PageRegistry};

/// Selkey library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
