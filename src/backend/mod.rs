//! Web-interaction backend layer
//!
//! The core never talks to a browser directly; everything it needs from the
//! page goes through the [`WebBackend`] trait. A full in-memory mock ships
//! with the crate for tests and for embedding without a browser.

pub mod mock;
pub mod traits;

pub use mock::{MockBackend, MockElement};
pub use traits::{ElementHandle, OptionInfo, WebBackend};
