//! Action execution layer
//!
//! Interaction and assertion primitives over resolved selectors, and the
//! dispatcher that ties locator resolution to them. The action set is a
//! closed enum so the dispatch table is exhaustive at compile time.

pub mod dispatcher;
pub mod executor;


pub use dispatcher::ActionDispatcher;
pub use executor::ActionExecutor;

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Category of interaction or assertion to perform on a resolved element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Assert the element's text content equals the payload exactly
    FieldContains,
    /// Clear the element and type the payload
    EnterText,
    /// Click the element
    Click,
    /// Assert the element is visible
    ShouldBeVisible,
    /// Assert zero matching elements exist
    ShouldNotExist,
    /// Choose an option of a selection control by value or visible text
    SelectOption,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::FieldContains => "fieldContains",
            ActionKind::EnterText => "enterText",
            ActionKind::Click => "click",
            ActionKind::ShouldBeVisible => "shouldBeVisible",
            ActionKind::ShouldNotExist => "shouldNotExist",
            ActionKind::SelectOption => "selectOption",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "fieldContains" => Ok(ActionKind::FieldContains),
            "enterText" => Ok(ActionKind::EnterText),
            "click" => Ok(ActionKind::Click),
            "shouldBeVisible" => Ok(ActionKind::ShouldBeVisible),
            "shouldNotExist" => Ok(ActionKind::ShouldNotExist),
            "selectOption" => Ok(ActionKind::SelectOption),
            other => Err(Error::UnrecognizedActionKind(other.to_string())),
        }
    }
}
