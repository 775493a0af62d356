//! Built-in page objects
//!
//! Locator tables for the pages the stock scenarios run against. Tables are
//! compile-time `phf` maps; a key present in both tables of one page is not
//! a supported configuration.

use phf::phf_map;
use std::sync::Arc;

use super::{PageObject, PageRegistry};

/// Automation-test home page, the default (`""`) page context
pub struct HomePage;

static HOME_CSS: phf::Map<&'static str, &'static str> = phf_map! {
    "GUIElementsButton" => "h3 > a",

    // Basic form elements
    "Name" => "#name",
    "Email" => "#email",
    "Phone" => "#phone",
    "Address" => "#textarea",
    "MaleRadioButton" => "#male",
    "FemaleRadioButton" => "#female",
    // Days-of-the-week checkboxes are handled by a custom step
    "CountryDropdown" => "#country",
    "ColorList" => "#colors",
    "AnimalList" => "#animals",
    "DatePickerCalendar" => ".ui-datepicker-calendar",
    "DatePicker1Input" => "p > #datepicker",
    "DatePicker2Input" => "p > #txtDate",
    "DatePicker3StartDate" => "#start-date",
    "DatePicker3EndDate" => "#end-date",
    "DatePicker3SubmitButton" => ".date-picker-box > .submit-btn",
    "DatePicker3Result" => "#result",
};

static HOME_XPATH: phf::Map<&'static str, &'static str> = phf_map! {
    // Side content
    "WikipediaSearchInput" => "//input[@id='Wikipedia1_wikipedia-search-input']",
};

impl PageObject for HomePage {
    fn name(&self) -> &str {
        "HomePage"
    }

    fn css(&self, key: &str) -> Option<&str> {
        HOME_CSS.get(key).copied()
    }

    fn xpath(&self, key: &str) -> Option<&str> {
        HOME_XPATH.get(key).copied()
    }
}

/// Wikipedia landing page
pub struct WikipediaPage;

static WIKIPEDIA_CSS: phf::Map<&'static str, &'static str> = phf_map! {
    "SearchButton" => "#search-form > fieldset > button",
};

static WIKIPEDIA_XPATH: phf::Map<&'static str, &'static str> = phf_map! {
    "SearchInput" => "//input[@id='searchInput']",
    "Slogan" => "//h1/strong",
};

impl PageObject for WikipediaPage {
    fn name(&self) -> &str {
        "WikipediaPage"
    }

    fn css(&self, key: &str) -> Option<&str> {
        WIKIPEDIA_CSS.get(key).copied()
    }

    fn xpath(&self, key: &str) -> Option<&str> {
        WIKIPEDIA_XPATH.get(key).copied()
    }
}

/// Wikipedia article page, the `wiki` page context
pub struct WikiArticlePage;

static WIKI_ARTICLE_CSS: phf::Map<&'static str, &'static str> = phf_map! {
    "ArticleImage" => "tr > td > span > a > .mw-file-element",
};

static WIKI_ARTICLE_XPATH: phf::Map<&'static str, &'static str> = phf_map! {
    "ArticleHeading" => "//h1",
};

impl PageObject for WikiArticlePage {
    fn name(&self) -> &str {
        "WikiArticlePage"
    }

    fn css(&self, key: &str) -> Option<&str> {
        WIKI_ARTICLE_CSS.get(key).copied()
    }

    fn xpath(&self, key: &str) -> Option<&str> {
        WIKI_ARTICLE_XPATH.get(key).copied()
    }
}

/// Homestar Runner page
pub struct HomestarPage;

static HOMESTAR_XPATH: phf::Map<&'static str, &'static str> = phf_map! {
    "Main" => "//a[contains(text(),'Main')]",
    "Sbemail" => "//a[contains(text(),'Sbemails')]",
};

impl PageObject for HomestarPage {
    fn name(&self) -> &str {
        "HomestarPage"
    }

    fn css(&self, _key: &str) -> Option<&str> {
        None
    }

    fn xpath(&self, key: &str) -> Option<&str> {
        HOMESTAR_XPATH.get(key).copied()
    }
}

/// Build a registry pre-populated with the built-in pages
pub async fn default_registry() -> PageRegistry {
    let registry = PageRegistry::new();
    registry.register("", Arc::new(HomePage)).await;
    registry.register("wiki", Arc::new(WikiArticlePage)).await;
    registry.register("wikipedia", Arc::new(WikipediaPage)).await;
    registry.register("homestarrunner", Arc::new(HomestarPage)).await;
    registry
}
