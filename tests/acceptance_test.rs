//! End-to-end scenario tests
//!
//! Drives the dispatcher against the mock backend and the built-in page
//! registry the way feature steps would: navigate, fill, assert, override.

mod common;

use common::setup_dispatcher;
use selkey::backend::{MockElement, OptionInfo};
use selkey::{ActionKind, Error, SelectorKind};
use std::sync::Arc;

#[tokio::test]
async fn scenario_fill_and_verify_basic_form() {
    let (backend, dispatcher) =
        setup_dispatcher("https://testautomationpractice.blogspot.com/").await;

    let name = Arc::new(MockElement::new("input"));
    let email = Arc::new(MockElement::new("input"));
    backend.insert(SelectorKind::Css, "#name", name.clone()).await;
    backend.insert(SelectorKind::Css, "#email", email.clone()).await;

    dispatcher.enter_text("Name", "Ada Lovelace").await.unwrap();
    dispatcher.enter_text("Email", "ada@example.com").await.unwrap();

    assert!(name.was_cleared().await);
    assert_eq!(name.value().await, "Ada Lovelace");
    assert_eq!(email.value().await, "ada@example.com");

    // The page reflects the typed values; the field assertions pass.
    name.set_text("Ada Lovelace").await;
    dispatcher
        .validate_field_text("Name", "Ada Lovelace")
        .await
        .unwrap();
}

#[tokio::test]
async fn scenario_override_pins_wiki_page_regardless_of_url() {
    // URL says default context, but the scenario pins the wiki page.
    let (backend, dispatcher) = setup_dispatcher("https://example.com/").await;

    let heading = Arc::new(MockElement::new("h1").with_text("Mean Bean Machine"));
    backend
        .insert(SelectorKind::XPath, "//h1", heading.clone())
        .await;

    dispatcher.set_override_locator("wiki").await;
    dispatcher.should_be_visible("ArticleHeading").await.unwrap();
    dispatcher
        .validate_field_text("ArticleHeading", "Mean Bean Machine")
        .await
        .unwrap();

    // Back to URL-derived resolution: the wiki keys no longer resolve.
    dispatcher.stop_override_locator().await;
    let err = dispatcher.should_be_visible("ArticleHeading").await.unwrap_err();
    assert!(matches!(err, Error::LocatorNotFound { .. }));
}

#[tokio::test]
async fn scenario_select_color_from_native_list() {
    let (backend, dispatcher) =
        setup_dispatcher("https://testautomationpractice.blogspot.com/").await;

    let colors = Arc::new(MockElement::new("select").with_options(vec![
        OptionInfo {
            value: "red".to_string(),
            label: "Red".to_string(),
        },
        OptionInfo {
            value: "green".to_string(),
            label: "Green".to_string(),
        },
        OptionInfo {
            value: "blue".to_string(),
            label: "Blue".to_string(),
        },
    ]));
    backend.insert(SelectorKind::Css, "#colors", colors.clone()).await;

    dispatcher.select_option("ColorList", "green").await.unwrap();
    assert_eq!(colors.selected_value().await, Some("green".to_string()));
}

#[tokio::test]
async fn scenario_dismissed_banner_no_longer_exists() {
    let (backend, dispatcher) =
        setup_dispatcher("https://testautomationpractice.blogspot.com/").await;

    let button = Arc::new(MockElement::new("a"));
    backend
        .insert(SelectorKind::Css, "h3 > a", button.clone())
        .await;

    dispatcher.click("GUIElementsButton").await.unwrap();
    assert_eq!(button.click_count().await, 1);

    // The click removed the element from the page.
    backend.remove(SelectorKind::Css, "h3 > a").await;
    dispatcher.should_not_exist("GUIElementsButton").await.unwrap();
}

#[tokio::test]
async fn scenario_fails_fast_on_unknown_locator_key() {
    let (_backend, dispatcher) = setup_dispatcher("https://example.com/").await;

    let err = dispatcher
        .dispatch("NoSuchKey", ActionKind::Click, None)
        .await
        .unwrap_err();

    match err {
        Error::LocatorNotFound { page, key } => {
            assert_eq!(page, "HomePage");
            assert_eq!(key, "NoSuchKey");
        }
        other => panic!("expected LocatorNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn scenario_state_reset_between_scenarios() {
    let (backend, dispatcher) = setup_dispatcher("https://example.com/").await;
    backend
        .insert(SelectorKind::Css, "#name", Arc::new(MockElement::new("input")))
        .await;

    // Scenario one pins an unregistered page and fails.
    dispatcher.set_override_locator("unmapped").await;
    let err = dispatcher.click("Name").await.unwrap_err();
    assert!(matches!(err, Error::PageNotRegistered(_)));

    // Scenario two starts from reset state and passes.
    dispatcher.reset().await;
    dispatcher.click("Name").await.unwrap();
}
