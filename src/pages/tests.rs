//! Page object and registry tests

use super::builtin::{default_registry, HomePage, WikiArticlePage};
use super::{MapPage, PageObject, PageRegistry};
use crate::locator::SelectorKind;
use crate::Error;
use std::sync::Arc;

#[test]
fn test_css_table_checked_before_xpath() {
    // Same key in both tables: resolution must return the CSS entry.
    let page = MapPage::new("DupPage")
        .with_css("Heading", "h1.title")
        .with_xpath("Heading", "//h1");

    let descriptor = page.locators("Heading").unwrap();
    assert_eq!(descriptor.selector, "h1.title");
    assert_eq!(descriptor.kind, SelectorKind::Css);
}

#[test]
fn test_xpath_fallback() {
    let page = MapPage::new("XPage").with_xpath("Heading", "//h1");

    let descriptor = page.locators("Heading").unwrap();
    assert_eq!(descriptor.selector, "//h1");
    assert_eq!(descriptor.kind, SelectorKind::XPath);
}

#[test]
fn test_locator_not_found_names_page_and_key() {
    let page = MapPage::new("EmptyPage");

    let err = page.locators("Missing").unwrap_err();
    match err {
        Error::LocatorNotFound { ref page, ref key } => {
            assert_eq!(page, "EmptyPage");
            assert_eq!(key, "Missing");
        }
        other => panic!("expected LocatorNotFound, got {:?}", other),
    }
    assert!(err.to_string().contains("EmptyPage"));
    assert!(err.to_string().contains("Missing"));
}

#[test]
fn test_home_page_tables() {
    let descriptor = HomePage.locators("Name").unwrap();
    assert_eq!(descriptor.selector, "#name");
    assert_eq!(descriptor.kind, SelectorKind::Css);

    let descriptor = HomePage.locators("WikipediaSearchInput").unwrap();
    assert_eq!(descriptor.kind, SelectorKind::XPath);
}

#[test]
fn test_wiki_article_page_tables() {
    let descriptor = WikiArticlePage.locators("ArticleHeading").unwrap();
    assert_eq!(descriptor.selector, "//h1");
    assert_eq!(descriptor.kind, SelectorKind::XPath);

    let descriptor = WikiArticlePage.locators("ArticleImage").unwrap();
    assert_eq!(descriptor.kind, SelectorKind::Css);
}

#[tokio::test]
async fn test_registry_lookup() {
    let registry = PageRegistry::new();
    registry
        .register("", Arc::new(MapPage::new("Home").with_css("Name", "#name")))
        .await;

    assert!(registry.get("").await.is_some());
    assert!(registry.get("wiki").await.is_none());
}

#[tokio::test]
async fn test_override_last_write_wins() {
    let registry = PageRegistry::new();
    assert_eq!(registry.override_key().await, None);

    registry.set_override("wiki").await;
    assert_eq!(registry.override_key().await, Some("wiki".to_string()));

    registry.set_override("homestarrunner").await;
    assert_eq!(
        registry.override_key().await,
        Some("homestarrunner".to_string())
    );

    registry.clear_override().await;
    assert_eq!(registry.override_key().await, None);
}

#[tokio::test]
async fn test_reset_clears_override() {
    let registry = PageRegistry::new();
    registry.set_override("wiki").await;
    registry.reset().await;
    assert_eq!(registry.override_key().await, None);
}

#[tokio::test]
async fn test_default_registry_contexts() {
    let registry = default_registry().await;
    for context in ["", "wiki", "wikipedia", "homestarrunner"] {
        assert!(
            registry.get(context).await.is_some(),
            "missing context {:?}",
            context
        );
    }
}
