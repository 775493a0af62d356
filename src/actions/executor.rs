//! Action executor
//!
//! Implements the interaction and assertion primitives once against a single
//! `locate` capability. The selector kind is fixed at construction, so every
//! primitive behaves identically whether the selector is a CSS rule or an
//! XPath expression.
//!
//! Lookups and assertions poll the backend until they pass or the command
//! timeout expires; expiry fails the enclosing assertion. There is no retry
//! beyond that polling.

use crate::backend::{ElementHandle, WebBackend};
use crate::config::Config;
use crate::locator::SelectorKind;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Interaction primitives bound to one selector kind
pub struct ActionExecutor {
    backend: Arc<dyn WebBackend>,
    kind: SelectorKind,
    timeout: Duration,
    poll_interval: Duration,
}

impl ActionExecutor {
    /// Create an executor for the given selector kind
    pub fn for_kind(kind: SelectorKind, backend: Arc<dyn WebBackend>, config: &Config) -> Self {
        Self {
            backend,
            kind,
            timeout: config.command_timeout(),
            poll_interval: config.poll_interval(),
        }
    }

    /// Locate the element, polling until the command timeout
    async fn locate(&self, selector: &str) -> Result<Arc<dyn ElementHandle>> {
        let start = Instant::now();
        loop {
            if let Some(element) = self.backend.find(self.kind, selector).await? {
                return Ok(element);
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::element_not_found(format!(
                    "{} {}",
                    self.kind, selector
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Assert the element's text content equals `text` exactly
    #[instrument(skip(self))]
    pub async fn field_contains(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Text check using {}: {}", self.kind, selector);
        let element = self.locate(selector).await?;
        element.scroll_into_view().await?;

        let start = Instant::now();
        loop {
            let actual = element.text().await?;
            if actual == text {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::assertion(format!(
                    "expected {} to have text {:?} but found {:?}",
                    selector, text, actual
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Clear the element's content and type `text`
    #[instrument(skip(self, text))]
    pub async fn enter_text(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Enter text using {}: {}", self.kind, selector);
        let element = self.locate(selector).await?;
        element.scroll_into_view().await?;
        element.clear().await?;
        element.type_text(text).await
    }

    /// Click the element
    #[instrument(skip(self))]
    pub async fn click(&self, selector: &str) -> Result<()> {
        debug!("Click action using {}: {}", self.kind, selector);
        let element = self.locate(selector).await?;
        element.scroll_into_view().await?;
        element.click().await
    }

    /// Assert the element is visible
    #[instrument(skip(self))]
    pub async fn should_be_visible(&self, selector: &str) -> Result<()> {
        debug!("Visibility check using {}: {}", self.kind, selector);
        let element = self.locate(selector).await?;
        element.scroll_into_view().await?;

        let start = Instant::now();
        loop {
            if element.is_visible().await? {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::assertion(format!(
                    "expected {} to be visible",
                    selector
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Assert zero matching elements exist
    ///
    /// Does not scroll and never raises `ElementNotFound`; the element may
    /// legitimately be absent.
    #[instrument(skip(self))]
    pub async fn should_not_exist(&self, selector: &str) -> Result<()> {
        debug!("Not exist check using {}: {}", self.kind, selector);

        let start = Instant::now();
        loop {
            let count = self.backend.count(self.kind, selector).await?;
            if count == 0 {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::assertion(format!(
                    "expected {} to not exist but found {} match(es)",
                    selector, count
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Choose an option of a selection control
    ///
    /// Native `<select>`: prefer the option whose value attribute equals
    /// `value`, falling back to the option whose visible text matches `value`
    /// case-insensitively. Custom widgets: open via click, then click the
    /// first `[role="option"]` whose whole visible text matches `value`
    /// case-insensitively.
    #[instrument(skip(self))]
    pub async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        debug!("Select option using {}: {} -> {}", self.kind, selector, value);
        let element = self.locate(selector).await?;
        element.scroll_into_view().await?;

        let tag = element.tag_name().await?;
        if tag.eq_ignore_ascii_case("select") {
            let options = element.options().await?;
            if options.iter().any(|option| option.value == value) {
                return element.select_by_value(value).await;
            }
            if let Some(option) = options
                .iter()
                .find(|option| option.label.trim().eq_ignore_ascii_case(value))
            {
                return element.select_by_value(&option.value).await;
            }
            return Err(Error::assertion(format!(
                "no option matching {:?} in {}",
                value, selector
            )));
        }

        // Custom dropdown widget: open it, then pick by visible text.
        element.click().await?;
        let candidates = self
            .backend
            .find_all(SelectorKind::Css, "[role=\"option\"]")
            .await?;
        for candidate in candidates {
            let label = candidate.text().await?;
            if label.trim().eq_ignore_ascii_case(value) {
                return candidate.click().await;
            }
        }

        Err(Error::element_not_found(format!(
            "option {:?} for {}",
            value, selector
        )))
    }
}
