//! Live gallery in a browser driven over WebDriver (fantoccini).

use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use url::Url;

use super::{has_class, GalleryPage, ImageSource, NextControl, PageError};
use crate::config::GallerySelectors;

/// Browser session showing the gallery viewer.
pub struct WebDriverGallery {
    client: Client,
    selectors: GallerySelectors,
}

/// Capabilities asking Firefox or Chrome to run without a window.
fn headless_capabilities() -> serde_json::Map<String, serde_json::Value> {
    let mut caps = serde_json::Map::new();
    caps.insert(
        "moz:firefoxOptions".to_string(),
        json!({ "args": ["--headless"] }),
    );
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({ "args": ["--headless=new", "--disable-gpu", "--disable-dev-shm-usage"] }),
    );
    caps
}

impl WebDriverGallery {
    /// Opens a session against `webdriver_url` (geckodriver, chromedriver, ...).
    pub async fn connect(
        webdriver_url: &str,
        headless: bool,
        selectors: GallerySelectors,
    ) -> Result<Self, PageError> {
        let mut builder = ClientBuilder::native();
        if headless {
            builder.capabilities(headless_capabilities());
        }
        tracing::debug!(webdriver_url, headless, "connecting to webdriver");
        let client = builder.connect(webdriver_url).await?;
        Ok(Self { client, selectors })
    }

    /// Navigates to the first gallery page.
    pub async fn open(&mut self, url: &str) -> Result<(), PageError> {
        self.client.goto(url).await?;
        tracing::info!(url, "opened gallery");
        Ok(())
    }

    /// Ends the browser session.
    pub async fn close(self) -> Result<(), PageError> {
        self.client.close().await?;
        Ok(())
    }
}

impl GalleryPage for WebDriverGallery {
    async fn base_url(&mut self) -> Result<Option<Url>, PageError> {
        Ok(Some(self.client.current_url().await?))
    }

    async fn image_sources(&mut self) -> Result<Vec<ImageSource>, PageError> {
        let elements = self
            .client
            .find_all(Locator::Css(&self.selectors.image))
            .await?;
        let mut sources = Vec::with_capacity(elements.len());
        for element in elements {
            // The `src` property is already resolved against the document URL;
            // browsers report "" when the attribute is missing.
            let primary = element.prop("src").await?;
            let fallback = element.attr(&self.selectors.fallback_attr).await?;
            sources.push(ImageSource { primary, fallback });
        }
        Ok(sources)
    }

    async fn next_control(&mut self) -> Result<NextControl, PageError> {
        let found = self
            .client
            .find_all(Locator::Css(&self.selectors.next))
            .await?;
        let Some(next) = found.first() else {
            return Ok(NextControl::Absent);
        };
        let class = next.attr("class").await?;
        if has_class(class.as_deref(), &self.selectors.disabled_class) {
            Ok(NextControl::Disabled)
        } else {
            Ok(NextControl::Enabled)
        }
    }

    async fn click_next(&mut self) -> Result<(), PageError> {
        let next = self
            .client
            .find(Locator::Css(&self.selectors.next))
            .await?;
        next.click().await?;
        Ok(())
    }
}
