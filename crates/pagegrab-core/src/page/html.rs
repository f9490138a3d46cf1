//! Offline gallery: a recorded sequence of HTML documents.
//!
//! Clicking "next" moves to the following document; on the last document
//! the click leaves the page unchanged, like a viewer whose last page is
//! idempotent.

use scraper::{Html, Selector};
use url::Url;

use super::{has_class, GalleryPage, ImageSource, NextControl, PageError};
use crate::config::GallerySelectors;

pub struct HtmlGallery {
    pages: Vec<String>,
    current: usize,
    base_url: Option<Url>,
    image: Selector,
    next: Selector,
    fallback_attr: String,
    disabled_class: String,
}

fn parse_selector(selector: &str) -> Result<Selector, PageError> {
    Selector::parse(selector).map_err(|_| PageError::Selector {
        selector: selector.to_string(),
    })
}

impl HtmlGallery {
    /// Builds a replay over `pages` (HTML sources, first page shown first).
    /// `base_url` resolves relative image sources.
    pub fn new(
        pages: Vec<String>,
        base_url: Option<Url>,
        selectors: &GallerySelectors,
    ) -> Result<Self, PageError> {
        if pages.is_empty() {
            return Err(PageError::NoPages);
        }
        Ok(Self {
            pages,
            current: 0,
            base_url,
            image: parse_selector(&selectors.image)?,
            next: parse_selector(&selectors.next)?,
            fallback_attr: selectors.fallback_attr.clone(),
            disabled_class: selectors.disabled_class.clone(),
        })
    }

    /// Index of the page currently shown.
    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn document(&self) -> Html {
        Html::parse_document(&self.pages[self.current])
    }
}

impl GalleryPage for HtmlGallery {
    async fn base_url(&mut self) -> Result<Option<Url>, PageError> {
        Ok(self.base_url.clone())
    }

    async fn image_sources(&mut self) -> Result<Vec<ImageSource>, PageError> {
        let html = self.document();
        let sources = html
            .select(&self.image)
            .map(|el| ImageSource {
                primary: el.value().attr("src").map(str::to_string),
                fallback: el.value().attr(&self.fallback_attr).map(str::to_string),
            })
            .collect();
        Ok(sources)
    }

    async fn next_control(&mut self) -> Result<NextControl, PageError> {
        let html = self.document();
        let state = match html.select(&self.next).next() {
            None => NextControl::Absent,
            Some(el) if has_class(el.value().attr("class"), &self.disabled_class) => {
                NextControl::Disabled
            }
            Some(_) => NextControl::Enabled,
        };
        Ok(state)
    }

    async fn click_next(&mut self) -> Result<(), PageError> {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
        }
        Ok(())
    }
}
