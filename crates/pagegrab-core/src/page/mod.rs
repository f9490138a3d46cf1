//! Access to the gallery viewer's document.
//!
//! The collector only needs three things from a page: the raw sources of
//! its image elements, the state of the "next" control, and a way to click
//! it. [`GalleryPage`] captures that; [`WebDriverGallery`] talks to a live
//! browser and [`HtmlGallery`] replays recorded HTML pages.

mod error;
mod html;
mod webdriver;

pub use error::PageError;
pub use html::HtmlGallery;
pub use webdriver::WebDriverGallery;

use url::Url;

/// Raw source values read from one image element, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSource {
    /// Primary source (`src`).
    pub primary: Option<String>,
    /// Framework-specific fallback attribute (e.g. `ng-src`).
    pub fallback: Option<String>,
}

/// State of the viewer's "next page" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextControl {
    Absent,
    Disabled,
    Enabled,
}

/// A document showing one gallery page at a time.
#[allow(async_fn_in_trait)]
pub trait GalleryPage {
    /// URL of the current document, used to resolve relative image sources.
    async fn base_url(&mut self) -> Result<Option<Url>, PageError>;

    /// Sources of every image element currently in the document, in document order.
    async fn image_sources(&mut self) -> Result<Vec<ImageSource>, PageError>;

    /// Looks up the "next page" control.
    async fn next_control(&mut self) -> Result<NextControl, PageError>;

    /// Triggers the "next page" control. Only called after
    /// [`next_control`](Self::next_control) reported [`NextControl::Enabled`].
    async fn click_next(&mut self) -> Result<(), PageError>;
}

/// True when a whitespace-separated `class` attribute contains `class`.
pub(crate) fn has_class(class_attr: Option<&str>, class: &str) -> bool {
    class_attr
        .map(|attr| attr.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}
