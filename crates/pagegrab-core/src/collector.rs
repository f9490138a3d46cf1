//! Collection phase: scan the current page, click "next", repeat.
//!
//! Collection ends when a scan queues nothing new, even if a next control is
//! still enabled, or when the next control is absent or disabled.

use crate::page::{GalleryPage, NextControl, PageError};
use crate::run::RunContext;
use crate::settle::SettleStrategy;
use crate::url_model::effective_address;

/// Why collection stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectEnd {
    /// A scan found only already-queued images.
    NoNewImages,
    /// The next control was absent or disabled.
    NoNextPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectStats {
    pub pages_scanned: usize,
    /// Successful clicks on the next control.
    pub advances: usize,
    pub end: CollectEnd,
}

/// Queues every not-yet-seen image address on the current page.
///
/// Elements without a usable address are skipped. Returns true when at
/// least one address was newly queued.
pub async fn scan_page<P: GalleryPage>(
    page: &mut P,
    ctx: &mut RunContext,
) -> Result<bool, PageError> {
    let base = page.base_url().await?;
    let sources = page.image_sources().await?;

    let mut found_new = false;
    for source in sources {
        let Some(url) = effective_address(
            source.primary.as_deref(),
            source.fallback.as_deref(),
            base.as_ref(),
        ) else {
            continue;
        };

        if ctx.is_seen(&url) {
            tracing::debug!("already queued: {}", url);
            continue;
        }
        if let Some(record) = ctx.queue(url) {
            tracing::info!("queued: {}", record.filename);
            found_new = true;
        }
    }

    Ok(found_new)
}

/// Clicks the next control if it is present and enabled.
/// Returns false when there is no further page to go to.
pub async fn advance_page<P: GalleryPage>(page: &mut P) -> Result<bool, PageError> {
    match page.next_control().await? {
        NextControl::Enabled => {
            page.click_next().await?;
            Ok(true)
        }
        NextControl::Disabled => {
            tracing::debug!("next control disabled");
            Ok(false)
        }
        NextControl::Absent => {
            tracing::debug!("no next control on page");
            Ok(false)
        }
    }
}

/// Runs the scan/advance loop until the gallery is exhausted.
pub async fn collect<P: GalleryPage>(
    page: &mut P,
    ctx: &mut RunContext,
    settle: SettleStrategy,
) -> Result<CollectStats, PageError> {
    let mut pages_scanned = 0;
    let mut advances = 0;

    let end = loop {
        let found_new = scan_page(page, ctx).await?;
        pages_scanned += 1;
        if !found_new {
            break CollectEnd::NoNewImages;
        }
        if !advance_page(page).await? {
            break CollectEnd::NoNextPage;
        }
        advances += 1;
        settle.settle().await;
    };

    tracing::info!(
        pages_scanned,
        advances,
        queued = ctx.manifest().len(),
        ?end,
        "all images collected"
    );

    Ok(CollectStats {
        pages_scanned,
        advances,
        end,
    })
}
