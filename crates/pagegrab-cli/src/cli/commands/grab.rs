//! `pagegrab grab <url>` – drive a live gallery over WebDriver.

use anyhow::{Context, Result};
use pagegrab_core::config::PagegrabConfig;
use pagegrab_core::page::WebDriverGallery;
use pagegrab_core::run::{self, RunOptions};
use pagegrab_core::settle::SettleStrategy;
use std::path::Path;

use super::print_summary;

pub async fn run_grab(cfg: &PagegrabConfig, url: &str, dir: &Path, name: &str) -> Result<()> {
    let mut gallery =
        WebDriverGallery::connect(&cfg.webdriver_url, cfg.headless, cfg.selectors.clone())
            .await
            .with_context(|| format!("connect to webdriver at {}", cfg.webdriver_url))?;

    let result = async {
        gallery.open(url).await.context("open gallery page")?;
        let opts = RunOptions {
            settle: SettleStrategy::Fixed(cfg.settle_delay()),
            fetch: cfg.fetch.into(),
            output_dir: dir.to_path_buf(),
            output_name: name.to_string(),
        };
        run::run_gallery(&mut gallery, &opts).await
    }
    .await;

    if let Err(e) = gallery.close().await {
        tracing::warn!("closing browser session failed: {}", e);
    }

    let summary = result?;
    print_summary(&summary);
    Ok(())
}
