//! `pagegrab replay <pages...>` – archive images from saved gallery pages.

use anyhow::{Context, Result};
use pagegrab_core::config::PagegrabConfig;
use pagegrab_core::page::HtmlGallery;
use pagegrab_core::run::{self, RunOptions};
use pagegrab_core::settle::SettleStrategy;
use std::path::{Path, PathBuf};
use url::Url;

use super::print_summary;

pub async fn run_replay(
    cfg: &PagegrabConfig,
    pages: &[PathBuf],
    base_url: Option<&str>,
    dir: &Path,
    name: &str,
) -> Result<()> {
    let base = base_url
        .map(|u| Url::parse(u).with_context(|| format!("invalid base url: {}", u)))
        .transpose()?;

    let mut sources = Vec::with_capacity(pages.len());
    for path in pages {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read page: {}", path.display()))?;
        sources.push(html);
    }

    let mut gallery = HtmlGallery::new(sources, base, &cfg.selectors)?;
    let opts = RunOptions {
        settle: SettleStrategy::Immediate,
        fetch: cfg.fetch.into(),
        output_dir: dir.to_path_buf(),
        output_name: name.to_string(),
    };
    let summary = run::run_gallery(&mut gallery, &opts).await?;
    print_summary(&summary);
    Ok(())
}
