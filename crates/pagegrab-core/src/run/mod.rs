//! Whole run: `collecting → archiving → done`.

mod context;

pub use context::{ImageRecord, RunContext, RunPhase};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::archiver::{self, FetchStats};
use crate::collector::{self, CollectStats};
use crate::fetch::FetchOptions;
use crate::page::GalleryPage;
use crate::settle::SettleStrategy;

/// Knobs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub settle: SettleStrategy,
    pub fetch: FetchOptions,
    pub output_dir: PathBuf,
    pub output_name: String,
}

impl RunOptions {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            settle: SettleStrategy::default(),
            fetch: FetchOptions::default(),
            output_dir: output_dir.as_ref().to_path_buf(),
            output_name: "gallery-images.zip".to_string(),
        }
    }
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// `None` when collection stopped on a page driver error.
    pub collect: Option<CollectStats>,
    pub fetch: FetchStats,
    pub manifest: Vec<ImageRecord>,
    pub archive_path: PathBuf,
    pub archive_entries: usize,
}

/// Collects every image reachable through the gallery's next control, then
/// fetches them and saves one archive.
///
/// A page driver error ends collection early; whatever was queued so far is
/// still archived. Only archive serialization or save errors fail the run.
pub async fn run_gallery<P: GalleryPage>(page: &mut P, opts: &RunOptions) -> Result<RunSummary> {
    let mut ctx = RunContext::new();
    tracing::info!("starting bulk download to zip");

    let collect = match collector::collect(page, &mut ctx, opts.settle).await {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::error!(
                queued = ctx.manifest().len(),
                "collection stopped by page error: {}",
                e
            );
            None
        }
    };

    ctx.advance_phase(RunPhase::Archiving);
    let fetch = archiver::fetch_all(&mut ctx, opts.fetch).await;
    let archive_path = archiver::finalize(&ctx, &opts.output_dir, &opts.output_name)?;
    ctx.advance_phase(RunPhase::Done);
    tracing::info!("download complete");

    Ok(RunSummary {
        collect,
        fetch,
        archive_entries: ctx.accumulator().len(),
        manifest: ctx.manifest().to_vec(),
        archive_path,
    })
}
