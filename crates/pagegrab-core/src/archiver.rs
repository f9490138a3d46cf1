//! Archive phase: fetch every queued image in order, then write the zip.
//!
//! A failed fetch is logged and the image left out; nothing is retried.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::archive::save_archive;
use crate::fetch::{fetch_bytes_async, FetchOptions};
use crate::run::RunContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub fetched: usize,
    pub failed: usize,
}

/// Fetches each manifest record sequentially into the accumulator.
pub async fn fetch_all(ctx: &mut RunContext, opts: FetchOptions) -> FetchStats {
    let (manifest, accumulator) = ctx.split_for_fetch();
    let total = manifest.len();
    tracing::info!("fetching {} images", total);

    let mut stats = FetchStats::default();
    for (i, record) in manifest.iter().enumerate() {
        match fetch_bytes_async(&record.url, opts).await {
            Ok(bytes) => {
                let size = bytes.len();
                if accumulator.insert(&record.filename, bytes) {
                    tracing::warn!(
                        url = %record.url,
                        "replaced earlier archive entry with the same name: {}",
                        record.filename
                    );
                }
                stats.fetched += 1;
                tracing::info!(
                    bytes = size,
                    "added to archive: {} ({}/{})",
                    record.filename,
                    i + 1,
                    total
                );
            }
            Err(e) => {
                stats.failed += 1;
                tracing::error!(url = %record.url, "failed to fetch {}: {}", record.filename, e);
            }
        }
    }
    stats
}

/// Serializes the accumulator and saves it as `dir/name`.
pub fn finalize(ctx: &RunContext, dir: &Path, name: &str) -> Result<PathBuf> {
    tracing::info!(entries = ctx.accumulator().len(), "creating zip file");
    let bytes = ctx.accumulator().finalize()?;
    let path = save_archive(&bytes, dir, name)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "archive saved");
    Ok(path)
}
