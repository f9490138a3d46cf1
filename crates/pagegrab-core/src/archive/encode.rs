//! Zip serialization of the accumulated entries.

use anyhow::{Context, Result};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

use super::ArchiveEntry;

/// Writes `entries` into a deflate-compressed zip held in memory.
pub fn encode_zip(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for entry in entries {
        zip.start_file(entry.name.as_str(), options)
            .with_context(|| format!("start zip entry {}", entry.name))?;
        zip.write_all(&entry.data)
            .with_context(|| format!("write zip entry {}", entry.name))?;
    }

    let cursor = zip.finish().context("finish zip archive")?;
    Ok(cursor.into_inner())
}
