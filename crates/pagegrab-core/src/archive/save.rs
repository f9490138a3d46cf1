//! Writes the finished archive to disk via a `.part` file and an atomic rename.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `gallery-images.zip` → `gallery-images.zip.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Saves `bytes` as `dir/name`, replacing any existing file. Returns the final path.
pub fn save_archive(bytes: &[u8], dir: &Path, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output dir: {}", dir.display()))?;
    let final_path = dir.join(name);
    let tmp = temp_path(&final_path);

    fs::write(&tmp, bytes)
        .with_context(|| format!("failed to write temp archive: {}", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, &final_path) {
        let _ = fs::remove_file(&tmp);
        return Err(e)
            .with_context(|| format!("failed to move archive into place: {}", final_path.display()));
    }
    Ok(final_path)
}
