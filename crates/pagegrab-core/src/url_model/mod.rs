//! Image address normalization and archive filename derivation.
//!
//! Addresses read from the gallery are turned into absolute `http(s)` URLs
//! (protocol-relative ones get an explicit `https:` scheme) so they can be
//! deduplicated as plain strings. Filenames come from the last URL path
//! segment, sanitized for use as a zip entry name.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_entry_name;

use url::Url;

/// Filename used when the URL path yields nothing usable.
pub const DEFAULT_FILENAME: &str = "image.bin";

/// Normalizes one raw address into an absolute `http`/`https` URL string.
///
/// Returns `None` for empty values, unparseable values, relative values with
/// no `base`, and any scheme other than `http`/`https` (`data:`, `blob:`, ...).
///
/// # Examples
///
/// - `normalize_address("//cdn.example.com/x.jpg", None)` → `Some("https://cdn.example.com/x.jpg")`
/// - `normalize_address("/p/2.jpg", Some(&base))` → `base` joined with `/p/2.jpg`
pub fn normalize_address(raw: &str, base: Option<&Url>) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let with_scheme;
    let candidate = if raw.starts_with("//") {
        with_scheme = format!("https:{}", raw);
        with_scheme.as_str()
    } else {
        raw
    };

    let parsed = match Url::parse(candidate) {
        Ok(u) => u,
        Err(url::ParseError::RelativeUrlWithoutBase) => base?.join(candidate).ok()?,
        Err(_) => return None,
    };

    match parsed.scheme() {
        "http" | "https" => Some(parsed.into()),
        _ => None,
    }
}

/// Picks the effective address of an image element: the primary source when
/// it is non-empty, otherwise the fallback attribute, then normalizes it.
pub fn effective_address(
    primary: Option<&str>,
    fallback: Option<&str>,
    base: Option<&Url>,
) -> Option<String> {
    let raw = primary
        .filter(|s| !s.trim().is_empty())
        .or_else(|| fallback.filter(|s| !s.trim().is_empty()))?;
    normalize_address(raw, base)
}

/// Derives the archive entry name for an image URL.
///
/// Uses the last non-empty path segment, sanitized; falls back to
/// [`DEFAULT_FILENAME`].
pub fn derive_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(c) => c,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_entry_name(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
