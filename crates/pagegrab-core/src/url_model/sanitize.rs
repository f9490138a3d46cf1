//! Zip entry name sanitization.

/// Sanitizes a candidate entry name so it stays a flat, portable file name
/// inside the archive.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`, one for one
/// - Trims leading/trailing spaces and dots
/// - Limits length to 255 bytes
///
/// Underscores already in the name are kept as written, so names that differ
/// only in underscores stay distinct.
pub fn sanitize_entry_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let out: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
