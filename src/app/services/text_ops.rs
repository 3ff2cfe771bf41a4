use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// 1-based line number containing the byte position `pos`.
///
/// Positions past the end count as the last line.
pub fn line_at(text: &str, pos: usize) -> usize {
    let end = floor_char_boundary(text, pos);
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Largest char boundary not greater than `pos`, clamped to the text length.
pub fn floor_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    while !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}
