//! Reading and writing the document's file.
//!
//! Content is stored verbatim: line endings are kept as found, and a missing
//! final newline stays missing.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::app::infrastructure::error::{AppError, Result};

/// Read the whole file as UTF-8 text.
///
/// Nothing is returned unless the entire file was read. Text containing NUL
/// is rejected: the text widget stops at the first NUL, so the rest would be
/// dropped on the next save.
pub fn load(path: &Path) -> Result<String> {
    let fail = |source| AppError::Load {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(fail)?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(fail)?;
    if let Some(pos) = text.find('\0') {
        return Err(fail(std::io::Error::new(
            ErrorKind::InvalidData,
            format!("file contains a NUL byte at offset {}", pos),
        )));
    }
    log::debug!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Write `text` to `path`, replacing any previous content.
pub fn save(path: &Path, text: &str) -> Result<()> {
    let fail = |source| AppError::Save {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(fail)?;
    let mut out = BufWriter::new(file);
    out.write_all(text.as_bytes()).map_err(fail)?;
    let file = out.into_inner().map_err(|e| fail(e.into_error()))?;
    file.sync_all().map_err(fail)?;
    log::debug!("Saved {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        for text in ["", "Hello World", "Hello World\n", "a\r\nb\r\n", "tab\there\n\n世界"] {
            save(&path, text).unwrap();
            assert_eq!(load(&path).unwrap(), text);
        }
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        save(&path, "a much longer first version").unwrap();
        save(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, AppError::Load { .. }));
        assert_eq!(err.path(), path.as_path());
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();
        assert!(matches!(load(&path), Err(AppError::Load { .. })));
    }

    #[test]
    fn test_load_rejects_nul_byte() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nul.txt");
        std::fs::write(&path, b"abc\0def").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, AppError::Load { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        // The file itself is left alone.
        assert_eq!(std::fs::read(&path).unwrap(), b"abc\0def");
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("notes.txt");
        let err = save(&path, "text").unwrap_err();
        assert!(matches!(err, AppError::Save { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(matches!(load(dir.path()), Err(AppError::Load { .. })));
    }
}
