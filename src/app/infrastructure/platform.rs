use std::path::PathBuf;

/// Read an environment variable, treating unset, empty and non-UTF-8 values alike.
pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Directory the file choosers start in when nothing else is known.
///
/// Prefers the user's documents folder, then their home directory, then the
/// working directory.
pub fn default_document_dir() -> PathBuf {
    dirs::document_dir()
        .filter(|p| p.is_dir())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
