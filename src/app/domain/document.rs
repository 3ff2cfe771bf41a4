use std::path::{Path, PathBuf};

use crate::app::services::text_ops::extract_filename;

pub const UNTITLED: &str = "Untitled";

/// Whether the window is editing a file on disk or a scratch buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Untitled,
    Bound,
}

/// The text being edited, detached from any widget.
///
/// `dirty` is set by every change to `text` and cleared only by
/// [`Document::load`], [`Document::mark_saved`] and [`Document::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn state(&self) -> WindowState {
        match self.path {
            Some(_) => WindowState::Bound,
            None => WindowState::Untitled,
        }
    }

    pub fn display_name(&self) -> String {
        match self.path {
            Some(ref path) => extract_filename(&path.to_string_lossy()),
            None => UNTITLED.to_string(),
        }
    }

    /// Window title, e.g. `notes.txt | SimplePad`.
    pub fn title(&self, app_name: &str) -> String {
        format!("{} | {}", self.display_name(), app_name)
    }

    /// Replace the text after a user edit. Returns true if anything changed.
    pub fn edit(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text.clear();
        self.text.push_str(text);
        self.dirty = true;
        true
    }

    /// Empty the text in place, keeping the associated path.
    pub fn clear(&mut self) {
        if !self.text.is_empty() {
            self.text.clear();
            self.dirty = true;
        }
    }

    /// Back to an empty, untitled, clean document.
    pub fn reset(&mut self) {
        self.text.clear();
        self.path = None;
        self.dirty = false;
    }

    /// Adopt freshly loaded file content.
    pub fn load(&mut self, path: PathBuf, text: String) {
        self.text = text;
        self.path = Some(path);
        self.dirty = false;
    }

    /// Record that the current text now lives at `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled_and_clean() {
        let doc = Document::new();
        assert_eq!(doc.text(), "");
        assert_eq!(doc.path(), None);
        assert!(!doc.is_dirty());
        assert_eq!(doc.state(), WindowState::Untitled);
        assert_eq!(doc.title("SimplePad"), "Untitled | SimplePad");
    }

    #[test]
    fn test_edit_marks_dirty_only_on_change() {
        let mut doc = Document::new();
        assert!(!doc.edit(""));
        assert!(!doc.is_dirty());

        assert!(doc.edit("hello"));
        assert!(doc.is_dirty());
        assert_eq!(doc.text(), "hello");
    }

    #[test]
    fn test_load_binds_path_and_is_clean() {
        let mut doc = Document::new();
        doc.edit("scratch");
        doc.load(PathBuf::from("/tmp/notes.txt"), "Hello World".to_string());
        assert_eq!(doc.text(), "Hello World");
        assert_eq!(doc.state(), WindowState::Bound);
        assert!(!doc.is_dirty());
        assert_eq!(doc.title("SimplePad"), "notes.txt | SimplePad");
    }

    #[test]
    fn test_clear_keeps_path() {
        let mut doc = Document::new();
        doc.load(PathBuf::from("a.txt"), "abc".to_string());
        doc.clear();
        assert_eq!(doc.text(), "");
        assert_eq!(doc.path(), Some(Path::new("a.txt")));
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_clear_empty_stays_clean() {
        let mut doc = Document::new();
        doc.clear();
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_reset_from_bound() {
        let mut doc = Document::new();
        doc.load(PathBuf::from("a.txt"), "abc".to_string());
        doc.edit("abcd");
        doc.reset();
        assert_eq!(doc, Document::new());
        assert_eq!(doc.state(), WindowState::Untitled);
    }

    #[test]
    fn test_mark_saved_rebinds() {
        let mut doc = Document::new();
        doc.edit("draft");
        doc.mark_saved(PathBuf::from("first.txt"));
        assert_eq!(doc.display_name(), "first.txt");
        doc.edit("draft 2");
        doc.mark_saved(PathBuf::from("second.txt"));
        assert_eq!(doc.display_name(), "second.txt");
        assert!(!doc.is_dirty());
        assert_eq!(doc.text(), "draft 2");
    }
}
