//! The seams between the controller and whatever draws the window.
//!
//! FLTK implementations live in `crate::ui::host`; tests use in-memory fakes.

use std::path::{Path, PathBuf};

use crate::app::domain::AboutKind;
use crate::app::services::find::FindQuery;

/// The text area and window chrome.
pub trait EditorView {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn set_title(&mut self, title: &str);
    /// Insert position as a byte offset.
    fn cursor(&self) -> usize;
    /// Select `start..end` and move the cursor to `end`.
    fn select(&mut self, start: usize, end: usize);
}

/// Dialogs and windows owned by the host toolkit.
pub trait HostDialogs {
    /// `None` when the user cancels.
    fn choose_open_path(&mut self, initial_dir: &Path) -> Option<PathBuf>;
    /// `None` when the user cancels.
    fn choose_save_path(&mut self, initial_dir: &Path) -> Option<PathBuf>;
    fn show_find(&mut self, last: Option<&FindQuery>);
    /// Outcome line for the find panel.
    fn find_status(&mut self, status: &str);
    fn show_about(&mut self, kind: AboutKind);
    /// Tear down every window so the event loop ends.
    fn close_all(&mut self);
}
