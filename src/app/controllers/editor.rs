use std::path::{Path, PathBuf};

use crate::app::domain::{AboutKind, Document, EditorSettings, Message};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform::default_document_dir;
use crate::app::services::file_io;
use crate::app::services::find::{self, FindOutcome, FindQuery};
use crate::app::services::text_ops::line_at;

use super::frontend::{EditorView, HostDialogs};

/// Main window controller: owns the document and routes every [`Message`].
pub struct Controller<V: EditorView, H: HostDialogs> {
    document: Document,
    view: V,
    host: H,
    settings: EditorSettings,
    last_query: Option<FindQuery>,
    /// Last directory used in a file open/save dialog.
    last_directory: Option<PathBuf>,
    closed: bool,
}

impl<V: EditorView, H: HostDialogs> Controller<V, H> {
    pub fn new(view: V, host: H, settings: EditorSettings) -> Self {
        let mut controller = Self {
            document: Document::new(),
            view,
            host,
            settings,
            last_query: None,
            last_directory: None,
            closed: false,
        };
        controller.render();
        controller
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn title(&self) -> String {
        self.document.title(&self.settings.app_name)
    }

    /// Route one message to its handler. Failures are reported on the log
    /// and leave the document as it was.
    pub fn dispatch(&mut self, message: Message) {
        if self.closed {
            log::debug!("Ignoring {:?} after close", message);
            return;
        }
        log::trace!("Dispatching {:?}", message);

        let result = match message {
            Message::FileNew => {
                self.file_new();
                Ok(())
            }
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileClose => {
                self.file_close();
                Ok(())
            }
            Message::EditClear => {
                self.edit_clear();
                Ok(())
            }
            Message::TextEdited => {
                self.text_edited();
                Ok(())
            }
            Message::ShowFind => {
                self.show_find();
                Ok(())
            }
            Message::Find(query) => {
                self.find(query);
                Ok(())
            }
            Message::FindAgain => {
                self.find_again();
                Ok(())
            }
            Message::AboutMe => {
                self.about_me();
                Ok(())
            }
            Message::AboutSoftware => {
                self.about_software();
                Ok(())
            }
        };

        if let Err(e) = result {
            log::error!("{}", e);
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.document.reset();
        self.render();
    }

    pub fn file_open(&mut self) -> Result<()> {
        let dir = self.dialog_directory();
        match self.host.choose_open_path(&dir) {
            Some(path) => self.open_path(&path),
            None => Ok(()),
        }
    }

    /// Load `path` into the document. On failure nothing changes.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let text = file_io::load(path)?;
        self.remember_directory(path);
        log::info!("Opened {}", path.display());
        self.document.load(path.to_path_buf(), text);
        self.render();
        Ok(())
    }

    pub fn file_save(&mut self) -> Result<()> {
        let dir = self.dialog_directory();
        match self.host.choose_save_path(&dir) {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Write the current text to `path` and bind the document to it.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        self.text_edited();
        file_io::save(path, self.document.text())?;
        self.remember_directory(path);
        log::info!("Saved {}", path.display());
        self.document.mark_saved(path.to_path_buf());
        self.update_title();
        Ok(())
    }

    pub fn file_close(&mut self) {
        log::debug!("Closing window");
        self.closed = true;
        self.host.close_all();
    }

    // --- Edit ---

    pub fn edit_clear(&mut self) {
        self.document.clear();
        self.view.set_text("");
    }

    /// Pull the widget's text into the document.
    pub fn text_edited(&mut self) {
        let text = self.view.text();
        self.document.edit(&text);
    }

    // --- Search ---

    pub fn show_find(&mut self) {
        self.host.show_find(self.last_query.as_ref());
    }

    /// Search from the cursor, wrapping once, and select the match.
    pub fn find(&mut self, query: FindQuery) -> FindOutcome {
        self.text_edited();
        let text = self.document.text();
        let outcome = find::find_next(text, &query, self.view.cursor());

        let status = match outcome {
            FindOutcome::Found(m) => {
                let all = find::find_all(text, &query);
                let index = all.iter().position(|a| a.start == m.start).map_or(0, |i| i + 1);
                let mut status = format!("Line {} ({} of {})", line_at(text, m.start), index, all.len());
                if m.wrapped {
                    status.push_str(", wrapped to beginning");
                }
                self.view.select(m.start, m.end);
                status
            }
            FindOutcome::NotFound => format!("Cannot find '{}'", query.term),
        };
        log::debug!("Find {:?}: {}", query.term, status);
        self.host.find_status(&status);
        self.last_query = Some(query);
        outcome
    }

    /// Repeat the previous search, or open the find panel if there is none.
    pub fn find_again(&mut self) -> Option<FindOutcome> {
        match self.last_query.clone() {
            Some(query) => Some(self.find(query)),
            None => {
                self.show_find();
                None
            }
        }
    }

    pub fn last_query(&self) -> Option<&FindQuery> {
        self.last_query.as_ref()
    }

    // --- About ---

    pub fn about_me(&mut self) {
        self.host.show_about(AboutKind::Author);
    }

    pub fn about_software(&mut self) {
        self.host.show_about(AboutKind::Software);
    }

    // --- Rendering ---

    /// Push the document's text and title to the view.
    pub fn render(&mut self) {
        self.view.set_text(self.document.text());
        self.update_title();
    }

    fn update_title(&mut self) {
        let title = self.title();
        self.view.set_title(&title);
    }

    fn dialog_directory(&self) -> PathBuf {
        self.last_directory
            .clone()
            .or_else(|| self.settings.initial_dir.clone())
            .unwrap_or_else(default_document_dir)
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}
