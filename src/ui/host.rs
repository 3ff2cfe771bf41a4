//! FLTK side of the controller seams.

use std::path::{Path, PathBuf};

use fltk::{
    app::{self, Sender},
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::buffer_utils::buffer_text_no_leak;
use super::dialogs::about::show_about_dialog;
use super::dialogs::find::FindPanel;
use super::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::app::controllers::{EditorView, HostDialogs};
use crate::app::domain::{AboutKind, EditorSettings, Message};
use crate::app::services::find::FindQuery;

pub struct FltkView {
    window: Window,
    editor: TextEditor,
    buffer: TextBuffer,
}

impl FltkView {
    pub fn new(window: Window, editor: TextEditor, buffer: TextBuffer) -> Self {
        Self { window, editor, buffer }
    }
}

impl EditorView for FltkView {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_label(title);
    }

    fn cursor(&self) -> usize {
        self.editor.insert_position().max(0) as usize
    }

    fn select(&mut self, start: usize, end: usize) {
        self.buffer.select(start as i32, end as i32);
        self.editor.set_insert_position(end as i32);
        self.editor.show_insert_position();
    }
}

pub struct FltkHost {
    sender: Sender<Message>,
    app_name: String,
    match_case: bool,
    find_panel: Option<FindPanel>,
}

impl FltkHost {
    pub fn new(sender: Sender<Message>, settings: &EditorSettings) -> Self {
        Self {
            sender,
            app_name: settings.app_name.clone(),
            match_case: settings.match_case,
            find_panel: None,
        }
    }
}

impl HostDialogs for FltkHost {
    fn choose_open_path(&mut self, initial_dir: &Path) -> Option<PathBuf> {
        native_open_dialog(initial_dir)
    }

    fn choose_save_path(&mut self, initial_dir: &Path) -> Option<PathBuf> {
        native_save_dialog(initial_dir)
    }

    fn show_find(&mut self, last: Option<&FindQuery>) {
        let (sender, match_case) = (self.sender, self.match_case);
        self.find_panel
            .get_or_insert_with(|| FindPanel::new(sender, match_case))
            .show(last);
    }

    fn find_status(&mut self, status: &str) {
        match self.find_panel {
            Some(ref mut panel) if panel.is_shown() => panel.set_status(status),
            _ => log::info!("{}", status),
        }
    }

    fn show_about(&mut self, kind: AboutKind) {
        show_about_dialog(kind, &self.app_name);
    }

    fn close_all(&mut self) {
        if let Some(ref mut panel) = self.find_panel {
            panel.hide();
        }
        while let Some(mut window) = app::first_window() {
            window.hide();
        }
    }
}
