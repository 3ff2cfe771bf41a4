use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

fn run_chooser(save: bool, title: &str, initial_dir: &Path) -> Option<PathBuf> {
    let kind = if save {
        FileDialogType::BrowseSaveFile
    } else {
        FileDialogType::BrowseFile
    };
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    if let Err(e) = nfc.set_directory(&initial_dir) {
        log::debug!("Cannot start file chooser in {}: {}", initial_dir.display(), e);
    }
    if save {
        nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(initial_dir: &Path) -> Option<PathBuf> {
    run_chooser(false, "Open", initial_dir)
}

pub fn native_save_dialog(initial_dir: &Path) -> Option<PathBuf> {
    run_chooser(true, "Save", initial_dir)
}
