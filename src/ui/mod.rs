pub mod buffer_utils;
pub mod dialogs;
pub mod file_dialogs;
pub mod host;
pub mod main_window;
pub mod menu;
