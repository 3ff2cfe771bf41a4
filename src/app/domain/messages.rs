use crate::app::services::find::FindQuery;

/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileClose,

    // Edit
    EditClear,
    TextEdited,

    // Search
    ShowFind,
    Find(FindQuery),
    FindAgain,

    // About
    AboutMe,
    AboutSoftware,
}
