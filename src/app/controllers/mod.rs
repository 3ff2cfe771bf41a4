//! Controllers layer - orchestration and coordination.
//!
//! - `editor` - the main window controller and its dispatch table
//! - `frontend` - traits the host toolkit implements

pub mod editor;
pub mod frontend;

pub use editor::Controller;
pub use frontend::{EditorView, HostDialogs};
