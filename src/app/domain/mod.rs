//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and window state
//! - Editor settings
//! - About panel content
//! - Message types for the event system

pub mod about;
pub mod document;
pub mod messages;
pub mod settings;

pub use about::{AboutKind, AboutPanel, about_panel};
pub use document::{Document, WindowState};
pub use messages::Message;
pub use settings::EditorSettings;
