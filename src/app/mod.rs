//! Application layer - everything that works without a window.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages, About content)
//! - `controllers/` - The main window controller and the traits it drives
//! - `services/` - File I/O, find, text helpers
//! - `infrastructure/` - Errors and platform lookups

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::{Controller, EditorView, HostDialogs};
pub use domain::{AboutKind, Document, EditorSettings, Message, WindowState};
pub use infrastructure::error::{AppError, Result};
pub use services::find::{FindOutcome, FindQuery, Match};
