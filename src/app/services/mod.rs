//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - File loading and saving
//! - Find
//! - Text operations

pub mod file_io;
pub mod find;
pub mod text_ops;
