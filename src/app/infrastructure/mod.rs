//! Infrastructure layer - external integrations and utilities.
//!
//! - Error types
//! - Platform lookups (environment, user directories)

pub mod error;
pub mod platform;
