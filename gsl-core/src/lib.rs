//! Core utilities and types for the GSL scaffolding generator.
//!
//! This crate provides fundamental types and utilities used across
//! the GSL crates: scoped file writes and line handling.

mod file;
mod lines;
mod utils;

// File operations
pub use file::{File, WriteResult, read_existing, write_atomic};
// Line handling
pub use lines::{join_lines, split_lines};
// String utilities
pub use utils::{to_screaming_snake_case, to_snake_case};
