//! Validation Engine
//!
//! Clean separation of validation logic from parsing and process concerns.

pub mod engine;

pub use engine::{validate_document, validate_lines, FormatError};
