//! Carpet Format
//!
//! Validation and generation of a small line-based numeric input format:
//! a record count, that many `a b g k` rectangle lines, and an `x y` query
//! line.
//!
//! This library provides:
//! - Integer token classification and record parsing
//! - Fail-fast format validation
//! - Random case generation with reference answers
//! - Configuration for the command-line tools

pub mod config;
pub mod generator;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use generator::{generate_case, solve, GenProfile};
pub use parser::{BodyRecord, Document, TrailerRecord};
pub use validation::{validate_document, FormatError};
