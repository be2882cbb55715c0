//! Validation Engine
//!
//! Fail-fast structural check of a whole input, separated from tokenizing
//! (see [`crate::parser`]) and from process concerns (see the binaries).

use thiserror::Error;

use crate::parser::{
    parse_integer, parse_record, BodyRecord, Document, RecordFault, TrailerRecord,
};

/// Lines every input needs: header, at least one body record, trailer.
pub const MIN_LINES: usize = 3;

/// Width of a body record
pub const BODY_ARITY: usize = 4;

/// Width of the trailer record
pub const TRAILER_ARITY: usize = 2;

/// The first rule an input violates. Variants are listed in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("not enough lines: expected at least 3, found {found}")]
    InsufficientInput { found: usize },

    #[error("first line is not an integer")]
    MalformedHeader,

    #[error("incorrect number of lines: header declares {declared} records, found {found} lines")]
    LineCountMismatch { declared: i32, found: usize },

    #[error("line {line} does not contain exactly 4 integers (found {found})")]
    MalformedBodyArity { line: usize, found: usize },

    #[error("line {line} contains non-integer values")]
    MalformedBodyToken { line: usize },

    #[error("last line does not contain exactly 2 integers (found {found})")]
    MalformedTrailerArity { found: usize },

    #[error("last line contains non-integer values")]
    MalformedTrailerToken,
}

impl FormatError {
    /// Zero-based line the error points at, when it is tied to one line
    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::MalformedHeader => Some(0),
            FormatError::MalformedBodyArity { line, .. }
            | FormatError::MalformedBodyToken { line } => Some(*line),
            _ => None,
        }
    }
}

/// Validate an entire input and return its typed form
pub fn validate_document(content: &str) -> Result<Document, FormatError> {
    let lines: Vec<&str> = content.lines().collect();
    validate_lines(&lines)
}

/// Validate input that has already been split into lines
pub fn validate_lines(lines: &[&str]) -> Result<Document, FormatError> {
    if lines.len() < MIN_LINES {
        return Err(FormatError::InsufficientInput { found: lines.len() });
    }

    let declared = parse_integer(lines[0]).ok_or(FormatError::MalformedHeader)?;

    // A negative count can never match, so it falls out here too
    let expected = i64::from(declared) + 2;
    if i64::try_from(lines.len()).ok() != Some(expected) {
        return Err(FormatError::LineCountMismatch {
            declared,
            found: lines.len(),
        });
    }

    let last = lines.len() - 1;
    let mut records = Vec::with_capacity(last - 1);
    for (line, text) in lines.iter().enumerate().take(last).skip(1) {
        let record = parse_record::<BODY_ARITY>(text).map_err(|fault| match fault {
            RecordFault::Token => FormatError::MalformedBodyToken { line },
            RecordFault::Arity { found } => FormatError::MalformedBodyArity { line, found },
        })?;
        records.push(BodyRecord::from(record));
    }

    let trailer = parse_record::<TRAILER_ARITY>(lines[last]).map_err(|fault| match fault {
        RecordFault::Token => FormatError::MalformedTrailerToken,
        RecordFault::Arity { found } => FormatError::MalformedTrailerArity { found },
    })?;

    log::debug!("validated {} body records", records.len());
    Ok(Document::new(records, TrailerRecord::from(trailer)))
}
