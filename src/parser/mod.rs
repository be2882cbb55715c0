//! Record Parser
//!
//! Tokenization of record lines and the typed document they form.

pub mod ast;
pub mod lexer;

pub use ast::{BodyRecord, Document, TrailerRecord};
pub use lexer::{is_integer, parse_integer, tokenize_line, Token, TokenKind};

/// Why a line failed to parse as a fixed-width record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFault {
    /// A token is not an integer
    Token,
    /// Every token is an integer but there are too many or too few
    Arity { found: usize },
}

/// Parse a line into exactly `N` integers.
///
/// Tokens are classified left to right and the first bad one wins, so a
/// line like "1 2 x" is a token fault even though it also has the wrong
/// arity.
pub fn parse_record<const N: usize>(line: &str) -> Result<[i32; N], RecordFault> {
    let values = tokenize_line(line)
        .iter()
        .map(Token::value)
        .collect::<Option<Vec<i32>>>()
        .ok_or(RecordFault::Token)?;

    let found = values.len();
    values
        .try_into()
        .map_err(|_| RecordFault::Arity { found })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_record() {
        assert_eq!(parse_record::<4>("1 2 3 4"), Ok([1, 2, 3, 4]));
        assert_eq!(
            parse_record::<4>("1 2 3"),
            Err(RecordFault::Arity { found: 3 })
        );
        assert_eq!(parse_record::<4>("1 2 3 x"), Err(RecordFault::Token));
    }

    #[test]
    fn test_token_fault_wins_over_arity() {
        assert_eq!(parse_record::<4>("1 2 x"), Err(RecordFault::Token));
        assert_eq!(parse_record::<2>("1 2 3 4 y"), Err(RecordFault::Token));
    }

    #[test]
    fn test_parse_trailer_record() {
        let trailer = parse_record::<2>(" -9  10 ").map(TrailerRecord::from);
        assert_eq!(trailer, Ok(TrailerRecord { x: -9, y: 10 }));
    }

    #[test]
    fn test_blank_line_is_arity_fault() {
        assert_eq!(parse_record::<2>(""), Err(RecordFault::Arity { found: 0 }));
    }
}
