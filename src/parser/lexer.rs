//! Record Lexer
//!
//! Whitespace tokenization of record lines and integer classification
//! of the resulting tokens.

/// Classification of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A complete signed 32-bit integer literal
    Integer(i32),
    /// Anything else, including partial numbers like "12abc"
    Invalid,
}

/// A whitespace-delimited token with its classification
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    /// The integer value, if the token classified as one
    pub fn value(&self) -> Option<i32> {
        match self.kind {
            TokenKind::Integer(value) => Some(value),
            TokenKind::Invalid => None,
        }
    }
}

/// Parse `text` as a signed integer literal.
///
/// Surrounding whitespace is ignored, an explicit `+` sign is allowed, and
/// the whole remaining text must be consumed. Values outside `i32` fail.
pub fn parse_integer(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

/// Whether `text` is a clean integer literal
pub fn is_integer(text: &str) -> bool {
    parse_integer(text).is_some()
}

/// Split a line on whitespace and classify every token
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    line.split_whitespace()
        .map(|text| Token {
            kind: match parse_integer(text) {
                Some(value) => TokenKind::Integer(value),
                None => TokenKind::Invalid,
            },
            text,
        })
        .collect()
}
