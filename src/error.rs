//! Error types for the query parser

use std::fmt;

use thiserror::Error;

use crate::sql::token::Position;

/// Result type alias for operations that read and parse a query
pub type Result<T> = std::result::Result<T, Error>;

/// Grammar element the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Select,
    Field,
    From,
    TableName,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::Select => "SELECT",
            Expected::Field => "field",
            Expected::From => "FROM",
            Expected::TableName => "table name",
        })
    }
}

/// First grammar violation found in a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("found {}, expected {expected}", quote(.found))]
    Unexpected {
        found: String,
        expected: Expected,
        position: Position,
    },

    /// The LIMIT keyword was not followed by a digit token.
    #[error("found {found}, expected digit")]
    ExpectedDigit { found: String, position: Position },

    /// A digit token too large to be a row limit.
    #[error("found {literal}, expected digit in range")]
    LimitOutOfRange { literal: String, position: Position },
}

impl SyntaxError {
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::Unexpected { position, .. }
            | SyntaxError::ExpectedDigit { position, .. }
            | SyntaxError::LimitOutOfRange { position, .. } => *position,
        }
    }
}

/// Double-quotes a literal, escaping control characters as `\xNN`/`\uNNNN`
/// with the usual short forms for `\n`, `\t` and friends.
fn quote(literal: &str) -> String {
    let mut quoted = String::with_capacity(literal.len() + 2);
    quoted.push('"');
    for c in literal.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\x07' => quoted.push_str("\\a"),
            '\x08' => quoted.push_str("\\b"),
            '\x0c' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\x0b' => quoted.push_str("\\v"),
            c if c < ' ' || c == '\x7f' => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Errors from parsing a query read out of a character stream.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read query: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
