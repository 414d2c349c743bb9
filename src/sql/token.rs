use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Special tokens
    Illegal, Eof,

    // Literals
    Ident, Digit,

    // Single-character tokens
    Asterisk, Comma,

    // Keywords
    Select, From, Limit,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Digit => "DIGIT",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Comma => "COMMA",
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Limit => "LIMIT",
        };
        f.write_str(name)
    }
}

/// Location of the first character of a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Position {
    /// Byte offset into the source.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            literal: literal.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.literal, self.position)
    }
}
