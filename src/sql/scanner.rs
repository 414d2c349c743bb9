use std::{iter::Peekable, str::CharIndices};

use super::{keywords, token::{Position, Token, TokenKind}};

/// Pull-based tokenizer over a query string.
///
/// Tokens are produced one per [`Scanner::scan`] call. The most recently
/// scanned token can be pushed back once with [`Scanner::unscan`].
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
    last: Option<Token>,
    unscanned: bool,
}

impl<'a> Scanner<'a> {
    /// A NUL character ends the input.
    pub fn new(source: &'a str) -> Self {
        let source = source.split_once('\0').map_or(source, |(head, _)| head);
        Scanner {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
            last: None,
            unscanned: false,
        }
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns an `Eof` token at the end position.
    pub fn scan(&mut self) -> Token {
        if self.unscanned {
            self.unscanned = false;
            if let Some(token) = &self.last {
                return token.clone();
            }
        }

        let token = self.scan_token();
        log::trace!("scanned {token}");
        self.last = Some(token.clone());
        token
    }

    /// Pushes the last scanned token back so the next `scan` returns it again.
    /// Only a single level of pushback is kept.
    pub fn unscan(&mut self) {
        self.unscanned = true;
    }

    /// Consumes the scanner, yielding tokens up to, but not including, `Eof`.
    pub fn tokens(mut self) -> impl Iterator<Item = Token> + 'a {
        std::iter::from_fn(move || {
            let token = self.scan();
            (!token.is(TokenKind::Eof)).then_some(token)
        })
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position();
        let Some(c) = self.advance() else {
            return Token::new(TokenKind::Eof, "", start);
        };
        match c {
            '*' => self.make_token(TokenKind::Asterisk, start),
            ',' => self.make_token(TokenKind::Comma, start),
            c if c.is_ascii_digit() => self.number(start),
            c if is_ident_start(c) => self.identifier(start),
            _ => self.make_token(TokenKind::Illegal, start),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    fn number(&mut self, start: Position) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.make_token(TokenKind::Digit, start)
    }

    fn identifier(&mut self, start: Position) -> Token {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let end = self.offset();
        let text = &self.source[start.offset..end];
        let kind = keywords::get(text).unwrap_or(TokenKind::Ident);
        self.make_token(kind, start)
    }

    fn make_token(&mut self, kind: TokenKind, start: Position) -> Token {
        let end = self.offset();
        Token::new(kind, &self.source[start.offset..end], start)
    }

    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |&(i, _)| i)
    }

    fn position(&mut self) -> Position {
        Position {
            offset: self.offset(),
            line: self.line,
            column: self.column,
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
