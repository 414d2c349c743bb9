pub mod ast;
pub mod keywords;
pub mod parser;
pub mod scanner;
pub mod token;

use std::io::Read;

use crate::error::{Result, SyntaxError};

pub use ast::{SelectStatement, NO_LIMIT};
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::{Position, Token, TokenKind};

/// Parses a single query.
pub fn parse(source: &str) -> std::result::Result<SelectStatement, SyntaxError> {
    Parser::new(source).parse()
}

/// Reads the whole stream as UTF-8 text, then parses it as one query.
pub fn parse_reader(mut reader: impl Read) -> Result<SelectStatement> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(parse(&source)?)
}
