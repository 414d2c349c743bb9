use crate::error::{Expected, SyntaxError};

use super::{
    ast::{SelectStatement, NO_LIMIT},
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// Recursive-descent parser for
///
/// ```text
/// statement   := "SELECT" field_list "FROM" table_name [ "LIMIT" digit ]
/// field_list  := "*" | identifier ( "," identifier )*
/// table_name  := identifier
/// ```
///
/// Tokens are pulled from the scanner one at a time; the only lookahead is
/// a single `unscan` of the token just read.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            scanner: Scanner::new(source),
        }
    }

    pub fn parse(mut self) -> Result<SelectStatement, SyntaxError> {
        match self.select_stmt() {
            Ok(stmt) => {
                log::debug!("parsed statement: {stmt:?}");
                Ok(stmt)
            }
            Err(err) => {
                log::debug!("syntax error at {}: {err}", err.position());
                Err(err)
            }
        }
    }

    fn select_stmt(&mut self) -> Result<SelectStatement, SyntaxError> {
        self.consume(TokenKind::Select, Expected::Select)?;
        let fields = self.select_list()?;
        self.consume(TokenKind::From, Expected::From)?;
        let table_name = self.table_reference()?;
        let limit = self.limit_clause()?;
        Ok(SelectStatement {
            fields,
            table_name,
            limit,
        })
    }

    fn select_list(&mut self) -> Result<Vec<String>, SyntaxError> {
        if self.scanner.scan().is(TokenKind::Asterisk) {
            return Ok(vec!["*".to_string()]);
        }
        self.scanner.unscan();

        let mut fields = Vec::new();
        loop {
            fields.push(self.consume(TokenKind::Ident, Expected::Field)?.literal);
            if !self.scanner.scan().is(TokenKind::Comma) {
                // Leave the boundary token for the FROM check.
                self.scanner.unscan();
                break;
            }
        }
        Ok(fields)
    }

    fn table_reference(&mut self) -> Result<String, SyntaxError> {
        Ok(self.consume(TokenKind::Ident, Expected::TableName)?.literal)
    }

    /// Anything after the table name other than LIMIT is left unread.
    fn limit_clause(&mut self) -> Result<i64, SyntaxError> {
        if !self.scanner.scan().is(TokenKind::Limit) {
            self.scanner.unscan();
            return Ok(NO_LIMIT);
        }

        let token = self.scanner.scan();
        if !token.is(TokenKind::Digit) {
            return Err(SyntaxError::ExpectedDigit {
                found: token.literal,
                position: token.position,
            });
        }
        token
            .literal
            .parse::<i64>()
            .map_err(|_| SyntaxError::LimitOutOfRange {
                literal: token.literal.clone(),
                position: token.position,
            })
    }

    fn consume(&mut self, kind: TokenKind, expected: Expected) -> Result<Token, SyntaxError> {
        let token = self.scanner.scan();
        if token.is(kind) {
            return Ok(token);
        }
        Err(SyntaxError::Unexpected {
            found: token.literal,
            expected,
            position: token.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::token::Position;

    fn parse(source: &str) -> Result<SelectStatement, SyntaxError> {
        Parser::new(source).parse()
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_field_with_lowercase_limit() {
        let stmt = parse("SELECT name FROM tbl limit 1").unwrap();
        assert_eq!(
            stmt,
            SelectStatement {
                fields: fields(&["name"]),
                table_name: "tbl".to_string(),
                limit: 1,
            }
        );
    }

    #[test]
    fn multiple_fields_keep_order() {
        let stmt = parse("SELECT first_name, last_name, age FROM my_table").unwrap();
        assert_eq!(stmt.fields, fields(&["first_name", "last_name", "age"]));
        assert_eq!(stmt.table_name, "my_table");
        assert_eq!(stmt.limit, NO_LIMIT);
    }

    #[test]
    fn wildcard() {
        let stmt = parse("SELECT * FROM my_table limit 140").unwrap();
        assert_eq!(stmt.fields, fields(&["*"]));
        assert_eq!(stmt.limit, 140);
    }

    #[test]
    fn fields_may_span_lines() {
        let stmt = parse("select\n\ta ,\r\n b\nfrom t").unwrap();
        assert_eq!(stmt.fields, fields(&["a", "b"]));
    }

    #[test]
    fn limit_zero() {
        assert_eq!(parse("SELECT a FROM t LIMIT 0").unwrap().limit, 0);
    }

    #[test]
    fn trailing_input_is_not_validated() {
        let stmt = parse("SELECT a FROM t WHERE x = 1").unwrap();
        assert_eq!(stmt.table_name, "t");
        assert_eq!(stmt.limit, NO_LIMIT);

        let stmt = parse("SELECT a FROM t LIMIT 3 ; garbage !").unwrap();
        assert_eq!(stmt.limit, 3);
    }

    #[test]
    fn reference_error_messages() {
        let cases = [
            ("foo", r#"found "foo", expected SELECT"#),
            ("SELECT !", r#"found "!", expected field"#),
            ("SELECT field xxx", r#"found "xxx", expected FROM"#),
            ("SELECT field FROM sorbo limit rumit", "found rumit, expected digit"),
            ("SELECT field FROM *", r#"found "*", expected table name"#),
        ];
        for (source, message) in cases {
            assert_eq!(parse(source).unwrap_err().to_string(), message, "{source}");
        }
    }

    #[test]
    fn eof_is_reported_with_empty_literal() {
        assert_eq!(parse("").unwrap_err().to_string(), r#"found "", expected SELECT"#);
        assert_eq!(
            parse("SELECT a,").unwrap_err().to_string(),
            r#"found "", expected field"#
        );
        assert_eq!(
            parse("SELECT a FROM t LIMIT").unwrap_err().to_string(),
            "found , expected digit"
        );
    }

    #[test]
    fn control_characters_are_escaped_in_messages() {
        assert_eq!(
            parse("SELECT \u{1}").unwrap_err().to_string(),
            r#"found "\x01", expected field"#
        );
    }

    #[test]
    fn nul_terminates_the_query() {
        assert_eq!(
            parse("SELECT a\0 FROM t").unwrap_err().to_string(),
            r#"found "", expected FROM"#
        );
        assert_eq!(parse("SELECT a FROM t\0LIMIT 5").unwrap().limit, NO_LIMIT);
    }

    #[test]
    fn keywords_are_not_identifiers() {
        assert_eq!(
            parse("SELECT from FROM t").unwrap_err().to_string(),
            r#"found "from", expected field"#
        );
        assert_eq!(
            parse("SELECT a FROM limit").unwrap_err().to_string(),
            r#"found "limit", expected table name"#
        );
    }

    #[test]
    fn wildcard_cannot_be_mixed_with_fields() {
        assert_eq!(
            parse("SELECT *, a FROM t").unwrap_err().to_string(),
            r#"found ",", expected FROM"#
        );
        assert_eq!(
            parse("SELECT a, * FROM t").unwrap_err().to_string(),
            r#"found "*", expected field"#
        );
    }

    #[test]
    fn error_carries_token_position() {
        let err = parse("SELECT a\nFROM t LIMIT x").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::ExpectedDigit {
                found: "x".to_string(),
                position: Position {
                    offset: 22,
                    line: 2,
                    column: 14,
                },
            }
        );
    }

    #[test]
    fn oversized_limit() {
        let err = parse("SELECT a FROM t LIMIT 99999999999999999999").unwrap_err();
        assert!(matches!(err, SyntaxError::LimitOutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "found 99999999999999999999, expected digit in range"
        );
    }
}
