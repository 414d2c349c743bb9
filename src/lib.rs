//! Scanner and recursive-descent parser for a minimal query language:
//! `SELECT <fields> FROM <table> [LIMIT <n>]`.
//!
//! ```
//! let stmt = sql_parser::parse("SELECT name FROM tbl limit 1").unwrap();
//! assert_eq!(stmt.fields, vec!["name"]);
//! assert_eq!(stmt.table_name, "tbl");
//! assert_eq!(stmt.limit, 1);
//! ```

pub mod error;
pub mod sql;

pub use error::{Error, Expected, Result, SyntaxError};
pub use sql::{parse, parse_reader, Parser, SelectStatement, NO_LIMIT};
