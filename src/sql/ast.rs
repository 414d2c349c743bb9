use std::{fmt, str::FromStr};

use crate::error::SyntaxError;

use super::parser::Parser;

/// Limit value meaning no LIMIT clause was given.
pub const NO_LIMIT: i64 = -1;

/// A parsed `SELECT <fields> FROM <table> [LIMIT <n>]` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    /// Either `["*"]` or the selected columns in source order.
    pub fields: Vec<String>,
    pub table_name: String,
    /// [`NO_LIMIT`] unless a LIMIT clause was present.
    pub limit: i64,
}

impl SelectStatement {
    pub fn is_wildcard(&self) -> bool {
        matches!(self.fields.as_slice(), [field] if field == "*")
    }

    pub fn row_limit(&self) -> Option<u64> {
        u64::try_from(self.limit).ok()
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.fields.join(", "), self.table_name)?;
        if let Some(limit) = self.row_limit() {
            write!(f, " LIMIT {limit}")?;
        }
        Ok(())
    }
}

impl FromStr for SelectStatement {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).parse()
    }
}
