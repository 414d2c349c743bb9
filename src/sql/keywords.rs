use std::{collections::HashMap, sync::LazyLock};

use super::token::TokenKind;


static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    HashMap::from([
        ("SELECT", TokenKind::Select),
        ("FROM", TokenKind::From),
        ("LIMIT", TokenKind::Limit),
    ])
});

/// Case-insensitive keyword lookup for an identifier-shaped lexeme.
pub fn get(text: &str) -> Option<TokenKind> {
    let keyword = text.to_ascii_uppercase();
    KEYWORDS.get(keyword.as_str()).copied()
}
