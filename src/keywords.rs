use std::collections::HashMap;

use crate::token::TokenType;

/// Reserved words of the language.
///
/// Build one table up front and lend it to every `Scanner`; it is never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct Keywords {
    table: HashMap<&'static str, TokenType>,
}

const RESERVED_WORDS: [(&str, TokenType); 16] = [
    ("and", TokenType::And),
    ("class", TokenType::Class),
    ("else", TokenType::Else),
    ("false", TokenType::False),
    ("fun", TokenType::Fun),
    ("for", TokenType::For),
    ("if", TokenType::If),
    ("nil", TokenType::Nil),
    ("or", TokenType::Or),
    ("print", TokenType::Print),
    ("return", TokenType::Return),
    ("super", TokenType::Super),
    ("this", TokenType::This),
    ("true", TokenType::True),
    ("var", TokenType::Var),
    ("while", TokenType::While),
];

impl Keywords {
    pub fn new() -> Keywords {
        Keywords {
            table: RESERVED_WORDS.into_iter().collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, lexeme: &str) -> Option<TokenType> {
        self.table.get(lexeme).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords::new()
    }
}
