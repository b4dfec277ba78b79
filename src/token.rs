use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub r#type: TokenType,
    pub lexeme: String,
    /// Only set for `String` and `Number` tokens.
    pub literal: Option<Literal>,
    /// Line of the first character of the lexeme.
    pub line: usize,
}

#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum TokenType {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Identifier,
    String,
    Number,

    EOF,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    /// Text between the quotes, as written.
    String(String),
    Number(f64),
}

impl Token {
    pub fn new(r#type: TokenType, lexeme: &str, literal: Option<Literal>, line: usize) -> Token {
        Token {
            r#type,
            lexeme: lexeme.to_string(),
            literal,
            line,
        }
    }

    pub fn eof(line: usize) -> Token {
        Token::new(TokenType::EOF, "", None, line)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(value) => write!(f, "{value}"),
            // f64's Display already drops the fraction of whole numbers: 12.0 -> "12"
            Literal::Number(value) => write!(f, "{value}"),
        }
    }
}

/// `<type> <lexeme> <literal>`, one token per REPL line.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} ", self.r#type, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Literal, Token, TokenType};

    #[test]
    fn test_display_without_literal() {
        let token = Token::new(TokenType::Identifier, "x", None, 1);
        assert_eq!(token.to_string(), "Identifier x ");
    }

    #[test]
    fn test_display_numbers() {
        let whole = Token::new(TokenType::Number, "12", Some(Literal::Number(12.0)), 1);
        assert_eq!(whole.to_string(), "Number 12 12");
        let fraction = Token::new(TokenType::Number, "12.50", Some(Literal::Number(12.5)), 1);
        assert_eq!(fraction.to_string(), "Number 12.50 12.5");
    }

    #[test]
    fn test_display_string_and_eof() {
        let string = Token::new(
            TokenType::String,
            "\"hi there\"",
            Some(Literal::String("hi there".to_string())),
            3,
        );
        assert_eq!(string.to_string(), "String \"hi there\" hi there");
        assert_eq!(Token::eof(7).to_string(), "EOF  ");
        assert_eq!(Token::eof(7).line, 7);
    }
}
