use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;
use tracing::{debug, trace};

use crate::keywords::Keywords;
use crate::reporter::ErrorReporter;
use crate::token::{Literal, Token, TokenType};

/// public interface for tokenizing
pub fn tokenize<R>(source: &str, keywords: &Keywords, error_reporter: &mut R) -> Vec<Token>
where
    R: ErrorReporter + ?Sized,
{
    Scanner::new(source, keywords, error_reporter).into_tokens()
}

/// Turns one source text into tokens. A scanner is good for exactly one scan: calling
/// `scan_tokens` again hands back the tokens it already produced.
pub struct Scanner<'a, R: ErrorReporter + ?Sized> {
    source: &'a str,
    char_iter: Peekable<Chars<'a>>,
    keywords: &'a Keywords,
    error_reporter: &'a mut R,
    tokens: Vec<Token>,
    scanned: bool,
    error_count: usize,

    // position of the start of lexeme
    current_lexeme_start: usize,
    current_lexeme_line: usize,
    current: usize,
    line: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScanningError {
    #[error("Unexpected character.")]
    UnexpectedCharacter { line: usize, character: char },
    #[error("Unterminated string.")]
    UnterminatedString { line: usize, string_start: String },
}

impl ScanningError {
    pub fn get_line(&self) -> usize {
        match self {
            ScanningError::UnexpectedCharacter { line, .. }
            | ScanningError::UnterminatedString { line, .. } => *line,
        }
    }
}

impl<'a, R: ErrorReporter + ?Sized> Scanner<'a, R> {
    pub fn new(source: &'a str, keywords: &'a Keywords, error_reporter: &'a mut R) -> Self {
        Scanner {
            source,
            char_iter: source.chars().peekable(),
            keywords,
            error_reporter,
            tokens: vec![],
            scanned: false,
            error_count: 0,
            current_lexeme_start: 0,
            current_lexeme_line: 1,
            current: 0,
            line: 1,
        }
    }

    pub fn scan_tokens(&mut self) -> &[Token] {
        if self.scanned {
            return &self.tokens;
        }

        debug!(bytes = self.source.len(), "scanning source");
        while !self.is_at_end() {
            if let Err(scanning_error) = self.scan_token() {
                self.error(scanning_error);
            }
        }
        self.tokens.push(Token::eof(self.line));
        self.scanned = true;
        debug!(
            tokens = self.tokens.len(),
            errors = self.error_count,
            lines = self.line,
            "scan finished"
        );

        &self.tokens
    }

    pub fn into_tokens(mut self) -> Vec<Token> {
        self.scan_tokens();
        self.tokens
    }

    fn scan_token(&mut self) -> Result<(), ScanningError> {
        // set start of lexeme
        self.current_lexeme_start = self.current;
        self.current_lexeme_line = self.line;
        let Some(c) = self.advance() else {
            return Ok(());
        };
        let maybe_token_type = match c {
            '(' => Some(TokenType::LeftParen),
            ')' => Some(TokenType::RightParen),
            '{' => Some(TokenType::LeftBrace),
            '}' => Some(TokenType::RightBrace),
            ',' => Some(TokenType::Comma),
            '.' => Some(TokenType::Dot),
            '-' => Some(TokenType::Minus),
            '+' => Some(TokenType::Plus),
            ';' => Some(TokenType::Semicolon),
            '*' => Some(TokenType::Star),
            '!' => match self.match_one('=') {
                true => Some(TokenType::BangEqual),
                false => Some(TokenType::Bang),
            },
            '=' => match self.match_one('=') {
                true => Some(TokenType::EqualEqual),
                false => Some(TokenType::Equal),
            },
            '<' => match self.match_one('=') {
                true => Some(TokenType::LessEqual),
                false => Some(TokenType::Less),
            },
            '>' => match self.match_one('=') {
                true => Some(TokenType::GreaterEqual),
                false => Some(TokenType::Greater),
            },
            '/' => {
                if self.match_one('/') {
                    // comment runs to the end of the line; the newline is scanned normally
                    while self.peek_one().is_some_and(|c| *c != '\n') {
                        self.advance();
                    }
                    None
                } else {
                    Some(TokenType::Slash)
                }
            }
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            }
            '"' => Some(self.consume_if_match_string()?),
            c if is_digit(&c) => Some(self.consume_if_match_number()),
            c if is_alpha(&c) => Some(self.consume_if_match_identifier()),
            _ => {
                return Err(ScanningError::UnexpectedCharacter {
                    line: self.line,
                    character: c,
                });
            }
        };

        if let Some(token_type) = maybe_token_type {
            self.add_token(token_type);
        }
        Ok(())
    }

    fn error(&mut self, scanning_error: ScanningError) {
        let line = scanning_error.get_line();
        debug!(line, error = ?scanning_error, "lexical error");
        self.error_count += 1;
        self.error_reporter.report(line, &scanning_error.to_string());
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn match_one(&mut self, expected: char) -> bool {
        if self.peek_one() != Some(&expected) {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) -> Option<char> {
        let current_char = self.char_iter.next()?;
        self.current += current_char.len_utf8();
        Some(current_char)
    }

    fn add_token(&mut self, token_type: TokenType) {
        // current only ever moves by whole characters, so both ends are char boundaries
        let text = &self.source[self.current_lexeme_start..self.current];
        let literal = match token_type {
            // the lexeme starts and ends with a one-byte quote
            TokenType::String => Some(Literal::String(text[1..text.len() - 1].to_string())),
            TokenType::Number => text.parse().ok().map(Literal::Number),
            _ => None,
        };
        let token = Token::new(token_type, text, literal, self.current_lexeme_line);
        trace!(%token, line = token.line, "token");
        self.tokens.push(token);
    }

    /// like advance but does not consume the character. 1 lookahead.
    fn peek_one(&mut self) -> Option<&char> {
        self.char_iter.peek()
    }

    /// 2 lookahead
    fn peek_two(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn consume_if_match_string(&mut self) -> Result<TokenType, ScanningError> {
        while let Some(c) = self.peek_one().copied() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.peek_one().is_none() {
            return Err(ScanningError::UnterminatedString {
                line: self.line,
                string_start: self.source[self.current_lexeme_start..self.current].to_string(),
            });
        }

        // consume closing quote
        self.advance();

        Ok(TokenType::String)
    }

    fn consume_if_match_number(&mut self) -> TokenType {
        while self.peek_one().is_some_and(is_digit) {
            self.advance();
        }

        // a trailing '.' is left for the next token
        if self.peek_one() == Some(&'.') && self.peek_two().is_some_and(|c| is_digit(&c)) {
            self.advance();
            while self.peek_one().is_some_and(is_digit) {
                self.advance();
            }
        }

        TokenType::Number
    }

    fn consume_if_match_identifier(&mut self) -> TokenType {
        while self.peek_one().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let lexeme = &self.source[self.current_lexeme_start..self.current];
        self.keywords.get(lexeme).unwrap_or(TokenType::Identifier)
    }
}

fn is_digit(c: &char) -> bool {
    c.is_ascii_digit()
}
fn is_alpha(c: &char) -> bool {
    c.is_ascii_alphabetic() || *c == '_'
}
fn is_alphanumeric(c: &char) -> bool {
    is_digit(c) || is_alpha(c)
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::test_helpers::{kinds, scan};
    use crate::token::TokenType;

    proptest! {
        #[test]
        fn always_ends_with_a_single_eof(source in "\\PC{0,200}") {
            let (tokens, _) = scan(&source);
            let last = tokens.last().unwrap();
            prop_assert_eq!(last.r#type, TokenType::EOF);
            prop_assert_eq!(last.lexeme.as_str(), "");
            prop_assert_eq!(tokens.iter().filter(|t| t.r#type == TokenType::EOF).count(), 1);
        }

        #[test]
        fn lines_never_go_backwards(source in "[ -~\n\t]{0,200}") {
            let (tokens, _) = scan(&source);
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].line <= pair[1].line);
            }
            let last_line = source.matches('\n').count() + 1;
            prop_assert_eq!(tokens.last().unwrap().line, last_line);
        }

        #[test]
        fn rescanning_lexemes_keeps_kinds(source in "[ -~\n\t]{0,200}") {
            let (tokens, _) = scan(&source);
            let rejoined = tokens
                .iter()
                .map(|token| token.lexeme.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let (rescanned, errors) = scan(&rejoined);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(kinds(&rescanned), kinds(&tokens));
        }
    }
}
