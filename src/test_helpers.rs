use crate::keywords::Keywords;
use crate::reporter::ErrorReporter;
use crate::scanner::tokenize;
use crate::token::{Token, TokenType};

/// Keeps every reported error so tests can look at them afterwards.
#[derive(Debug, Default)]
pub struct CapturingReporter {
    pub errors: Vec<(usize, String)>,
}

impl ErrorReporter for CapturingReporter {
    fn report(&mut self, line: usize, message: &str) {
        self.errors.push((line, message.to_string()));
    }
}

pub fn scan(code: &str) -> (Vec<Token>, Vec<(usize, String)>) {
    let keywords = Keywords::new();
    let mut reporter = CapturingReporter::default();
    let tokens = tokenize(code, &keywords, &mut reporter);
    (tokens, reporter.errors)
}

/// Scans code that is expected to be free of lexical errors.
pub fn scan_ok(code: &str) -> Vec<Token> {
    let (tokens, errors) = scan(code);
    assert!(errors.is_empty(), "unexpected scanning errors: {errors:?}");
    tokens
}

pub fn kinds(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|token| token.r#type).collect()
}
