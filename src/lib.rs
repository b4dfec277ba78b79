//! Lexical scanner for the Lox scripting language.
//!
//! ```
//! use lox_scan::{tokenize, Keywords, TokenType};
//!
//! let keywords = Keywords::new();
//! let mut errors = vec![];
//! let tokens = tokenize("print 1 @", &keywords, &mut |line: usize, message: &str| {
//!     errors.push((line, message.to_string()))
//! });
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].r#type, TokenType::EOF);
//! assert_eq!(errors, vec![(1, "Unexpected character.".to_string())]);
//! ```

pub mod keywords;
pub mod repl;
pub mod reporter;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod test_helpers;

pub use keywords::Keywords;
pub use reporter::{ConsoleReporter, ErrorReporter};
pub use scanner::{tokenize, Scanner, ScanningError};
pub use token::{Literal, Token, TokenType};
