//! descent-lex - Scanners for the descent grammars
//!
//! This crate turns one line of input into a stream of classified tokens
//! that the recursive-descent parsers in `descent-par` consume.
//!
//! # Example Usage
//!
//! ```
//! use descent_lex::{tokenize, PolishScanner, TokenKind};
//!
//! let mut stream = tokenize(PolishScanner::new("+ 1 2")).unwrap();
//! assert!(matches!(stream.peek_kind(), Some(TokenKind::Operator(_))));
//! assert_eq!(stream.bump().unwrap().lexeme(), "+");
//! assert_eq!(stream.remaining(), 2);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - The two scanners and the [`Scanner`] contract
//! - [`cursor`] - Character cursor with one-character putback
//! - [`chars`] - Character classes shared by the scanners
//! - [`stream`] - The consumable [`TokenStream`]
//! - [`error`] - [`LexError`]
//!
//! # Token Categories
//!
//! ## Polish notation
//!
//! - **Operators**: `+`, `-`, `*`, `/`, always a single character
//! - **Operands**: unsigned decimal integers; a sign is always an operator
//!
//! ## Identifier chains
//!
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Punctuation**: `.`, `(`, `)`, `;`
//! - **String literals**: `"text"`, no escapes
//!
//! ## Special
//!
//! - **EndOfInput**: line terminator or end of stream
//! - **Illegal**: a run no rule accepts

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{tokenize, ChainScanner, PolishScanner, Scanner, Tokens};
pub use stream::TokenStream;
pub use token::{Operator, Punct, Token, TokenKind};
