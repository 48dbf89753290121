//! Scanner module.
//!
//! Two scanners share the [`Scanner`] contract:
//! - `polish` - operators and unsigned operands for the calculator
//! - `chain` - identifiers, punctuation and string literals for statements
//!
//! A scanner is pulled one token at a time until it yields
//! [`TokenKind::EndOfInput`](crate::TokenKind::EndOfInput), which happens at a
//! line terminator or at end of stream. [`tokenize`] drains one line eagerly
//! into a [`TokenStream`].

mod chain;
mod polish;

pub use chain::ChainScanner;
pub use polish::PolishScanner;

use crate::{LexError, Token, TokenStream};

/// Pull-based token source.
pub trait Scanner {
    /// Returns the next token of the current line.
    ///
    /// Yields an `EndOfInput` token at a line terminator or end of stream.
    /// After a lexical error the rest of the offending line has been
    /// discarded, so the following call starts on the next line.
    fn next_token(&mut self) -> Result<Token, LexError>;

    /// Iterates over the tokens of the current line.
    fn tokens(self) -> Tokens<Self>
    where
        Self: Sized,
    {
        Tokens {
            scanner: self,
            done: false,
        }
    }
}

/// Iterator over one line of tokens.
///
/// Ends before the `EndOfInput` marker, and right after the first error.
pub struct Tokens<S> {
    scanner: S,
    done: bool,
}

impl<S: Scanner> Iterator for Tokens<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.next_token() {
            Ok(token) if token.is_end() => {
                self.done = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            },
        }
    }
}

/// Scans one line eagerly into a [`TokenStream`].
///
/// # Example
///
/// ```
/// use descent_lex::{tokenize, PolishScanner};
///
/// let stream = tokenize(PolishScanner::new("* 3 + 4 5")).unwrap();
/// assert_eq!(stream.remaining(), 5);
/// ```
pub fn tokenize<S: Scanner>(scanner: S) -> Result<TokenStream, LexError> {
    scanner.tokens().collect()
}
