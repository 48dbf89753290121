//! Identifier-chain scanner.
//!
//! Identifiers start with a letter or underscore and continue with letters,
//! digits or underscores. `.`, `(`, `)` and `;` are single-character
//! punctuation. A double-quoted span is a string literal whose lexeme is the
//! text between the quotes; there are no escapes. Any other leading character
//! fails immediately, without accumulating a run.

use descent_util::Span;

use crate::chars::{is_ident_continue, is_ident_start};
use crate::cursor::Cursor;
use crate::lexer::Scanner;
use crate::token::{Punct, Token, TokenKind};
use crate::LexError;

/// Scanner for dotted-identifier statements.
///
/// # Example
///
/// ```
/// use descent_lex::{tokenize, ChainScanner, Punct, TokenKind};
///
/// let kinds: Vec<_> = tokenize(ChainScanner::new("foo.bar;"))
///     .unwrap()
///     .map(|t| t.kind())
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Identifier,
///         TokenKind::Punctuation(Punct::Dot),
///         TokenKind::Identifier,
///         TokenKind::Punctuation(Punct::Semicolon),
///     ]
/// );
/// ```
pub struct ChainScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> ChainScanner<'a> {
    /// Creates a scanner over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    fn scan_identifier(&mut self, start: usize, line: u32, column: u32) -> Token {
        while let Some(c) = self.cursor.bump() {
            if !is_ident_continue(c) {
                self.cursor.putback();
                break;
            }
        }
        Token::new(
            TokenKind::Identifier,
            self.cursor.slice_from(start),
            Span::new(start, self.cursor.position(), line, column),
        )
    }

    fn scan_string(&mut self, start: usize, line: u32, column: u32) -> Result<Token, LexError> {
        let content_start = self.cursor.position();
        loop {
            let end = self.cursor.position();
            match self.cursor.bump() {
                Some('"') => {
                    return Ok(Token::new(
                        TokenKind::StringLiteral,
                        self.cursor.slice(content_start, end),
                        Span::new(start, self.cursor.position(), line, column),
                    ))
                },
                None | Some('\n') => {
                    return Err(LexError::UnterminatedString {
                        text: self.cursor.slice(start, end).to_string(),
                        span: Span::new(start, end, line, column),
                    })
                },
                Some(_) => {},
            }
        }
    }
}

impl Scanner for ChainScanner<'_> {
    fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let start = self.cursor.position();
            let line = self.cursor.line();
            let column = self.cursor.column();

            let c = match self.cursor.bump() {
                None | Some('\n') => {
                    return Ok(Token::new(
                        TokenKind::EndOfInput,
                        "",
                        Span::new(start, start, line, column),
                    ))
                },
                Some(c) if c.is_whitespace() => continue,
                Some(c) => c,
            };

            if let Some(punct) = Punct::from_char(c) {
                return Ok(Token::new(
                    TokenKind::Punctuation(punct),
                    self.cursor.slice_from(start),
                    Span::new(start, self.cursor.position(), line, column),
                ));
            }
            if c == '"' {
                return self.scan_string(start, line, column);
            }
            if is_ident_start(c) {
                return Ok(self.scan_identifier(start, line, column));
            }

            let span = Span::new(start, self.cursor.position(), line, column);
            self.cursor.skip_line();
            return Err(LexError::UnexpectedChar { ch: c, span });
        }
    }
}
