//! Polish-notation scanner.
//!
//! Classification of the first non-blank character decides the token:
//!
//! | leading character | token |
//! |-------------------|-------|
//! | `+ - * /` | one-character `Operator` |
//! | digit | `Operand`, extended while digits follow |
//! | anything else | illegal run, reported as `Unknown token` |
//!
//! An operand ends at whitespace, end of stream, or an operator character,
//! which is pushed back for the next call. Any other character inside an
//! operand turns the whole run illegal. An illegal run keeps accumulating up
//! to whitespace or end of stream; the remainder of its line is discarded.

use descent_util::Span;

use crate::chars::is_operator_char;
use crate::cursor::Cursor;
use crate::lexer::Scanner;
use crate::token::{Operator, Token, TokenKind};
use crate::LexError;

/// Scanner for the prefix-notation calculator.
///
/// # Example
///
/// ```
/// use descent_lex::{PolishScanner, Scanner, TokenKind};
///
/// let mut scanner = PolishScanner::new("12+");
/// let operand = scanner.next_token().unwrap();
/// assert_eq!(operand.lexeme(), "12");
/// assert_eq!(operand.kind(), TokenKind::Operand);
/// assert_eq!(scanner.next_token().unwrap().lexeme(), "+");
/// assert!(scanner.next_token().unwrap().is_end());
/// ```
pub struct PolishScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> PolishScanner<'a> {
    /// Creates a scanner over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    fn span_from(&self, start: usize, line: u32, column: u32) -> Span {
        Span::new(start, self.cursor.position(), line, column)
    }

    fn scan_operand(&mut self, start: usize, line: u32, column: u32) -> Result<Token, LexError> {
        loop {
            match self.cursor.bump() {
                None => break,
                Some(c) if c.is_ascii_digit() => {},
                Some(c) if is_operator_char(c) || c.is_whitespace() => {
                    self.cursor.putback();
                    break;
                },
                Some(_) => return Err(self.scan_illegal(start, line, column)),
            }
        }
        let lexeme = self.cursor.slice_from(start);
        Ok(Token::new(
            TokenKind::Operand,
            lexeme,
            self.span_from(start, line, column),
        ))
    }

    fn scan_illegal(&mut self, start: usize, line: u32, column: u32) -> LexError {
        loop {
            let end = self.cursor.position();
            match self.cursor.bump() {
                None => return self.unknown_token(start, end, line, column),
                Some(c) if c.is_whitespace() => {
                    if c != '\n' {
                        self.cursor.skip_line();
                    }
                    return self.unknown_token(start, end, line, column);
                },
                Some(_) => {},
            }
        }
    }

    fn unknown_token(&self, start: usize, end: usize, line: u32, column: u32) -> LexError {
        let illegal = Token::new(
            TokenKind::Illegal,
            self.cursor.slice(start, end),
            Span::new(start, end, line, column),
        );
        LexError::UnknownToken {
            text: illegal.lexeme().to_string(),
            span: illegal.span(),
        }
    }
}

impl Scanner for PolishScanner<'_> {
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

            if let Some(op) = Operator::from_char(c) {
                return Ok(Token::new(
                    TokenKind::Operator(op),
                    self.cursor.slice_from(start),
                    self.span_from(start, line, column),
                ));
            }
            if c.is_ascii_digit() {
                return self.scan_operand(start, line, column);
            }
            return Err(self.scan_illegal(start, line, column));
        }
    }
}
