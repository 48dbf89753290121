//! Consumable token queue.

use std::collections::VecDeque;

use crate::{Token, TokenKind};

/// An ordered queue of tokens consumed front to back.
///
/// The stream remembers how many tokens have been taken off the front, so
/// rules can report where they stopped. Sub-streams produced by
/// [`split_through`](TokenStream::split_through) keep counting from the
/// position of their parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    position: usize,
}

impl TokenStream {
    /// Creates a stream over `tokens`, positioned at the first one.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
            position: 0,
        }
    }

    fn with_position(tokens: VecDeque<Token>, position: usize) -> Self {
        Self { tokens, position }
    }

    /// The token at the front, if any.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// The kind of the token at the front, if any.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(Token::kind)
    }

    /// Removes and returns the front token.
    pub fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        self.position += 1;
        Some(token)
    }

    /// Number of tokens consumed so far, counted from the enclosing stream.
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Number of tokens left.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true once every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Splits off everything up to the first token matching `pred`.
    ///
    /// Returns the tokens before the match as a sub-stream together with the
    /// matching token; both are removed from `self`. Returns `None` and
    /// leaves `self` untouched if nothing matches.
    ///
    /// # Example
    ///
    /// ```
    /// use descent_lex::{tokenize, ChainScanner, Punct};
    ///
    /// let mut stream = tokenize(ChainScanner::new("a.b);")).unwrap();
    /// let (inner, close) = stream.split_through(|t| t.is_punct(Punct::RParen)).unwrap();
    /// assert_eq!(inner.remaining(), 3);
    /// assert_eq!(close.lexeme(), ")");
    /// assert_eq!(stream.consumed(), 4);
    /// assert_eq!(stream.remaining(), 1);
    /// ```
    pub fn split_through<P>(&mut self, pred: P) -> Option<(TokenStream, Token)>
    where
        P: Fn(&Token) -> bool,
    {
        let index = self.tokens.iter().position(pred)?;
        let rest = self.tokens.split_off(index + 1);
        let mut head = std::mem::replace(&mut self.tokens, rest);
        let matched = head.pop_back()?;
        let inner = TokenStream::with_position(head, self.position);
        self.position += index + 1;
        Some((inner, matched))
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::with_position(iter.into_iter().collect(), 0)
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.bump()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tokens.len(), Some(self.tokens.len()))
    }
}

impl ExactSizeIterator for TokenStream {}
