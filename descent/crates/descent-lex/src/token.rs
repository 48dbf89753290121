//! Token type definitions.
//!
//! A [`Token`] is immutable once a scanner produces it: it carries the
//! lexeme text, its [`TokenKind`], and the [`Span`] it was read from.

use std::fmt;

use descent_util::Span;

/// Arithmetic operators recognised by the Polish-notation scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Maps an operator character to its variant.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// The source character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Single-character punctuation of the identifier-chain grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `.`
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
}

impl Punct {
    /// Maps a punctuation character to its variant.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Punct::Dot),
            '(' => Some(Punct::LParen),
            ')' => Some(Punct::RParen),
            ';' => Some(Punct::Semicolon),
            _ => None,
        }
    }

    /// The source character for this punctuation.
    pub fn symbol(self) -> char {
        match self {
            Punct::Dot => '.',
            Punct::LParen => '(',
            Punct::RParen => ')',
            Punct::Semicolon => ';',
        }
    }
}

/// Token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+ - * /`
    Operator(Operator),
    /// Unsigned decimal integer
    Operand,
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// Double-quoted text; the lexeme holds the content without quotes
    StringLiteral,
    /// `. ( ) ;`
    Punctuation(Punct),
    /// Line terminator or end of stream
    EndOfInput,
    /// Character run no rule accepts
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Operator(_) => "operator",
            TokenKind::Operand => "operand",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string",
            TokenKind::Punctuation(_) => "punctuation",
            TokenKind::EndOfInput => "end",
            TokenKind::Illegal => "illegal",
        };
        f.write_str(name)
    }
}

/// A classified lexical unit.
///
/// # Example
///
/// ```
/// use descent_lex::{Token, TokenKind};
/// use descent_util::Span;
///
/// let token = Token::new(TokenKind::Operand, "42", Span::new(2, 4, 1, 3));
/// assert_eq!(token.column(), 3);
/// assert_eq!(token.to_string(), "42 operand @3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    lexeme: String,
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            span,
        }
    }

    /// The token text. String literals hold their content without quotes.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The token category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Where the token was read from.
    pub fn span(&self) -> Span {
        self.span
    }

    /// 1-based column of the first character.
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true for the end-of-input marker.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns true if this is the given punctuation.
    pub fn is_punct(&self, punct: Punct) -> bool {
        self.kind == TokenKind::Punctuation(punct)
    }
}

/// Debug rendering used by `descent tokens`: `<lexeme> <category> @<column>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @{}", self.lexeme, self.kind, self.span.column)
    }
}
