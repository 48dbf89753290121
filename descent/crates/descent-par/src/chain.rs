//! Identifier-chain recognizer.
//!
//! ```text
//! statement   := expression terminator
//! expression  := primary | stringLiteral
//! primary     := identifier primaryTail
//! primaryTail := '.' identifier primaryTail
//!              | '(' expression ')'
//!              | ε
//! terminator  := ';'
//! ```
//!
//! Each rule is one method on [`ChainParser`] taking the remaining
//! [`TokenStream`] by exclusive borrow. The leading token's category picks the
//! alternative and nothing is ever un-consumed. A `(` encloses everything up
//! to the first `)`, which is parsed as a fresh `expression` and must be used
//! up entirely. A `primaryTail` that sees any other token ends the chain; the
//! statement then requires exactly one `;` as the last token on the line.

use std::fmt;
use std::mem;

use descent_lex::{tokenize, ChainScanner, Punct, Token, TokenKind, TokenStream};

use crate::error::ParseError;
use crate::limits::{DepthCounter, ParseLimits};

/// Fields recorded while recognizing a statement. Every slot is filled at
/// most once; the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    identifier: Option<String>,
    dot: bool,
    string_literal: Option<String>,
    lparen: bool,
    second_identifier: Option<String>,
    rparen: bool,
    semicolon: bool,
}

impl ExtractedFields {
    /// The first identifier of the statement.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Whether a `.` was matched.
    pub fn has_dot(&self) -> bool {
        self.dot
    }

    /// The first string literal's content.
    pub fn string_literal(&self) -> Option<&str> {
        self.string_literal.as_deref()
    }

    /// Whether a parenthesised expression was matched.
    pub fn has_parens(&self) -> bool {
        self.lparen && self.rparen
    }

    /// The identifier that followed the first `.`.
    pub fn second_identifier(&self) -> Option<&str> {
        self.second_identifier.as_deref()
    }

    /// Whether the terminator was matched.
    pub fn has_semicolon(&self) -> bool {
        self.semicolon
    }

    fn record_identifier(&mut self, token: &Token) {
        self.identifier
            .get_or_insert_with(|| token.lexeme().to_string());
    }

    fn record_second_identifier(&mut self, token: &Token) {
        self.second_identifier
            .get_or_insert_with(|| token.lexeme().to_string());
    }

    fn record_string_literal(&mut self, token: &Token) {
        self.string_literal
            .get_or_insert_with(|| token.lexeme().to_string());
    }

    /// Report lines in the fixed output order:
    /// `ID`, `DOT`, `STRLIT`, `LBR`, `ID`, `RBR`, `SEMICOLON`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(id) = &self.identifier {
            lines.push(format!("ID {}", id));
        }
        if self.dot {
            lines.push("DOT .".to_string());
        }
        if let Some(literal) = &self.string_literal {
            lines.push(format!("STRLIT {}", literal));
        }
        if self.lparen {
            lines.push("LBR (".to_string());
        }
        if let Some(id) = &self.second_identifier {
            lines.push(format!("ID {}", id));
        }
        if self.rparen {
            lines.push("RBR )".to_string());
        }
        if self.semicolon {
            lines.push("SEMICOLON ;".to_string());
        }
        lines
    }

    /// Rebuilds a statement the grammar accepts and that records the same
    /// fields: `id1[.id2][(inner)];`, where `inner` is the quoted literal if
    /// one was recorded and `id1` otherwise. A bare literal statement
    /// rebuilds as `"lit";`.
    ///
    /// ```
    /// use descent_par::{recognize, ParseLimits};
    ///
    /// let result = recognize("obj.a.b(\"x\");", &ParseLimits::default());
    /// let fields = result.fields().unwrap();
    /// assert_eq!(fields.to_source(), "obj.a(\"x\");");
    /// ```
    pub fn to_source(&self) -> String {
        let Some(id) = &self.identifier else {
            let literal = self.string_literal.as_deref().unwrap_or_default();
            return format!("\"{}\";", literal);
        };

        let mut source = id.clone();
        if let Some(second) = &self.second_identifier {
            source.push('.');
            source.push_str(second);
        }
        if self.has_parens() {
            source.push('(');
            match &self.string_literal {
                Some(literal) => {
                    source.push('"');
                    source.push_str(literal);
                    source.push('"');
                },
                None => source.push_str(id),
            }
            source.push(')');
        }
        source.push(';');
        source
    }
}

impl fmt::Display for ExtractedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Outcome of recognizing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// The whole line is one statement.
    Accepted {
        /// Number of tokens consumed, which is every token on the line
        consumed: usize,
        /// What the statement contained
        fields: ExtractedFields,
    },
    /// The line is not a statement.
    Rejected {
        /// Why
        reason: ParseError,
        /// Token index where recognition stopped
        position: usize,
    },
}

impl ParseResult {
    /// Returns true if the statement was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ParseResult::Accepted { .. })
    }

    /// The extracted fields of an accepted statement.
    pub fn fields(&self) -> Option<&ExtractedFields> {
        match self {
            ParseResult::Accepted { fields, .. } => Some(fields),
            ParseResult::Rejected { .. } => None,
        }
    }

    /// The rejection reason.
    pub fn reason(&self) -> Option<&ParseError> {
        match self {
            ParseResult::Accepted { .. } => None,
            ParseResult::Rejected { reason, .. } => Some(reason),
        }
    }
}

/// Renders the recognizer's report: the field lines, or `invalid input`.
impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseResult::Accepted { fields, .. } => write!(f, "{}", fields),
            ParseResult::Rejected { .. } => f.write_str("invalid input"),
        }
    }
}

/// Recursive-descent recognizer for identifier-chain statements.
///
/// The parser owns the extraction record for the line in progress. Each call
/// to [`recognize`](Self::recognize) starts from an empty record, so a parser
/// can be reused across lines.
pub struct ChainParser {
    limits: ParseLimits,
    fields: ExtractedFields,
    depth: DepthCounter,
}

impl ChainParser {
    /// Creates a parser.
    pub fn new(limits: ParseLimits) -> Self {
        Self {
            limits,
            fields: ExtractedFields::default(),
            depth: DepthCounter::default(),
        }
    }

    /// Scans and recognizes one line.
    pub fn recognize(&mut self, source: &str) -> ParseResult {
        match tokenize(ChainScanner::new(source)) {
            Ok(mut stream) => self.recognize_stream(&mut stream),
            Err(err) => ParseResult::Rejected {
                reason: err.into(),
                position: 0,
            },
        }
    }

    /// Recognizes an already scanned line.
    pub fn recognize_stream(&mut self, stream: &mut TokenStream) -> ParseResult {
        self.fields = ExtractedFields::default();
        self.depth.reset();
        match self.statement(stream) {
            Ok(()) => ParseResult::Accepted {
                consumed: stream.consumed(),
                fields: mem::take(&mut self.fields),
            },
            Err(reason) => ParseResult::Rejected {
                position: reason.position(),
                reason,
            },
        }
    }

    fn statement(&mut self, stream: &mut TokenStream) -> Result<(), ParseError> {
        self.expression(stream)?;
        self.terminator(stream)?;
        match stream.peek() {
            Some(extra) => Err(trailing(extra, stream.consumed())),
            None => Ok(()),
        }
    }

    fn expression(&mut self, stream: &mut TokenStream) -> Result<(), ParseError> {
        self.enter(stream)?;
        match stream.peek_kind() {
            Some(TokenKind::Identifier) => self.primary(stream)?,
            Some(TokenKind::StringLiteral) => {
                let literal = self.expect(stream, TokenKind::StringLiteral, "string literal")?;
                self.fields.record_string_literal(&literal);
            },
            _ => {
                self.expect(stream, TokenKind::Identifier, "identifier or string literal")?;
            },
        }
        self.depth.leave();
        Ok(())
    }

    fn primary(&mut self, stream: &mut TokenStream) -> Result<(), ParseError> {
        let identifier = self.expect(stream, TokenKind::Identifier, "identifier")?;
        self.fields.record_identifier(&identifier);
        self.primary_tail(stream)
    }

    fn primary_tail(&mut self, stream: &mut TokenStream) -> Result<(), ParseError> {
        self.enter(stream)?;
        match stream.peek_kind() {
            Some(TokenKind::Punctuation(Punct::Dot)) => {
                stream.bump();
                self.fields.dot = true;
                let identifier = self.expect(stream, TokenKind::Identifier, "identifier")?;
                self.fields.record_second_identifier(&identifier);
                self.primary_tail(stream)?;
            },
            Some(TokenKind::Punctuation(Punct::LParen)) => {
                stream.bump();
                self.fields.lparen = true;
                let position = stream.consumed();
                let (mut inner, _) = stream
                    .split_through(|t| t.is_punct(Punct::RParen))
                    .ok_or(ParseError::UnclosedParen { position })?;
                self.expression(&mut inner)?;
                if let Some(extra) = inner.peek() {
                    return Err(trailing(extra, inner.consumed()));
                }
                self.fields.rparen = true;
            },
            _ => {},
        }
        self.depth.leave();
        Ok(())
    }

    fn terminator(&mut self, stream: &mut TokenStream) -> Result<(), ParseError> {
        self.expect(stream, TokenKind::Punctuation(Punct::Semicolon), "`;`")?;
        self.fields.semicolon = true;
        Ok(())
    }

    fn expect(
        &self,
        stream: &mut TokenStream,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        let position = stream.consumed();
        match stream.peek() {
            Some(token) if token.kind() == kind => stream
                .bump()
                .ok_or(ParseError::UnexpectedEnd { expected, position }),
            Some(token) => Err(ParseError::Expected {
                expected,
                found: token.lexeme().to_string(),
                position,
            }),
            None => Err(ParseError::UnexpectedEnd { expected, position }),
        }
    }

    fn enter(&mut self, stream: &TokenStream) -> Result<(), ParseError> {
        if self.depth.enter(&self.limits) {
            Ok(())
        } else {
            Err(ParseError::TooDeep {
                limit: self.limits.max_depth,
                position: stream.consumed(),
            })
        }
    }
}

impl Default for ChainParser {
    fn default() -> Self {
        Self::new(ParseLimits::default())
    }
}

fn trailing(token: &Token, position: usize) -> ParseError {
    ParseError::TrailingTokens {
        found: token.lexeme().to_string(),
        position,
    }
}

/// Scans and recognizes one line with a fresh parser.
pub fn recognize(source: &str, limits: &ParseLimits) -> ParseResult {
    ChainParser::new(*limits).recognize(source)
}
