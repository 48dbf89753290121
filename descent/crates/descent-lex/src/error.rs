//! Lexical error type.

use descent_util::{Diagnostic, DiagnosticCode, IntoDiagnostic, Span};
use thiserror::Error;

/// A character sequence neither scanner accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Polish-notation scanner: an illegal run, accumulated up to whitespace.
    #[error("Unknown token {text}")]
    UnknownToken {
        /// The offending text
        text: String,
        /// Where it starts
        span: Span,
    },

    /// Identifier-chain scanner: a character no token can start with.
    #[error("Unexpected character '{ch}'")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Where it is
        span: Span,
    },

    /// Identifier-chain scanner: a `"` with no closing quote on the line.
    #[error("Unterminated string literal {text}")]
    UnterminatedString {
        /// The literal text read so far, opening quote included
        text: String,
        /// Where the literal starts
        span: Span,
    },
}

impl LexError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnknownToken { span, .. }
            | LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span, .. } => *span,
        }
    }

    /// The offending text.
    pub fn text(&self) -> String {
        match self {
            LexError::UnknownToken { text, .. } | LexError::UnterminatedString { text, .. } => {
                text.clone()
            },
            LexError::UnexpectedChar { ch, .. } => ch.to_string(),
        }
    }

    fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnknownToken { .. } => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }
}

impl IntoDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.span()).with_code(self.code())
    }
}
