//! Parser and evaluator error types.

use descent_lex::LexError;
use descent_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, IntoDiagnostic, Span};
use thiserror::Error;

/// Why an identifier-chain statement was rejected.
///
/// Positions count tokens consumed from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line did not scan.
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// A token of the wrong category.
    #[error("expected {expected}, found `{found}`")]
    Expected {
        /// What the rule needed
        expected: &'static str,
        /// The lexeme that was there instead
        found: String,
        /// Token index of `found`
        position: usize,
    },

    /// The line ended while a rule still needed a token.
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        /// What the rule needed
        expected: &'static str,
        /// Number of tokens on the line
        position: usize,
    },

    /// A `(` with no `)` after it.
    #[error("unclosed `(`")]
    UnclosedParen {
        /// Token index just past the `(`
        position: usize,
    },

    /// Tokens left over after a complete statement or parenthesised expression.
    #[error("unexpected `{found}` after expression")]
    TrailingTokens {
        /// The first leftover lexeme
        found: String,
        /// Its token index
        position: usize,
    },

    /// Chains or parentheses nested past the configured limit.
    #[error("statement nested too deeply (limit {limit})")]
    TooDeep {
        /// The configured maximum depth
        limit: usize,
        /// Token index where the limit was hit
        position: usize,
    },
}

impl ParseError {
    /// Token index where the statement was rejected. Lexical failures happen
    /// before any token is consumed and report 0.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lexical(_) => 0,
            ParseError::Expected { position, .. }
            | ParseError::UnexpectedEnd { position, .. }
            | ParseError::UnclosedParen { position }
            | ParseError::TrailingTokens { position, .. }
            | ParseError::TooDeep { position, .. } => *position,
        }
    }
}

impl IntoDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lexical(err) => err.to_diagnostic(),
            ParseError::TooDeep { position, .. } => DiagnosticBuilder::error(self.to_string())
                .code(DiagnosticCode::E_PARSER_TOO_DEEP)
                .note(format!("at token {}", position))
                .build(),
            _ => DiagnosticBuilder::error(self.to_string())
                .code(DiagnosticCode::E_PARSER_REJECTED)
                .note(format!("at token {}", self.position()))
                .build(),
        }
    }
}

/// Why a Polish-notation formula could not be evaluated.
///
/// The display texts are what the calculator prints after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The line did not scan.
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// Missing operand, or tokens left after a complete formula.
    #[error("Illegal formula!")]
    MalformedFormula {
        /// Token index where the formula went wrong
        position: usize,
    },

    /// A division whose right operand reduced to zero.
    #[error("Divide by ZERO!")]
    DivideByZero {
        /// The `/` operator
        span: Span,
    },

    /// An operand or intermediate result outside the `i64` range.
    #[error("Arithmetic overflow!")]
    Overflow {
        /// The operand text, or the operation that overflowed
        text: String,
        /// Where it happened
        span: Span,
    },

    /// Operators nested past the configured limit.
    #[error("Formula nested too deeply!")]
    TooDeep {
        /// The configured maximum depth
        limit: usize,
    },
}

impl IntoDiagnostic for EvalError {
    fn to_diagnostic(&self) -> Diagnostic {
        let message = self.to_string();
        match self {
            EvalError::Lexical(err) => err.to_diagnostic(),
            EvalError::MalformedFormula { position } => DiagnosticBuilder::error(message)
                .code(DiagnosticCode::E_PARSER_MALFORMED_FORMULA)
                .note(format!("at token {}", position))
                .build(),
            EvalError::DivideByZero { span } => DiagnosticBuilder::error(message)
                .code(DiagnosticCode::E_EVAL_DIVIDE_BY_ZERO)
                .span(*span)
                .build(),
            EvalError::Overflow { text, span } => DiagnosticBuilder::error(message)
                .code(DiagnosticCode::E_EVAL_OVERFLOW)
                .span(*span)
                .note(format!("while computing `{}`", text))
                .build(),
            EvalError::TooDeep { limit } => DiagnosticBuilder::error(message)
                .code(DiagnosticCode::E_PARSER_TOO_DEEP)
                .note(format!("maximum depth is {}", limit))
                .build(),
        }
    }
}
