//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! diagnostics produced while scanning, parsing and evaluating input lines.
//!
//! # Examples
//!
//! ```
//! use descent_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use descent_util::Span;
//!
//! let handler = Handler::new();
//! let diagnostic = DiagnosticBuilder::error("Unknown token 1a")
//!     .code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
//!     .span(Span::new(0, 2, 1, 1))
//!     .build();
//! handler.emit_diagnostic(diagnostic);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// An error message with its location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Renders as `error[E1001]: Unknown token 1a (at 1:3)`, followed by one
/// `note:` line per note.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if self.span != Span::DUMMY {
            write!(f, " (at {})", self.span)?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }
        Ok(())
    }
}

/// Conversion from a typed phase error into a [`Diagnostic`].
///
/// Implemented by the scanner, parser and evaluator error enums so the
/// driver can report every failure the same way.
pub trait IntoDiagnostic {
    /// Build the diagnostic describing `self`.
    fn to_diagnostic(&self) -> Diagnostic;
}

/// Handler for collecting diagnostics over a session
///
/// # Examples
///
/// ```
/// use descent_util::diagnostic::{Diagnostic, Handler};
/// use descent_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("Illegal formula!", Span::DUMMY));
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl IntoDiagnostic for Sample {
        fn to_diagnostic(&self) -> Diagnostic {
            Diagnostic::error("sample", Span::new(4, 5, 2, 4))
                .with_code(DiagnosticCode::E_PARSER_REJECTED)
        }
    }

    #[test]
    fn test_diagnostic_display_with_code_span_and_note() {
        let diag = Diagnostic::error("Unknown token 1a", Span::new(2, 4, 1, 3))
            .with_code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
            .with_note("the rest of the line was discarded");
        assert_eq!(
            diag.to_string(),
            "error[E1001]: Unknown token 1a (at 1:3)\n  note: the rest of the line was discarded"
        );
    }

    #[test]
    fn test_diagnostic_display_without_span() {
        let diag = Diagnostic::error("Illegal formula!", Span::DUMMY);
        assert_eq!(diag.to_string(), "error: Illegal formula!");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert_eq!(handler.error_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_handler_collects_converted_errors() {
        let handler = Handler::new();
        handler.emit_diagnostic(Sample.to_diagnostic());
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        let diags = handler.diagnostics();
        assert_eq!(handler.error_count(), 2);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_PARSER_REJECTED));
        assert_eq!(diags[0].span, Span::new(4, 5, 2, 4));
        assert_eq!(diags[1].code, None);
    }
}
