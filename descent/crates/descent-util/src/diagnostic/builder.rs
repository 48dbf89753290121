//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Span};

/// Fluent builder for [`Diagnostic`] values.
///
/// # Examples
///
/// ```
/// use descent_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use descent_util::Span;
///
/// let diagnostic = DiagnosticBuilder::error("Divide by ZERO!")
///     .code(DiagnosticCode::E_EVAL_DIVIDE_BY_ZERO)
///     .span(Span::new(4, 5, 1, 5))
///     .note("the divisor reduced to 0")
///     .build();
///
/// assert_eq!(diagnostic.notes.len(), 1);
/// ```
#[derive(Clone, Debug)]
#[must_use = "a diagnostic builder does nothing until built"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start building an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::error(message, Span::DUMMY),
        }
    }

    /// Attach a diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Attach the primary source location
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}
