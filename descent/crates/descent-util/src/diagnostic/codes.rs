//! Diagnostic codes for categorizing scanner, parser and evaluator failures.
//!
//! # Examples
//!
//! ```
//! use descent_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNKNOWN_TOKEN;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors and `number` is zero-padded to four digits. The thousands
/// digit names the phase: 1 = scanner, 2 = parser, 3 = evaluator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // SCANNER (E1xxx)
    // =========================================================================

    /// E1001: Scanner - Unknown token (Polish-notation scanner)
    pub const E_LEXER_UNKNOWN_TOKEN: Self = Self::new("E", 1001);
    /// E1002: Scanner - Unexpected character (identifier-chain scanner)
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1002);
    /// E1003: Scanner - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1003);

    // =========================================================================
    // PARSER (E2xxx)
    // =========================================================================

    /// E2001: Parser - Malformed formula (missing operand or residual tokens)
    pub const E_PARSER_MALFORMED_FORMULA: Self = Self::new("E", 2001);
    /// E2002: Parser - Statement rejected by the grammar
    pub const E_PARSER_REJECTED: Self = Self::new("E", 2002);
    /// E2003: Parser - Nesting limit exceeded
    pub const E_PARSER_TOO_DEEP: Self = Self::new("E", 2003);

    // =========================================================================
    // EVALUATOR (E3xxx)
    // =========================================================================

    /// E3001: Evaluator - Division by zero
    pub const E_EVAL_DIVIDE_BY_ZERO: Self = Self::new("E", 3001);
    /// E3002: Evaluator - Integer overflow
    pub const E_EVAL_OVERFLOW: Self = Self::new("E", 3002);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
