//! Character classes shared by the scanners.

/// Checks if a character may start an identifier: `[A-Za-z_]`.
///
/// # Example
///
/// ```
/// use descent_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character may continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is one of the four arithmetic operators.
///
/// # Example
///
/// ```
/// use descent_lex::chars::is_operator_char;
///
/// assert!(is_operator_char('/'));
/// assert!(!is_operator_char('%'));
/// ```
#[inline]
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}
