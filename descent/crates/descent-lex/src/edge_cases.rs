//! Edge case tests for descent-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, ChainScanner, LexError, PolishScanner, Scanner, Token, TokenKind};

    fn polish(source: &str) -> Vec<Token> {
        tokenize(PolishScanner::new(source)).unwrap().collect()
    }

    fn chain(source: &str) -> Vec<Token> {
        tokenize(ChainScanner::new(source)).unwrap().collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(polish("").is_empty());
        assert!(chain("").is_empty());
    }

    #[test]
    fn test_edge_only_newline() {
        assert!(polish("\n").is_empty());
        assert!(chain("\n").is_empty());
    }

    #[test]
    fn test_edge_crlf_line_end() {
        let t = polish("+ 1 2\r\n");
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].lexeme(), "2");
    }

    #[test]
    fn test_edge_long_operand() {
        let digits = "9".repeat(5000);
        let t = polish(&digits);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme().len(), 5000);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = chain(&format!("{};", name));
        assert_eq!(t[0].lexeme(), name);
    }

    #[test]
    fn test_edge_operators_glued_together() {
        let t = polish("+-*/");
        let lexemes: Vec<_> = t.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["+", "-", "*", "/"]);
    }

    #[test]
    fn test_edge_operand_then_operator_then_operand() {
        let t = polish("1-2");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].column(), 2);
        assert_eq!(t[2].column(), 3);
    }

    #[test]
    fn test_edge_leading_zeros_kept_in_lexeme() {
        assert_eq!(polish("007")[0].lexeme(), "007");
    }

    #[test]
    fn test_edge_non_ascii_is_illegal() {
        let err = tokenize(PolishScanner::new("+ é 1")).unwrap_err();
        assert_eq!(err.text(), "é");
        assert_eq!(err.span().column, 3);
    }

    #[test]
    fn test_edge_non_ascii_in_string_literal() {
        let t = chain("\"héllo\"");
        assert_eq!(t[0].lexeme(), "héllo");
        assert_eq!(t[0].kind(), TokenKind::StringLiteral);
    }

    #[test]
    fn test_edge_string_with_punctuation_inside() {
        let t = chain("\"a.b(c);\";");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].lexeme(), "a.b(c);");
    }

    #[test]
    fn test_edge_adjacent_string_literals() {
        let t = chain("\"a\"\"b\"");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].lexeme(), "b");
    }

    #[test]
    fn test_edge_lone_quote() {
        let err = tokenize(ChainScanner::new("\"")).unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_edge_underscore_identifier() {
        let t = chain("_");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_multiline_scanner_tracks_lines() {
        let mut scanner = PolishScanner::new("1\n\n  2");
        assert_eq!(scanner.next_token().unwrap().span().line, 1);
        assert!(scanner.next_token().unwrap().is_end());
        assert!(scanner.next_token().unwrap().is_end());
        let two = scanner.next_token().unwrap();
        assert_eq!(two.span().line, 3);
        assert_eq!(two.column(), 3);
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_property_digit_runs_are_single_operands() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,40}")| {
            let tokens = polish(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind(), TokenKind::Operand);
            prop_assert_eq!(tokens[0].lexeme(), input.as_str());
        });
    }

    #[test]
    fn test_property_identifiers_are_single_tokens() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,60}")| {
            let tokens = chain(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        });
    }

    #[test]
    fn test_property_string_literal_content_is_preserved() {
        use proptest::prelude::*;

        proptest!(|(content in "[^\"\\n]{0,60}")| {
            let tokens = chain(&format!("\"{}\"", content));
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].lexeme(), content.as_str());
        });
    }

    #[test]
    fn test_property_columns_strictly_increase() {
        use proptest::prelude::*;

        proptest!(|(input in "([0-9]{1,3}|[-+*/]| ){0,40}")| {
            let tokens = polish(&input);
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].column() < pair[1].column());
            }
        });
    }

    #[test]
    fn test_property_scanning_never_panics() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,80}")| {
            let _ = tokenize(PolishScanner::new(&input));
            let _ = tokenize(ChainScanner::new(&input));
        });
    }
}
