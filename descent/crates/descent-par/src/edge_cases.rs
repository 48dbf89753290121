//! Edge case tests for descent-par

#[cfg(test)]
mod tests {
    use crate::{
        evaluate, parse_formula, recognize, ChainParser, EvalError, Formula, ParseError,
        ParseLimits, ParseResult,
    };
    use descent_lex::Operator;
    use descent_util::{DiagnosticCode, Handler, IntoDiagnostic};

    fn eval(source: &str) -> Result<i64, EvalError> {
        evaluate(source, &ParseLimits::default())
    }

    fn accepted(source: &str) -> bool {
        recognize(source, &ParseLimits::default()).is_accepted()
    }

    // ==================== POLISH NOTATION ====================

    /// EDGE CASE: Empty line has no formula
    #[test]
    fn test_edge_empty_line_is_malformed() {
        assert_eq!(eval(""), Err(EvalError::MalformedFormula { position: 0 }));
    }

    /// EDGE CASE: Operator with no operands
    #[test]
    fn test_edge_lone_operator() {
        assert!(matches!(eval("*"), Err(EvalError::MalformedFormula { .. })));
    }

    /// EDGE CASE: Negative results from subtraction
    #[test]
    fn test_edge_negative_result() {
        assert_eq!(eval("- 3 10"), Ok(-7));
    }

    /// EDGE CASE: Operator glued to operand
    #[test]
    fn test_edge_glued_tokens() {
        assert_eq!(eval("+1 2"), Ok(3));
        assert_eq!(eval("*2 3"), Ok(6));
    }

    /// EDGE CASE: Largest operand
    #[test]
    fn test_edge_i64_max_operand() {
        assert_eq!(eval("9223372036854775807"), Ok(i64::MAX));
        assert!(matches!(
            eval("9223372036854775808"),
            Err(EvalError::Overflow { .. })
        ));
    }

    /// EDGE CASE: i64::MIN / -1
    #[test]
    fn test_edge_min_divided_by_minus_one() {
        let min = "- - 0 9223372036854775807 1";
        assert_eq!(eval(min), Ok(i64::MIN));
        let err = eval(&format!("/ {} - 0 1", min)).unwrap_err();
        assert!(matches!(err, EvalError::Overflow { .. }));
    }

    /// EDGE CASE: Divide by zero in the left operand of a later operator
    #[test]
    fn test_edge_nested_divide_by_zero() {
        assert!(matches!(
            eval("+ / 1 0 2"),
            Err(EvalError::DivideByZero { .. })
        ));
    }

    /// EDGE CASE: Deep nesting at the default limit
    #[test]
    fn test_edge_deep_nesting() {
        let nested = |operators: usize| {
            format!("{}1{}", "+ ".repeat(operators), " 1".repeat(operators))
        };
        let operators = crate::DEFAULT_MAX_DEPTH - 1;
        assert_eq!(eval(&nested(operators)), Ok(operators as i64 + 1));

        let too_deep = nested(crate::DEFAULT_MAX_DEPTH);
        assert_eq!(
            eval(&too_deep),
            Err(EvalError::TooDeep {
                limit: crate::DEFAULT_MAX_DEPTH
            })
        );
    }

    /// EDGE CASE: Pathological nesting far past the limit
    #[test]
    fn test_edge_pathological_nesting() {
        let source = "+ ".repeat(100_000);
        assert!(matches!(eval(&source), Err(EvalError::TooDeep { .. })));
    }

    /// EDGE CASE: Interleaved evaluator and tree agree on failure kind
    #[test]
    fn test_edge_tree_and_evaluator_agree() {
        for source in ["+ 1", "1 2", "+ 1 x", ""] {
            let tree = parse_formula(source, &ParseLimits::default());
            assert_eq!(tree.map(|_| ()), eval(source).map(|_| ()), "{:?}", source);
        }
    }

    // ==================== IDENTIFIER CHAINS ====================

    /// EDGE CASE: Whitespace around tokens
    #[test]
    fn test_edge_whitespace_between_tokens() {
        assert!(accepted("  foo . bar ( \"x\" ) ;  "));
    }

    /// EDGE CASE: Empty parentheses
    #[test]
    fn test_edge_empty_parens() {
        let result = recognize("f();", &ParseLimits::default());
        assert!(matches!(
            result.reason(),
            Some(ParseError::UnexpectedEnd { .. })
        ));
    }

    /// EDGE CASE: Literal followed by a tail is not a chain
    #[test]
    fn test_edge_literal_cannot_be_chained() {
        assert!(!accepted("\"a\".b;"));
    }

    /// EDGE CASE: Stray closing parenthesis
    #[test]
    fn test_edge_stray_rparen() {
        assert!(!accepted("a);"));
    }

    /// EDGE CASE: Semicolon inside a literal is content
    #[test]
    fn test_edge_semicolon_in_literal() {
        let result = recognize("f(\";\");", &ParseLimits::default());
        assert_eq!(result.fields().unwrap().string_literal(), Some(";"));
    }

    /// EDGE CASE: Whitespace-only line
    #[test]
    fn test_edge_blank_line_rejected() {
        assert_eq!(
            recognize("   ", &ParseLimits::default()).to_string(),
            "invalid input"
        );
    }

    /// EDGE CASE: Long dotted chain under the default limit
    #[test]
    fn test_edge_long_chain() {
        let chain = vec!["seg"; 200].join(".");
        assert!(accepted(&format!("{};", chain)));
        let chain = vec!["seg"; 400].join(".");
        assert!(matches!(
            recognize(&format!("{};", chain), &ParseLimits::default()).reason(),
            Some(ParseError::TooDeep { .. })
        ));
    }

    /// EDGE CASE: Rejection diagnostics reach a handler
    #[test]
    fn test_edge_rejections_emit_diagnostics() {
        let handler = Handler::new();
        let mut parser = ChainParser::default();
        for line in ["a;", "a.;", "1;", "b;"] {
            if let ParseResult::Rejected { reason, .. } = parser.recognize(line) {
                handler.emit_diagnostic(reason.to_diagnostic());
            }
        }
        assert_eq!(handler.error_count(), 2);
        let codes: Vec<_> = handler.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(
            codes,
            vec![
                Some(DiagnosticCode::E_PARSER_REJECTED),
                Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
            ]
        );
    }

    // ==================== PROPERTY TESTS ====================

    fn reference(formula: &Formula) -> Option<i64> {
        match formula {
            Formula::Leaf(value) => Some(*value),
            Formula::Node { op, left, right } => {
                let l = reference(left)?;
                let r = reference(right)?;
                match op {
                    Operator::Add => l.checked_add(r),
                    Operator::Sub => l.checked_sub(r),
                    Operator::Mul => l.checked_mul(r),
                    Operator::Div if r == 0 => None,
                    Operator::Div => l.checked_div(r),
                }
            },
        }
    }

    fn arb_formula() -> impl proptest::strategy::Strategy<Value = Formula> {
        use proptest::prelude::*;

        let leaf = (0i64..1000).prop_map(Formula::Leaf);
        leaf.prop_recursive(6, 64, 2, |inner| {
            let op = prop_oneof![
                Just(Operator::Add),
                Just(Operator::Sub),
                Just(Operator::Mul),
                Just(Operator::Div),
            ];
            (op, inner.clone(), inner).prop_map(|(op, left, right)| Formula::Node {
                op,
                left: Box::new(left),
                right: Box::new(right),
            })
        })
    }

    fn arb_statement() -> impl proptest::strategy::Strategy<Value = String> {
        use proptest::prelude::*;

        let ident = "[a-zA-Z_][a-zA-Z0-9_]{0,8}";
        let literal = "[a-zA-Z0-9 .;()]{0,10}".prop_map(|s| format!("\"{}\"", s));
        let chain = (ident, proptest::collection::vec(ident, 0..4)).prop_map(|(head, rest)| {
            std::iter::once(head)
                .chain(rest)
                .collect::<Vec<_>>()
                .join(".")
        });
        let inner = prop_oneof![chain.clone(), literal.clone()];
        prop_oneof![
            literal.prop_map(|l| format!("{};", l)),
            chain.clone().prop_map(|c| format!("{};", c)),
            (chain, inner).prop_map(|(c, i)| format!("{}({});", c, i)),
        ]
    }

    #[test]
    fn test_property_evaluation_matches_reference() {
        use proptest::prelude::*;

        proptest!(|(formula in arb_formula())| {
            let got = match eval(&formula.to_prefix()) {
                Ok(value) => Some(value),
                Err(EvalError::DivideByZero { .. } | EvalError::Overflow { .. }) => None,
                Err(other) => return Err(TestCaseError::fail(format!("unexpected {:?}", other))),
            };
            prop_assert_eq!(got, reference(&formula));
        });
    }

    #[test]
    fn test_property_tree_matches_interleaved_evaluation() {
        use proptest::prelude::*;

        proptest!(|(formula in arb_formula())| {
            let parsed = parse_formula(&formula.to_prefix(), &ParseLimits::default());
            prop_assert_eq!(parsed.as_ref(), Ok(&formula));
            prop_assert_eq!(formula.evaluate().ok(), eval(&formula.to_prefix()).ok());
        });
    }

    #[test]
    fn test_property_generated_statements_are_accepted() {
        use proptest::prelude::*;

        proptest!(|(statement in arb_statement())| {
            prop_assert!(accepted(&statement), "{}", statement);
        });
    }

    #[test]
    fn test_property_recognition_is_idempotent() {
        use proptest::prelude::*;

        proptest!(|(statement in arb_statement())| {
            let mut parser = ChainParser::default();
            let first = parser.recognize(&statement);
            let second = parser.recognize(&statement);
            prop_assert_eq!(first, second);
        });
    }

    #[test]
    fn test_property_to_source_is_reaccepted() {
        use proptest::prelude::*;

        proptest!(|(statement in arb_statement())| {
            let limits = ParseLimits::default();
            let original = recognize(&statement, &limits);
            let fields = original.fields().cloned().unwrap_or_default();
            let rebuilt = recognize(&fields.to_source(), &limits);
            prop_assert_eq!(rebuilt.fields(), Some(&fields));
        });
    }
}
