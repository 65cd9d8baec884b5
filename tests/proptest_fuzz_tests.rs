//! Property-based tests for the scanner, parser, and evaluator.
//!
//! These verify that:
//! 1. The scanner is total: no input panics it, and every token stream
//!    ends with exactly one `Eof` at strictly increasing positions.
//! 2. The parser is total over anything the scanner hands it.
//! 3. Span merging obeys its lattice laws.
//! 4. Evaluating a pure expression twice gives the same value.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use treelox::{evaluate_expression, parse, scan, Expression, Span, Statement, TokenKind, Value};

fn span_strategy() -> impl Strategy<Value = Span> {
    (1u32..50, 1u32..50, 1u32..80, 1u32..80).prop_map(|(l1, l2, c1, c2)| Span {
        line_start: l1.min(l2),
        line_end: l1.max(l2),
        column_start: c1.min(c2),
        column_end: c1.max(c2),
    })
}

/// Lox-ish token soup: enough structure to reach deep into the parser,
/// enough garbage to exercise recovery.
fn source_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("(".to_string()),
            Just(")".to_string()),
            Just(";".to_string()),
            Just("+".to_string()),
            Just("-".to_string()),
            Just("*".to_string()),
            Just("/".to_string()),
            Just("!".to_string()),
            Just("==".to_string()),
            Just("<=".to_string()),
            Just("print".to_string()),
            Just("true".to_string()),
            Just("false".to_string()),
            Just("nil".to_string()),
            Just("@".to_string()),
            Just("\"".to_string()),
            Just("\n".to_string()),
            Just("// comment".to_string()),
            (0u32..1000).prop_map(|n| n.to_string()),
            "[a-z_][a-z0-9_]{0,8}".prop_map(|s| s),
            "\"[ a-z!]{0,10}\"".prop_map(|s| s),
        ],
        0..40,
    )
    .prop_map(|pieces| pieces.join(" "))
}

fn single_expression(source: &str) -> Result<Expression, TestCaseError> {
    let (tokens, diagnostics) = scan(source);
    prop_assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
    let mut results = parse(tokens);
    prop_assert_eq!(results.len(), 1);
    match results.remove(0) {
        Ok(Statement::Expression(expression)) => Ok(expression),
        other => Err(TestCaseError::fail(format!("unexpected: {:?}", other))),
    }
}

proptest! {
    #[test]
    fn scanner_never_panics(source in "[ -~\t\r\n]{0,300}") {
        let (tokens, _diagnostics) = scan(&source);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(&tokens.last().unwrap().kind, &TokenKind::Eof);
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
    }

    #[test]
    fn token_starts_strictly_increase(source in source_soup()) {
        let (tokens, _diagnostics) = scan(&source);
        for pair in tokens.windows(2) {
            let first = (pair[0].span.line_start, pair[0].span.column_start);
            let second = (pair[1].span.line_start, pair[1].span.column_start);
            prop_assert!(first < second, "{:?} then {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn token_spans_are_well_formed(source in source_soup()) {
        let (tokens, _diagnostics) = scan(&source);
        for token in &tokens {
            prop_assert!(token.span.line_start <= token.span.line_end);
            if token.span.is_single_line() {
                prop_assert!(token.span.column_start <= token.span.column_end);
            }
        }
    }

    #[test]
    fn parser_never_panics(source in source_soup()) {
        let (tokens, _diagnostics) = scan(&source);
        let _results = parse(tokens);
    }

    #[test]
    fn parser_is_total_over_raw_ascii(source in "[ -~\n]{0,300}") {
        let (tokens, _diagnostics) = scan(&source);
        let _results = parse(tokens);
    }

    #[test]
    fn merge_laws(a in span_strategy(), b in span_strategy(), c in span_strategy()) {
        prop_assert_eq!(a.merge(a), a);
        prop_assert_eq!(a.merge(b), b.merge(a));
        prop_assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
    }

    #[test]
    fn subtraction_folds_left(terms in prop::collection::vec(-1000i32..1000, 1..8)) {
        let source = terms
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" - ");
        let expression = single_expression(&format!("{};", source))?;

        let expected = terms[1..]
            .iter()
            .fold(f64::from(terms[0]), |acc, t| acc - f64::from(*t));
        prop_assert_eq!(evaluate_expression(&expression), Ok(Value::Number(expected)));
    }

    #[test]
    fn expression_evaluation_is_deterministic(terms in prop::collection::vec(0i32..100, 1..6)) {
        let source = terms
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        let expression = single_expression(&format!("{};", source))?;

        prop_assert_eq!(
            evaluate_expression(&expression),
            evaluate_expression(&expression)
        );
    }

    #[test]
    fn double_negation_matches_truthiness(literal in prop_oneof![
        Just("true"),
        Just("false"),
        Just("nil"),
        Just("0"),
        Just("1"),
        Just("\"\""),
        Just("\"x\"")
    ]) {
        let negated = single_expression(&format!("!!{};", literal))?;
        let plain = single_expression(&format!("{};", literal))?;

        let value = evaluate_expression(&plain).unwrap();
        prop_assert_eq!(
            evaluate_expression(&negated),
            Ok(Value::Bool(value.is_truthy()))
        );
    }
}
