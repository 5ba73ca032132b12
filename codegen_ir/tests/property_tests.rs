#[cfg(test)]
mod property_tests {
    use codegen_ir::*;
    use proptest::prelude::*;

    fn binary_kind() -> impl Strategy<Value = BinaryOperatorKind> {
        prop::sample::select(vec![
            BinaryOperatorKind::Addition,
            BinaryOperatorKind::Subtraction,
            BinaryOperatorKind::LegacyPascalDivision,
            BinaryOperatorKind::LogicalXor,
            BinaryOperatorKind::Implies,
            BinaryOperatorKind::NotIn,
        ])
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config {
            cases: 64,
            .. proptest::test_runner::Config::default()
        })]

        #[test]
        fn prop_integer_rendering_is_base_ten(value in any::<i64>()) {
            let rendered = IntegerLiteral::new(value).string_representation();
            prop_assert_eq!(rendered.starts_with('-'), value < 0);
            prop_assert!(rendered.trim_start_matches('-').chars().all(|c| c.is_ascii_digit()));
            prop_assert_eq!(rendered, value.to_string());
        }

        #[test]
        fn prop_standard_operator_leaves_custom_text_unset(kind in binary_kind(), lhs in any::<i64>(), rhs in any::<i64>()) {
            let expr = BinaryOperatorExpression::new(Expr::integer(lhs), Expr::integer(rhs), kind);
            prop_assert_eq!(expr.operator.kind(), Some(kind));
            prop_assert!(expr.operator.custom_text().is_none());
        }

        #[test]
        fn prop_custom_operator_leaves_kind_unset(text in "[-+*/<>=!&|^~?]{1,4}") {
            let expr = BinaryOperatorExpression::with_custom_operator(Expr::integer(1), Expr::integer(2), text.clone());
            prop_assert!(expr.operator.kind().is_none());
            prop_assert_eq!(expr.operator.custom_text(), Some(text.as_str()));

            let unary = UnaryOperatorExpression::with_custom_operator(Expr::integer(1), text.clone());
            prop_assert!(unary.operator.kind().is_none());
            prop_assert_eq!(unary.operator.custom_text(), Some(text.as_str()));
        }

        #[test]
        fn prop_anonymous_method_keeps_statements(values in prop::collection::vec(any::<i64>(), 0..16)) {
            let statements: Vec<Statement> = values.iter().copied().map(|v| Statement::from(Expr::integer(v))).collect();
            let method = AnonymousMethodExpression::new(statements.clone());
            prop_assert!(method.parameters.is_empty());
            prop_assert_eq!(method.statements.len(), values.len());
            prop_assert_eq!(method.statements, statements);
        }

        #[test]
        fn prop_raw_text_round_trips_lines(lines in prop::collection::vec("[a-z ();]{0,12}", 1..6)) {
            let raw = RawExpression::from_text(&lines.join("\r\n"));
            prop_assert_eq!(raw.lines, lines);
        }
    }

    proptest! {
        #[test]
        fn prop_sentinel_identity(index in 0usize..Sentinel::ALL.len()) {
            let sentinel = Sentinel::ALL[index];
            prop_assert!(std::ptr::eq(sentinel.get(), sentinel.get()));
            prop_assert!(Expr::sentinel(sentinel).is_same_node(sentinel.get()));
            prop_assert_eq!(Sentinel::of(sentinel.get()), Some(sentinel));
        }
    }
}
