use crate::expr::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperatorKind {
    Plus,
    Minus,
    Not,
    AddressOf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperatorKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    LegacyPascalDivision, // "div"
    Modulus,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEquals,
    GreaterThan,
    GreaterThanOrEquals,
    LogicalAnd,
    LogicalOr,
    LogicalXor,
    Shl,
    Shr,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Implies,
    Is,
    IsNot,
    In,
    NotIn,
}

impl BinaryOperatorKind {
    /// Operators that only a subset of target languages can express natively.
    pub fn is_backend_specific(&self) -> bool {
        matches!(
            self,
            BinaryOperatorKind::LegacyPascalDivision
                | BinaryOperatorKind::Implies
                | BinaryOperatorKind::In
                | BinaryOperatorKind::NotIn
        )
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperatorKind::Equals
                | BinaryOperatorKind::NotEquals
                | BinaryOperatorKind::LessThan
                | BinaryOperatorKind::LessThanOrEquals
                | BinaryOperatorKind::GreaterThan
                | BinaryOperatorKind::GreaterThanOrEquals
        )
    }
}

/// Either a standard operator or backend-specific operator text, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator<K> {
    Standard(K),
    Custom(String),
}

impl<K: Copy> Operator<K> {
    pub fn kind(&self) -> Option<K> {
        match self {
            Operator::Standard(kind) => Some(*kind),
            Operator::Custom(_) => None,
        }
    }

    pub fn custom_text(&self) -> Option<&str> {
        match self {
            Operator::Standard(_) => None,
            Operator::Custom(text) => Some(text.as_str()),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Operator::Custom(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperatorExpression {
    pub value: Expr,
    pub operator: Operator<UnaryOperatorKind>,
}

impl UnaryOperatorExpression {
    pub fn new(value: Expr, kind: UnaryOperatorKind) -> Self {
        Self {
            value,
            operator: Operator::Standard(kind),
        }
    }

    pub fn with_custom_operator(value: Expr, operator: impl Into<String>) -> Self {
        Self {
            value,
            operator: Operator::Custom(operator.into()),
        }
    }

    pub fn not(value: Expr) -> Self {
        Self::new(value, UnaryOperatorKind::Not)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperatorExpression {
    pub lhs: Expr,
    pub rhs: Expr,
    pub operator: Operator<BinaryOperatorKind>,
}

impl BinaryOperatorExpression {
    pub fn new(lhs: Expr, rhs: Expr, kind: BinaryOperatorKind) -> Self {
        Self {
            lhs,
            rhs,
            operator: Operator::Standard(kind),
        }
    }

    pub fn with_custom_operator(lhs: Expr, rhs: Expr, operator: impl Into<String>) -> Self {
        Self {
            lhs,
            rhs,
            operator: Operator::Custom(operator.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn standard_operator_has_no_custom_text() {
        let expr = BinaryOperatorExpression::new(Expr::integer(1), Expr::integer(2), BinaryOperatorKind::Shl);
        assert_eq!(expr.operator.kind(), Some(BinaryOperatorKind::Shl));
        assert_eq!(expr.operator.custom_text(), None);
        assert!(!expr.operator.is_custom());
    }

    #[test]
    fn custom_operator_has_no_kind() {
        let expr = BinaryOperatorExpression::with_custom_operator(Expr::integer(1), Expr::integer(2), "<=>");
        assert_eq!(expr.operator.kind(), None);
        assert_eq!(expr.operator.custom_text(), Some("<=>"));
    }

    #[test]
    fn not_helper_selects_not_kind() {
        let expr = UnaryOperatorExpression::not(Expr::boolean(true));
        assert_eq!(expr.operator, Operator::Standard(UnaryOperatorKind::Not));
    }

    #[rstest]
    #[case(BinaryOperatorKind::LegacyPascalDivision, true)]
    #[case(BinaryOperatorKind::Implies, true)]
    #[case(BinaryOperatorKind::In, true)]
    #[case(BinaryOperatorKind::NotIn, true)]
    #[case(BinaryOperatorKind::Addition, false)]
    #[case(BinaryOperatorKind::BitwiseXor, false)]
    fn backend_specific_operators(#[case] kind: BinaryOperatorKind, #[case] expected: bool) {
        assert_eq!(kind.is_backend_specific(), expected);
    }

    #[rstest]
    #[case(BinaryOperatorKind::Equals, true)]
    #[case(BinaryOperatorKind::NotEquals, true)]
    #[case(BinaryOperatorKind::LessThanOrEquals, true)]
    #[case(BinaryOperatorKind::GreaterThan, true)]
    #[case(BinaryOperatorKind::Is, false)]
    #[case(BinaryOperatorKind::LogicalAnd, false)]
    fn comparison_operators(#[case] kind: BinaryOperatorKind, #[case] expected: bool) {
        assert_eq!(kind.is_comparison(), expected);
    }
}
