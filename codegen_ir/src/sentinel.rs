//! Process-wide shared instances for recurring constants.
//!
//! Each sentinel is built on first access and lives for the rest of the
//! process. Trees refer to them through [`Expr::Shared`](crate::Expr::Shared),
//! so equality between two uses is pointer identity.

use std::sync::OnceLock;

use crate::expr::Expression;
use crate::literal::AsLiteralExpression;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    Nil,
    SelfReference,
    PropertyValue,
    Inherited,
    True,
    False,
    IntegerZero,
    FloatZero,
    CharacterZero,
    EmptyString,
    Space,
}

const SENTINEL_COUNT: usize = 11;

static SENTINELS: [OnceLock<Expression>; SENTINEL_COUNT] = [const { OnceLock::new() }; SENTINEL_COUNT];

impl Sentinel {
    pub const ALL: [Sentinel; SENTINEL_COUNT] = [
        Sentinel::Nil,
        Sentinel::SelfReference,
        Sentinel::PropertyValue,
        Sentinel::Inherited,
        Sentinel::True,
        Sentinel::False,
        Sentinel::IntegerZero,
        Sentinel::FloatZero,
        Sentinel::CharacterZero,
        Sentinel::EmptyString,
        Sentinel::Space,
    ];

    /// The shared instance for this category.
    pub fn get(self) -> &'static Expression {
        SENTINELS[self as usize].get_or_init(|| {
            tracing::trace!(sentinel = ?self, "initializing sentinel expression");
            self.build()
        })
    }

    /// Which sentinel, if any, `node` is. Identity based: an equal but separately built node is not a sentinel.
    pub fn of(node: &Expression) -> Option<Sentinel> {
        Sentinel::ALL
            .into_iter()
            .find(|sentinel| SENTINELS[*sentinel as usize].get().is_some_and(|shared| std::ptr::eq(shared, node)))
    }

    fn build(self) -> Expression {
        match self {
            Sentinel::Nil => Expression::Nil,
            Sentinel::SelfReference => Expression::SelfReference,
            Sentinel::PropertyValue => Expression::PropertyValue,
            Sentinel::Inherited => Expression::Inherited,
            Sentinel::True => true.as_literal_expression(),
            Sentinel::False => false.as_literal_expression(),
            Sentinel::IntegerZero => 0i64.as_literal_expression(),
            Sentinel::FloatZero => 0.0f64.as_literal_expression(),
            Sentinel::CharacterZero => '\0'.as_literal_expression(),
            Sentinel::EmptyString => "".as_literal_expression(),
            Sentinel::Space => " ".as_literal_expression(),
        }
    }
}
