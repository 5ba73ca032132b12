//! Expression trees for generating source code in several target languages.
//!
//! A translator builds a tree bottom-up through an [`IrSession`]; emitters
//! read the finished tree and render it. Recurring constants such as `nil`,
//! `self` and `true` are [`Sentinel`]s shared by every tree in the process.

pub mod analysis;
pub mod call;
pub mod decl;
pub mod error;
pub mod expr;
pub mod literal;
pub mod operator;
pub mod sentinel;
pub mod session;
pub mod stmt;
pub mod type_ref;
pub mod visitor;

pub use crate::call::{
    ArrayElementAccessExpression, CallParameter, FieldAccessExpression, MemberAccess,
    MethodCallExpression, NewInstanceArguments, NewInstanceExpression, ParameterModifier,
    PropertyAccessExpression,
};
pub use crate::decl::{FieldDefinition, MemberDefinition, MethodDefinition, ParameterDefinition};
pub use crate::error::{IrError, IrResult};
pub use crate::expr::{
    AnonymousMethodExpression, AnonymousTypeExpression, AnonymousTypeKind, AssignedExpression,
    EnumValueAccessExpression, Expr, Expression, IfThenElseExpression, LocalVariableAccessExpression,
    RawExpression, TypeCastExpression,
};
pub use crate::literal::{
    ArrayKind, ArrayLiteralExpression, AsLiteralExpression, BooleanLiteral, CharacterLiteral,
    DictionaryLiteralExpression, FloatLiteral, IntegerLiteral, LanguageAgnosticLiteral, Literal,
    StringLiteral, TupleLiteralExpression,
};
pub use crate::operator::{
    BinaryOperatorExpression, BinaryOperatorKind, Operator, UnaryOperatorExpression, UnaryOperatorKind,
};
pub use crate::sentinel::Sentinel;
pub use crate::session::IrSession;
pub use crate::stmt::{Statement, VariableDeclarationStatement};
pub use crate::type_ref::TypeReference;
pub use crate::visitor::ExpressionVisitor;
