use std::fmt;
use std::ops::Deref;

use string_interner::DefaultSymbol;

use crate::call::{
    ArrayElementAccessExpression, CallParameter, FieldAccessExpression, MemberAccess,
    MethodCallExpression, NewInstanceExpression, PropertyAccessExpression,
};
use crate::decl::{MemberDefinition, ParameterDefinition};
use crate::literal::{
    ArrayLiteralExpression, AsLiteralExpression, DictionaryLiteralExpression, Literal,
    TupleLiteralExpression,
};
use crate::operator::{BinaryOperatorExpression, UnaryOperatorExpression};
use crate::sentinel::Sentinel;
use crate::stmt::{Statement, VariableDeclarationStatement};
use crate::type_ref::TypeReference;

/// A child slot in the tree: an exclusively owned node or a process-wide sentinel.
#[derive(Clone)]
pub enum Expr {
    Owned(Box<Expression>),
    Shared(&'static Expression),
}

impl Expr {
    pub fn new(expression: impl Into<Expression>) -> Self {
        Expr::Owned(Box::new(expression.into()))
    }

    pub fn sentinel(sentinel: Sentinel) -> Self {
        Expr::Shared(sentinel.get())
    }

    pub fn nil() -> Self {
        Self::sentinel(Sentinel::Nil)
    }

    pub fn self_reference() -> Self {
        Self::sentinel(Sentinel::SelfReference)
    }

    pub fn identifier(name: DefaultSymbol) -> Self {
        Self::new(Expression::NamedIdentifier(name))
    }

    pub fn integer(value: i64) -> Self {
        Self::new(value.as_literal_expression())
    }

    pub fn float(value: f64) -> Self {
        Self::new(value.as_literal_expression())
    }

    pub fn boolean(value: bool) -> Self {
        Self::sentinel(if value { Sentinel::True } else { Sentinel::False })
    }

    pub fn character(value: char) -> Self {
        Self::new(value.as_literal_expression())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(value.into().as_literal_expression())
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Expr::Shared(_))
    }

    /// Identity comparison: true when this slot refers to exactly `node`.
    pub fn is_same_node(&self, node: &Expression) -> bool {
        std::ptr::eq(self.as_node(), node)
    }

    pub fn as_node(&self) -> &Expression {
        match self {
            Expr::Owned(node) => node.as_ref(),
            Expr::Shared(node) => *node,
        }
    }
}

impl Deref for Expr {
    type Target = Expression;

    fn deref(&self) -> &Expression {
        self.as_node()
    }
}

impl AsRef<Expression> for Expr {
    fn as_ref(&self) -> &Expression {
        self.as_node()
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Shared(a), Expr::Shared(b)) => std::ptr::eq(*a, *b),
            _ => self.as_node() == other.as_node(),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Owned(node) => fmt::Debug::fmt(node.as_ref(), f),
            Expr::Shared(node) => write!(f, "&{node:?}"),
        }
    }
}

impl From<Expression> for Expr {
    fn from(expression: Expression) -> Self {
        Expr::new(expression)
    }
}

impl From<Sentinel> for Expr {
    fn from(sentinel: Sentinel) -> Self {
        Expr::sentinel(sentinel)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    // Identifiers and references
    NamedIdentifier(DefaultSymbol),
    LocalVariableAccess(LocalVariableAccessExpression),
    SelfReference,          // "self" or "this"
    Nil,                    // "nil" or "null"
    PropertyValue,          // "value" in C# setters, "newValue" in Swift
    Inherited,
    TypeReference(TypeReference),
    EnumValueAccess(EnumValueAccessExpression),
    Selector(DefaultSymbol), // Cocoa only

    // Literals
    Literal(Literal),
    ArrayLiteral(ArrayLiteralExpression),
    DictionaryLiteral(DictionaryLiteralExpression),
    TupleLiteral(TupleLiteralExpression),

    // Operators
    UnaryOperator(UnaryOperatorExpression),
    BinaryOperator(BinaryOperatorExpression),

    // Access and calls
    FieldAccess(FieldAccessExpression),
    MethodCall(MethodCallExpression),
    PropertyAccess(PropertyAccessExpression),
    NewInstance(NewInstanceExpression),
    ArrayElementAccess(ArrayElementAccessExpression),

    // Structural
    Parentheses(Expr),
    IfThenElse(IfThenElseExpression),
    TypeCast(TypeCastExpression),
    SizeOf(Expr),
    TypeOf(Expr),
    Default(TypeReference),
    Assigned(AssignedExpression),
    PointerDereference(Expr),
    AnonymousMethod(AnonymousMethodExpression),
    AnonymousType(AnonymousTypeExpression),
    Raw(RawExpression),
}

impl Expression {
    /// Field access, method call and property access share call site, name and optional-handling flags.
    pub fn member_access(&self) -> Option<&MemberAccess> {
        match self {
            Expression::FieldAccess(e) => Some(&e.access),
            Expression::MethodCall(e) => Some(&e.access),
            Expression::PropertyAccess(e) => Some(&e.access),
            _ => None,
        }
    }

    /// Ordered arguments of a call-shaped node. Array-bounds allocations report an empty list.
    pub fn call_parameters(&self) -> Option<&[CallParameter]> {
        match self {
            Expression::MethodCall(e) => Some(e.parameters.as_slice()),
            Expression::PropertyAccess(e) => Some(e.parameters.as_slice()),
            Expression::NewInstance(e) => Some(e.parameters()),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Expression::Raw(_))
    }

    /// False when the tree contains a raw passthrough node anywhere below it.
    pub fn is_portable(&self) -> bool {
        crate::analysis::ensure_portable(self).is_ok()
    }
}

macro_rules! impl_into_expression {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Expression {
                fn from(value: $ty) -> Self {
                    Expression::$variant(value)
                }
            }
        )*
    };
}

impl_into_expression! {
    LocalVariableAccessExpression => LocalVariableAccess,
    TypeReference => TypeReference,
    EnumValueAccessExpression => EnumValueAccess,
    Literal => Literal,
    ArrayLiteralExpression => ArrayLiteral,
    DictionaryLiteralExpression => DictionaryLiteral,
    TupleLiteralExpression => TupleLiteral,
    UnaryOperatorExpression => UnaryOperator,
    BinaryOperatorExpression => BinaryOperator,
    FieldAccessExpression => FieldAccess,
    MethodCallExpression => MethodCall,
    PropertyAccessExpression => PropertyAccess,
    NewInstanceExpression => NewInstance,
    ArrayElementAccessExpression => ArrayElementAccess,
    IfThenElseExpression => IfThenElse,
    TypeCastExpression => TypeCast,
    AssignedExpression => Assigned,
    AnonymousMethodExpression => AnonymousMethod,
    AnonymousTypeExpression => AnonymousType,
    RawExpression => Raw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalVariableAccessExpression {
    pub name: DefaultSymbol,
    pub nil_safe: bool,
    pub unwrap_nullable: bool,
}

impl LocalVariableAccessExpression {
    pub fn new(name: DefaultSymbol) -> Self {
        Self {
            name,
            nil_safe: false,
            unwrap_nullable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueAccessExpression {
    pub type_ref: TypeReference,
    pub value_name: DefaultSymbol,
}

impl EnumValueAccessExpression {
    pub fn new(type_ref: TypeReference, value_name: DefaultSymbol) -> Self {
        Self { type_ref, value_name }
    }
}

/// The ternary operator.
#[derive(Debug, Clone, PartialEq)]
pub struct IfThenElseExpression {
    pub condition: Expr,
    pub if_expression: Expr,
    pub else_expression: Option<Expr>,
}

impl IfThenElseExpression {
    pub fn new(condition: Expr, if_expression: Expr, else_expression: Option<Expr>) -> Self {
        Self {
            condition,
            if_expression,
            else_expression,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeCastExpression {
    pub expression: Expr,
    pub target_type: TypeReference,
    pub throws_exception: bool,
    pub guaranteed_safe: bool,
}

impl TypeCastExpression {
    pub fn new(expression: Expr, target_type: TypeReference) -> Self {
        Self {
            expression,
            target_type,
            throws_exception: false,
            guaranteed_safe: false,
        }
    }

    pub fn throwing(mut self) -> Self {
        self.throws_exception = true;
        self
    }

    pub fn guaranteed_safe(mut self) -> Self {
        self.guaranteed_safe = true;
        self
    }
}

/// "is assigned" check, or "is not assigned" when inverted.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedExpression {
    pub value: Expr,
    pub inverted: bool,
}

impl AssignedExpression {
    pub fn new(value: Expr) -> Self {
        Self { value, inverted: false }
    }

    pub fn inverted(value: Expr) -> Self {
        Self { value, inverted: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnonymousMethodExpression {
    pub lambda: bool,
    pub parameters: Vec<ParameterDefinition>,
    pub return_type: Option<TypeReference>,
    pub statements: Vec<Statement>,
    /// Only Delphi-style backends declare locals ahead of the body.
    pub local_variables: Option<Vec<VariableDeclarationStatement>>,
}

impl AnonymousMethodExpression {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self::with_parameters(Vec::new(), statements)
    }

    pub fn with_parameters(parameters: Vec<ParameterDefinition>, statements: Vec<Statement>) -> Self {
        Self {
            lambda: true,
            parameters,
            return_type: None,
            statements,
            local_variables: None,
        }
    }

    pub fn with_return_type(mut self, return_type: TypeReference) -> Self {
        self.return_type = Some(return_type);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnonymousTypeKind {
    Class,
    Struct,
    Interface,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnonymousTypeExpression {
    pub kind: AnonymousTypeKind,
    pub members: Vec<MemberDefinition>,
}

impl AnonymousTypeExpression {
    pub fn new(kind: AnonymousTypeKind) -> Self {
        Self {
            kind,
            members: Vec::new(),
        }
    }

    pub fn with_members(kind: AnonymousTypeKind, members: Vec<MemberDefinition>) -> Self {
        Self { kind, members }
    }
}

/// Verbatim source lines for the backend that produced them. Not portable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExpression {
    pub lines: Vec<String>,
}

impl RawExpression {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.replace('\r', "").split('\n').map(str::to_string).collect(),
        }
    }
}
