use string_interner::DefaultSymbol;

use crate::expr::{Expr, Expression};
use crate::type_ref::TypeReference;

/// The statement forms expression trees are embedded in.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Expr),
    VariableDeclaration(VariableDeclarationStatement),
    Assignment { target: Expr, value: Expr },
    Return(Option<Expr>),
    Block(Vec<Statement>),
}

impl Statement {
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Statement::Expression(expr) => Some(expr.as_node()),
            _ => None,
        }
    }
}

// Every expression can stand alone as a statement.
impl From<Expr> for Statement {
    fn from(expr: Expr) -> Self {
        Statement::Expression(expr)
    }
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        Statement::Expression(Expr::new(expression))
    }
}

impl From<VariableDeclarationStatement> for Statement {
    fn from(declaration: VariableDeclarationStatement) -> Self {
        Statement::VariableDeclaration(declaration)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationStatement {
    pub name: DefaultSymbol,
    pub type_ref: Option<TypeReference>,
    pub value: Option<Expr>,
    pub constant: bool,
}

impl VariableDeclarationStatement {
    pub fn new(name: DefaultSymbol, type_ref: Option<TypeReference>, value: Option<Expr>) -> Self {
        Self {
            name,
            type_ref,
            value,
            constant: false,
        }
    }

    pub fn constant(name: DefaultSymbol, type_ref: Option<TypeReference>, value: Expr) -> Self {
        Self {
            name,
            type_ref,
            value: Some(value),
            constant: true,
        }
    }
}
