use string_interner::DefaultSymbol;

use crate::call::ParameterModifier;
use crate::expr::Expr;
use crate::stmt::Statement;
use crate::type_ref::TypeReference;

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub name: DefaultSymbol,
    pub type_ref: Option<TypeReference>,
    pub modifier: ParameterModifier,
    pub default_value: Option<Expr>,
}

impl ParameterDefinition {
    pub fn new(name: DefaultSymbol, type_ref: Option<TypeReference>) -> Self {
        Self {
            name,
            type_ref,
            modifier: ParameterModifier::In,
            default_value: None,
        }
    }
}

/// Members of an anonymous type.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberDefinition {
    Field(FieldDefinition),
    Method(MethodDefinition),
}

impl MemberDefinition {
    pub fn name(&self) -> DefaultSymbol {
        match self {
            MemberDefinition::Field(field) => field.name,
            MemberDefinition::Method(method) => method.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: DefaultSymbol,
    pub type_ref: Option<TypeReference>,
    pub initializer: Option<Expr>,
    pub constant: bool,
}

impl FieldDefinition {
    pub fn new(name: DefaultSymbol, type_ref: Option<TypeReference>, initializer: Option<Expr>) -> Self {
        Self {
            name,
            type_ref,
            initializer,
            constant: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinition {
    pub name: DefaultSymbol,
    pub parameters: Vec<ParameterDefinition>,
    pub return_type: Option<TypeReference>,
    pub statements: Vec<Statement>,
}

impl MethodDefinition {
    pub fn new(name: DefaultSymbol, parameters: Vec<ParameterDefinition>, statements: Vec<Statement>) -> Self {
        Self {
            name,
            parameters,
            return_type: None,
            statements,
        }
    }
}

impl From<FieldDefinition> for MemberDefinition {
    fn from(field: FieldDefinition) -> Self {
        MemberDefinition::Field(field)
    }
}

impl From<MethodDefinition> for MemberDefinition {
    fn from(method: MethodDefinition) -> Self {
        MemberDefinition::Method(method)
    }
}
