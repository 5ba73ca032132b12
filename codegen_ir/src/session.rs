use string_interner::{DefaultStringInterner, DefaultSymbol};

use crate::call::{CallParameter, FieldAccessExpression, MethodCallExpression, PropertyAccessExpression};
use crate::decl::ParameterDefinition;
use crate::error::{IrError, IrResult};
use crate::expr::{EnumValueAccessExpression, Expr, Expression, LocalVariableAccessExpression};
use crate::type_ref::TypeReference;

/// Shared context for building expression trees.
///
/// Owns the string interner every identifier in the tree is stored in, so a
/// translator builds nodes through one session and hands the same session's
/// interner to the emitter that renders them.
pub struct IrSession {
    string_interner: DefaultStringInterner,
}

impl IrSession {
    pub fn new() -> Self {
        Self {
            string_interner: DefaultStringInterner::new(),
        }
    }

    pub fn intern(&mut self, name: &str) -> DefaultSymbol {
        self.string_interner.get_or_intern(name)
    }

    pub fn resolve(&self, symbol: DefaultSymbol) -> Option<&str> {
        self.string_interner.resolve(symbol)
    }

    /// Like [`resolve`](Self::resolve), for callers that propagate errors.
    pub fn name(&self, symbol: DefaultSymbol) -> IrResult<&str> {
        self.resolve(symbol).ok_or(IrError::UnknownSymbol(symbol))
    }

    pub fn string_interner(&self) -> &DefaultStringInterner {
        &self.string_interner
    }

    pub fn string_interner_mut(&mut self) -> &mut DefaultStringInterner {
        &mut self.string_interner
    }

    pub fn identifier(&mut self, name: &str) -> Expr {
        Expr::identifier(self.intern(name))
    }

    pub fn local_variable(&mut self, name: &str) -> LocalVariableAccessExpression {
        LocalVariableAccessExpression::new(self.intern(name))
    }

    pub fn selector(&mut self, name: &str) -> Expr {
        Expr::new(Expression::Selector(self.intern(name)))
    }

    pub fn type_reference(&mut self, name: &str) -> TypeReference {
        TypeReference::named(self.intern(name))
    }

    pub fn enum_value(&mut self, type_ref: TypeReference, value_name: &str) -> EnumValueAccessExpression {
        EnumValueAccessExpression::new(type_ref, self.intern(value_name))
    }

    pub fn field_access(&mut self, call_site: Option<Expr>, name: &str) -> FieldAccessExpression {
        FieldAccessExpression::new(call_site, self.intern(name))
    }

    pub fn method_call(&mut self, call_site: Option<Expr>, name: &str) -> MethodCallExpression {
        MethodCallExpression::new(call_site, self.intern(name))
    }

    pub fn property_access(&mut self, call_site: Option<Expr>, name: &str) -> PropertyAccessExpression {
        PropertyAccessExpression::new(call_site, self.intern(name))
    }

    pub fn named_parameter(&mut self, value: Expr, name: &str) -> CallParameter {
        CallParameter::named(value, self.intern(name))
    }

    pub fn parameter_definition(&mut self, name: &str, type_ref: Option<TypeReference>) -> ParameterDefinition {
        ParameterDefinition::new(self.intern(name), type_ref)
    }
}

impl Default for IrSession {
    fn default() -> Self {
        Self::new()
    }
}
