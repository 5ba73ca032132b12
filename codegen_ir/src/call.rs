use string_interner::DefaultSymbol;

use crate::expr::Expr;
use crate::type_ref::TypeReference;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParameterModifier {
    #[default]
    In,
    ByRef,
    Out,
}

/// An argument at a call site. The name is set for named arguments and property initializers.
#[derive(Debug, Clone, PartialEq)]
pub struct CallParameter {
    pub name: Option<DefaultSymbol>,
    pub value: Expr,
    pub modifier: ParameterModifier,
}

impl CallParameter {
    pub fn new(value: Expr) -> Self {
        Self {
            name: None,
            value,
            modifier: ParameterModifier::In,
        }
    }

    pub fn named(value: Expr, name: DefaultSymbol) -> Self {
        Self {
            name: Some(name),
            value,
            modifier: ParameterModifier::In,
        }
    }

    pub fn with_modifier(mut self, modifier: ParameterModifier) -> Self {
        self.modifier = modifier;
        self
    }
}

/// Fields shared by field access, method call and property access.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberAccess {
    /// `None` targets a local or global; use the self sentinel for members of the current instance.
    pub call_site: Option<Expr>,
    pub name: DefaultSymbol,
    /// Short-circuit the whole access to nil when the call site is nil.
    pub nil_safe: bool,
    /// Force-unwrap the call site before accessing the member.
    pub unwrap_nullable: bool,
}

impl MemberAccess {
    pub fn new(call_site: Option<Expr>, name: DefaultSymbol) -> Self {
        Self {
            call_site,
            name,
            nil_safe: false,
            unwrap_nullable: false,
        }
    }

    pub fn targets_self(&self) -> bool {
        matches!(&self.call_site, Some(site) if site.is_same_node(crate::sentinel::Sentinel::SelfReference.get()))
    }
}

macro_rules! member_access_builders {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn nil_safe(mut self) -> Self {
                    self.access.nil_safe = true;
                    self
                }

                pub fn unwrap_nullable(mut self) -> Self {
                    self.access.unwrap_nullable = true;
                    self
                }
            }
        )*
    };
}

member_access_builders!(FieldAccessExpression, MethodCallExpression, PropertyAccessExpression);

#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccessExpression {
    pub access: MemberAccess,
}

impl FieldAccessExpression {
    pub fn new(call_site: Option<Expr>, name: DefaultSymbol) -> Self {
        Self {
            access: MemberAccess::new(call_site, name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodCallExpression {
    pub access: MemberAccess,
    pub parameters: Vec<CallParameter>,
    /// Skip the call when the method itself is optional (Swift `?()`).
    pub call_optionally: bool,
}

impl MethodCallExpression {
    pub fn new(call_site: Option<Expr>, name: DefaultSymbol) -> Self {
        Self::with_parameters(call_site, name, Vec::new())
    }

    pub fn with_parameters(call_site: Option<Expr>, name: DefaultSymbol, parameters: Vec<CallParameter>) -> Self {
        Self {
            access: MemberAccess::new(call_site, name),
            parameters,
            call_optionally: false,
        }
    }

    pub fn parameter(mut self, parameter: CallParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn call_optionally(mut self) -> Self {
        self.call_optionally = true;
        self
    }
}

/// Property read, or an indexed property when parameters are present.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAccessExpression {
    pub access: MemberAccess,
    pub parameters: Vec<CallParameter>,
}

impl PropertyAccessExpression {
    pub fn new(call_site: Option<Expr>, name: DefaultSymbol) -> Self {
        Self::with_parameters(call_site, name, Vec::new())
    }

    pub fn with_parameters(call_site: Option<Expr>, name: DefaultSymbol, parameters: Vec<CallParameter>) -> Self {
        Self {
            access: MemberAccess::new(call_site, name),
            parameters,
        }
    }

    pub fn parameter(mut self, parameter: CallParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// What a new-instance expression allocates: a constructor call or an array of the given bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum NewInstanceArguments {
    Constructor(Vec<CallParameter>),
    ArrayBounds(Vec<Expr>),
}

impl Default for NewInstanceArguments {
    fn default() -> Self {
        NewInstanceArguments::Constructor(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInstanceExpression {
    pub type_ref: TypeReference,
    /// For languages with named constructors (Objective-C, Swift, Elements).
    pub constructor_name: Option<DefaultSymbol>,
    pub arguments: NewInstanceArguments,
    /// Assigned right after construction (Oxygene extended constructor calls).
    pub property_initializers: Vec<CallParameter>,
}

impl NewInstanceExpression {
    pub fn new(type_ref: TypeReference) -> Self {
        Self::with_parameters(type_ref, Vec::new())
    }

    pub fn with_parameters(type_ref: TypeReference, parameters: Vec<CallParameter>) -> Self {
        Self {
            type_ref,
            constructor_name: None,
            arguments: NewInstanceArguments::Constructor(parameters),
            property_initializers: Vec::new(),
        }
    }

    pub fn array(type_ref: TypeReference, bounds: Vec<Expr>) -> Self {
        Self {
            type_ref,
            constructor_name: None,
            arguments: NewInstanceArguments::ArrayBounds(bounds),
            property_initializers: Vec::new(),
        }
    }

    pub fn with_constructor_name(mut self, name: DefaultSymbol) -> Self {
        self.constructor_name = Some(name);
        self
    }

    pub fn property_initializer(mut self, initializer: CallParameter) -> Self {
        self.property_initializers.push(initializer);
        self
    }

    /// Constructor arguments; empty when allocating an array.
    pub fn parameters(&self) -> &[CallParameter] {
        match &self.arguments {
            NewInstanceArguments::Constructor(parameters) => parameters.as_slice(),
            NewInstanceArguments::ArrayBounds(_) => &[],
        }
    }

    pub fn array_bounds(&self) -> Option<&[Expr]> {
        match &self.arguments {
            NewInstanceArguments::Constructor(_) => None,
            NewInstanceArguments::ArrayBounds(bounds) => Some(bounds.as_slice()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayElementAccessExpression {
    pub array: Expr,
    pub parameters: Vec<Expr>,
}

impl ArrayElementAccessExpression {
    pub fn new(array: Expr, parameters: Vec<Expr>) -> Self {
        Self { array, parameters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IrSession;

    #[test]
    fn call_parameter_defaults_to_in() {
        let param = CallParameter::new(Expr::integer(1));
        assert_eq!(param.modifier, ParameterModifier::In);
        assert!(param.name.is_none());

        let param = param.with_modifier(ParameterModifier::Out);
        assert_eq!(param.modifier, ParameterModifier::Out);
    }

    #[test]
    fn parameter_lists_default_to_empty() {
        let mut session = IrSession::new();
        let name = session.intern("items");
        let type_ref = session.type_reference("List");

        assert!(MethodCallExpression::new(None, name).parameters.is_empty());
        assert!(PropertyAccessExpression::new(None, name).parameters.is_empty());
        let new_instance = NewInstanceExpression::new(type_ref);
        assert!(new_instance.parameters().is_empty());
        assert!(new_instance.array_bounds().is_none());
        assert!(new_instance.property_initializers.is_empty());
    }

    #[test]
    fn array_allocation_has_bounds_and_no_constructor_arguments() {
        let mut session = IrSession::new();
        let type_ref = session.type_reference("Byte");
        let new_array = NewInstanceExpression::array(type_ref, vec![Expr::integer(16)]);

        assert_eq!(new_array.array_bounds(), Some(&[Expr::integer(16)][..]));
        assert!(new_array.parameters().is_empty());
    }

    #[test]
    fn flags_are_independent() {
        let mut session = IrSession::new();
        let field = session.field_access(Some(Expr::nil()), "next").nil_safe();
        assert!(field.access.nil_safe);
        assert!(!field.access.unwrap_nullable);

        let call = session.method_call(Some(Expr::self_reference()), "load").unwrap_nullable();
        assert!(!call.access.nil_safe);
        assert!(call.access.unwrap_nullable);
        assert!(call.access.targets_self());
        assert!(!field.access.targets_self());
    }

    #[test]
    fn named_constructor_and_initializers() {
        let mut session = IrSession::new();
        let type_ref = session.type_reference("Point");
        let ctor = session.intern("withX");
        let x = session.named_parameter(Expr::integer(1), "x");
        let y = session.named_parameter(Expr::integer(2), "y");

        let new_point = NewInstanceExpression::with_parameters(type_ref, vec![x])
            .with_constructor_name(ctor)
            .property_initializer(y);

        assert_eq!(new_point.constructor_name, Some(ctor));
        assert_eq!(new_point.parameters().len(), 1);
        assert_eq!(new_point.property_initializers.len(), 1);
        assert_eq!(session.resolve(new_point.property_initializers[0].name.unwrap()), Some("y"));
    }
}
