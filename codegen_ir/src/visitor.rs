use crate::decl::{MemberDefinition, ParameterDefinition};
use crate::expr::{Expression, RawExpression};
use crate::stmt::Statement;

/// Read-only traversal over an expression tree.
///
/// The default methods walk every child in source order. `visit_raw` has no
/// default: raw passthrough belongs to a single backend, so each pass states
/// how it treats one.
pub trait ExpressionVisitor {
    type Error;

    fn visit_expression(&mut self, expr: &Expression) -> Result<(), Self::Error> {
        walk_expression(self, expr)
    }

    fn visit_statement(&mut self, stmt: &Statement) -> Result<(), Self::Error> {
        walk_statement(self, stmt)
    }

    fn visit_member(&mut self, member: &MemberDefinition) -> Result<(), Self::Error> {
        walk_member(self, member)
    }

    fn visit_raw(&mut self, raw: &RawExpression) -> Result<(), Self::Error>;
}

pub fn walk_expression<V: ExpressionVisitor + ?Sized>(visitor: &mut V, expr: &Expression) -> Result<(), V::Error> {
    match expr {
        Expression::NamedIdentifier(_)
        | Expression::LocalVariableAccess(_)
        | Expression::SelfReference
        | Expression::Nil
        | Expression::PropertyValue
        | Expression::Inherited
        | Expression::TypeReference(_)
        | Expression::EnumValueAccess(_)
        | Expression::Selector(_)
        | Expression::Literal(_)
        | Expression::Default(_) => Ok(()),
        Expression::ArrayLiteral(array) => {
            for element in &array.elements {
                visitor.visit_expression(element)?;
            }
            Ok(())
        }
        Expression::DictionaryLiteral(dict) => {
            for (key, value) in &dict.entries {
                visitor.visit_expression(key)?;
                visitor.visit_expression(value)?;
            }
            Ok(())
        }
        Expression::TupleLiteral(tuple) => {
            for member in &tuple.members {
                visitor.visit_expression(member)?;
            }
            Ok(())
        }
        Expression::UnaryOperator(unary) => visitor.visit_expression(&unary.value),
        Expression::BinaryOperator(binary) => {
            visitor.visit_expression(&binary.lhs)?;
            visitor.visit_expression(&binary.rhs)
        }
        Expression::FieldAccess(_) | Expression::MethodCall(_) | Expression::PropertyAccess(_) => {
            if let Some(call_site) = expr.member_access().and_then(|access| access.call_site.as_ref()) {
                visitor.visit_expression(call_site)?;
            }
            for parameter in expr.call_parameters().unwrap_or_default() {
                visitor.visit_expression(&parameter.value)?;
            }
            Ok(())
        }
        Expression::NewInstance(new_instance) => {
            for parameter in new_instance.parameters() {
                visitor.visit_expression(&parameter.value)?;
            }
            for bound in new_instance.array_bounds().unwrap_or_default() {
                visitor.visit_expression(bound)?;
            }
            for initializer in &new_instance.property_initializers {
                visitor.visit_expression(&initializer.value)?;
            }
            Ok(())
        }
        Expression::ArrayElementAccess(access) => {
            visitor.visit_expression(&access.array)?;
            for index in &access.parameters {
                visitor.visit_expression(index)?;
            }
            Ok(())
        }
        Expression::Parentheses(inner)
        | Expression::SizeOf(inner)
        | Expression::TypeOf(inner)
        | Expression::PointerDereference(inner) => visitor.visit_expression(inner),
        Expression::IfThenElse(ternary) => {
            visitor.visit_expression(&ternary.condition)?;
            visitor.visit_expression(&ternary.if_expression)?;
            if let Some(else_expression) = &ternary.else_expression {
                visitor.visit_expression(else_expression)?;
            }
            Ok(())
        }
        Expression::TypeCast(cast) => visitor.visit_expression(&cast.expression),
        Expression::Assigned(assigned) => visitor.visit_expression(&assigned.value),
        Expression::AnonymousMethod(method) => {
            walk_parameter_definitions(visitor, &method.parameters)?;
            for local in method.local_variables.iter().flatten() {
                if let Some(value) = &local.value {
                    visitor.visit_expression(value)?;
                }
            }
            for stmt in &method.statements {
                visitor.visit_statement(stmt)?;
            }
            Ok(())
        }
        Expression::AnonymousType(anonymous) => {
            for member in &anonymous.members {
                visitor.visit_member(member)?;
            }
            Ok(())
        }
        Expression::Raw(raw) => visitor.visit_raw(raw),
    }
}

pub fn walk_statement<V: ExpressionVisitor + ?Sized>(visitor: &mut V, stmt: &Statement) -> Result<(), V::Error> {
    match stmt {
        Statement::Expression(expr) => visitor.visit_expression(expr),
        Statement::VariableDeclaration(decl) => match &decl.value {
            Some(value) => visitor.visit_expression(value),
            None => Ok(()),
        },
        Statement::Assignment { target, value } => {
            visitor.visit_expression(target)?;
            visitor.visit_expression(value)
        }
        Statement::Return(value) => match value {
            Some(value) => visitor.visit_expression(value),
            None => Ok(()),
        },
        Statement::Block(stmts) => {
            for stmt in stmts {
                visitor.visit_statement(stmt)?;
            }
            Ok(())
        }
    }
}

pub fn walk_member<V: ExpressionVisitor + ?Sized>(visitor: &mut V, member: &MemberDefinition) -> Result<(), V::Error> {
    match member {
        MemberDefinition::Field(field) => match &field.initializer {
            Some(initializer) => visitor.visit_expression(initializer),
            None => Ok(()),
        },
        MemberDefinition::Method(method) => {
            walk_parameter_definitions(visitor, &method.parameters)?;
            for stmt in &method.statements {
                visitor.visit_statement(stmt)?;
            }
            Ok(())
        }
    }
}

fn walk_parameter_definitions<V: ExpressionVisitor + ?Sized>(
    visitor: &mut V,
    parameters: &[ParameterDefinition],
) -> Result<(), V::Error> {
    for parameter in parameters {
        if let Some(default_value) = &parameter.default_value {
            visitor.visit_expression(default_value)?;
        }
    }
    Ok(())
}
