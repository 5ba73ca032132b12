use std::fmt::{self, Write};

use codegen_ir::{
    BinaryOperatorKind, CallParameter, Expression, IrError, Literal, MemberAccess, NewInstanceArguments,
    Operator, ParameterDefinition, ParameterModifier, Statement, UnaryOperatorKind,
    VariableDeclarationStatement,
};
use string_interner::{DefaultStringInterner, DefaultSymbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LuaTarget {
    Lua53,
    #[default]
    Lua54,
    /// Lua 5.1 semantics plus the `bit` library.
    LuaJIT,
}

impl LuaTarget {
    fn has_native_bitwise(self) -> bool {
        self != LuaTarget::LuaJIT
    }

    /// Lua 5.3 added the integer subtype along with `//` and `math.mininteger`.
    fn has_integers(self) -> bool {
        self != LuaTarget::LuaJIT
    }
}

/// How named call arguments are treated; Lua only has positional ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamedArguments {
    #[default]
    Positional,
    Reject,
}

#[derive(Debug, Clone)]
pub struct LuaGenConfig {
    pub indent_width: usize,
    pub target: LuaTarget,
    /// Emit raw passthrough lines verbatim. Only for trees built for Lua.
    pub allow_raw_passthrough: bool,
    pub named_arguments: NamedArguments,
}

impl Default for LuaGenConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            target: LuaTarget::default(),
            allow_raw_passthrough: false,
            named_arguments: NamedArguments::default(),
        }
    }
}

pub struct LuaCodeGenerator<'a> {
    output: String,
    indent_level: usize,
    uses_bit_library: bool,
    interner: &'a DefaultStringInterner,
    config: LuaGenConfig,
}

impl<'a> LuaCodeGenerator<'a> {
    pub fn new(interner: &'a DefaultStringInterner) -> Self {
        Self::with_config(interner, LuaGenConfig::default())
    }

    pub fn with_config(interner: &'a DefaultStringInterner, config: LuaGenConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            uses_bit_library: false,
            interner,
            config,
        }
    }

    pub fn with_target(mut self, target: LuaTarget) -> Self {
        self.config.target = target;
        self
    }

    pub fn generate_expression(&mut self, expr: &Expression) -> Result<String, LuaGenError> {
        self.reset();

        self.generate_expr(expr)?;

        tracing::trace!(bytes = self.output.len(), "generated Lua expression");
        Ok(self.output.clone())
    }

    /// Statement lists get the `bit` prelude on LuaJIT when any bitwise operator was used.
    pub fn generate_statements(&mut self, stmts: &[Statement]) -> Result<String, LuaGenError> {
        self.reset();

        for stmt in stmts {
            self.generate_stmt(stmt)?;
        }

        tracing::trace!(statements = stmts.len(), bytes = self.output.len(), "generated Lua statements");
        if self.uses_bit_library {
            return Ok(format!("local bit = require('bit')\n{}", self.output));
        }
        Ok(self.output.clone())
    }

    fn reset(&mut self) {
        self.output.clear();
        self.indent_level = 0;
        self.uses_bit_library = false;
    }

    fn generate_stmt(&mut self, stmt: &Statement) -> Result<(), LuaGenError> {
        match stmt {
            Statement::Expression(expr) => {
                // Lua only accepts calls as expression statements.
                match expr.as_node() {
                    Expression::MethodCall(_) => {}
                    Expression::Raw(_) if self.config.allow_raw_passthrough => {}
                    other => {
                        tracing::debug!(expression = ?other, "expression statement is not a call");
                        return Err(LuaGenError::UnsupportedStatement(format!("{:?}", stmt)));
                    }
                }
                self.write_indent()?;
                let start = self.output.len();
                self.generate_expr(expr)?;
                // A line opening with `(` would continue the previous statement as a call.
                if self.output[start..].starts_with('(') {
                    self.output.insert(start, ';');
                }
                writeln!(self.output)?;
                Ok(())
            }
            Statement::VariableDeclaration(decl) => {
                self.write_indent()?;
                self.generate_local(decl)?;
                writeln!(self.output)?;
                Ok(())
            }
            Statement::Assignment { target, value } => {
                self.write_indent()?;
                self.generate_expr(target)?;
                write!(self.output, " = ")?;
                self.generate_expr(value)?;
                writeln!(self.output)?;
                Ok(())
            }
            Statement::Return(expr) => {
                self.write_indent()?;
                write!(self.output, "return")?;
                if let Some(expr) = expr {
                    write!(self.output, " ")?;
                    self.generate_expr(expr)?;
                }
                writeln!(self.output)?;
                Ok(())
            }
            Statement::Block(stmts) => {
                self.write_indent()?;
                writeln!(self.output, "do")?;
                self.indent_level += 1;
                for stmt in stmts {
                    self.generate_stmt(stmt)?;
                }
                self.indent_level -= 1;
                self.write_indent()?;
                writeln!(self.output, "end")?;
                Ok(())
            }
        }
    }

    fn generate_local(&mut self, decl: &VariableDeclarationStatement) -> Result<(), LuaGenError> {
        let var_name = self.name(decl.name)?;
        write!(self.output, "local {}", var_name)?;
        if decl.constant && self.config.target == LuaTarget::Lua54 {
            write!(self.output, " <const>")?;
        }
        if let Some(value) = &decl.value {
            write!(self.output, " = ")?;
            self.generate_expr(value)?;
        }
        Ok(())
    }

    fn generate_expr(&mut self, expr: &Expression) -> Result<(), LuaGenError> {
        match expr {
            Expression::NamedIdentifier(sym) => {
                let name = self.name(*sym)?;
                write!(self.output, "{}", name).map_err(LuaGenError::Fmt)
            }
            Expression::LocalVariableAccess(local) => {
                let name = self.name(local.name)?;
                write!(self.output, "{}", name).map_err(LuaGenError::Fmt)
            }
            Expression::SelfReference => write!(self.output, "self").map_err(LuaGenError::Fmt),
            Expression::Nil => write!(self.output, "nil").map_err(LuaGenError::Fmt),
            Expression::TypeReference(type_ref) => {
                let name = self.name(type_ref.name)?;
                write!(self.output, "{}", name).map_err(LuaGenError::Fmt)
            }
            Expression::EnumValueAccess(access) => {
                let type_name = self.name(access.type_ref.name)?;
                let value_name = self.name(access.value_name)?;
                write!(self.output, "{}.{}", type_name, value_name).map_err(LuaGenError::Fmt)
            }
            Expression::Literal(lit) => self.generate_literal(lit),
            Expression::ArrayLiteral(array) => {
                write!(self.output, "{{")?;
                self.generate_expr_list(array.elements.iter().map(|e| e.as_node()))?;
                write!(self.output, "}}")?;
                Ok(())
            }
            Expression::TupleLiteral(tuple) => {
                write!(self.output, "{{")?;
                self.generate_expr_list(tuple.members.iter().map(|e| e.as_node()))?;
                write!(self.output, "}}")?;
                Ok(())
            }
            Expression::DictionaryLiteral(dict) => {
                write!(self.output, "{{")?;
                for (i, (key, value)) in dict.entries.iter().enumerate() {
                    if i > 0 {
                        write!(self.output, ", ")?;
                    }
                    write!(self.output, "[")?;
                    self.generate_expr(key)?;
                    write!(self.output, "] = ")?;
                    self.generate_expr(value)?;
                }
                write!(self.output, "}}")?;
                Ok(())
            }
            Expression::UnaryOperator(unary) => {
                let prefix = match &unary.operator {
                    Operator::Standard(UnaryOperatorKind::Plus) => return self.generate_expr(&unary.value),
                    Operator::Standard(UnaryOperatorKind::Minus) => "-",
                    Operator::Standard(UnaryOperatorKind::Not) => "not ",
                    Operator::Standard(UnaryOperatorKind::AddressOf) => {
                        return Err(LuaGenError::UnsupportedOperator("AddressOf".to_string()));
                    }
                    Operator::Custom(text) => text.as_str(),
                };
                write!(self.output, "({}", prefix)?;
                let start = self.output.len();
                self.generate_expr(&unary.value)?;
                // `--` opens a comment in Lua.
                if prefix.ends_with('-') && self.output[start..].starts_with('-') {
                    self.output.insert(start, ' ');
                }
                write!(self.output, ")")?;
                Ok(())
            }
            Expression::BinaryOperator(binary) => {
                let kind = match &binary.operator {
                    Operator::Standard(kind) => *kind,
                    Operator::Custom(text) => {
                        write!(self.output, "(")?;
                        self.generate_expr(&binary.lhs)?;
                        write!(self.output, " {} ", text)?;
                        self.generate_expr(&binary.rhs)?;
                        write!(self.output, ")")?;
                        return Ok(());
                    }
                };

                if let Some(function) = self.bit_library_function(kind) {
                    self.uses_bit_library = true;
                    write!(self.output, "{}(", function)?;
                    self.generate_expr(&binary.lhs)?;
                    write!(self.output, ", ")?;
                    self.generate_expr(&binary.rhs)?;
                    write!(self.output, ")")?;
                    return Ok(());
                }

                let op_str = match kind {
                    BinaryOperatorKind::Addition => " + ",
                    BinaryOperatorKind::Subtraction => " - ",
                    BinaryOperatorKind::Multiplication => " * ",
                    BinaryOperatorKind::Division => " / ",
                    BinaryOperatorKind::LegacyPascalDivision => {
                        // Truncates toward zero; `//` and `math.floor` round toward negative infinity.
                        let division = if self.config.target.has_integers() { "//" } else { "/" };
                        write!(self.output, "(function(a, b) return (a - math.fmod(a, b)) {} b end)(", division)?;
                        self.generate_expr(&binary.lhs)?;
                        write!(self.output, ", ")?;
                        self.generate_expr(&binary.rhs)?;
                        write!(self.output, ")")?;
                        return Ok(());
                    }
                    BinaryOperatorKind::Implies => {
                        write!(self.output, "((not ")?;
                        self.generate_expr(&binary.lhs)?;
                        write!(self.output, ") or ")?;
                        self.generate_expr(&binary.rhs)?;
                        write!(self.output, ")")?;
                        return Ok(());
                    }
                    BinaryOperatorKind::Modulus => " % ",
                    BinaryOperatorKind::Equals => " == ",
                    BinaryOperatorKind::NotEquals => " ~= ",
                    BinaryOperatorKind::LessThan => " < ",
                    BinaryOperatorKind::LessThanOrEquals => " <= ",
                    BinaryOperatorKind::GreaterThan => " > ",
                    BinaryOperatorKind::GreaterThanOrEquals => " >= ",
                    BinaryOperatorKind::LogicalAnd => " and ",
                    BinaryOperatorKind::LogicalOr => " or ",
                    BinaryOperatorKind::Shl => " << ",
                    BinaryOperatorKind::Shr => " >> ",
                    BinaryOperatorKind::BitwiseAnd => " & ",
                    BinaryOperatorKind::BitwiseOr => " | ",
                    BinaryOperatorKind::BitwiseXor => " ~ ",
                    BinaryOperatorKind::LogicalXor
                    | BinaryOperatorKind::Is
                    | BinaryOperatorKind::IsNot
                    | BinaryOperatorKind::In
                    | BinaryOperatorKind::NotIn => {
                        tracing::debug!(operator = ?kind, "binary operator has no Lua equivalent");
                        return Err(LuaGenError::UnsupportedOperator(format!("{:?}", kind)));
                    }
                };

                write!(self.output, "(")?;
                self.generate_expr(&binary.lhs)?;
                write!(self.output, "{}", op_str)?;
                self.generate_expr(&binary.rhs)?;
                write!(self.output, ")")?;
                Ok(())
            }
            Expression::FieldAccess(field) => self.generate_member(&field.access, None, false),
            Expression::MethodCall(call) => {
                self.generate_member(&call.access, Some(&call.parameters), call.call_optionally)
            }
            Expression::PropertyAccess(property) => {
                self.generate_member(&property.access, None, false)?;
                for parameter in &property.parameters {
                    self.check_argument(parameter)?;
                    write!(self.output, "[")?;
                    self.generate_expr(&parameter.value)?;
                    write!(self.output, "]")?;
                }
                Ok(())
            }
            Expression::NewInstance(new_instance) => {
                let type_name = self.name(new_instance.type_ref.name)?;
                let parameters = match &new_instance.arguments {
                    NewInstanceArguments::Constructor(parameters) => parameters,
                    // Lua tables grow on demand, bounds only document intent.
                    NewInstanceArguments::ArrayBounds(_) => return write!(self.output, "{{}}").map_err(LuaGenError::Fmt),
                };
                let constructor = match new_instance.constructor_name {
                    Some(sym) => self.name(sym)?,
                    None => "new",
                };

                let initializers = &new_instance.property_initializers;
                if !initializers.is_empty() {
                    write!(self.output, "(function() local o = ")?;
                }
                write!(self.output, "{}.{}(", type_name, constructor)?;
                self.generate_arguments(parameters)?;
                write!(self.output, ")")?;
                if !initializers.is_empty() {
                    for initializer in initializers {
                        let Some(sym) = initializer.name else {
                            return Err(LuaGenError::UnsupportedExpression(
                                "property initializer without a property name".to_string(),
                            ));
                        };
                        let property = self.name(sym)?;
                        write!(self.output, "; o.{} = ", property)?;
                        self.generate_expr(&initializer.value)?;
                    }
                    write!(self.output, "; return o end)()")?;
                }
                Ok(())
            }
            Expression::ArrayElementAccess(access) => {
                self.generate_expr(&access.array)?;
                for index in &access.parameters {
                    write!(self.output, "[")?;
                    self.generate_expr(index)?;
                    write!(self.output, "]")?;
                }
                Ok(())
            }
            Expression::Parentheses(inner) => {
                write!(self.output, "(")?;
                self.generate_expr(inner)?;
                write!(self.output, ")")?;
                Ok(())
            }
            Expression::IfThenElse(ternary) => {
                write!(self.output, "(function() if ")?;
                self.generate_expr(&ternary.condition)?;
                write!(self.output, " then return ")?;
                self.generate_expr(&ternary.if_expression)?;
                if let Some(else_expression) = &ternary.else_expression {
                    write!(self.output, " else return ")?;
                    self.generate_expr(else_expression)?;
                }
                write!(self.output, " end end)()")?;
                Ok(())
            }
            // Lua values carry their own type; a cast is the value itself.
            Expression::TypeCast(cast) => self.generate_expr(&cast.expression),
            Expression::TypeOf(inner) => {
                write!(self.output, "type(")?;
                self.generate_expr(inner)?;
                write!(self.output, ")")?;
                Ok(())
            }
            Expression::Assigned(assigned) => {
                write!(self.output, "(")?;
                self.generate_expr(&assigned.value)?;
                write!(self.output, "{}", if assigned.inverted { " == nil)" } else { " ~= nil)" })?;
                Ok(())
            }
            Expression::AnonymousMethod(method) => {
                write!(self.output, "function(")?;
                self.generate_parameter_names(&method.parameters)?;
                writeln!(self.output, ")")?;
                self.indent_level += 1;

                for parameter in &method.parameters {
                    if let Some(default_value) = &parameter.default_value {
                        let name = self.name(parameter.name)?;
                        self.write_indent()?;
                        write!(self.output, "if {} == nil then {} = ", name, name)?;
                        self.generate_expr(default_value)?;
                        writeln!(self.output, " end")?;
                    }
                }
                for local in method.local_variables.iter().flatten() {
                    self.write_indent()?;
                    self.generate_local(local)?;
                    writeln!(self.output)?;
                }
                for stmt in &method.statements {
                    self.generate_stmt(stmt)?;
                }

                self.indent_level -= 1;
                self.write_indent()?;
                write!(self.output, "end")?;
                Ok(())
            }
            Expression::Raw(raw) => {
                if !self.config.allow_raw_passthrough {
                    return Err(LuaGenError::Ir(IrError::NonPortable { lines: raw.lines.len() }));
                }
                for (i, line) in raw.lines.iter().enumerate() {
                    if i > 0 {
                        writeln!(self.output)?;
                        self.write_indent()?;
                    }
                    write!(self.output, "{}", line)?;
                }
                Ok(())
            }
            Expression::PropertyValue
            | Expression::Inherited
            | Expression::Selector(_)
            | Expression::SizeOf(_)
            | Expression::Default(_)
            | Expression::PointerDereference(_)
            | Expression::AnonymousType(_) => {
                tracing::debug!(expression = ?expr, "expression has no Lua equivalent");
                Err(LuaGenError::UnsupportedExpression(format!("{:?}", expr)))
            }
        }
    }

    fn generate_literal(&mut self, lit: &Literal) -> Result<(), LuaGenError> {
        match lit {
            Literal::String(s) => write!(self.output, "\"{}\"", escape_lua_string(&s.value)).map_err(LuaGenError::Fmt),
            Literal::Character(c) => {
                write!(self.output, "\"{}\"", escape_lua_string(&c.value.to_string())).map_err(LuaGenError::Fmt)
            }
            // The digits of i64::MIN overflow the integer lexer and read back as a float.
            Literal::Integer(i) if i.value == i64::MIN && self.config.target.has_integers() => {
                write!(self.output, "math.mininteger").map_err(LuaGenError::Fmt)
            }
            Literal::Float(f) if f.value.is_nan() => write!(self.output, "(0/0)").map_err(LuaGenError::Fmt),
            Literal::Float(f) if f.value.is_infinite() => {
                let sign = if f.value.is_sign_negative() { "-" } else { "" };
                write!(self.output, "{}math.huge", sign).map_err(LuaGenError::Fmt)
            }
            Literal::Integer(_) | Literal::Float(_) | Literal::Boolean(_) => {
                let Some(agnostic) = lit.as_language_agnostic() else {
                    return Err(LuaGenError::UnsupportedExpression(format!("{:?}", lit)));
                };
                write!(self.output, "{}", agnostic.string_representation()).map_err(LuaGenError::Fmt)
            }
        }
    }

    /// Field access and method calls share one rendering; nil-safe and optional
    /// calls evaluate the call site once inside a guarded closure.
    fn generate_member(
        &mut self,
        access: &MemberAccess,
        arguments: Option<&[CallParameter]>,
        call_optionally: bool,
    ) -> Result<(), LuaGenError> {
        let member = self.name(access.name)?;

        let Some(call_site) = &access.call_site else {
            write!(self.output, "{}", member)?;
            if let Some(arguments) = arguments {
                write!(self.output, "(")?;
                self.generate_arguments(arguments)?;
                write!(self.output, ")")?;
            }
            return Ok(());
        };

        // Type call sites address static members, which take no implicit self.
        let separator = match (arguments, call_site.as_node()) {
            (Some(_), Expression::TypeReference(_)) | (None, _) => ".",
            (Some(_), _) => ":",
        };

        let guarded = access.nil_safe || call_optionally;
        if guarded {
            write!(self.output, "(function(t) if ")?;
            if access.nil_safe {
                write!(self.output, "t == nil")?;
            }
            if call_optionally {
                if access.nil_safe {
                    write!(self.output, " or ")?;
                }
                write!(self.output, "t.{} == nil", member)?;
            }
            write!(self.output, " then return nil end return t")?;
        } else {
            self.generate_expr(call_site)?;
        }

        write!(self.output, "{}{}", separator, member)?;
        if let Some(arguments) = arguments {
            write!(self.output, "(")?;
            self.generate_arguments(arguments)?;
            write!(self.output, ")")?;
        }

        if guarded {
            write!(self.output, " end)(")?;
            self.generate_expr(call_site)?;
            write!(self.output, ")")?;
        }
        Ok(())
    }

    fn generate_arguments(&mut self, arguments: &[CallParameter]) -> Result<(), LuaGenError> {
        for (i, argument) in arguments.iter().enumerate() {
            self.check_argument(argument)?;
            if i > 0 {
                write!(self.output, ", ")?;
            }
            self.generate_expr(&argument.value)?;
        }
        Ok(())
    }

    fn check_argument(&self, argument: &CallParameter) -> Result<(), LuaGenError> {
        if argument.modifier != ParameterModifier::In {
            return Err(LuaGenError::UnsupportedExpression(format!(
                "{:?} argument passing",
                argument.modifier
            )));
        }
        if argument.name.is_some() && self.config.named_arguments == NamedArguments::Reject {
            let name = argument.name.map(|sym| self.name(sym)).transpose()?.unwrap_or_default();
            return Err(LuaGenError::UnsupportedExpression(format!("named argument '{}'", name)));
        }
        Ok(())
    }

    fn generate_parameter_names(&mut self, parameters: &[ParameterDefinition]) -> Result<(), LuaGenError> {
        for (i, parameter) in parameters.iter().enumerate() {
            if parameter.modifier != ParameterModifier::In {
                return Err(LuaGenError::UnsupportedExpression(format!(
                    "{:?} parameter definition",
                    parameter.modifier
                )));
            }
            if i > 0 {
                write!(self.output, ", ")?;
            }
            let name = self.name(parameter.name)?;
            write!(self.output, "{}", name)?;
        }
        Ok(())
    }

    fn generate_expr_list<'e>(&mut self, items: impl Iterator<Item = &'e Expression>) -> Result<(), LuaGenError> {
        for (i, item) in items.enumerate() {
            if i > 0 {
                write!(self.output, ", ")?;
            }
            self.generate_expr(item)?;
        }
        Ok(())
    }

    /// LuaJIT has no bitwise operators; route them through the `bit` library.
    fn bit_library_function(&self, kind: BinaryOperatorKind) -> Option<&'static str> {
        if self.config.target.has_native_bitwise() {
            return None;
        }
        match kind {
            BinaryOperatorKind::BitwiseAnd => Some("bit.band"),
            BinaryOperatorKind::BitwiseOr => Some("bit.bor"),
            BinaryOperatorKind::BitwiseXor => Some("bit.bxor"),
            BinaryOperatorKind::Shl => Some("bit.lshift"),
            BinaryOperatorKind::Shr => Some("bit.rshift"),
            _ => None,
        }
    }

    fn name(&self, symbol: DefaultSymbol) -> Result<&'a str, LuaGenError> {
        self.interner
            .resolve(symbol)
            .ok_or(LuaGenError::Ir(IrError::UnknownSymbol(symbol)))
    }

    fn write_indent(&mut self) -> fmt::Result {
        for _ in 0..self.indent_level * self.config.indent_width {
            write!(self.output, " ")?;
        }
        Ok(())
    }
}

fn escape_lua_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => escaped.push_str(&format!("\\{:03}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

#[derive(thiserror::Error, Debug)]
pub enum LuaGenError {
    #[error("Formatting error: {0}")]
    Fmt(#[from] fmt::Error),
    #[error("Unsupported statement: {0}")]
    UnsupportedStatement(String),
    #[error("Unsupported expression: {0}")]
    UnsupportedExpression(String),
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error(transparent)]
    Ir(#[from] IrError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_control_characters() {
        assert_eq!(escape_lua_string("say \"hi\"\n"), "say \\\"hi\\\"\\n");
        assert_eq!(escape_lua_string("a\\b"), "a\\\\b");
        assert_eq!(escape_lua_string("\0"), "\\000");
    }

    #[test]
    fn only_luajit_lacks_native_bitwise() {
        assert!(!LuaTarget::LuaJIT.has_native_bitwise());
        assert!(LuaTarget::Lua53.has_native_bitwise());
        assert!(LuaTarget::Lua54.has_native_bitwise());
    }
}
