use codegen_ir::*;

fn render(expr: &Expr) -> String {
    expr.as_literal()
        .and_then(Literal::as_language_agnostic)
        .map(|lit| lit.string_representation())
        .expect("operand should be a language-agnostic literal")
}

#[test]
fn binary_addition_over_integer_literals() {
    let expr = BinaryOperatorExpression::new(Expr::integer(2), Expr::integer(3), BinaryOperatorKind::Addition);

    assert_eq!(expr.operator.kind(), Some(BinaryOperatorKind::Addition));
    assert_eq!(expr.operator.custom_text(), None);
    assert_eq!(render(&expr.lhs), "2");
    assert_eq!(render(&expr.rhs), "3");
}

#[test]
fn method_call_on_self_with_named_parameter() {
    let mut session = IrSession::new();
    let label = session.named_parameter(Expr::string("x"), "label");
    let call = session.method_call(Some(Expr::self_reference()), "doWork").parameter(label);

    let call_site = call.access.call_site.as_ref().expect("call site should be set");
    assert!(call_site.is_same_node(Sentinel::SelfReference.get()));
    assert!(call.access.targets_self());
    assert_eq!(session.resolve(call.access.name), Some("doWork"));
    assert_eq!(call.parameters.len(), 1);

    let parameter = &call.parameters[0];
    assert_eq!(parameter.name.and_then(|name| session.resolve(name)), Some("label"));
    assert_eq!(parameter.modifier, ParameterModifier::In);
    let Some(Literal::String(value)) = parameter.value.as_literal() else {
        panic!("expected a string literal, got {:?}", parameter.value);
    };
    assert_eq!(value.value, "x");
}

#[test]
fn ternary_without_else_keeps_its_operands() {
    let mut session = IrSession::new();
    let condition = session.identifier("ready");
    let then_branch = Expr::new(session.method_call(None, "start"));
    let condition_ptr: *const Expression = condition.as_node();
    let then_ptr: *const Expression = then_branch.as_node();

    let ternary = IfThenElseExpression::new(condition, then_branch, None);

    assert!(ternary.else_expression.is_none());
    assert!(std::ptr::eq(ternary.condition.as_node(), condition_ptr));
    assert!(std::ptr::eq(ternary.if_expression.as_node(), then_ptr));
}

#[test]
fn anonymous_method_keeps_statement_order() {
    let mut session = IrSession::new();
    let statements: Vec<Statement> = ["first", "second", "third"]
        .into_iter()
        .map(|name| Statement::from(Expr::new(session.method_call(None, name))))
        .collect();

    let method = AnonymousMethodExpression::new(statements.clone());

    assert!(method.parameters.is_empty());
    assert!(method.lambda);
    assert!(method.local_variables.is_none());
    assert_eq!(method.statements, statements);
    let names: Vec<&str> = method
        .statements
        .iter()
        .filter_map(Statement::as_expression)
        .filter_map(Expression::member_access)
        .filter_map(|access| session.resolve(access.name))
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn anonymous_method_with_parameters_and_locals() {
    let mut session = IrSession::new();
    let int_type = session.type_reference("Integer");
    let a = session.parameter_definition("a", Some(int_type.clone()));
    let total = session.intern("total");
    let body = vec![Statement::Return(Some(session.identifier("total")))];

    let mut method = AnonymousMethodExpression::with_parameters(vec![a], body).with_return_type(int_type.clone());
    method.local_variables = Some(vec![VariableDeclarationStatement::new(total, Some(int_type.clone()), Some(Expr::integer(0)))]);

    assert_eq!(method.parameters.len(), 1);
    assert_eq!(method.return_type, Some(int_type));
    assert_eq!(method.local_variables.as_ref().map(Vec::len), Some(1));
}

#[test]
fn anonymous_type_owns_its_members() {
    let mut session = IrSession::new();
    let name = session.intern("name");
    let greet = session.intern("greet");
    let members = vec![
        MemberDefinition::from(FieldDefinition::new(name, None, Some(Expr::string("Ada")))),
        MemberDefinition::from(MethodDefinition::new(greet, Vec::new(), vec![Statement::Return(None)])),
    ];

    let anonymous = AnonymousTypeExpression::with_members(AnonymousTypeKind::Class, members);

    assert_eq!(anonymous.kind, AnonymousTypeKind::Class);
    assert_eq!(anonymous.members.iter().map(MemberDefinition::name).collect::<Vec<_>>(), vec![name, greet]);
    assert!(AnonymousTypeExpression::new(AnonymousTypeKind::Interface).members.is_empty());
}

#[test]
fn expressions_stand_alone_as_statements() {
    let mut session = IrSession::new();
    let call = session.method_call(None, "flush");
    let stmt = Statement::from(Expression::from(call));
    let Statement::Expression(expr) = &stmt else {
        panic!("expected an expression statement");
    };
    assert!(matches!(expr.as_node(), Expression::MethodCall(_)));
}

#[test]
fn sentinels_are_shared_across_trees() {
    let first = IfThenElseExpression::new(Expr::boolean(true), Expr::nil(), None);
    let second = AssignedExpression::inverted(Expr::nil());

    assert!(first.condition.is_same_node(Sentinel::True.get()));
    assert!(first.if_expression.is_same_node(second.value.as_node()));
    assert!(second.inverted);
}

#[test]
fn local_variable_access_flags() {
    let mut session = IrSession::new();
    let mut local = session.local_variable("maybe");
    assert!(!local.nil_safe && !local.unwrap_nullable);
    local.unwrap_nullable = true;
    let expr = Expr::new(local);
    let Expression::LocalVariableAccess(access) = expr.as_node() else {
        panic!("expected local variable access");
    };
    assert!(access.unwrap_nullable);
    assert!(expr.member_access().is_none());
}

#[test]
fn tuple_literal_from_iterator() {
    let tuple: TupleLiteralExpression = (1..=3).map(Expr::integer).collect();
    assert_eq!(tuple.members, vec![Expr::integer(1), Expr::integer(2), Expr::integer(3)]);
}
