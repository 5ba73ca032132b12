use codegen_ir::visitor::{walk_expression, ExpressionVisitor};
use codegen_ir::*;

/// Collects identifier names in visit order.
struct IdentifierCollector<'a> {
    session: &'a IrSession,
    names: Vec<String>,
    raw_nodes: usize,
}

impl ExpressionVisitor for IdentifierCollector<'_> {
    type Error = IrError;

    fn visit_expression(&mut self, expr: &Expression) -> IrResult<()> {
        match expr {
            Expression::NamedIdentifier(name) => self.names.push(self.session.name(*name)?.to_string()),
            Expression::FieldAccess(_) | Expression::MethodCall(_) | Expression::PropertyAccess(_) => {
                let access = expr.member_access().expect("member access variant");
                self.names.push(self.session.name(access.name)?.to_string());
            }
            _ => {}
        }
        walk_expression(self, expr)
    }

    fn visit_raw(&mut self, _raw: &RawExpression) -> IrResult<()> {
        self.raw_nodes += 1;
        Ok(())
    }
}

#[test]
fn walk_visits_children_in_source_order() {
    let mut session = IrSession::new();
    let a = session.identifier("a");
    let b = session.identifier("b");
    let c = session.identifier("c");
    let arg = CallParameter::new(Expr::new(BinaryOperatorExpression::new(b, c, BinaryOperatorKind::Multiplication)));
    let call = session.method_call(Some(a), "apply").parameter(arg);
    let d = session.identifier("d");
    let tree = Expression::from(IfThenElseExpression::new(Expr::new(call), d, Some(Expr::nil())));

    let mut collector = IdentifierCollector { session: &session, names: Vec::new(), raw_nodes: 0 };
    collector.visit_expression(&tree).unwrap();

    assert_eq!(collector.names, vec!["apply", "a", "b", "c", "d"]);
}

#[test]
fn walk_descends_into_anonymous_bodies_and_members() {
    let mut session = IrSession::new();
    let x = session.intern("x");
    let inner = session.identifier("inner");
    let field_init = session.identifier("seed");
    let body = vec![
        Statement::from(VariableDeclarationStatement::new(x, None, Some(inner))),
        Statement::from(Expr::new(RawExpression::from_text("print(x)"))),
    ];
    let method = Expr::new(AnonymousMethodExpression::new(body));
    let anonymous = Expr::new(AnonymousTypeExpression::with_members(
        AnonymousTypeKind::Struct,
        vec![MemberDefinition::from(FieldDefinition::new(x, None, Some(field_init)))],
    ));
    let tree = Expression::from(TupleLiteralExpression::new(vec![method, anonymous]));

    let mut collector = IdentifierCollector { session: &session, names: Vec::new(), raw_nodes: 0 };
    collector.visit_expression(&tree).unwrap();

    assert_eq!(collector.names, vec!["inner", "seed"]);
    assert_eq!(collector.raw_nodes, 1);
    assert_eq!(analysis::ensure_portable(&tree), Err(IrError::NonPortable { lines: 1 }));
}

#[test]
fn new_instance_visits_arguments_bounds_and_initializers() {
    let mut session = IrSession::new();
    let list = session.type_reference("List");
    let arg = CallParameter::new(session.identifier("capacity"));
    let owner = session.identifier("owner");
    let init = session.named_parameter(owner, "Owner");
    let construct = NewInstanceExpression::with_parameters(list.clone(), vec![arg]).property_initializer(init);
    let size = session.identifier("size");
    let allocate = NewInstanceExpression::array(list, vec![size]);
    let tree = Expression::from(ArrayLiteralExpression::new(vec![Expr::new(construct), Expr::new(allocate)]));

    let mut collector = IdentifierCollector { session: &session, names: Vec::new(), raw_nodes: 0 };
    collector.visit_expression(&tree).unwrap();

    assert_eq!(collector.names, vec!["capacity", "owner", "size"]);
    assert_eq!(analysis::count_nodes(&tree), 6);
}
