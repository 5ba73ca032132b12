use std::convert::Infallible;

use crate::error::{IrError, IrResult};
use crate::expr::{Expression, RawExpression};
use crate::stmt::Statement;
use crate::visitor::{walk_expression, ExpressionVisitor};

/// Fails on the first raw passthrough node.
struct PortabilityChecker;

impl ExpressionVisitor for PortabilityChecker {
    type Error = IrError;

    fn visit_raw(&mut self, raw: &RawExpression) -> IrResult<()> {
        tracing::debug!(lines = raw.lines.len(), "raw passthrough blocks portable analysis");
        Err(IrError::NonPortable { lines: raw.lines.len() })
    }
}

pub fn ensure_portable(expr: &Expression) -> IrResult<()> {
    PortabilityChecker.visit_expression(expr)
}

pub fn ensure_portable_statements(stmts: &[Statement]) -> IrResult<()> {
    let mut checker = PortabilityChecker;
    for stmt in stmts {
        checker.visit_statement(stmt)?;
    }
    Ok(())
}

#[derive(Default)]
struct NodeCounter {
    count: usize,
}

impl ExpressionVisitor for NodeCounter {
    type Error = Infallible;

    fn visit_expression(&mut self, expr: &Expression) -> Result<(), Infallible> {
        self.count += 1;
        walk_expression(self, expr)
    }

    fn visit_raw(&mut self, _raw: &RawExpression) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Number of expression nodes in the tree, counting a sentinel once per reference.
pub fn count_nodes(expr: &Expression) -> usize {
    let mut counter = NodeCounter::default();
    let Ok(()) = counter.visit_expression(expr);
    tracing::debug!(nodes = counter.count, "counted expression nodes");
    counter.count
}
