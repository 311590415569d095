use crate::ast::{Node, Variable};
use crate::semantic::visitor::AstVisitor;

#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub target: Variable,
    pub expr: Box<Node>,
}

impl Assign {
    pub fn new(target: Variable, expr: Node) -> Self {
        Self {
            target,
            expr: Box::new(expr),
        }
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_assign(self)
    }
}

/// `BEGIN ... END`. Statements are kept in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    pub statements: Vec<Node>,
}

impl Compound {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_compound(self)
    }
}

/// The empty statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoOp;

impl NoOp {
    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_no_op(self)
    }
}
