use crate::ast::Node;
use crate::frontend::token::Token;
use crate::semantic::visitor::AstVisitor;

/// Prefix `+` or `-` applied to a factor.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub op: Token,
    pub operand: Box<Node>,
}

impl UnaryOp {
    pub fn new(op: Token, operand: Node) -> Self {
        Self {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_unary_op(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    pub left: Box<Node>,
    pub op: Token,
    pub right: Box<Node>,
}

impl BinOp {
    pub fn new(left: Node, op: Token, right: Node) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_binary_op(self)
    }
}
