use crate::ast::{Compound, Node};
use crate::semantic::visitor::AstVisitor;

/// Declarations followed by exactly one compound statement.
///
/// `declarations` is never empty: a block without any declaration holds a
/// single `Node::NoOp`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub declarations: Vec<Node>,
    pub compound: Compound,
}

impl Block {
    pub fn new(declarations: Vec<Node>, compound: Compound) -> Self {
        Self {
            declarations,
            compound,
        }
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_block(self)
    }
}
