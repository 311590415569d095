use crate::ast::Block;
use crate::semantic::visitor::AstVisitor;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub block: Block,
}

impl Program {
    pub fn new(name: impl Into<String>, block: Block) -> Self {
        Self {
            name: name.into(),
            block,
        }
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_program(self)
    }
}
