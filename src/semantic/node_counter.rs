use crate::ast::{Assign, BinOp, Block, Compound, NoOp, Node, Number, ProcedureDecl, Program, UnaryOp, VarDecl, Variable};
use crate::semantic::visitor::AstVisitor;

/// Counts the nodes of the visited subtree, the root included.
///
/// Typed children (an assignment target, a block's compound statement,
/// a procedure's block) count as nodes of their own.
#[derive(Debug, Default)]
pub struct NodeCounter;

impl NodeCounter {
    pub fn new() -> Self {
        Self
    }

    fn sum(&mut self, nodes: &[Node]) -> i32 {
        let mut total = 0;
        for node in nodes {
            total += node.accept(self);
        }
        total
    }
}

impl AstVisitor for NodeCounter {
    fn visit_number(&mut self, _number: &Number) -> i32 {
        1
    }

    fn visit_variable(&mut self, _variable: &Variable) -> i32 {
        1
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) -> i32 {
        1 + unary_op.operand.accept(self)
    }

    fn visit_binary_op(&mut self, binary_op: &BinOp) -> i32 {
        1 + binary_op.left.accept(self) + binary_op.right.accept(self)
    }

    fn visit_assign(&mut self, assign: &Assign) -> i32 {
        1 + assign.target.accept(self) + assign.expr.accept(self)
    }

    fn visit_compound(&mut self, compound: &Compound) -> i32 {
        1 + self.sum(&compound.statements)
    }

    fn visit_no_op(&mut self, _no_op: &NoOp) -> i32 {
        1
    }

    fn visit_var_decl(&mut self, _var_decl: &VarDecl) -> i32 {
        1
    }

    fn visit_block(&mut self, block: &Block) -> i32 {
        1 + self.sum(&block.declarations) + block.compound.accept(self)
    }

    fn visit_procedure(&mut self, procedure: &ProcedureDecl) -> i32 {
        1 + procedure.block.accept(self)
    }

    fn visit_program(&mut self, program: &Program) -> i32 {
        1 + program.block.accept(self)
    }
}
