use crate::ast::{Assign, BinOp, Block, Compound, NoOp, Number, ProcedureDecl, Program, UnaryOp, VarDecl, Variable};

/// One method per node variant. The meaning of the returned integer is up
/// to the pass: a computed value, a count, or a status code.
pub trait AstVisitor {
    fn visit_number(&mut self, number: &Number) -> i32;
    fn visit_variable(&mut self, variable: &Variable) -> i32;
    fn visit_unary_op(&mut self, unary_op: &UnaryOp) -> i32;
    fn visit_binary_op(&mut self, binary_op: &BinOp) -> i32;
    fn visit_assign(&mut self, assign: &Assign) -> i32;
    fn visit_compound(&mut self, compound: &Compound) -> i32;
    fn visit_no_op(&mut self, no_op: &NoOp) -> i32;
    fn visit_var_decl(&mut self, var_decl: &VarDecl) -> i32;
    fn visit_block(&mut self, block: &Block) -> i32;
    fn visit_procedure(&mut self, procedure: &ProcedureDecl) -> i32;
    fn visit_program(&mut self, program: &Program) -> i32;
}
