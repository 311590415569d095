use crate::ast::{Assign, BinOp, Block, Compound, NoOp, Node, Number, ProcedureDecl, Program, UnaryOp, VarDecl, Variable};
use crate::config::printer::{EMPTY_STATEMENT, LIST_SEPARATOR};
use crate::semantic::visitor::AstVisitor;

/// Renders a tree as a one-line S-expression such as
/// `BinOp(+, Number(3), BinOp(*, Number(4), Number(2)))`.
///
/// Every visit returns `0`; the text accumulates in the printer.
#[derive(Debug, Default)]
pub struct AstPrinter {
    output: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(node: &Node) -> String {
        let mut printer = Self::new();
        node.accept(&mut printer);
        printer.finish()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn list(&mut self, nodes: &[Node]) {
        self.output.push('[');
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.output.push_str(LIST_SEPARATOR);
            }
            node.accept(self);
        }
        self.output.push(']');
    }
}

impl AstVisitor for AstPrinter {
    fn visit_number(&mut self, number: &Number) -> i32 {
        self.output.push_str(&format!("Number({})", number.token.raw));
        0
    }

    fn visit_variable(&mut self, variable: &Variable) -> i32 {
        self.output.push_str(&format!("Variable({})", variable.name()));
        0
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) -> i32 {
        self.output.push_str(&format!("UnaryOp({}{}", unary_op.op.raw, LIST_SEPARATOR));
        unary_op.operand.accept(self);
        self.output.push(')');
        0
    }

    fn visit_binary_op(&mut self, binary_op: &BinOp) -> i32 {
        self.output.push_str(&format!("BinOp({}{}", binary_op.op.raw, LIST_SEPARATOR));
        binary_op.left.accept(self);
        self.output.push_str(LIST_SEPARATOR);
        binary_op.right.accept(self);
        self.output.push(')');
        0
    }

    fn visit_assign(&mut self, assign: &Assign) -> i32 {
        self.output.push_str("Assign(");
        assign.target.accept(self);
        self.output.push_str(LIST_SEPARATOR);
        assign.expr.accept(self);
        self.output.push(')');
        0
    }

    fn visit_compound(&mut self, compound: &Compound) -> i32 {
        self.output.push_str("Compound(");
        self.list(&compound.statements);
        self.output.push(')');
        0
    }

    fn visit_no_op(&mut self, _no_op: &NoOp) -> i32 {
        self.output.push_str(EMPTY_STATEMENT);
        0
    }

    fn visit_var_decl(&mut self, var_decl: &VarDecl) -> i32 {
        self.output
            .push_str(&format!("VarDecl({}{}{})", var_decl.name, LIST_SEPARATOR, var_decl.type_name));
        0
    }

    fn visit_block(&mut self, block: &Block) -> i32 {
        self.output.push_str("Block(");
        self.list(&block.declarations);
        self.output.push_str(LIST_SEPARATOR);
        block.compound.accept(self);
        self.output.push(')');
        0
    }

    fn visit_procedure(&mut self, procedure: &ProcedureDecl) -> i32 {
        self.output.push_str(&format!("Procedure({}{}", procedure.name, LIST_SEPARATOR));
        procedure.block.accept(self);
        self.output.push(')');
        0
    }

    fn visit_program(&mut self, program: &Program) -> i32 {
        self.output.push_str(&format!("Program({}{}", program.name, LIST_SEPARATOR));
        program.block.accept(self);
        self.output.push(')');
        0
    }
}
