use pasc::ast::{Assign, BinOp, Block, Compound, NoOp, Number, ProcedureDecl, Program, UnaryOp, VarDecl, Variable};
use pasc::errors::PascalResult;
use pasc::frontend::{ParseMode, TokenKind, TokenValue};
use pasc::parse_source;
use pasc::semantic::{AstPrinter, AstVisitor, NodeCounter};
use std::collections::HashMap;

/// Integer evaluation pass written purely against the visitor trait.
#[derive(Default)]
struct Evaluator {
    globals: HashMap<String, i32>,
    declared: Vec<String>,
}

impl AstVisitor for Evaluator {
    fn visit_number(&mut self, number: &Number) -> i32 {
        match number.value() {
            Some(TokenValue::Integer(value)) => *value as i32,
            Some(TokenValue::Real(value)) => *value as i32,
            _ => 0,
        }
    }

    fn visit_variable(&mut self, variable: &Variable) -> i32 {
        self.globals.get(variable.name()).copied().unwrap_or(0)
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) -> i32 {
        let operand = unary_op.operand.accept(self);
        if unary_op.op.raw == "-" {
            -operand
        } else {
            operand
        }
    }

    fn visit_binary_op(&mut self, binary_op: &BinOp) -> i32 {
        let left = binary_op.left.accept(self);
        let right = binary_op.right.accept(self);
        match binary_op.op.kind {
            TokenKind::Plus => left + right,
            TokenKind::Minus => left - right,
            TokenKind::Multiply => left * right,
            TokenKind::IntegerDivision | TokenKind::FloatDivision => left / right,
            other => panic!("not a binary operator: {:?}", other),
        }
    }

    fn visit_assign(&mut self, assign: &Assign) -> i32 {
        let value = assign.expr.accept(self);
        self.globals.insert(assign.target.name().to_string(), value);
        value
    }

    fn visit_compound(&mut self, compound: &Compound) -> i32 {
        for statement in &compound.statements {
            statement.accept(self);
        }
        0
    }

    fn visit_no_op(&mut self, _no_op: &NoOp) -> i32 {
        0
    }

    fn visit_var_decl(&mut self, var_decl: &VarDecl) -> i32 {
        self.declared.push(var_decl.name.clone());
        0
    }

    fn visit_block(&mut self, block: &Block) -> i32 {
        for declaration in &block.declarations {
            declaration.accept(self);
        }
        block.compound.accept(self)
    }

    fn visit_procedure(&mut self, _procedure: &ProcedureDecl) -> i32 {
        0
    }

    fn visit_program(&mut self, program: &Program) -> i32 {
        program.block.accept(self)
    }
}

fn evaluate(source: &str) -> PascalResult<i32> {
    let node = parse_source(source, ParseMode::Loose)?;
    Ok(node.accept(&mut Evaluator::default()))
}

#[test]
fn test_evaluator_respects_tree_shape() -> PascalResult<()> {
    assert_eq!(evaluate("3 + 4 * 2")?, 11);
    assert_eq!(evaluate("(1+2)*3")?, 9);
    assert_eq!(evaluate("7 - 3 - 2")?, 2);
    assert_eq!(evaluate("-3 + 4")?, 1);
    assert_eq!(evaluate("10 DIV 3")?, 3);
    assert_eq!(evaluate("5 - - 2")?, 7);
    Ok(())
}

#[test]
fn test_evaluator_runs_statements_in_order() -> PascalResult<()> {
    let source = "PROGRAM p; VAR a, b : INTEGER; BEGIN a := 2; b := a * 10; a := b - 1 END.";
    let node = parse_source(source, ParseMode::WholeProgram)?;
    let mut evaluator = Evaluator::default();
    node.accept(&mut evaluator);
    assert_eq!(evaluator.declared, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(evaluator.globals.get("a"), Some(&19));
    assert_eq!(evaluator.globals.get("b"), Some(&20));
    Ok(())
}

#[test]
fn test_node_counter() -> PascalResult<()> {
    let expr = parse_source("3 + 4 * 2", ParseMode::Loose)?;
    assert_eq!(expr.accept(&mut NodeCounter::new()), 5);

    // Program, Block, VarDecl, Compound, Assign, Variable, Number
    let program = parse_source("PROGRAM p; VAR x : INTEGER; BEGIN x := 5 END.", ParseMode::WholeProgram)?;
    assert_eq!(program.accept(&mut NodeCounter::new()), 7);

    // Block, NoOp declaration, Compound, NoOp statement
    let empty = parse_source("BEGIN END.", ParseMode::WholeProgram)?;
    assert_eq!(empty.accept(&mut NodeCounter::new()), 4);
    Ok(())
}

#[test]
fn test_printer_accumulates_output() -> PascalResult<()> {
    let node = parse_source("-(a + 1)", ParseMode::Loose)?;
    let mut printer = AstPrinter::new();
    assert_eq!(node.accept(&mut printer), 0);
    assert_eq!(printer.output(), "UnaryOp(-, BinOp(+, Variable(a), Number(1)))");
    Ok(())
}

#[test]
fn test_typed_children_accept_directly() -> PascalResult<()> {
    let node = parse_source("PROGRAM p; PROCEDURE q; BEGIN END; BEGIN END.", ParseMode::WholeProgram)?;
    let pasc::ast::Node::Program(program) = node else {
        panic!("expected Program");
    };
    let mut printer = AstPrinter::new();
    program.block.compound.accept(&mut printer);
    assert_eq!(printer.finish(), "Compound([NoOp])");
    assert_eq!(program.block.accept(&mut NodeCounter::new()), 8);
    Ok(())
}
