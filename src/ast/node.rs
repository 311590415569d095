/*
*                    pasc -- Pascal front-end.
*
* program              = "PROGRAM" variable ";" block "." | compound_statement "." ;
* block                = declarations compound_statement ;
* declarations         = [ "VAR" ( variable_declaration ";" ) { variable_declaration ";" } ]
*                        { "PROCEDURE" ident ";" block ";" } ;
* variable_declaration = ident { "," ident } ":" type_name ;
* compound_statement   = "BEGIN" statement_list "END" ;
* statement_list       = statement { ";" statement } ;
* statement            = compound_statement | assignment_statement | empty ;
* assignment_statement = variable ":=" expr ;
* expr                 = term { ( "+" | "-" ) term } ;
* term                 = factor { ( "*" | "DIV" | "/" ) factor } ;
* factor               = sign factor | integer | real | "(" expr ")" | variable ;
*/

use crate::ast::{Assign, BinOp, Block, Compound, NoOp, Number, ProcedureDecl, Program, UnaryOp, VarDecl, Variable};
use crate::semantic::visitor::AstVisitor;

/// Any syntactic construct. Children are owned, so a tree has no sharing
/// and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(Number),
    Variable(Variable),
    UnaryOp(UnaryOp),
    BinOp(BinOp),
    Assign(Assign),
    Compound(Compound),
    NoOp(NoOp),
    VarDecl(VarDecl),
    Block(Block),
    Procedure(ProcedureDecl),
    Program(Program),
}

impl Node {
    /// Dispatches to the visitor method for the concrete variant.
    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        match self {
            Node::Number(node) => node.accept(visitor),
            Node::Variable(node) => node.accept(visitor),
            Node::UnaryOp(node) => node.accept(visitor),
            Node::BinOp(node) => node.accept(visitor),
            Node::Assign(node) => node.accept(visitor),
            Node::Compound(node) => node.accept(visitor),
            Node::NoOp(node) => node.accept(visitor),
            Node::VarDecl(node) => node.accept(visitor),
            Node::Block(node) => node.accept(visitor),
            Node::Procedure(node) => node.accept(visitor),
            Node::Program(node) => node.accept(visitor),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "Number",
            Node::Variable(_) => "Variable",
            Node::UnaryOp(_) => "UnaryOp",
            Node::BinOp(_) => "BinOp",
            Node::Assign(_) => "Assign",
            Node::Compound(_) => "Compound",
            Node::NoOp(_) => "NoOp",
            Node::VarDecl(_) => "VarDecl",
            Node::Block(_) => "Block",
            Node::Procedure(_) => "Procedure",
            Node::Program(_) => "Program",
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_variant!(
    Number(Number),
    Variable(Variable),
    UnaryOp(UnaryOp),
    BinOp(BinOp),
    Assign(Assign),
    Compound(Compound),
    NoOp(NoOp),
    VarDecl(VarDecl),
    Block(Block),
    Procedure(ProcedureDecl),
    Program(Program),
);
