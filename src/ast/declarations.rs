use crate::ast::Block;
use crate::semantic::visitor::AstVisitor;

/// One declared variable. `VAR a, b : INTEGER;` yields two of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub name: String,
    pub type_name: String,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_var_decl(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDecl {
    pub name: String,
    pub block: Block,
}

impl ProcedureDecl {
    pub fn new(name: impl Into<String>, block: Block) -> Self {
        Self {
            name: name.into(),
            block,
        }
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_procedure(self)
    }
}
