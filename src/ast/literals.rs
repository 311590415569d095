use crate::frontend::token::{Token, TokenValue};
use crate::semantic::visitor::AstVisitor;

/// Integer or real literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub token: Token,
}

impl Number {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    pub fn value(&self) -> Option<&TokenValue> {
        self.token.value.as_ref()
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_number(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub token: Token,
}

impl Variable {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    pub fn name(&self) -> &str {
        self.token.name()
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> i32 {
        visitor.visit_variable(self)
    }
}
