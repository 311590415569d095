// Abstract Syntax Tree definitions for the Pascal front-end
// This module contains all AST node types and the `Node` sum type over them.

mod node;
pub use node::Node;

// AST node modules
mod program;
mod block;
mod declarations;
mod statements;
mod expressions;
mod literals;

pub use program::Program;
pub use block::Block;
pub use declarations::{ProcedureDecl, VarDecl};
pub use statements::{Assign, Compound, NoOp};
pub use expressions::{BinOp, UnaryOp};
pub use literals::{Number, Variable};
