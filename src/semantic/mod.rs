pub mod node_counter;
pub mod printer;
pub mod visitor;

pub use node_counter::NodeCounter;
pub use printer::AstPrinter;
pub use visitor::AstVisitor;
