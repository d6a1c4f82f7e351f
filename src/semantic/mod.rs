pub mod evaluator;
pub mod tree_printer;
pub mod variable_store;
pub mod visiters;

pub use evaluator::Evaluator;
pub use tree_printer::TreePrinter;
pub use variable_store::{Symbol, VariableStore};
pub use visiters::ASTVisitor;
