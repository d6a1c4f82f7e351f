use crate::ast::StatementId;
use crate::semantic::visiters::ASTVisitor;
use crate::utils::errors::LispResult;

/// Ordered statement list; insertion order is execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    statements: Vec<StatementId>,
}

impl Block {
    pub fn new(statements: Vec<StatementId>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[StatementId] {
        &self.statements
    }

    pub fn accept(&self, visitor: &mut dyn ASTVisitor) -> LispResult<()> {
        visitor.visit_block(self)
    }
}
