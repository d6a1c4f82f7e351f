use crate::ast::BlockId;
use crate::semantic::visiters::ASTVisitor;
use crate::utils::errors::LispResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    main_block: BlockId,
}

impl Program {
    pub fn new(main_block: BlockId) -> Self {
        Self { main_block }
    }

    pub fn main_block(&self) -> BlockId {
        self.main_block
    }

    pub fn accept(&self, visitor: &mut dyn ASTVisitor) -> LispResult<()> {
        visitor.visit_program(self)
    }
}
