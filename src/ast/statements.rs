use crate::ast::{BlockId, BoolExprId, NumExprId, VariableId};
use crate::semantic::visiters::ASTVisitor;
use crate::utils::errors::LispResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Print(PrintStmt),
    Set(SetStmt),
    Input(InputStmt),
    While(WhileStmt),
    If(IfStmt),
}

impl Statement {
    pub fn accept(&self, visitor: &mut dyn ASTVisitor) -> LispResult<()> {
        match self {
            Statement::Print(stmt) => visitor.visit_print_stmt(stmt),
            Statement::Set(stmt) => visitor.visit_set_stmt(stmt),
            Statement::Input(stmt) => visitor.visit_input_stmt(stmt),
            Statement::While(stmt) => visitor.visit_while_stmt(stmt),
            Statement::If(stmt) => visitor.visit_if_stmt(stmt),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    expr: NumExprId,
}

impl PrintStmt {
    pub fn new(expr: NumExprId) -> Self {
        Self { expr }
    }

    pub fn expr(&self) -> NumExprId {
        self.expr
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetStmt {
    target: VariableId,
    expr: NumExprId,
}

impl SetStmt {
    pub fn new(target: VariableId, expr: NumExprId) -> Self {
        Self { target, expr }
    }

    pub fn target(&self) -> VariableId {
        self.target
    }

    pub fn expr(&self) -> NumExprId {
        self.expr
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputStmt {
    target: VariableId,
}

impl InputStmt {
    pub fn new(target: VariableId) -> Self {
        Self { target }
    }

    pub fn target(&self) -> VariableId {
        self.target
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    condition: BoolExprId,
    body: BlockId,
}

impl WhileStmt {
    pub fn new(condition: BoolExprId, body: BlockId) -> Self {
        Self { condition, body }
    }

    pub fn condition(&self) -> BoolExprId {
        self.condition
    }

    pub fn body(&self) -> BlockId {
        self.body
    }
}

/// Both branches are mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    condition: BoolExprId,
    then_block: BlockId,
    else_block: BlockId,
}

impl IfStmt {
    pub fn new(condition: BoolExprId, then_block: BlockId, else_block: BlockId) -> Self {
        Self {
            condition,
            then_block,
            else_block,
        }
    }

    pub fn condition(&self) -> BoolExprId {
        self.condition
    }

    pub fn then_block(&self) -> BlockId {
        self.then_block
    }

    pub fn else_block(&self) -> BlockId {
        self.else_block
    }
}
