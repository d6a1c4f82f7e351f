//! Arena owners for every node category.
//!
//! Each category (numeric expressions, boolean expressions, statements,
//! blocks, programs) has exactly one owner. `make_*` allocates a node, records
//! it in the owner's registry and hands back a key. Keys do not own anything:
//! they are only meaningful together with the arena that issued them, and the
//! nodes they name are released when that arena is dropped.

use crate::ast::{
    Block, BoolConst, BoolExpr, BoolOp, BoolOpCode, IfStmt, InputStmt, NumExpr, Number, OpCode,
    Operator, PrintStmt, Program, RelOp, RelOpCode, SetStmt, Statement, Variable, WhileStmt,
};
use slotmap::{new_key_type, Key, SlotMap};
use std::ops::Index;

new_key_type! {
    pub struct NumExprId;
    pub struct BoolExprId;
    pub struct StatementId;
    pub struct BlockId;
    pub struct ProgramId;
}

/// Handle to a numeric expression that is known to be a [`Variable`].
///
/// Only [`NumExprArena::variable_handle`] can build one, so SET and INPUT
/// targets are type-checked when the handle is created, not when it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId(NumExprId);

impl VariableId {
    pub fn expr(self) -> NumExprId {
        self.0
    }
}

/// Single owner of all nodes of one category. Not `Clone`: a copy would
/// duplicate ownership of every node.
pub struct Arena<K: Key, T> {
    nodes: SlotMap<K, T>,
}

impl<K: Key, T> Arena<K, T> {
    pub fn new() -> Self {
        Self { nodes: SlotMap::with_key() }
    }

    fn alloc(&mut self, node: T) -> K {
        self.nodes.insert(node)
    }

    pub fn get(&self, id: K) -> Option<&T> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<K: Key, T> Default for Arena<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, T> Index<K> for Arena<K, T> {
    type Output = T;

    fn index(&self, id: K) -> &T {
        &self.nodes[id]
    }
}

pub type NumExprArena = Arena<NumExprId, NumExpr>;
pub type BoolExprArena = Arena<BoolExprId, BoolExpr>;
pub type StatementArena = Arena<StatementId, Statement>;
pub type BlockArena = Arena<BlockId, Block>;
pub type ProgramArena = Arena<ProgramId, Program>;

impl Arena<NumExprId, NumExpr> {
    pub fn make_operator(&mut self, code: OpCode, left: NumExprId, right: NumExprId) -> NumExprId {
        self.alloc(NumExpr::Operator(Operator::new(code, left, right)))
    }

    pub fn make_number(&mut self, value: i64) -> NumExprId {
        self.alloc(NumExpr::Number(Number::new(value)))
    }

    pub fn make_variable(&mut self, name: impl Into<String>) -> NumExprId {
        self.alloc(NumExpr::Variable(Variable::new(name)))
    }

    /// Narrow a numeric expression handle to a variable handle, or `None` if
    /// the node is not a `Variable`.
    pub fn variable_handle(&self, id: NumExprId) -> Option<VariableId> {
        match self.get(id) {
            Some(NumExpr::Variable(_)) => Some(VariableId(id)),
            _ => None,
        }
    }

    pub fn variable(&self, id: VariableId) -> Option<&Variable> {
        match self.get(id.0) {
            Some(NumExpr::Variable(variable)) => Some(variable),
            _ => None,
        }
    }
}

impl Arena<BoolExprId, BoolExpr> {
    pub fn make_rel_op(&mut self, code: RelOpCode, left: NumExprId, right: NumExprId) -> BoolExprId {
        self.alloc(BoolExpr::RelOp(RelOp::new(code, left, right)))
    }

    pub fn make_bool_const(&mut self, value: bool) -> BoolExprId {
        self.alloc(BoolExpr::BoolConst(BoolConst::new(value)))
    }

    pub fn make_bool_op(&mut self, code: BoolOpCode, left: BoolExprId, right: BoolExprId) -> BoolExprId {
        self.alloc(BoolExpr::BoolOp(BoolOp::binary(code, left, right)))
    }

    pub fn make_not(&mut self, operand: BoolExprId) -> BoolExprId {
        self.alloc(BoolExpr::BoolOp(BoolOp::not(operand)))
    }
}

impl Arena<StatementId, Statement> {
    pub fn make_if_stmt(&mut self, condition: BoolExprId, then_block: BlockId, else_block: BlockId) -> StatementId {
        self.alloc(Statement::If(IfStmt::new(condition, then_block, else_block)))
    }

    pub fn make_while_stmt(&mut self, condition: BoolExprId, body: BlockId) -> StatementId {
        self.alloc(Statement::While(WhileStmt::new(condition, body)))
    }

    pub fn make_input_stmt(&mut self, target: VariableId) -> StatementId {
        self.alloc(Statement::Input(InputStmt::new(target)))
    }

    pub fn make_print_stmt(&mut self, expr: NumExprId) -> StatementId {
        self.alloc(Statement::Print(PrintStmt::new(expr)))
    }

    pub fn make_set_stmt(&mut self, target: VariableId, expr: NumExprId) -> StatementId {
        self.alloc(Statement::Set(SetStmt::new(target, expr)))
    }
}

impl Arena<BlockId, Block> {
    /// The statement list must be non-empty; the parser never builds an empty block.
    pub fn make_block(&mut self, statements: Vec<StatementId>) -> BlockId {
        self.alloc(Block::new(statements))
    }
}

impl Arena<ProgramId, Program> {
    pub fn make_program(&mut self, main_block: BlockId) -> ProgramId {
        self.alloc(Program::new(main_block))
    }
}
