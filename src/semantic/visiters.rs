use crate::ast::{
    Block, BoolConst, BoolOp, IfStmt, InputStmt, Number, Operator, PrintStmt, Program, RelOp, SetStmt,
    Variable, WhileStmt,
};
use crate::utils::errors::LispResult;

/// Traversal capability over the tree. A node's `accept` calls back into the
/// matching `visit_*` operation; children are reached through the arenas the
/// visitor holds.
pub trait ASTVisitor {
    fn visit_program(&mut self, program: &Program) -> LispResult<()>;
    fn visit_block(&mut self, block: &Block) -> LispResult<()>;

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> LispResult<()>;
    fn visit_set_stmt(&mut self, stmt: &SetStmt) -> LispResult<()>;
    fn visit_input_stmt(&mut self, stmt: &InputStmt) -> LispResult<()>;
    fn visit_while_stmt(&mut self, stmt: &WhileStmt) -> LispResult<()>;
    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> LispResult<()>;

    fn visit_operator(&mut self, operator: &Operator) -> LispResult<()>;
    fn visit_number(&mut self, number: &Number) -> LispResult<()>;
    fn visit_variable(&mut self, variable: &Variable) -> LispResult<()>;

    fn visit_rel_op(&mut self, rel_op: &RelOp) -> LispResult<()>;
    fn visit_bool_const(&mut self, constant: &BoolConst) -> LispResult<()>;
    fn visit_bool_op(&mut self, bool_op: &BoolOp) -> LispResult<()>;
}
