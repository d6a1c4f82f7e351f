/*
*                    lispint -- Lisp-syntax imperative language interpreter.
*
* program    = block ;
* block      = "(" "BLOCK" statement { statement } ")"
*            | statement ;
* statement  = "(" "IF" boolexpr block block ")"
*            | "(" "WHILE" boolexpr block ")"
*            | "(" "INPUT" variable ")"
*            | "(" "PRINT" numexpr ")"
*            | "(" "SET" variable numexpr ")" ;
* numexpr    = "(" ( "ADD" | "SUB" | "MUL" | "DIV" ) numexpr numexpr ")"
*            | number | variable ;
* boolexpr   = "(" ( "LT" | "GT" | "EQ" ) numexpr numexpr ")"
*            | "(" ( "AND" | "OR" ) boolexpr boolexpr ")"
*            | "(" "NOT" boolexpr ")"
*            | "TRUE" | "FALSE" ;
*/

// Abstract syntax tree: node types, the arenas that own them, and the
// bundle of arenas that makes up one parsed session.

mod arena;
mod block;
mod conditions;
mod expressions;
mod program;
mod statements;

pub use arena::{
    Arena, BlockArena, BlockId, BoolExprArena, BoolExprId, NumExprArena, NumExprId, ProgramArena,
    ProgramId, StatementArena, StatementId, VariableId,
};
pub use block::Block;
pub use conditions::{BoolConst, BoolExpr, BoolOp, BoolOpCode, RelOp, RelOpCode};
pub use expressions::{NumExpr, Number, OpCode, Operator, Variable};
pub use program::Program;
pub use statements::{IfStmt, InputStmt, PrintStmt, SetStmt, Statement, WhileStmt};

/// The five arena owners of one session. Everything the parser builds lives
/// here and is released together when the `Ast` is dropped.
#[derive(Default)]
pub struct Ast {
    pub num_exprs: NumExprArena,
    pub bool_exprs: BoolExprArena,
    pub statements: StatementArena,
    pub blocks: BlockArena,
    pub programs: ProgramArena,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes across all categories.
    pub fn node_count(&self) -> usize {
        self.num_exprs.len()
            + self.bool_exprs.len()
            + self.statements.len()
            + self.blocks.len()
            + self.programs.len()
    }
}
