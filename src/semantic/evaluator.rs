//! Tree-walking evaluator.
//!
//! Expression results travel through two stacks, one for integers and one for
//! booleans. A leaf pushes its value; a composite node pops what its operands
//! pushed and pushes exactly one result. Whoever dispatches into an expression
//! pops exactly one value right afterwards (see `eval_num` / `eval_bool`), so
//! both stacks are empty again between statements.

use crate::ast::{
    Ast, Block, BlockId, BoolConst, BoolExprId, BoolOp, BoolOpCode, IfStmt, InputStmt, NumExprId, Number,
    OpCode, Operator, PrintStmt, Program, ProgramId, RelOp, RelOpCode, SetStmt, Variable, VariableId,
    WhileStmt,
};
use crate::semantic::variable_store::VariableStore;
use crate::semantic::visiters::ASTVisitor;
use crate::utils::config::errors::{CHANNEL_UNDERFLOW, INTEGER_OVERFLOW, NOT_A_NUMBER, ZERO_DIVISION};
use crate::utils::config::interpreter::INPUT_PATTERN;
use crate::utils::errors::{LispError, LispResult};
use regex::Regex;
use std::io::{BufRead, Write};

pub struct Evaluator<'a, R, W> {
    ast: &'a Ast,
    store: &'a mut VariableStore,
    input: R,
    output: W,
    num_results: Vec<i64>,
    bool_results: Vec<bool>,
    input_shape: Regex,
}

impl<'a, R: BufRead, W: Write> Evaluator<'a, R, W> {
    pub fn new(ast: &'a Ast, store: &'a mut VariableStore, input: R, output: W) -> LispResult<Self> {
        Ok(Self {
            ast,
            store,
            input,
            output,
            num_results: Vec::new(),
            bool_results: Vec::new(),
            input_shape: Regex::new(INPUT_PATTERN)?,
        })
    }

    pub fn run(&mut self, program: ProgramId) -> LispResult<()> {
        let ast = self.ast;
        let program = ast
            .programs
            .get(program)
            .ok_or_else(|| LispError::semantic("Unknown program handle"))?;
        program.accept(self)
    }

    /// Number of values left on the (numeric, boolean) result channels.
    pub fn pending_results(&self) -> (usize, usize) {
        (self.num_results.len(), self.bool_results.len())
    }

    fn eval_num(&mut self, id: NumExprId) -> LispResult<i64> {
        let ast = self.ast;
        ast.num_exprs[id].accept(self)?;
        self.num_results
            .pop()
            .ok_or_else(|| LispError::semantic(CHANNEL_UNDERFLOW))
    }

    fn eval_bool(&mut self, id: BoolExprId) -> LispResult<bool> {
        let ast = self.ast;
        ast.bool_exprs[id].accept(self)?;
        self.bool_results
            .pop()
            .ok_or_else(|| LispError::semantic(CHANNEL_UNDERFLOW))
    }

    fn exec_block(&mut self, id: BlockId) -> LispResult<()> {
        let ast = self.ast;
        ast.blocks[id].accept(self)
    }

    fn target_name(&self, id: VariableId) -> LispResult<&'a str> {
        let ast = self.ast;
        ast.num_exprs
            .variable(id)
            .map(Variable::name)
            .ok_or_else(|| LispError::semantic("Assignment target is not a variable"))
    }

    // Skip leading whitespace, then take bytes up to the next whitespace or
    // end of input. The delimiter itself is left unread.
    fn read_word(&mut self) -> LispResult<String> {
        let mut word = Vec::new();
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut finished = false;
            for &byte in available {
                if byte.is_ascii_whitespace() {
                    if !word.is_empty() {
                        finished = true;
                        break;
                    }
                } else {
                    word.push(byte);
                }
                consumed += 1;
            }
            self.input.consume(consumed);
            if finished {
                break;
            }
        }
        Ok(String::from_utf8_lossy(&word).into_owned())
    }
}

impl<'a, R: BufRead, W: Write> ASTVisitor for Evaluator<'a, R, W> {
    fn visit_program(&mut self, program: &Program) -> LispResult<()> {
        self.exec_block(program.main_block())
    }

    fn visit_block(&mut self, block: &Block) -> LispResult<()> {
        let ast = self.ast;
        for &statement in block.statements() {
            ast.statements[statement].accept(self)?;
        }
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> LispResult<()> {
        let value = self.eval_num(stmt.expr())?;
        writeln!(self.output, "{}", value)?;
        self.output.flush()?;
        Ok(())
    }

    fn visit_set_stmt(&mut self, stmt: &SetStmt) -> LispResult<()> {
        let name = self.target_name(stmt.target())?;
        let value = self.eval_num(stmt.expr())?;
        self.store.set_or_create(name, value);
        Ok(())
    }

    fn visit_input_stmt(&mut self, stmt: &InputStmt) -> LispResult<()> {
        let name = self.target_name(stmt.target())?;
        let word = self.read_word()?;
        if !self.input_shape.is_match(&word) {
            return Err(LispError::semantic(format!("{}: '{}'", NOT_A_NUMBER, word)));
        }
        // The shape is right but the value may still not fit in an i64.
        let value = word
            .parse::<i64>()
            .map_err(|_| LispError::semantic(format!("{}: '{}'", NOT_A_NUMBER, word)))?;
        self.store.set_or_create(name, value);
        Ok(())
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt) -> LispResult<()> {
        while self.eval_bool(stmt.condition())? {
            self.exec_block(stmt.body())?;
        }
        Ok(())
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> LispResult<()> {
        if self.eval_bool(stmt.condition())? {
            self.exec_block(stmt.then_block())
        } else {
            self.exec_block(stmt.else_block())
        }
    }

    fn visit_operator(&mut self, operator: &Operator) -> LispResult<()> {
        let left = self.eval_num(operator.left())?;
        let right = self.eval_num(operator.right())?;
        let result = match operator.code() {
            OpCode::Add => left.checked_add(right),
            OpCode::Sub => left.checked_sub(right),
            OpCode::Mul => left.checked_mul(right),
            OpCode::Div => {
                if right == 0 {
                    return Err(LispError::semantic(ZERO_DIVISION));
                }
                left.checked_div(right)
            }
        };
        let result = result.ok_or_else(|| LispError::semantic(format!("{} in {}", INTEGER_OVERFLOW, operator.code())))?;
        self.num_results.push(result);
        Ok(())
    }

    fn visit_number(&mut self, number: &Number) -> LispResult<()> {
        self.num_results.push(number.value());
        Ok(())
    }

    fn visit_variable(&mut self, variable: &Variable) -> LispResult<()> {
        let value = self.store.get(variable.name())?;
        self.num_results.push(value);
        Ok(())
    }

    fn visit_rel_op(&mut self, rel_op: &RelOp) -> LispResult<()> {
        let left = self.eval_num(rel_op.left())?;
        let right = self.eval_num(rel_op.right())?;
        let result = match rel_op.code() {
            RelOpCode::Lt => left < right,
            RelOpCode::Gt => left > right,
            RelOpCode::Eq => left == right,
        };
        self.bool_results.push(result);
        Ok(())
    }

    fn visit_bool_const(&mut self, constant: &BoolConst) -> LispResult<()> {
        self.bool_results.push(constant.value());
        Ok(())
    }

    fn visit_bool_op(&mut self, bool_op: &BoolOp) -> LispResult<()> {
        let left = self.eval_bool(bool_op.left())?;
        let result = match bool_op.code() {
            BoolOpCode::Not => !left,
            BoolOpCode::And if !left => false,
            BoolOpCode::Or if left => true,
            code => {
                let right = bool_op
                    .right()
                    .ok_or_else(|| LispError::semantic(format!("INVALID boolean operator: {} without right operand", code)))?;
                let right = self.eval_bool(right)?;
                match code {
                    BoolOpCode::And => left && right,
                    _ => left || right,
                }
            }
        };
        self.bool_results.push(result);
        Ok(())
    }
}
