use crate::ast::{
    Ast, Block, BoolConst, BoolOp, IfStmt, InputStmt, Number, Operator, PrintStmt, Program, ProgramId, RelOp,
    SetStmt, Variable, WhileStmt,
};
use crate::semantic::visiters::ASTVisitor;
use crate::utils::errors::{LispError, LispResult};
use crate::utils::string_utils::write_fragment;

/// Renders a tree back into program text. Every block is written in its
/// explicit `(BLOCK ...)` form, so the output re-parses to the same tree shape.
pub struct TreePrinter<'a> {
    ast: &'a Ast,
    buf: String,
}

impl<'a> TreePrinter<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self {
            ast,
            buf: String::with_capacity(256),
        }
    }

    pub fn render(mut self, program: ProgramId) -> LispResult<String> {
        let ast = self.ast;
        let program = ast
            .programs
            .get(program)
            .ok_or_else(|| LispError::semantic("Unknown program handle"))?;
        program.accept(&mut self)?;
        Ok(self.buf)
    }

    fn text(&mut self, fragment: &str) -> LispResult<()> {
        write_fragment(&mut self.buf, format_args!("{}", fragment))
    }
}

impl<'a> ASTVisitor for TreePrinter<'a> {
    fn visit_program(&mut self, program: &Program) -> LispResult<()> {
        let ast = self.ast;
        ast.blocks[program.main_block()].accept(self)
    }

    fn visit_block(&mut self, block: &Block) -> LispResult<()> {
        let ast = self.ast;
        self.text("(BLOCK")?;
        for &statement in block.statements() {
            self.text(" ")?;
            ast.statements[statement].accept(self)?;
        }
        self.text(")")
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> LispResult<()> {
        let ast = self.ast;
        self.text("(PRINT ")?;
        ast.num_exprs[stmt.expr()].accept(self)?;
        self.text(")")
    }

    fn visit_set_stmt(&mut self, stmt: &SetStmt) -> LispResult<()> {
        let ast = self.ast;
        self.text("(SET ")?;
        ast.num_exprs[stmt.target().expr()].accept(self)?;
        self.text(" ")?;
        ast.num_exprs[stmt.expr()].accept(self)?;
        self.text(")")
    }

    fn visit_input_stmt(&mut self, stmt: &InputStmt) -> LispResult<()> {
        let ast = self.ast;
        self.text("(INPUT ")?;
        ast.num_exprs[stmt.target().expr()].accept(self)?;
        self.text(")")
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt) -> LispResult<()> {
        let ast = self.ast;
        self.text("(WHILE ")?;
        ast.bool_exprs[stmt.condition()].accept(self)?;
        self.text(" ")?;
        ast.blocks[stmt.body()].accept(self)?;
        self.text(")")
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> LispResult<()> {
        let ast = self.ast;
        self.text("(IF ")?;
        ast.bool_exprs[stmt.condition()].accept(self)?;
        self.text(" ")?;
        ast.blocks[stmt.then_block()].accept(self)?;
        self.text(" ")?;
        ast.blocks[stmt.else_block()].accept(self)?;
        self.text(")")
    }

    fn visit_operator(&mut self, operator: &Operator) -> LispResult<()> {
        let ast = self.ast;
        write_fragment(&mut self.buf, format_args!("({} ", operator.code()))?;
        ast.num_exprs[operator.left()].accept(self)?;
        self.text(" ")?;
        ast.num_exprs[operator.right()].accept(self)?;
        self.text(")")
    }

    fn visit_number(&mut self, number: &Number) -> LispResult<()> {
        write_fragment(&mut self.buf, format_args!("{}", number.value()))
    }

    fn visit_variable(&mut self, variable: &Variable) -> LispResult<()> {
        self.text(variable.name())
    }

    fn visit_rel_op(&mut self, rel_op: &RelOp) -> LispResult<()> {
        let ast = self.ast;
        write_fragment(&mut self.buf, format_args!("({} ", rel_op.code()))?;
        ast.num_exprs[rel_op.left()].accept(self)?;
        self.text(" ")?;
        ast.num_exprs[rel_op.right()].accept(self)?;
        self.text(")")
    }

    fn visit_bool_const(&mut self, constant: &BoolConst) -> LispResult<()> {
        self.text(if constant.value() { "TRUE" } else { "FALSE" })
    }

    fn visit_bool_op(&mut self, bool_op: &BoolOp) -> LispResult<()> {
        let ast = self.ast;
        write_fragment(&mut self.buf, format_args!("({} ", bool_op.code()))?;
        ast.bool_exprs[bool_op.left()].accept(self)?;
        if let Some(right) = bool_op.right() {
            self.text(" ")?;
            ast.bool_exprs[right].accept(self)?;
        }
        self.text(")")
    }
}
