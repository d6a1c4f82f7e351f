use crate::ast::{Ast, BlockId, BoolConst, BoolExprId, BoolOpCode, NumExprId, OpCode, ProgramId, RelOpCode, StatementId, VariableId};
use crate::frontend::token::{Token, TokenTag};
use crate::utils::config::parser::MAX_NESTING_DEPTH;
use crate::utils::errors::{LispError, LispResult};

pub struct Parser<'a> {
    tokens: &'a [Token],
    // Index of the first unconsumed token.
    position: usize,
    // Blocks and expressions currently open.
    depth: usize,
    ast: &'a mut Ast,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], ast: &'a mut Ast) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            ast,
        }
    }

    fn current(&self) -> LispResult<&'a Token> {
        let tokens: &'a [Token] = self.tokens;
        tokens.get(self.position).ok_or(LispError::UnexpectedEndOfInput {
            position: self.position + 1,
        })
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    // Give back the "(" that turned out to open a bare statement.
    fn retreat(&mut self) {
        self.position -= 1;
    }

    fn error_here(&self, message: &str, token: &Token) -> LispError {
        LispError::parse_error(message, token.text.as_str(), self.position + 1)
    }

    // Run one nonterminal one level deeper, refusing to go past the nesting limit.
    fn nested<T>(&mut self, parse: fn(&mut Self) -> LispResult<T>) -> LispResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current()?;
            return Err(self.error_here("Nesting too deep", token));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn expect(&mut self, expected: TokenTag, message: &str) -> LispResult<()> {
        let token = self.current()?;
        if token.tag != expected {
            return Err(self.error_here(message, token));
        }
        self.advance();
        Ok(())
    }

    /**
     * Parse a block according to the grammar:
     * block = "(" "BLOCK" statement { statement } ")"
     *       | statement .
     * After "(" the next tag decides: BLOCK opens a statement list, a
     * statement keyword means the "(" belongs to a single bare statement.
     */
    fn block(&mut self) -> LispResult<BlockId> {
        self.nested(Self::block_form)
    }

    fn block_form(&mut self) -> LispResult<BlockId> {
        let open = self.current()?;
        if open.tag != TokenTag::Lp {
            return Err(self.error_here("Unexpected initial token for a block", open));
        }
        self.advance();

        let head = self.current()?;
        let statements = if head.tag == TokenTag::Block {
            self.advance();
            let mut statements = vec![self.statement()?];
            while self.current()?.tag != TokenTag::Rp {
                statements.push(self.statement()?);
            }
            self.advance();
            statements
        } else if head.tag.starts_statement() {
            self.retreat();
            vec![self.statement()?]
        } else {
            return Err(self.error_here("Invalid block definition", head));
        };

        Ok(self.ast.blocks.make_block(statements))
    }

    /**
     * Parse a statement according to the grammar:
     * statement = "(" "IF" boolexpr block block ")"
     *           | "(" "WHILE" boolexpr block ")"
     *           | "(" "INPUT" variable ")"
     *           | "(" "PRINT" numexpr ")"
     *           | "(" "SET" variable numexpr ")" .
     */
    fn statement(&mut self) -> LispResult<StatementId> {
        self.expect(TokenTag::Lp, "Unexpected initial token for a statement")?;

        let head = self.current()?;
        let statement = match head.tag {
            TokenTag::If => {
                self.advance();
                let condition = self.bool_expr()?;
                let then_block = self.block()?;
                let else_block = self.block()?;
                self.ast.statements.make_if_stmt(condition, then_block, else_block)
            }
            TokenTag::While => {
                self.advance();
                let condition = self.bool_expr()?;
                let body = self.block()?;
                self.ast.statements.make_while_stmt(condition, body)
            }
            TokenTag::Input => {
                self.advance();
                let target = self.variable_target()?;
                self.ast.statements.make_input_stmt(target)
            }
            TokenTag::Print => {
                self.advance();
                let expr = self.num_expr()?;
                self.ast.statements.make_print_stmt(expr)
            }
            TokenTag::Set => {
                self.advance();
                let target = self.variable_target()?;
                let expr = self.num_expr()?;
                self.ast.statements.make_set_stmt(target, expr)
            }
            _ => return Err(self.error_here("Unrecognized statement", head)),
        };

        self.expect(TokenTag::Rp, "Mismatched parenthesis")?;
        Ok(statement)
    }

    // SET and INPUT targets: any numexpr parses, but only a Variable is accepted.
    fn variable_target(&mut self) -> LispResult<VariableId> {
        let start = self.position;
        let first = self.current()?;
        let expr = self.num_expr()?;
        self.ast
            .num_exprs
            .variable_handle(expr)
            .ok_or_else(|| LispError::parse_error("Unrecognized variable", first.text.as_str(), start + 1))
    }

    /**
     * Parse a numeric expression according to the grammar:
     * numexpr = "(" ( "ADD" | "SUB" | "MUL" | "DIV" ) numexpr numexpr ")"
     *         | number | variable .
     */
    fn num_expr(&mut self) -> LispResult<NumExprId> {
        self.nested(Self::num_expr_form)
    }

    fn num_expr_form(&mut self) -> LispResult<NumExprId> {
        let token = self.current()?;
        match token.tag {
            TokenTag::Lp => {
                self.advance();
                let head = self.current()?;
                let code = match head.tag {
                    TokenTag::Add | TokenTag::Sub | TokenTag::Mul | TokenTag::Div => OpCode::from_tag(head.tag)?,
                    _ => return Err(self.error_here("Unrecognized operator", head)),
                };
                self.advance();
                let left = self.num_expr()?;
                let right = self.num_expr()?;
                self.expect(TokenTag::Rp, "Mismatched parenthesis")?;
                Ok(self.ast.num_exprs.make_operator(code, left, right))
            }
            TokenTag::Number => {
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| self.error_here("Invalid numeric literal", token))?;
                self.advance();
                Ok(self.ast.num_exprs.make_number(value))
            }
            TokenTag::VariableId => {
                self.advance();
                Ok(self.ast.num_exprs.make_variable(token.text.as_str()))
            }
            _ => Err(self.error_here("Unexpected initial token for a numeric expression", token)),
        }
    }

    /**
     * Parse a boolean expression according to the grammar:
     * boolexpr = "(" ( "LT" | "GT" | "EQ" ) numexpr numexpr ")"
     *          | "(" ( "AND" | "OR" ) boolexpr boolexpr ")"
     *          | "(" "NOT" boolexpr ")"
     *          | "TRUE" | "FALSE" .
     */
    fn bool_expr(&mut self) -> LispResult<BoolExprId> {
        self.nested(Self::bool_expr_form)
    }

    fn bool_expr_form(&mut self) -> LispResult<BoolExprId> {
        let token = self.current()?;
        match token.tag {
            TokenTag::Lp => {
                self.advance();
                let head = self.current()?;
                let expr = match head.tag {
                    TokenTag::Lt | TokenTag::Gt | TokenTag::Eq => {
                        let code = RelOpCode::from_tag(head.tag)?;
                        self.advance();
                        let left = self.num_expr()?;
                        let right = self.num_expr()?;
                        self.ast.bool_exprs.make_rel_op(code, left, right)
                    }
                    TokenTag::And | TokenTag::Or => {
                        let code = BoolOpCode::from_tag(head.tag)?;
                        self.advance();
                        let left = self.bool_expr()?;
                        let right = self.bool_expr()?;
                        self.ast.bool_exprs.make_bool_op(code, left, right)
                    }
                    TokenTag::Not => {
                        self.advance();
                        let operand = self.bool_expr()?;
                        self.ast.bool_exprs.make_not(operand)
                    }
                    _ => return Err(self.error_here("Unrecognized operator in boolean expression", head)),
                };
                self.expect(TokenTag::Rp, "Mismatched parenthesis")?;
                Ok(expr)
            }
            TokenTag::True | TokenTag::False => {
                let value = BoolConst::from_tag(token.tag)?;
                self.advance();
                Ok(self.ast.bool_exprs.make_bool_const(value))
            }
            _ => Err(self.error_here("Unexpected initial token for a boolean expression", token)),
        }
    }

    /**
     * Parse a program according to the grammar:
     * program = block
     */
    fn program(&mut self) -> LispResult<ProgramId> {
        let main_block = self.block()?;
        Ok(self.ast.programs.make_program(main_block))
    }

    /// Parse the whole token stream. Every token must belong to the program.
    pub fn parse(&mut self) -> LispResult<ProgramId> {
        let program = self.program()?;
        if let Some(extra) = self.tokens.get(self.position) {
            return Err(self.error_here("Unexpected premature ending", extra));
        }
        Ok(program)
    }
}

pub fn parse_program(tokens: &[Token], ast: &mut Ast) -> LispResult<ProgramId> {
    Parser::new(tokens, ast).parse()
}
