use crate::ast::NumExprId;
use crate::frontend::token::TokenTag;
use crate::semantic::visiters::ASTVisitor;
use crate::utils::errors::{LispError, LispResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    Add,
    Sub,
    Mul,
    Div,
}

impl OpCode {
    pub fn from_tag(tag: TokenTag) -> LispResult<Self> {
        match tag {
            TokenTag::Add => Ok(OpCode::Add),
            TokenTag::Sub => Ok(OpCode::Sub),
            TokenTag::Mul => Ok(OpCode::Mul),
            TokenTag::Div => Ok(OpCode::Div),
            other => Err(LispError::conversion(other, "OpCode")),
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            OpCode::Add => "ADD",
            OpCode::Sub => "SUB",
            OpCode::Mul => "MUL",
            OpCode::Div => "DIV",
        };
        write!(f, "{}", word)
    }
}

/// Numeric expression: the closed set of nodes that evaluate to an integer.
#[derive(Debug, Clone, PartialEq)]
pub enum NumExpr {
    Operator(Operator),
    Number(Number),
    Variable(Variable),
}

impl NumExpr {
    pub fn accept(&self, visitor: &mut dyn ASTVisitor) -> LispResult<()> {
        match self {
            NumExpr::Operator(operator) => visitor.visit_operator(operator),
            NumExpr::Number(number) => visitor.visit_number(number),
            NumExpr::Variable(variable) => visitor.visit_variable(variable),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    code: OpCode,
    left: NumExprId,
    right: NumExprId,
}

impl Operator {
    pub fn new(code: OpCode, left: NumExprId, right: NumExprId) -> Self {
        Self { code, left, right }
    }

    pub fn code(&self) -> OpCode {
        self.code
    }

    pub fn left(&self) -> NumExprId {
        self.left
    }

    pub fn right(&self) -> NumExprId {
        self.right
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    value: i64,
}

impl Number {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
