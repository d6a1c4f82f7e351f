use crate::ast::{BoolExprId, NumExprId};
use crate::frontend::token::TokenTag;
use crate::semantic::visiters::ASTVisitor;
use crate::utils::errors::{LispError, LispResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOpCode {
    Lt,
    Gt,
    Eq,
}

impl RelOpCode {
    pub fn from_tag(tag: TokenTag) -> LispResult<Self> {
        match tag {
            TokenTag::Lt => Ok(RelOpCode::Lt),
            TokenTag::Gt => Ok(RelOpCode::Gt),
            TokenTag::Eq => Ok(RelOpCode::Eq),
            other => Err(LispError::conversion(other, "RelOpCode")),
        }
    }
}

impl fmt::Display for RelOpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            RelOpCode::Lt => "LT",
            RelOpCode::Gt => "GT",
            RelOpCode::Eq => "EQ",
        };
        write!(f, "{}", word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOpCode {
    And,
    Or,
    Not,
}

impl BoolOpCode {
    pub fn from_tag(tag: TokenTag) -> LispResult<Self> {
        match tag {
            TokenTag::And => Ok(BoolOpCode::And),
            TokenTag::Or => Ok(BoolOpCode::Or),
            TokenTag::Not => Ok(BoolOpCode::Not),
            other => Err(LispError::conversion(other, "BoolOpCode")),
        }
    }
}

impl fmt::Display for BoolOpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            BoolOpCode::And => "AND",
            BoolOpCode::Or => "OR",
            BoolOpCode::Not => "NOT",
        };
        write!(f, "{}", word)
    }
}

/// Boolean expression: relational comparisons, constants and logical operators.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolExpr {
    RelOp(RelOp),
    BoolConst(BoolConst),
    BoolOp(BoolOp),
}

impl BoolExpr {
    pub fn accept(&self, visitor: &mut dyn ASTVisitor) -> LispResult<()> {
        match self {
            BoolExpr::RelOp(rel_op) => visitor.visit_rel_op(rel_op),
            BoolExpr::BoolConst(constant) => visitor.visit_bool_const(constant),
            BoolExpr::BoolOp(bool_op) => visitor.visit_bool_op(bool_op),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelOp {
    code: RelOpCode,
    left: NumExprId,
    right: NumExprId,
}

impl RelOp {
    pub fn new(code: RelOpCode, left: NumExprId, right: NumExprId) -> Self {
        Self { code, left, right }
    }

    pub fn code(&self) -> RelOpCode {
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
pub struct BoolConst {
    value: bool,
}

impl BoolConst {
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    pub fn from_tag(tag: TokenTag) -> LispResult<bool> {
        match tag {
            TokenTag::True => Ok(true),
            TokenTag::False => Ok(false),
            other => Err(LispError::conversion(other, "Bool")),
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

/// AND/OR carry two operands; NOT carries only `left`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolOp {
    code: BoolOpCode,
    left: BoolExprId,
    right: Option<BoolExprId>,
}

impl BoolOp {
    pub fn binary(code: BoolOpCode, left: BoolExprId, right: BoolExprId) -> Self {
        Self {
            code,
            left,
            right: Some(right),
        }
    }

    pub fn not(operand: BoolExprId) -> Self {
        Self {
            code: BoolOpCode::Not,
            left: operand,
            right: None,
        }
    }

    pub fn code(&self) -> BoolOpCode {
        self.code
    }

    pub fn left(&self) -> BoolExprId {
        self.left
    }

    pub fn right(&self) -> Option<BoolExprId> {
        self.right
    }
}
