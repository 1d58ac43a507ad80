//! The C target IR.
//!
//! A structural mirror of exactly the C subset the lowering engine produces. Nothing here is
//! validated: whatever reaches the emitter is rendered as-is.

use crate::types::TargetType;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Block = Vec<Stmt>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub return_type: TargetType,
    pub params: Vec<Declaration>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub ty: TargetType,
    pub init: Option<Expr>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, ty: TargetType, init: Option<Expr>) -> Self {
        Self {
            name: name.into(),
            ty,
            init,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Declaration(Declaration),
    Assignment(Assignment),
    Conditional(Conditional),
    ForLoop(ForLoop),
    Return(Option<Expr>),
}

/// Compound assignment `target op= value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub operator: BinaryOp,
    pub target: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    pub cond: Expr,
    pub then_branch: Block,
    pub else_branch: Option<Block>,
}

/// `for (init; cond; next) { body }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForLoop {
    pub init: Declaration,
    pub cond: Expr,
    pub next: Assignment,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Identifier(String),
    Literal(Literal),
    BinaryExpr {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    IndexExpr {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    CallExpr {
        callee: String,
        args: Vec<Expr>,
    },
    TernaryExpr {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    CompoundLiteralExpr {
        ty: TargetType,
        elements: Vec<Expr>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn int(value: i64) -> Self {
        Expr::Literal(Literal::Int(value))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Expr::Identifier(_) | Expr::Literal(_) | Expr::IndexExpr { .. } | Expr::CallExpr { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Lt => "<",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Any node the lowering engine can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TargetNode {
    Function(FunctionDefinition),
    Stmt(Stmt),
    Expr(Expr),
}

impl From<FunctionDefinition> for TargetNode {
    fn from(def: FunctionDefinition) -> Self {
        TargetNode::Function(def)
    }
}

impl From<Stmt> for TargetNode {
    fn from(stmt: Stmt) -> Self {
        TargetNode::Stmt(stmt)
    }
}

impl From<Expr> for TargetNode {
    fn from(expr: Expr) -> Self {
        TargetNode::Expr(expr)
    }
}
