use super::engine::LoweringEngine;
use super::errors::LoweringError;
use gentle_core::source::{BinOp, Expr, ExprKind, Literal};
use gentle_core::target::{self, BinaryOp};
use gentle_core::TargetType;

impl LoweringEngine {
    /// Lower one expression. `expected` is the C type the value must take, when the context knows it.
    pub fn lower_expr(
        &self,
        expr: &Expr,
        expected: Option<&TargetType>,
    ) -> Result<target::Expr, LoweringError> {
        match &expr.kind {
            ExprKind::Constant { value } => self.lower_literal(value, expr.line),
            ExprKind::Name { id } => Ok(target::Expr::Identifier(id.clone())),
            ExprKind::BinOp { op, left, right } => Ok(target::Expr::BinaryExpr {
                op: self.lower_operator(*op, expr.line)?,
                left: Box::new(self.lower_expr(left, None)?),
                right: Box::new(self.lower_expr(right, None)?),
            }),
            ExprKind::Subscript { value, index } => Ok(target::Expr::IndexExpr {
                base: Box::new(self.lower_expr(value, None)?),
                index: Box::new(self.lower_expr(index, None)?),
            }),
            ExprKind::Call { func, args } => Ok(target::Expr::CallExpr {
                callee: func.clone(),
                args: self.lower_exprs(args)?,
            }),
            ExprKind::IfExp { test, body, orelse } => Ok(target::Expr::TernaryExpr {
                cond: Box::new(self.lower_expr(test, None)?),
                then_expr: Box::new(self.lower_expr(body, expected)?),
                else_expr: Box::new(self.lower_expr(orelse, expected)?),
            }),
            ExprKind::Tuple { elts } => match expected.filter(|ty| !ty.is_void()) {
                Some(ty) => Ok(target::Expr::CompoundLiteralExpr {
                    ty: ty.clone(),
                    elements: self.lower_exprs(elts)?,
                }),
                None => Err(LoweringError::MissingExpectedType { line: expr.line }),
            },
            ExprKind::Unsupported { construct } => {
                Err(LoweringError::unsupported(construct.clone(), expr.line))
            }
        }
    }

    fn lower_exprs(&self, exprs: &[Expr]) -> Result<Vec<target::Expr>, LoweringError> {
        exprs.iter().map(|e| self.lower_expr(e, None)).collect()
    }

    fn lower_literal(&self, literal: &Literal, line: u32) -> Result<target::Expr, LoweringError> {
        let lowered = match literal {
            Literal::Int(v) => target::Literal::Int(*v),
            Literal::Float(v) => target::Literal::Float(*v),
            Literal::Bool(v) => target::Literal::Bool(*v),
            Literal::Str(s) => target::Literal::Str(s.clone()),
            Literal::None => return Err(LoweringError::unsupported("None literal", line)),
        };
        Ok(target::Expr::Literal(lowered))
    }

    /// Only the four arithmetic operators have a C counterpart here.
    pub(crate) fn lower_operator(&self, op: BinOp, line: u32) -> Result<BinaryOp, LoweringError> {
        match op {
            BinOp::Add => Ok(BinaryOp::Add),
            BinOp::Sub => Ok(BinaryOp::Sub),
            BinOp::Mult => Ok(BinaryOp::Mul),
            BinOp::Div => Ok(BinaryOp::Div),
            _ => Err(LoweringError::UnknownOperator { op, line }),
        }
    }
}
