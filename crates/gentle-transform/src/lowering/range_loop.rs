use super::engine::LoweringEngine;
use super::errors::LoweringError;
use gentle_core::source::{Expr, ExprKind, Literal, Stmt};
use gentle_core::target::{self, Assignment, BinaryOp, Declaration, ForLoop};
use gentle_core::TargetType;

pub const RANGE_BUILTIN: &str = "range";

/// Bounds of a `range(...)` call in canonical form: iterate `[start, stop)` by `step`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeBounds {
    pub start: target::Expr,
    pub stop: target::Expr,
    pub step: target::Expr,
}

impl LoweringEngine {
    /// `for counter in range(...)` becomes `for (int counter = start; counter < stop; counter += step)`.
    pub(crate) fn lower_for(
        &self,
        counter: &str,
        iter: &Expr,
        body: &[Stmt],
        return_type: Option<&TargetType>,
        line: u32,
    ) -> Result<ForLoop, LoweringError> {
        let RangeBounds { start, stop, step } = self.desugar_range(iter, line)?;

        Ok(ForLoop {
            init: Declaration::new(counter, TargetType::Int32, Some(start)),
            cond: target::Expr::binary(BinaryOp::Lt, target::Expr::ident(counter), stop),
            next: Assignment {
                operator: BinaryOp::Add,
                target: target::Expr::ident(counter),
                value: step,
            },
            body: self.lower_block(body, return_type)?,
        })
    }

    pub fn desugar_range(&self, iter: &Expr, line: u32) -> Result<RangeBounds, LoweringError> {
        let args = match &iter.kind {
            ExprKind::Call { func, args } if func == RANGE_BUILTIN => args,
            ExprKind::Call { func, .. } => {
                return Err(LoweringError::unsupported(
                    format!("iteration over `{}(...)`", func),
                    line,
                ))
            }
            _ => {
                return Err(LoweringError::unsupported(
                    format!("iteration over {}", iter.construct()),
                    line,
                ))
            }
        };

        let (start, stop, step) = match args.as_slice() {
            [stop] => (None, stop, None),
            [start, stop] => (Some(start), stop, None),
            [start, stop, step] => (Some(start), stop, Some(step)),
            _ => {
                return Err(LoweringError::unsupported(
                    format!("range call with {} arguments", args.len()),
                    line,
                ))
            }
        };

        for arg in args {
            check_integer_valued(arg, line)?;
        }
        if let Some(Expr {
            kind: ExprKind::Constant {
                value: Literal::Int(v),
            },
            ..
        }) = step
        {
            if *v <= 0 {
                return Err(LoweringError::UnknownRangeForm {
                    reason: format!("step must be positive, got {}", v),
                    line,
                });
            }
        }

        Ok(RangeBounds {
            start: match start {
                Some(start) => self.lower_expr(start, None)?,
                None => target::Expr::int(0),
            },
            stop: self.lower_expr(stop, None)?,
            step: match step {
                Some(step) => self.lower_expr(step, None)?,
                None => target::Expr::int(1),
            },
        })
    }
}

/// Only literals can be checked here; names and calls are trusted.
fn check_integer_valued(arg: &Expr, line: u32) -> Result<(), LoweringError> {
    match &arg.kind {
        ExprKind::Constant { value } if !matches!(value, Literal::Int(_)) => {
            Err(LoweringError::UnknownRangeForm {
                reason: format!("bound `{}` is not an integer", value),
                line,
            })
        }
        _ => Ok(()),
    }
}
