use super::engine::LoweringEngine;
use super::errors::LoweringError;
use super::type_resolver::TypeResolver;
use gentle_core::source::{Expr, ExprKind, Literal, Stmt, StmtKind};
use gentle_core::target::{Assignment, Conditional, Declaration, Stmt as TargetStmt};
use gentle_core::TargetType;

impl LoweringEngine {
    /// Lower one statement. `return_type` is the enclosing function's resolved return type.
    pub fn lower_stmt(
        &self,
        stmt: &Stmt,
        return_type: Option<&TargetType>,
    ) -> Result<TargetStmt, LoweringError> {
        match &stmt.kind {
            StmtKind::Return { value } => self.lower_return(value.as_ref(), return_type),
            StmtKind::AnnAssign {
                target,
                annotation,
                value,
            } => {
                let ty = TypeResolver::resolve(Some(annotation)).map_err(|e| e.at(stmt.line))?;
                let init = value
                    .as_ref()
                    .map(|value| self.lower_expr(value, Some(&ty)))
                    .transpose()?;
                Ok(TargetStmt::Declaration(Declaration::new(
                    target.clone(),
                    ty,
                    init,
                )))
            }
            StmtKind::AugAssign { target, op, value } => {
                if !matches!(target.kind, ExprKind::Name { .. } | ExprKind::Subscript { .. }) {
                    return Err(LoweringError::unsupported(
                        format!("augmented assignment to {}", target.construct()),
                        stmt.line,
                    ));
                }
                Ok(TargetStmt::Assignment(Assignment {
                    operator: self.lower_operator(*op, stmt.line)?,
                    target: self.lower_expr(target, None)?,
                    value: self.lower_expr(value, None)?,
                }))
            }
            StmtKind::Assign { targets, .. } => Err(LoweringError::MissingAnnotation {
                subject: format!("assignment to `{}`", targets.join("`, `")),
                line: stmt.line,
            }),
            StmtKind::If { test, body, orelse } => {
                let cond = self.lower_expr(test, None)?;
                let then_branch = self.lower_block(body, return_type)?;
                // An `elif` arrives as a lone `If` in `orelse` and nests naturally.
                let else_branch = if orelse.is_empty() {
                    None
                } else {
                    Some(self.lower_block(orelse, return_type)?)
                };
                Ok(TargetStmt::Conditional(Conditional {
                    cond,
                    then_branch,
                    else_branch,
                }))
            }
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
            } => {
                if !orelse.is_empty() {
                    return Err(LoweringError::unsupported("for-else", stmt.line));
                }
                self.lower_for(target, iter, body, return_type, stmt.line)
                    .map(TargetStmt::ForLoop)
            }
            StmtKind::Unsupported { construct } => {
                Err(LoweringError::unsupported(construct.clone(), stmt.line))
            }
        }
    }

    fn lower_return(
        &self,
        value: Option<&Expr>,
        return_type: Option<&TargetType>,
    ) -> Result<TargetStmt, LoweringError> {
        match value {
            None
            | Some(Expr {
                kind: ExprKind::Constant {
                    value: Literal::None,
                },
                ..
            }) => Ok(TargetStmt::Return(None)),
            Some(value) => Ok(TargetStmt::Return(Some(
                self.lower_expr(value, return_type)?,
            ))),
        }
    }
}
