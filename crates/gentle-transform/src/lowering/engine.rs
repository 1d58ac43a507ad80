use super::errors::LoweringError;
use super::type_resolver::TypeResolver;
use gentle_core::source::{Expr, FunctionDef, Param, Stmt};
use gentle_core::target::{Block, Declaration, FunctionDefinition, TargetNode};
use gentle_core::TargetType;
use tracing::debug;

/// A borrowed source node of any kind.
#[derive(Debug, Clone, Copy)]
pub enum SourceNode<'a> {
    Function(&'a FunctionDef),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

/// Recursive source-to-target lowering.
///
/// Every entry point takes an optional expected type. For expressions it is the C type the value
/// must have, which is what lets a tuple literal become a compound literal. For statements it is
/// the enclosing function's return type, handed down to `return` values. The engine keeps no
/// state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoweringEngine;

impl LoweringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn lower(
        &self,
        node: SourceNode<'_>,
        expected: Option<&TargetType>,
    ) -> Result<TargetNode, LoweringError> {
        match node {
            SourceNode::Function(def) => self.lower_function(def).map(TargetNode::from),
            SourceNode::Stmt(stmt) => self.lower_stmt(stmt, expected).map(TargetNode::from),
            SourceNode::Expr(expr) => self.lower_expr(expr, expected).map(TargetNode::from),
        }
    }

    pub fn lower_function(&self, def: &FunctionDef) -> Result<FunctionDefinition, LoweringError> {
        let return_type =
            TypeResolver::resolve(def.returns.as_ref()).map_err(|e| e.at(def.line))?;

        let params = def
            .params
            .iter()
            .map(|param| self.lower_param(param, def.line))
            .collect::<Result<Vec<_>, _>>()?;

        let body = self.lower_block(&def.body, Some(&return_type))?;

        debug!(
            function = %def.name,
            params = params.len(),
            statements = body.len(),
            "lowered function"
        );

        Ok(FunctionDefinition {
            name: def.name.clone(),
            return_type,
            params,
            body,
        })
    }

    fn lower_param(&self, param: &Param, line: u32) -> Result<Declaration, LoweringError> {
        let annotation =
            param
                .annotation
                .as_ref()
                .ok_or_else(|| LoweringError::MissingAnnotation {
                    subject: format!("parameter `{}`", param.name),
                    line,
                })?;

        let ty = TypeResolver::resolve(Some(annotation)).map_err(|e| e.at(line))?;
        Ok(Declaration::new(param.name.clone(), ty, None))
    }

    pub(crate) fn lower_block(
        &self,
        body: &[Stmt],
        return_type: Option<&TargetType>,
    ) -> Result<Block, LoweringError> {
        body.iter()
            .map(|stmt| self.lower_stmt(stmt, return_type))
            .collect()
    }
}
