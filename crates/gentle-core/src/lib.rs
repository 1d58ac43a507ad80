/*! Core data model for translating annotated Python routines into C.
 *
 * Three vocabularies live here: the restricted source subset handed over by the external front end,
 * the target type descriptors annotations resolve to, and the C target IR the lowering engine builds.
 * Everything is plain data; the transformation itself lives in `gentle-transform`.
 */

pub mod persist;
pub mod source;
pub mod target;
pub mod types;

pub use persist::{load_module, save_module, LoadError};
pub use source::{Annotation, BinOp, Expr, ExprKind, FunctionDef, Item, Literal, Module, Param, Stmt, StmtKind};
pub use target::{
    Assignment, BinaryOp, Block, Conditional, Declaration, ForLoop, FunctionDefinition, TargetNode,
};
pub use types::TargetType;

#[cfg(test)]
mod tests;
