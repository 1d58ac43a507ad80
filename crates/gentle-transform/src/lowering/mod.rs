/*! Lower the typed source subset into C target IR.
 *
 * Functions are lowered one at a time and independently of each other: there is no shared symbol
 * table and no preamble. A failure anywhere inside a function discards the whole function, and
 * the pipeline moves on to the next one.
 */

mod engine;
mod errors;
mod expression_lowering;
mod range_loop;
mod statement_lowering;
mod type_resolver;

pub use engine::{LoweringEngine, SourceNode};
pub use errors::{Diagnostic, ErrorClass, LoweringError, UnsupportedAnnotation};
pub use range_loop::{RangeBounds, RANGE_BUILTIN};
pub use type_resolver::{TypeResolver, ARRAY_BASES};

use gentle_core::source::{FunctionDef, Item, Module};
use gentle_core::target::FunctionDefinition;
use tracing::{debug, warn};

/// The outcome of lowering one source function.
#[derive(Debug, Clone, PartialEq)]
pub struct LoweredFunction<'m> {
    pub source: &'m FunctionDef,
    pub result: Result<FunctionDefinition, Diagnostic>,
}

pub struct LoweringPipeline {
    engine: LoweringEngine,
    filename: Option<String>,
}

impl LoweringPipeline {
    pub fn new() -> Self {
        Self {
            engine: LoweringEngine::new(),
            filename: None,
        }
    }

    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            engine: LoweringEngine::new(),
            filename: Some(filename.into()),
        }
    }

    pub fn engine(&self) -> &LoweringEngine {
        &self.engine
    }

    /// Lower every function definition of `module` in source order. Other top-level items are skipped.
    pub fn run<'m>(&self, module: &'m Module) -> Vec<LoweredFunction<'m>> {
        let filename = self.filename.clone().or_else(|| module.filename.clone());
        let mut lowered = Vec::new();

        for item in &module.body {
            match item {
                Item::FunctionDef(def) => {
                    let result = self.engine.lower_function(def).map_err(|error| {
                        warn!(function = %def.name, %error, "function not lowered");
                        Diagnostic {
                            function: def.name.clone(),
                            filename: filename.clone(),
                            error,
                        }
                    });
                    lowered.push(LoweredFunction {
                        source: def,
                        result,
                    });
                }
                Item::Other { construct, line } => {
                    debug!(construct = %construct, line, "skipping top-level item");
                }
            }
        }

        lowered
    }
}

impl Default for LoweringPipeline {
    fn default() -> Self {
        Self::new()
    }
}

pub fn lower_module(module: &Module) -> Vec<LoweredFunction<'_>> {
    LoweringPipeline::new().run(module)
}
