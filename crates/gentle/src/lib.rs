/*! Translate annotated numeric Python routines into C.
 *
 * Single import for the whole pipeline: the source and target models, the lowering engine, and the
 * C emitter, plus `translate_module`, which runs all of them over a module and keeps going past
 * functions that fail.
 */

pub use gentle_core as core;
pub use gentle_emit as emit;
pub use gentle_transform as transform;

pub use gentle_core::{
    source::{Annotation, Expr, FunctionDef, Item, Module, Stmt},
    target::{FunctionDefinition, TargetNode},
    types::TargetType,
};
pub use gentle_emit::{CEmitter, EmitterConfig};
pub use gentle_transform::{Diagnostic, LoweringEngine, LoweringError, TypeResolver};

use gentle_transform::LoweringPipeline;
use tracing::debug;

/// One translated function.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedFunction {
    pub name: String,
    pub ir: FunctionDefinition,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    pub functions: Vec<TranslatedFunction>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    /// C text of every translated function, concatenated in source order.
    pub fn text(&self) -> String {
        self.functions.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Lower and render every function of `module`. A function that fails to lower produces a
/// diagnostic and no text; the others are unaffected.
pub fn translate_module(module: &Module, config: &EmitterConfig) -> Translation {
    let emitter = CEmitter::with_config(config.clone());
    let mut translation = Translation::default();

    for lowered in LoweringPipeline::new().run(module) {
        match lowered.result {
            Ok(ir) => {
                let text = emitter.render_function(&ir);
                debug!(function = %ir.name, bytes = text.len(), "rendered function");
                translation.functions.push(TranslatedFunction {
                    name: ir.name.clone(),
                    ir,
                    text,
                });
            }
            Err(diagnostic) => translation.diagnostics.push(diagnostic),
        }
    }

    translation
}

/// Lower and render a single function.
pub fn translate_function(def: &FunctionDef, config: &EmitterConfig) -> Result<String, LoweringError> {
    let ir = LoweringEngine::new().lower_function(def)?;
    Ok(CEmitter::with_config(config.clone()).render_function(&ir))
}
