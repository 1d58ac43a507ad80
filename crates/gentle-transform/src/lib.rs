/*! Lower annotated Python routines into C target IR.
 *
 * The accepted source grammar is closed: every construct either has a direct C counterpart or is
 * rejected with a diagnostic naming it. Type annotations drive declarations and the few places where
 * a value's C type cannot be read off the expression itself, such as tuple literals.
 */

pub mod lowering;

pub use lowering::{
    lower_module, Diagnostic, ErrorClass, LoweredFunction, LoweringEngine, LoweringError,
    LoweringPipeline, RangeBounds, SourceNode, TypeResolver, UnsupportedAnnotation,
};
