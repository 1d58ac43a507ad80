/*! Render C target IR as C source text.
 *
 * Rendering is a pure function of the IR and the emitter configuration: no validation, no
 * reordering, no hidden state. Layout is kept minimal; a downstream formatter owns style.
 */

pub mod c_emitter;
pub mod config;
pub mod emitter;

pub use c_emitter::CEmitter;
pub use config::{EmitterConfig, IndentStyle};
pub use emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
