use crate::config::EmitterConfig;
use anyhow::Result;
use std::io::Write;

pub type EmitResult = Result<()>;

#[derive(Debug, Clone)]
pub struct EmitContext {
    pub indent_level: usize,
    pub indent_chars: String,
    pub line_break: String,
}

impl EmitContext {
    pub fn new() -> Self {
        Self::from_config(&EmitterConfig::default())
    }

    pub fn from_config(config: &EmitterConfig) -> Self {
        if config.line_breaks {
            Self {
                indent_level: 0,
                indent_chars: config.indent_style.unit(),
                line_break: "\n".to_string(),
            }
        } else {
            Self {
                indent_level: 0,
                indent_chars: String::new(),
                line_break: String::new(),
            }
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn get_indent(&self) -> String {
        self.indent_chars.repeat(self.indent_level)
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Emitter {
    type Item;

    fn emit<W: Write>(
        &self,
        item: &Self::Item,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult;

    fn context(&self) -> EmitContext {
        EmitContext::new()
    }

    fn emit_to_string(&self, item: &Self::Item) -> Result<String> {
        let mut buffer = Vec::new();
        let mut context = self.context();
        self.emit(item, &mut buffer, &mut context)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Line-oriented helpers over an in-memory buffer.
pub struct EmitHelper;

impl EmitHelper {
    pub fn write_line(out: &mut String, context: &EmitContext, text: &str) {
        out.push_str(&context.get_indent());
        out.push_str(text);
        out.push_str(&context.line_break);
    }

    /// `{` on its own line, the indented body, then `}`.
    pub fn write_block<F>(out: &mut String, context: &mut EmitContext, body: F)
    where
        F: FnOnce(&mut String, &mut EmitContext),
    {
        Self::write_line(out, context, "{");
        context.indent();
        body(out, context);
        context.dedent();
        Self::write_line(out, context, "}");
    }
}
