use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
    pub indent_style: IndentStyle,
    /// When false, the output is a single line for a downstream formatter to restore.
    pub line_breaks: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Spaces(2),
            line_breaks: true,
        }
    }
}

impl EmitterConfig {
    pub fn compact() -> Self {
        Self {
            indent_style: IndentStyle::Spaces(0),
            line_breaks: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl IndentStyle {
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(*n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}
