use gentle_core::{Annotation, BinOp};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoweringError {
    #[error("unsupported type annotation `{annotation}` at line {line}")]
    UnsupportedAnnotation { annotation: String, line: u32 },

    #[error("{subject} at line {line} must be type-annotated")]
    MissingAnnotation { subject: String, line: u32 },

    #[error("unsupported binary operator `{op}` at line {line}")]
    UnknownOperator { op: BinOp, line: u32 },

    #[error("unsupported range form at line {line}: {reason}")]
    UnknownRangeForm { reason: String, line: u32 },

    #[error("tuple literal at line {line} requires a known target type")]
    MissingExpectedType { line: u32 },

    #[error("unsupported construct `{construct}` at line {line}")]
    UnsupportedConstruct { construct: String, line: u32 },
}

/// Semantic violations break a hard rule of the accepted subset; unsupported constructs are
/// shapes outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    SemanticViolation,
    UnsupportedConstruct,
}

impl LoweringError {
    pub fn unsupported(construct: impl Into<String>, line: u32) -> Self {
        LoweringError::UnsupportedConstruct {
            construct: construct.into(),
            line,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            LoweringError::UnsupportedAnnotation { line, .. }
            | LoweringError::MissingAnnotation { line, .. }
            | LoweringError::UnknownOperator { line, .. }
            | LoweringError::UnknownRangeForm { line, .. }
            | LoweringError::MissingExpectedType { line }
            | LoweringError::UnsupportedConstruct { line, .. } => *line,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            LoweringError::UnsupportedConstruct { .. } => ErrorClass::UnsupportedConstruct,
            _ => ErrorClass::SemanticViolation,
        }
    }
}

/// Resolver failure; the caller attaches the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported type annotation `{annotation}`")]
pub struct UnsupportedAnnotation {
    pub annotation: String,
}

impl UnsupportedAnnotation {
    pub fn new(annotation: &Annotation) -> Self {
        Self {
            annotation: annotation.to_string(),
        }
    }

    pub fn at(self, line: u32) -> LoweringError {
        LoweringError::UnsupportedAnnotation {
            annotation: self.annotation,
            line,
        }
    }
}

/// A lowering failure attributed to one function of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub function: String,
    pub filename: Option<String>,
    pub error: LoweringError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in function `{}`", self.error, self.function)?;
        if let Some(filename) = &self.filename {
            write!(f, " of {}", filename)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
