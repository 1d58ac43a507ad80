use serde::{Deserialize, Serialize};
use std::fmt;

/// A type in the C target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    Int32,
    /// `float` maps here to keep the host's double precision.
    Double,
    Void,
    PointerTo(Box<TargetType>),
    /// Tuple marker. Valid as an annotation; only lowerable where a value's type is already known.
    Unsupported,
}

impl TargetType {
    pub fn pointer_to(element: TargetType) -> Self {
        TargetType::PointerTo(Box::new(element))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TargetType::Void)
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, TargetType::PointerTo(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, TargetType::Int32 | TargetType::Double)
    }

    pub fn element_type(&self) -> Option<&TargetType> {
        match self {
            TargetType::PointerTo(inner) => Some(inner),
            _ => None,
        }
    }

    /// Spelling of this type in front of a declared name, e.g. `int ` or `double *`.
    pub fn declarator(&self, name: &str) -> String {
        match self {
            TargetType::PointerTo(_) => format!("{}{}", self, name),
            _ => format!("{} {}", self, name),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Int32 => write!(f, "int"),
            TargetType::Double => write!(f, "double"),
            TargetType::Void => write!(f, "void"),
            TargetType::PointerTo(inner) if inner.is_pointer() => write!(f, "{}*", inner),
            TargetType::PointerTo(inner) => write!(f, "{} *", inner),
            TargetType::Unsupported => write!(f, "TUPLE"),
        }
    }
}
