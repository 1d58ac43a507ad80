use super::errors::UnsupportedAnnotation;
use gentle_core::{Annotation, TargetType};

/// Generic names that denote the array/view abstraction.
pub const ARRAY_BASES: &[&str] = &["Array", "view"];

pub struct TypeResolver;

impl TypeResolver {
    /// Map an annotation to its C type. The first matching rule wins.
    pub fn resolve(annotation: Option<&Annotation>) -> Result<TargetType, UnsupportedAnnotation> {
        match annotation {
            None | Some(Annotation::Null) => Ok(TargetType::Void),
            Some(Annotation::Subscript { index, .. }) if matches!(**index, Annotation::Tuple(_)) => {
                Ok(TargetType::Unsupported)
            }
            Some(outer @ Annotation::Subscript { base, index }) if Self::is_array_base(base) => {
                let element = Self::resolve(Some(&**index))
                    .map_err(|_| UnsupportedAnnotation::new(outer))?;
                Ok(TargetType::pointer_to(element))
            }
            Some(annotation @ Annotation::Name(id)) => {
                Self::resolve_scalar(id).ok_or_else(|| UnsupportedAnnotation::new(annotation))
            }
            Some(other) => Err(UnsupportedAnnotation::new(other)),
        }
    }

    pub fn is_array_base(name: &str) -> bool {
        ARRAY_BASES.contains(&name)
    }

    fn resolve_scalar(name: &str) -> Option<TargetType> {
        match name {
            "int" => Some(TargetType::Int32),
            "float" => Some(TargetType::Double),
            _ => None,
        }
    }
}
