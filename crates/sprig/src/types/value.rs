//! Variable values: literal text or a per-occurrence function.

use std::fmt;

use crate::scan::Occurrence;

/// Signature of a dynamic variable.
///
/// Invoked once per occurrence of its name, with the normalized string
/// being resolved, the occurrence itself, and the byte offset at which the
/// produced value will sit in the resolved output (equal to the
/// occurrence's own location when nothing before it changed length).
/// Implementations must be idempotent across repeated calls at different
/// offsets.
pub type DynamicFn = dyn Fn(&str, &Occurrence, usize) -> String;

/// The value bound to a variable name: either displayable text used as
/// given, or a function computing the text per occurrence.
pub enum VarValue {
    /// Literal replacement text.
    Text(String),

    /// Computed replacement.
    Dynamic(Box<DynamicFn>),
}

impl VarValue {
    /// Wrap a function as a dynamic value.
    pub fn dynamic(f: impl Fn(&str, &Occurrence, usize) -> String + 'static) -> VarValue {
        VarValue::Dynamic(Box::new(f))
    }

    /// The literal text, if this is a [`VarValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VarValue::Text(s) => Some(s),
            VarValue::Dynamic(_) => None,
        }
    }
}

impl fmt::Debug for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            VarValue::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for VarValue {
    fn from(s: &str) -> VarValue {
        VarValue::Text(s.to_string())
    }
}

impl From<String> for VarValue {
    fn from(s: String) -> VarValue {
        VarValue::Text(s)
    }
}
