//! The caller-owned variable table.

use std::collections::HashMap;

use crate::scan::Occurrence;
use crate::types::VarValue;

/// Mapping from identifier to replacement value.
///
/// Read-only to the resolver; build it once and reuse it across any number
/// of resolutions.
///
/// # Example
///
/// ```
/// use sprig::Variables;
///
/// let mut vars = Variables::new();
/// vars.insert("lang", "en");
/// vars.insert_dynamic("upper-lang", |_, _, _| "EN".to_string());
/// assert!(vars.contains("lang"));
/// ```
#[derive(Debug, Default)]
pub struct Variables {
    entries: HashMap<String, VarValue>,
}

impl Variables {
    /// An empty table.
    pub fn new() -> Variables {
        Variables::default()
    }

    /// Bind `name` to a value (literal text via `From`).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<VarValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Bind `name` to a function invoked once per occurrence.
    pub fn insert_dynamic(
        &mut self,
        name: impl Into<String>,
        f: impl Fn(&str, &Occurrence, usize) -> String + 'static,
    ) {
        self.entries.insert(name.into(), VarValue::dynamic(f));
    }

    /// The value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.entries.get(name)
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate bound names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
