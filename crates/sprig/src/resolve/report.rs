//! Resolution report and warnings.

use std::fmt;

use strsim::levenshtein;

use crate::types::Variables;

/// A non-fatal observation made during resolution. Warnings never change
/// the resolved output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// A live occurrence's name was not in the variable table; the name
    /// itself was substituted.
    UnknownVariable {
        name: String,
        suggestions: Vec<String>,
    },

    /// A node's value contained `${child}` but the node had no children,
    /// so nothing was spliced in.
    ChildPlaceholderIgnored,
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::UnknownVariable { name, suggestions } => {
                write!(f, "unknown variable '{name}', substituted its own name")?;
                if let Some(first) = suggestions.first() {
                    write!(f, " (did you mean '{first}'?)")?;
                }
                Ok(())
            }
            ResolveWarning::ChildPlaceholderIgnored => {
                write!(
                    f,
                    "'${{child}}' used on a node without children; nothing was inserted"
                )
            }
        }
    }
}

/// Outcome of a resolution pass. The tree itself is mutated in place; the
/// report carries everything else worth surfacing.
#[derive(Debug, Default)]
pub struct ResolveReport {
    /// Deduplicated warnings, in first-seen order.
    pub warnings: Vec<ResolveWarning>,
}

impl ResolveReport {
    /// True if the pass produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Typo suggestions for an unknown variable name.
///
/// Distance <= 1 for names of up to 3 chars, <= 2 otherwise; at most 3
/// results, closest first (ties broken alphabetically for determinism).
pub(crate) fn suggest_names(name: &str, vars: &Variables) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, String)> = vars
        .names()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    candidates.sort();
    candidates.truncate(3);
    candidates.into_iter().map(|(_, candidate)| candidate).collect()
}
