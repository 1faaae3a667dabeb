//! String resolver: substitutes occurrences into a scanned string.

use crate::resolve::context::ResolveContext;
use crate::resolve::report::{ResolveWarning, suggest_names};
use crate::scan::ScanModel;
use crate::types::{VarValue, Variables};

/// Name reserved for splicing a node's children into its text.
pub const CHILD_VARIABLE: &str = "child";

/// How `${child}` behaves in the string currently being resolved.
pub(crate) enum ChildSplice {
    /// No tree context: `child` is an ordinary name.
    Plain,

    /// Attribute values: every `${child}` collapses to empty text.
    Neutralize,

    /// Node values: the first `${child}` records the split offset; every
    /// occurrence collapses to empty text.
    Capture { split: Option<usize> },
}

impl ChildSplice {
    pub(crate) fn capture() -> ChildSplice {
        ChildSplice::Capture { split: None }
    }

    /// The captured split offset, if `${child}` fired at least once.
    pub(crate) fn split(&self) -> Option<usize> {
        match self {
            ChildSplice::Capture { split } => *split,
            ChildSplice::Plain | ChildSplice::Neutralize => None,
        }
    }
}

/// Resolve a scanned string against the table.
///
/// Occurrences are substituted in ascending position order. The cursor
/// tracks the normalized input, so output-length drift from earlier
/// substitutions never disturbs later ones; the offset handed to dynamic
/// variables is where their value lands in the output, which is also the
/// coordinate a `${child}` split applies at. Never fails: unknown names
/// fall back to themselves.
pub(crate) fn substitute(
    model: &ScanModel,
    vars: &Variables,
    child: &mut ChildSplice,
    ctx: &mut ResolveContext,
) -> String {
    let mut out = String::with_capacity(model.text.len());
    let mut cursor = 0;

    for occurrence in &model.occurrences {
        out.push_str(&model.text[cursor..occurrence.location]);
        cursor = occurrence.location + occurrence.length;

        if occurrence.name == CHILD_VARIABLE && !matches!(child, ChildSplice::Plain) {
            // reserved: overrides any caller-supplied `child` entry
            if let ChildSplice::Capture { split } = child {
                if split.is_none() {
                    *split = Some(out.len());
                }
            }
            continue;
        }

        match vars.get(&occurrence.name) {
            Some(VarValue::Text(value)) => out.push_str(value),
            Some(VarValue::Dynamic(f)) => {
                let value = f(&model.text, occurrence, out.len());
                out.push_str(&value);
            }
            None => {
                ctx.add_warning(ResolveWarning::UnknownVariable {
                    name: occurrence.name.clone(),
                    suggestions: suggest_names(&occurrence.name, vars),
                });
                out.push_str(&occurrence.name);
            }
        }
    }

    out.push_str(&model.text[cursor..]);
    out
}
