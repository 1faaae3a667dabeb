//! Resolution driver.
//!
//! The public entry points walk a tree in pre-order and run the node
//! resolver over every node. Resolving a node whose value contains
//! `${child}` re-enters the walk on that node's own subtree before the
//! split relocates it; the shared resolved-set makes the outer walk skip
//! whatever the nested pass already handled, so each node is resolved
//! exactly once.

mod context;
mod node;
mod report;
mod split;
mod string;

pub use report::{ResolveReport, ResolveWarning};
pub use string::CHILD_VARIABLE;

use sprig_tree::{NodeId, Tree, TreeError};

use crate::resolve::context::ResolveContext;
use crate::resolve::node::visit;
use crate::resolve::string::{ChildSplice, substitute};
use crate::scan::scan;
use crate::types::Variables;

/// Resolve every `${name}` in the tree's attribute values and node text,
/// splicing children at `${child}` markers. Mutates the tree in place.
///
/// Never fails on string content — unknown names fall back to themselves
/// and malformed token syntax passes through; the error covers structural
/// misuse of the tree interface only. A panic from a caller-supplied
/// dynamic variable propagates, and mutations performed before it remain
/// applied.
pub fn resolve(tree: &mut Tree, vars: &Variables) -> Result<ResolveReport, TreeError> {
    let mut ctx = ResolveContext::new();
    tree.walk(|tree, id| visit(tree, id, vars, &mut ctx))?;
    Ok(ctx.into_report())
}

/// Resolve only the subtree rooted at `start`.
pub fn resolve_subtree(
    tree: &mut Tree,
    start: NodeId,
    vars: &Variables,
) -> Result<ResolveReport, TreeError> {
    let mut ctx = ResolveContext::new();
    tree.walk_from(start, |tree, id| visit(tree, id, vars, &mut ctx))?;
    Ok(ctx.into_report())
}

/// Resolve a bare string with no tree context. `child` has no special
/// meaning here.
pub fn resolve_string(raw: &str, vars: &Variables) -> String {
    let model = scan(raw);
    let mut ctx = ResolveContext::new();
    substitute(&model, vars, &mut ChildSplice::Plain, &mut ctx)
}
