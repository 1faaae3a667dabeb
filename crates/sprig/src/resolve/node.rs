//! Node resolver: applies the string resolver to one node and realizes
//! `${child}` splits.

use sprig_tree::{NodeId, Tree, TreeError};

use crate::resolve::context::ResolveContext;
use crate::resolve::report::ResolveWarning;
use crate::resolve::split::split_at;
use crate::resolve::string::{ChildSplice, substitute};
use crate::scan::scan;
use crate::types::Variables;

/// Walker visitor: resolve `id` unless an earlier recursive pass already
/// did.
pub(crate) fn visit(
    tree: &mut Tree,
    id: NodeId,
    vars: &Variables,
    ctx: &mut ResolveContext,
) -> Result<(), TreeError> {
    if ctx.is_resolved(id) {
        return Ok(());
    }
    resolve_node(tree, id, vars, ctx)
}

/// Resolve a single node in place: every string-valued attribute, then the
/// node's own value. A `${child}` in the value triggers resolution of the
/// node's subtree followed by the structural split.
fn resolve_node(
    tree: &mut Tree,
    id: NodeId,
    vars: &Variables,
    ctx: &mut ResolveContext,
) -> Result<(), TreeError> {
    ctx.mark_resolved(id);

    // Attribute pass. `${child}` cannot receive child content here, so it
    // is neutralized to empty text rather than rejected.
    let attributes: Vec<(String, String)> = tree
        .attributes(id)
        .iter()
        .filter_map(|a| a.value.clone().map(|value| (a.name.clone(), value)))
        .collect();
    for (name, raw) in attributes {
        let model = scan(&raw);
        let resolved = substitute(&model, vars, &mut ChildSplice::Neutralize, ctx);
        tree.set_attribute(id, &name, resolved);
    }

    // Value pass. The first `${child}` records where the node's children
    // are spliced in; later ones collapse to nothing.
    let Some(raw) = tree.value(id).map(str::to_string) else {
        return Ok(());
    };
    let model = scan(&raw);
    let mut child = ChildSplice::capture();
    let resolved = substitute(&model, vars, &mut child, ctx);
    tree.set_value(id, Some(resolved));

    let Some(split) = child.split() else {
        return Ok(());
    };

    if tree.children(id).is_empty() {
        ctx.add_warning(ResolveWarning::ChildPlaceholderIgnored);
    }

    // The walker has not reached this node's descendants yet, and the split
    // is about to move them out of its path: resolve them now, synchronously,
    // so relocated children never escape substitution.
    for kid in tree.children(id).to_vec() {
        tree.walk_from(kid, |tree, node| visit(tree, node, vars, ctx))?;
    }

    for created in split_at(tree, id, split)? {
        ctx.mark_resolved(created);
    }
    Ok(())
}
