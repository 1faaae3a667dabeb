//! Tree splitter: relocates a node's children to the split position.

use sprig_tree::{Node, NodeId, Tree, TreeError};

/// Split `id` at byte offset `pos` of its resolved value, relocating its
/// children to sit between the text before and after the split point.
/// Returns the nodes created, so the caller can mark them resolved.
///
/// Three shapes:
/// - unnamed node: the before-text is hoisted into a clone inserted ahead
///   of the node, the children follow it as siblings, and the node keeps
///   the after-text — a bare text node cannot contain children in the
///   rendered output;
/// - named node with children: two synthetic text nodes sandwich the
///   existing children and the node's own value is cleared;
/// - named node without children: nothing to insert, the value stays whole.
///
/// Read end to end afterwards, the subtree's text is the before-text, the
/// former children's content, then the after-text.
pub(crate) fn split_at(tree: &mut Tree, id: NodeId, pos: usize) -> Result<Vec<NodeId>, TreeError> {
    let value = tree.value(id).unwrap_or("").to_string();
    let (before, after) = value.split_at(pos);

    if tree.name(id).is_none() {
        let lead = tree.clone_node(id);
        tree.set_value(lead, Some(before.to_string()));
        tree.set_value(id, Some(after.to_string()));
        tree.insert_before(lead, id)?;
        for kid in tree.children(id).to_vec() {
            tree.detach(kid)?;
            tree.insert_before(kid, id)?;
        }
        Ok(vec![lead])
    } else if let Some(first) = tree.first_child(id) {
        let lead = tree.create(Node::text(before));
        let trail = tree.create(Node::text(after));
        tree.set_value(id, None);
        tree.insert_before(lead, first)?;
        tree.append_child(id, trail)?;
        Ok(vec![lead, trail])
    } else {
        Ok(Vec::new())
    }
}
