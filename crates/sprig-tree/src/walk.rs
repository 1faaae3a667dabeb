//! Pre-order traversal with mutation support.

use crate::tree::{NodeId, Tree};

impl Tree {
    /// Visit every node reachable from the root in pre-order, root included.
    ///
    /// The visitor may mutate the tree. A node's children are snapshotted
    /// before they are descended into, and a child relocated away from its
    /// parent during the visit is skipped, so each node is visited at most
    /// once even while the tree is being restructured.
    pub fn walk<E>(
        &mut self,
        mut visitor: impl FnMut(&mut Tree, NodeId) -> Result<(), E>,
    ) -> Result<(), E> {
        let root = self.root();
        go(self, root, &mut visitor)
    }

    /// Like [`Tree::walk`], starting from `start` instead of the root.
    pub fn walk_from<E>(
        &mut self,
        start: NodeId,
        mut visitor: impl FnMut(&mut Tree, NodeId) -> Result<(), E>,
    ) -> Result<(), E> {
        go(self, start, &mut visitor)
    }
}

fn go<E, F>(tree: &mut Tree, id: NodeId, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Tree, NodeId) -> Result<(), E>,
{
    visitor(tree, id)?;
    let snapshot = tree.children(id).to_vec();
    for child in snapshot {
        if tree.parent(child) == Some(id) {
            go(tree, child, visitor)?;
        }
    }
    Ok(())
}
