//! Arena storage and structural operations for the abbreviation tree.

use crate::error::TreeError;
use crate::node::{Attribute, Node};

/// Handle to a node inside a [`Tree`].
///
/// Ids are stable for the lifetime of the tree: nodes are never removed from
/// the arena, only detached from their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Index of this node in the arena.
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Slot {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed abbreviation tree.
///
/// All nodes live in one arena owned by the tree and are addressed through
/// copyable [`NodeId`] handles. The root is an unnamed container node that
/// only holds children. Parent links are navigational; every structural
/// change goes through the explicit child-list operations below.
pub struct Tree {
    slots: Vec<Slot>,
}

impl Tree {
    /// An empty tree: just the root container.
    pub fn new() -> Tree {
        Tree {
            slots: vec![Slot {
                node: Node::empty(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root container node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, detached ones included.
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, id: NodeId) -> &Slot {
        &self.slots[id.0]
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Slot {
        &mut self.slots[id.0]
    }

    /// Create a detached node.
    pub fn create(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `node` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.create(node);
        self.slot_mut(id).parent = Some(parent);
        self.slot_mut(parent).children.push(id);
        id
    }

    /// Detached copy of a node's own payload. Children are not carried over.
    pub fn clone_node(&mut self, id: NodeId) -> NodeId {
        let node = self.slot(id).node.clone();
        self.create(node)
    }

    /// The node's payload.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.slot(id).node
    }

    /// Tag name, if the node is an element.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.slot(id).node.name.as_deref()
    }

    /// Text content, if any.
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.slot(id).node.value.as_deref()
    }

    /// Replace the node's text content.
    pub fn set_value(&mut self, id: NodeId, value: Option<String>) {
        self.slot_mut(id).node.value = value;
    }

    /// The node's ordered attribute list.
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        &self.slot(id).node.attributes
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&Attribute> {
        self.slot(id).node.attributes.iter().find(|a| a.name == name)
    }

    /// Set an attribute's value, appending the attribute if absent.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.slot_mut(id).node.attributes;
        match attributes.iter_mut().find(|a| a.name == name) {
            Some(attribute) => attribute.value = Some(value),
            None => attributes.push(Attribute::new(name, value)),
        }
    }

    /// The node's parent, if attached. Navigational only: mutation goes
    /// through [`Tree::insert_before`], [`Tree::append_child`], and
    /// [`Tree::detach`].
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).parent
    }

    /// The node's children, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slot(id).children
    }

    /// The node's first child, if any.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).children.first().copied()
    }

    /// Remove `id` from its parent's child list, leaving it detached.
    pub fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        let parent = self.slot(id).parent.ok_or(TreeError::Detached)?;
        self.slot_mut(parent).children.retain(|&c| c != id);
        self.slot_mut(id).parent = None;
        Ok(())
    }

    /// Insert the detached node `new` immediately before `reference` in the
    /// reference's parent.
    pub fn insert_before(&mut self, new: NodeId, reference: NodeId) -> Result<(), TreeError> {
        if self.slot(new).parent.is_some() {
            return Err(TreeError::AlreadyAttached);
        }
        let parent = self.slot(reference).parent.ok_or(TreeError::Detached)?;
        let children = &mut self.slot_mut(parent).children;
        let index = children
            .iter()
            .position(|&c| c == reference)
            .ok_or(TreeError::Detached)?;
        children.insert(index, new);
        self.slot_mut(new).parent = Some(parent);
        Ok(())
    }

    /// Append the detached node `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if self.slot(child).parent.is_some() {
            return Err(TreeError::AlreadyAttached);
        }
        self.slot_mut(parent).children.push(child);
        self.slot_mut(child).parent = Some(parent);
        Ok(())
    }
}

impl Default for Tree {
    fn default() -> Tree {
        Tree::new()
    }
}
