//! Integration tests for tree structural operations.

use std::convert::Infallible;

use sprig_tree::{Attribute, Node, Tree, TreeError};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn root_is_an_empty_container() {
    let tree = Tree::new();
    assert!(tree.name(tree.root()).is_none());
    assert!(tree.value(tree.root()).is_none());
    assert!(tree.children(tree.root()).is_empty());
    assert!(tree.parent(tree.root()).is_none());
}

#[test]
fn append_links_parent_and_child() {
    let mut tree = Tree::new();
    let div = tree.append(tree.root(), Node::element("div"));
    let span = tree.append(div, Node::element("span"));
    assert_eq!(tree.parent(span), Some(div));
    assert_eq!(tree.children(div), &[span]);
    assert_eq!(tree.first_child(div), Some(span));
}

#[test]
fn create_leaves_the_node_detached() {
    let mut tree = Tree::new();
    let node = tree.create(Node::element("div"));
    assert!(tree.parent(node).is_none());
    assert!(tree.children(tree.root()).is_empty());
    assert_eq!(tree.node_count(), 2);
}

#[test]
fn clone_node_copies_payload_without_children() {
    let mut tree = Tree::new();
    let div = tree.append(
        tree.root(),
        Node::builder()
            .name("div".to_string())
            .value("x".to_string())
            .attributes(vec![Attribute::new("id", "main")])
            .build(),
    );
    tree.append(div, Node::element("span"));

    let copy = tree.clone_node(div);
    assert_eq!(tree.name(copy), Some("div"));
    assert_eq!(tree.value(copy), Some("x"));
    assert_eq!(
        tree.attribute(copy, "id").and_then(|a| a.value.as_deref()),
        Some("main")
    );
    assert!(tree.children(copy).is_empty());
    assert!(tree.parent(copy).is_none());
}

// =============================================================================
// Structural mutation
// =============================================================================

#[test]
fn insert_before_preserves_order() {
    let mut tree = Tree::new();
    let a = tree.append(tree.root(), Node::element("a"));
    let c = tree.append(tree.root(), Node::element("c"));
    let b = tree.create(Node::element("b"));
    tree.insert_before(b, c).unwrap();
    assert_eq!(tree.children(tree.root()), &[a, b, c]);
    assert_eq!(tree.parent(b), Some(tree.root()));
}

#[test]
fn insert_before_rejects_an_attached_node() {
    let mut tree = Tree::new();
    let a = tree.append(tree.root(), Node::element("a"));
    let b = tree.append(tree.root(), Node::element("b"));
    assert_eq!(tree.insert_before(a, b), Err(TreeError::AlreadyAttached));
}

#[test]
fn insert_before_rejects_a_detached_reference() {
    let mut tree = Tree::new();
    let reference = tree.create(Node::element("a"));
    let new = tree.create(Node::element("b"));
    assert_eq!(tree.insert_before(new, reference), Err(TreeError::Detached));
}

#[test]
fn append_child_attaches_at_the_end() {
    let mut tree = Tree::new();
    let div = tree.append(tree.root(), Node::element("div"));
    let a = tree.append(div, Node::element("a"));
    let b = tree.create(Node::element("b"));
    tree.append_child(div, b).unwrap();
    assert_eq!(tree.children(div), &[a, b]);
}

#[test]
fn detach_then_reattach_elsewhere() {
    let mut tree = Tree::new();
    let div = tree.append(tree.root(), Node::element("div"));
    let span = tree.append(div, Node::element("span"));

    tree.detach(span).unwrap();
    assert!(tree.children(div).is_empty());
    assert!(tree.parent(span).is_none());

    tree.insert_before(span, div).unwrap();
    assert_eq!(tree.children(tree.root()), &[span, div]);
}

#[test]
fn detach_rejects_a_detached_node() {
    let mut tree = Tree::new();
    let node = tree.create(Node::element("a"));
    assert_eq!(tree.detach(node), Err(TreeError::Detached));
}

#[test]
fn set_attribute_updates_in_place_or_appends() {
    let mut tree = Tree::new();
    let a = tree.append(
        tree.root(),
        Node::builder()
            .name("a".to_string())
            .attributes(vec![Attribute::new("href", "#")])
            .build(),
    );

    tree.set_attribute(a, "href", "/home");
    tree.set_attribute(a, "title", "home");

    let names: Vec<&str> = tree.attributes(a).iter().map(|at| at.name.as_str()).collect();
    assert_eq!(names, vec!["href", "title"]);
    assert_eq!(
        tree.attribute(a, "href").and_then(|at| at.value.as_deref()),
        Some("/home")
    );
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn walk_visits_preorder_including_root() {
    let mut tree = Tree::new();
    let a = tree.append(tree.root(), Node::element("a"));
    let b = tree.append(a, Node::element("b"));
    let c = tree.append(tree.root(), Node::element("c"));

    let mut order = Vec::new();
    tree.walk(|_tree, id| {
        order.push(id);
        Ok::<(), Infallible>(())
    })
    .unwrap();

    assert_eq!(order, vec![tree.root(), a, b, c]);
}

#[test]
fn walk_from_covers_only_the_subtree() {
    let mut tree = Tree::new();
    let a = tree.append(tree.root(), Node::element("a"));
    let b = tree.append(a, Node::element("b"));
    tree.append(tree.root(), Node::element("c"));

    let mut order = Vec::new();
    tree.walk_from(a, |_tree, id| {
        order.push(id);
        Ok::<(), Infallible>(())
    })
    .unwrap();

    assert_eq!(order, vec![a, b]);
}

#[test]
fn walk_skips_children_relocated_during_the_visit() {
    let mut tree = Tree::new();
    let outer = tree.append(tree.root(), Node::element("outer"));
    let inner = tree.append(outer, Node::element("inner"));

    let mut order = Vec::new();
    tree.walk(|tree, id| {
        order.push(id);
        if id == outer {
            // hoist the child up next to its parent mid-walk
            tree.detach(inner)?;
            tree.insert_before(inner, outer)?;
        }
        Ok::<(), TreeError>(())
    })
    .unwrap();

    // `inner` was not in the root's snapshot and left `outer` before the
    // descent, so it is visited at most once (here: zero times)
    assert_eq!(order, vec![tree.root(), outer]);
}

#[test]
fn walk_propagates_visitor_errors() {
    let mut tree = Tree::new();
    let a = tree.append(tree.root(), Node::element("a"));
    let result = tree.walk(|_tree, id| if id == a { Err("stop") } else { Ok(()) });
    assert_eq!(result, Err("stop"));
}
