//! Debug rendering of a tree to abbreviation-expansion markup.
//!
//! Named nodes render as tags with their repeat counter and attributes,
//! unnamed nodes render their text content directly, and the root container
//! renders its children only. Intended for tests and diagnostics, not for
//! producing real output documents.

use std::fmt::Write;

use crate::node::Repeat;
use crate::tree::{NodeId, Tree};

/// Render the subtree rooted at `id`.
pub fn stringify(tree: &Tree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out);
    out
}

fn write_node(tree: &Tree, id: NodeId, out: &mut String) {
    if id == tree.root() {
        for &child in tree.children(id) {
            write_node(tree, child, out);
        }
        return;
    }

    let node = tree.get(id);
    let Some(name) = node.name.as_deref() else {
        out.push_str(node.value.as_deref().unwrap_or(""));
        for &child in tree.children(id) {
            write_node(tree, child, out);
        }
        return;
    };

    out.push('<');
    out.push_str(name);
    write_counter(node.repeat, out);
    for attribute in &node.attributes {
        if attribute.implied && attribute.value.is_none() {
            continue;
        }
        let _ = write!(
            out,
            " {}=\"{}\"",
            attribute.name,
            attribute.value.as_deref().unwrap_or("")
        );
    }

    if node.self_closing {
        out.push_str(" />");
        return;
    }

    out.push('>');
    out.push_str(node.value.as_deref().unwrap_or(""));
    for &child in tree.children(id) {
        write_node(tree, child, out);
    }
    let _ = write!(out, "</{name}>");
}

fn write_counter(repeat: Option<Repeat>, out: &mut String) {
    let Some(repeat) = repeat else {
        return;
    };
    let _ = write!(out, "*{}", repeat.count);
    if let Some(value) = repeat.value {
        let _ = write!(out, "@{value}");
    }
}
