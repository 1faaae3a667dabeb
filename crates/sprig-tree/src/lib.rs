//! Parsed abbreviation tree consumed by the `sprig` resolver.
//!
//! Nodes live in one arena owned by [`Tree`] and are addressed by copyable
//! [`NodeId`] handles, so a traversal can restructure the tree while it
//! runs. The crate deliberately knows nothing about placeholders: it stores
//! names, text values, attributes, and repetition metadata, and exposes the
//! structural operations the resolver mutates the tree through.
//!
//! # Example
//!
//! ```
//! use sprig_tree::{stringify, Attribute, Node, Tree};
//!
//! let mut tree = Tree::new();
//! let div = tree.append(tree.root(), Node::element("div"));
//! tree.append(
//!     div,
//!     Node::builder()
//!         .name("span".to_string())
//!         .attributes(vec![Attribute::new("class", "note")])
//!         .value("hi".to_string())
//!         .build(),
//! );
//!
//! assert_eq!(stringify(&tree, tree.root()), r#"<div><span class="note">hi</span></div>"#);
//! ```

mod error;
mod node;
mod stringify;
mod tree;
mod walk;

pub use error::TreeError;
pub use node::{Attribute, Node, Repeat};
pub use stringify::stringify;
pub use tree::{NodeId, Tree};
