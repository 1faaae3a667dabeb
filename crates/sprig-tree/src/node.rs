//! Node payload types for the abbreviation tree.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// One attribute of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,

    /// Attribute value; `None` for boolean-style attributes.
    pub value: Option<String>,

    /// Whether the attribute was implied by the abbreviation rather than
    /// written explicitly. An implied attribute without a value is omitted
    /// when rendering.
    pub implied: bool,
}

impl Attribute {
    /// An explicit attribute with a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Attribute {
        Attribute {
            name: name.into(),
            value: Some(value.into()),
            implied: false,
        }
    }

    /// An implied attribute with no value yet.
    pub fn implied(name: impl Into<String>) -> Attribute {
        Attribute {
            name: name.into(),
            value: None,
            implied: true,
        }
    }
}

/// Repetition metadata attached to a node (`*count`, optionally carrying the
/// current iteration value). The tree only stores it; computing counters is
/// the abbreviation parser's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeat {
    /// Total repetition count.
    pub count: usize,

    /// Current iteration, if the node is one instance of a repetition.
    pub value: Option<usize>,
}

/// The data carried by a single tree node.
///
/// A node with a `name` is an element; a node without one is plain text.
/// Either kind may hold a text `value` and children.
///
/// # Example
///
/// ```
/// use sprig_tree::{Attribute, Node};
///
/// let node = Node::builder()
///     .name("html".to_string())
///     .value("hello".to_string())
///     .attributes(vec![Attribute::new("lang", "en")])
///     .build();
///
/// assert_eq!(node.name.as_deref(), Some("html"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct Node {
    /// Tag name; `None` for plain-text nodes.
    pub name: Option<String>,

    /// Text content, if any.
    pub value: Option<String>,

    /// Ordered attribute list.
    #[builder(default)]
    pub attributes: Vec<Attribute>,

    /// Repetition metadata, if the node came from a repeated abbreviation.
    pub repeat: Option<Repeat>,

    /// Render as a self-closing element.
    #[builder(default)]
    pub self_closing: bool,
}

impl Node {
    /// A node with no name, value, or attributes.
    pub fn empty() -> Node {
        Node::default()
    }

    /// A plain-text node holding `value`.
    pub fn text(value: impl Into<String>) -> Node {
        Node::builder().value(value.into()).build()
    }

    /// A named element node with no content.
    pub fn element(name: impl Into<String>) -> Node {
        Node::builder().name(name.into()).build()
    }
}
