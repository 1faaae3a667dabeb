//! Placeholder resolution for parsed abbreviation trees.
//!
//! `sprig` substitutes `${name}` tokens in the text and attribute values of
//! a [`sprig_tree::Tree`] with values from a caller-supplied [`Variables`]
//! table. `\$` escapes a token so it renders literally, and the reserved
//! `${child}` token splices a node's children into its text at the point
//! the token occurred.
//!
//! # Example
//!
//! ```
//! use sprig::{Variables, resolve};
//! use sprig_tree::{Attribute, Node, Tree, stringify};
//!
//! let mut tree = Tree::new();
//! tree.append(
//!     tree.root(),
//!     Node::builder()
//!         .name("html".to_string())
//!         .value("lang is ${lang}!".to_string())
//!         .attributes(vec![Attribute::new("lang", "${lang}")])
//!         .build(),
//! );
//!
//! let mut vars = Variables::new();
//! vars.insert("lang", "en");
//!
//! let report = resolve(&mut tree, &vars).unwrap();
//! assert!(report.is_clean());
//! assert_eq!(
//!     stringify(&tree, tree.root()),
//!     r#"<html lang="en">lang is en!</html>"#
//! );
//! ```

pub mod resolve;
pub mod scan;
pub mod types;

pub use resolve::{
    CHILD_VARIABLE, ResolveReport, ResolveWarning, resolve, resolve_string, resolve_subtree,
};
pub use scan::{Occurrence, ScanModel, scan};
pub use types::{DynamicFn, VarValue, Variables};

/// Creates a [`Variables`] table from name-value pairs.
///
/// Values are converted via `Into<VarValue>`, so string literals and owned
/// strings both work. Dynamic variables are added with
/// [`Variables::insert_dynamic`].
///
/// # Example
///
/// ```
/// use sprig::vars;
///
/// let vars = vars! { "lang" => "en", "title" => "home" };
/// assert!(vars.contains("lang"));
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        $crate::Variables::new()
    };
    { $($name:expr => $value:expr),+ $(,)? } => {
        {
            let mut table = $crate::Variables::new();
            $(
                table.insert($name, $value);
            )+
            table
        }
    };
}
