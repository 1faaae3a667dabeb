//! Public value types for the resolver.

mod value;
mod vars;

pub use value::{DynamicFn, VarValue};
pub use vars::Variables;
