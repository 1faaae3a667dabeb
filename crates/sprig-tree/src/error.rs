//! Error type for structural tree mutation.

use thiserror::Error;

/// An error from a structural mutation on a [`Tree`](crate::Tree).
///
/// These indicate misuse of the tree interface, not a recoverable runtime
/// condition: a well-formed sequence of mutations never produces them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs an attached node, but the node has no parent.
    #[error("node is not attached to a parent")]
    Detached,

    /// The operation needs a detached node, but the node already has a parent.
    #[error("node is already attached to a parent")]
    AlreadyAttached,
}
