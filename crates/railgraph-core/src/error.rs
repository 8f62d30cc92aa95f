//! Error types for the descriptor boundary.
//!
//! The typed model cannot represent an unknown node or edge kind, so every
//! failure in this crate happens while converting string-keyed descriptors
//! (see [`crate::descriptor`]) into model elements.

use thiserror::Error;

use crate::element::NodeKind;

/// Errors raised while converting descriptors into the typed model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("unknown node kind `{0}`")]
    UnknownNodeKind(String),

    #[error("unknown edge kind `{0}`")]
    UnknownEdgeKind(String),

    #[error("node `{name}` of kind `{kind}` expects {expected} as attributes")]
    PayloadMismatch {
        name: String,
        kind: NodeKind,
        expected: &'static str,
    },

    #[error("`{kind}` node has an empty name")]
    EmptyName { kind: NodeKind },
}
