//! Railgraph Core Types and Definitions
//!
//! This crate provides the foundational types for Railgraph entity diagrams.
//! It includes:
//!
//! - **Model**: the ordered node/edge graph ([`diagram::Diagram`]) and its
//!   elements ([`element`] module)
//! - **Identifiers**: content-derived element ids ([`identifier::ElementId`])
//! - **Descriptors**: string-keyed input documents converted into the typed
//!   model ([`descriptor`] module)
//! - **Errors**: failures at the descriptor boundary ([`error::DescriptorError`])

pub mod descriptor;
pub mod diagram;
pub mod element;
pub mod error;
pub mod identifier;

pub use diagram::{Diagram, QualityIssue};
pub use element::{ControllerMethods, Edge, EdgeKind, Node, NodeKind, NodeShape, Visibility};
pub use error::DescriptorError;
pub use identifier::ElementId;
