//! String-keyed descriptors handed over by schema extractors.
//!
//! Descriptors mirror the typed model with plain strings for kinds and an
//! untyped attribute payload. They deserialize from any serde format and are
//! converted into the model with [`TryFrom`], which is the only place an
//! unknown kind or a payload of the wrong shape can surface.
//!
//! ```
//! use railgraph_core::{Diagram, descriptor::DiagramDescriptor};
//!
//! let source = r#"{
//!     "kind": "Models",
//!     "nodes": [{ "kind": "model", "name": "User", "attributes": ["name"] }],
//!     "edges": [{ "kind": "one-to-many", "from": "User", "to": "Post" }]
//! }"#;
//! let descriptor: DiagramDescriptor = serde_json::from_str(source).unwrap();
//! let diagram = Diagram::try_from(descriptor).unwrap();
//! assert_eq!(diagram.nodes()[0].name(), "User");
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    diagram::Diagram,
    element::{ControllerMethods, Edge, EdgeKind, Node, NodeKind, NodeShape},
    error::DescriptorError,
};

/// Untyped node payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributesDescriptor {
    /// Attribute labels or state-machine statements.
    Lines(Vec<String>),
    /// Controller methods grouped by visibility.
    Methods(ControllerMethods),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributesDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub kind: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: String,
}

/// A whole diagram as supplied by an extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramDescriptor {
    #[serde(default, alias = "kind")]
    pub diagram_kind: String,
    #[serde(default)]
    pub show_label: bool,
    #[serde(default)]
    pub nodes: Vec<NodeDescriptor>,
    #[serde(default)]
    pub edges: Vec<EdgeDescriptor>,
}

impl TryFrom<NodeDescriptor> for Node {
    type Error = DescriptorError;

    fn try_from(descriptor: NodeDescriptor) -> Result<Self, Self::Error> {
        let kind: NodeKind = descriptor.kind.parse()?;
        if descriptor.name.is_empty() {
            return Err(DescriptorError::EmptyName { kind });
        }

        let mismatch = |expected| DescriptorError::PayloadMismatch {
            name: descriptor.name.clone(),
            kind,
            expected,
        };

        let shape = match (kind, descriptor.attributes) {
            (_, None) => NodeShape::empty(kind),
            (NodeKind::Model, Some(AttributesDescriptor::Lines(lines))) => NodeShape::Model(lines),
            (NodeKind::Class, Some(AttributesDescriptor::Lines(lines))) => NodeShape::Class(lines),
            (NodeKind::StateMachineGroup, Some(AttributesDescriptor::Lines(lines))) => {
                NodeShape::StateMachineGroup(lines)
            }
            (NodeKind::Controller, Some(AttributesDescriptor::Methods(methods))) => {
                NodeShape::Controller(methods)
            }
            (NodeKind::Model | NodeKind::Class | NodeKind::StateMachineGroup, Some(_)) => {
                return Err(mismatch("a list of strings"));
            }
            (NodeKind::Controller, Some(_)) => {
                return Err(mismatch("a table of public, protected and private methods"));
            }
            // Payloads of brief and module nodes are ignored.
            (
                NodeKind::ModelBrief
                | NodeKind::ClassBrief
                | NodeKind::ControllerBrief
                | NodeKind::Module,
                Some(_),
            ) => NodeShape::empty(kind),
        };

        Ok(Node::new(descriptor.name, shape))
    }
}

impl TryFrom<EdgeDescriptor> for Edge {
    type Error = DescriptorError;

    fn try_from(descriptor: EdgeDescriptor) -> Result<Self, Self::Error> {
        let kind: EdgeKind = descriptor.kind.parse()?;
        Ok(Edge::new(kind, descriptor.from, descriptor.to).with_label(descriptor.label))
    }
}

impl TryFrom<DiagramDescriptor> for Diagram {
    type Error = DescriptorError;

    /// Converts every node and edge in order, stopping at the first failure.
    fn try_from(descriptor: DiagramDescriptor) -> Result<Self, Self::Error> {
        let mut diagram = Diagram::new(descriptor.diagram_kind);
        diagram.set_show_label(descriptor.show_label);

        for node in descriptor.nodes {
            diagram.add_node(Node::try_from(node)?);
        }
        for edge in descriptor.edges {
            diagram.add_edge(Edge::try_from(edge)?);
        }

        Ok(diagram)
    }
}
