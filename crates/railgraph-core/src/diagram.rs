//! The diagram graph model.
//!
//! A [`Diagram`] is built once by appending nodes and edges, then handed to
//! the exporters. Insertion order is significant: it is the emission order of
//! every output format and drives the ordinal numbering of XMI edge ids.

use std::collections::HashSet;

use log::trace;

use crate::element::{Edge, Node};

/// An ordered graph of nodes and edges plus presentation flags.
///
/// # Examples
///
/// ```
/// use railgraph_core::{Diagram, Edge, EdgeKind, Node};
///
/// let mut diagram = Diagram::new("Models");
/// diagram.add_node(Node::model("User", ["name", "email"]));
/// diagram.add_edge(Edge::new(EdgeKind::OneToMany, "User", "Post"));
///
/// assert_eq!(diagram.nodes().len(), 1);
/// assert_eq!(diagram.edges()[0].to(), "Post");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    diagram_kind: String,
    show_label: bool,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram of the given kind with the label disabled.
    pub fn new(diagram_kind: impl Into<String>) -> Self {
        Self {
            diagram_kind: diagram_kind.into(),
            ..Self::default()
        }
    }

    /// Replaces the diagram kind used in headers and titles.
    pub fn set_diagram_kind(&mut self, diagram_kind: impl Into<String>) {
        self.diagram_kind = diagram_kind.into();
    }

    /// Enables or disables the metadata label block.
    pub fn set_show_label(&mut self, show_label: bool) {
        self.show_label = show_label;
    }

    /// Appends a node. Names are not checked for uniqueness.
    pub fn add_node(&mut self, node: Node) {
        trace!(name = node.name(), kind = node.kind().as_str(); "Adding node");
        self.nodes.push(node);
    }

    /// Appends an edge. Endpoints are not checked against the nodes.
    pub fn add_edge(&mut self, edge: Edge) {
        trace!(from = edge.from(), to = edge.to(), kind = edge.kind().as_str(); "Adding edge");
        self.edges.push(edge);
    }

    pub fn diagram_kind(&self) -> &str {
        &self.diagram_kind
    }

    pub fn show_label(&self) -> bool {
        self.show_label
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Collects the data-quality issues the exporters pass through unchanged.
    ///
    /// Duplicate node names are reported once per repeated occurrence, and
    /// dangling endpoints once per edge end. Issues are listed in insertion
    /// order.
    pub fn quality_issues(&self) -> Vec<QualityIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for node in &self.nodes {
            if !seen.insert(node.name()) {
                issues.push(QualityIssue::DuplicateNode(node.name().to_string()));
            }
        }

        for (index, edge) in self.edges.iter().enumerate() {
            for endpoint in [edge.from(), edge.to()] {
                if !seen.contains(endpoint) {
                    issues.push(QualityIssue::DanglingEndpoint {
                        edge_index: index,
                        name: endpoint.to_string(),
                    });
                }
            }
        }

        issues
    }
}

/// A data-quality issue found in a diagram.
///
/// These are never errors: exporters emit the diagram as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityIssue {
    /// More than one node carries this name.
    DuplicateNode(String),

    /// An edge end names no node of the diagram.
    DanglingEndpoint { edge_index: usize, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{EdgeKind, NodeShape};

    #[test]
    fn test_new_diagram_has_no_elements() {
        let diagram = Diagram::new("Controllers");
        assert!(diagram.nodes().is_empty());
        assert!(diagram.edges().is_empty());
        assert!(!diagram.show_label());
        assert_eq!(diagram.diagram_kind(), "Controllers");
    }

    #[test]
    fn test_flags_are_replaced() {
        let mut diagram = Diagram::default();
        diagram.set_diagram_kind("Models");
        diagram.set_show_label(true);
        diagram.set_diagram_kind("Controllers");

        assert_eq!(diagram.diagram_kind(), "Controllers");
        assert!(diagram.show_label());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut diagram = Diagram::new("Models");
        for name in ["Zebra", "Apple", "Mango"] {
            diagram.add_node(Node::new(name, NodeShape::ModelBrief));
        }
        diagram.add_edge(Edge::new(EdgeKind::IsA, "Zebra", "Apple"));
        diagram.add_edge(Edge::new(EdgeKind::Event, "Apple", "Mango"));

        let names: Vec<_> = diagram.nodes().iter().map(Node::name).collect();
        assert_eq!(names, ["Zebra", "Apple", "Mango"]);
        assert_eq!(diagram.edges()[0].kind(), EdgeKind::IsA);
        assert_eq!(diagram.edges()[1].kind(), EdgeKind::Event);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut diagram = Diagram::new("Models");
        diagram.add_node(Node::new("User", NodeShape::ModelBrief));
        diagram.add_node(Node::new("User", NodeShape::ModelBrief));

        assert_eq!(diagram.nodes().len(), 2);
        assert_eq!(
            diagram.quality_issues(),
            [QualityIssue::DuplicateNode("User".to_string())]
        );
    }

    #[test]
    fn test_dangling_endpoints_are_reported() {
        let mut diagram = Diagram::new("Models");
        diagram.add_node(Node::model("User", ["name"]));
        diagram.add_edge(Edge::new(EdgeKind::OneToMany, "User", "Post"));
        diagram.add_edge(Edge::new(EdgeKind::IsA, "Base", "User"));

        assert_eq!(
            diagram.quality_issues(),
            [
                QualityIssue::DanglingEndpoint {
                    edge_index: 0,
                    name: "Post".to_string()
                },
                QualityIssue::DanglingEndpoint {
                    edge_index: 1,
                    name: "Base".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_clean_diagram_has_no_issues() {
        let mut diagram = Diagram::new("Models");
        diagram.add_node(Node::model("User", Vec::<String>::new()));
        diagram.add_node(Node::model("Post", Vec::<String>::new()));
        diagram.add_edge(Edge::new(EdgeKind::OneToMany, "User", "Post"));

        assert!(diagram.quality_issues().is_empty());
    }
}
