//! XMI 1.2 (UML 1.4) exporter.
//!
//! The XMI document carries class identity and structural relationships
//! only: node payloads are not rendered, and `event` edges have no UML
//! counterpart and are skipped.
//!
//! Classes are identified by [`ElementId`], so association ends and
//! generalizations refer to a class by hashing the endpoint name, whether or
//! not the diagram contains a node of that name.

use std::fmt;

use log::{debug, trace, warn};

use railgraph_core::{Diagram, Edge, EdgeKind, ElementId, Node};

use super::{Exporter, OutputFormat};

/// Fixed id of the `UML:Model` root element.
pub const MODEL_ID: &str = "123456";

/// Fixed name of the `UML:Model` root element.
pub const MODEL_NAME: &str = "Rails";

/// Ordinal of the first edge. Ordinal 1 is never assigned.
const FIRST_EDGE_ORDINAL: usize = 2;

/// Renders diagrams as UML class models in XMI.
///
/// # Examples
///
/// ```
/// use railgraph::export::{Exporter, xmi::XmiExporter};
/// use railgraph_core::{Diagram, Edge, EdgeKind, ElementId, Node};
///
/// let mut diagram = Diagram::new("Models");
/// diagram.add_node(Node::model("User", ["name"]));
/// diagram.add_edge(Edge::new(EdgeKind::OneToMany, "User", "Post"));
///
/// let xmi = XmiExporter::new().export(&diagram);
/// let user_id = ElementId::from_name("User");
/// assert!(xmi.contains(&format!(r#"<UML:Class xmi.id="{user_id}" name="User""#)));
/// assert!(xmi.contains(r#"<UML:Association xmi.id="123-2""#));
/// ```
#[derive(Debug, Clone)]
pub struct XmiExporter {
    exporter_name: String,
    exporter_version: String,
}

impl Default for XmiExporter {
    fn default() -> Self {
        Self {
            exporter_name: "railgraph".to_string(),
            exporter_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl XmiExporter {
    /// Creates an exporter that identifies itself as this crate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tool name and version written to `XMI.documentation`.
    pub fn with_exporter(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.exporter_name = name.into();
        self.exporter_version = version.into();
        self
    }

    fn write_header(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<XMI xmi.version="1.2" xmlns:UML="org.omg.xmi.namespace.UML">"#
        )?;
        writeln!(out, "  <XMI.header>")?;
        writeln!(out, "    <XMI.documentation>")?;
        writeln!(
            out,
            "      <XMI.exporter>{}</XMI.exporter>",
            self.exporter_name
        )?;
        writeln!(
            out,
            "      <XMI.exporterVersion>{}</XMI.exporterVersion>",
            self.exporter_version
        )?;
        writeln!(out, "    </XMI.documentation>")?;
        writeln!(out, r#"    <XMI.metamodel xmi.name="UML" xmi.version="1.4"/>"#)?;
        writeln!(out, "  </XMI.header>")?;
        writeln!(out, "  <XMI.content>")?;
        writeln!(
            out,
            r#"    <UML:Model xmi.id="{MODEL_ID}" name="{MODEL_NAME}" isSpecification="false" isRoot="false" isLeaf="false" isAbstract="false">"#
        )?;
        writeln!(out, "      <UML:Namespace.ownedElement>")
    }
}

impl Exporter for XmiExporter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Xmi
    }

    fn write_diagram(&self, diagram: &Diagram, out: &mut dyn fmt::Write) -> fmt::Result {
        debug!(
            nodes = diagram.nodes().len(),
            edges = diagram.edges().len();
            "Writing XMI document"
        );

        self.write_header(out)?;
        for node in diagram.nodes() {
            write_class(node, out)?;
        }
        for (ordinal, edge) in (FIRST_EDGE_ORDINAL..).zip(diagram.edges()) {
            write_edge(ordinal, edge, out)?;
        }
        write_footer(out)
    }
}

fn write_footer(out: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(out, "      </UML:Namespace.ownedElement>")?;
    writeln!(out, "    </UML:Model>")?;
    writeln!(out, "  </XMI.content>")?;
    writeln!(out, "</XMI>")
}

fn write_class(node: &Node, out: &mut dyn fmt::Write) -> fmt::Result {
    let id = ElementId::from_name(node.name());
    trace!(name = node.name(), id = id.as_str(); "Writing XMI class");

    writeln!(
        out,
        r#"        <UML:Class xmi.id="{id}" name="{}" visibility="public" isSpecification="false" isRoot="false" isLeaf="false" isAbstract="false" isActive="false"/>"#,
        node.name()
    )
}

fn write_edge(ordinal: usize, edge: &Edge, out: &mut dyn fmt::Write) -> fmt::Result {
    match edge.kind() {
        EdgeKind::OneToOne | EdgeKind::OneToMany | EdgeKind::ManyToMany => {
            write_association(ordinal, edge, out)
        }
        EdgeKind::IsA => write_generalization(ordinal, edge, out),
        EdgeKind::Event => {
            warn!(
                ordinal = ordinal,
                from = edge.from(),
                to = edge.to();
                "Skipping event edge, XMI has no counterpart"
            );
            Ok(())
        }
    }
}

fn write_association(ordinal: usize, edge: &Edge, out: &mut dyn fmt::Write) -> fmt::Result {
    trace!(ordinal = ordinal, kind = edge.kind().as_str(); "Writing XMI association");

    let source_aggregation = match edge.kind() {
        EdgeKind::ManyToMany => "none",
        _ => "aggregate",
    };

    writeln!(
        out,
        r#"        <UML:Association xmi.id="123-{ordinal}" name="" isSpecification="false" isRoot="false" isLeaf="false" isAbstract="false">"#
    )?;
    writeln!(out, "          <UML:Association.connection>")?;
    write_association_end(
        &format!("123-{ordinal}-1"),
        false,
        source_aggregation,
        &ElementId::from_name(edge.from()),
        out,
    )?;
    write_association_end(
        &format!("123-{ordinal}-2"),
        true,
        "none",
        &ElementId::from_name(edge.to()),
        out,
    )?;
    writeln!(out, "          </UML:Association.connection>")?;
    writeln!(out, "        </UML:Association>")
}

fn write_association_end(
    id: &str,
    navigable: bool,
    aggregation: &str,
    participant: &ElementId,
    out: &mut dyn fmt::Write,
) -> fmt::Result {
    writeln!(
        out,
        r#"            <UML:AssociationEnd xmi.id="{id}" visibility="public" isSpecification="false" isNavigable="{navigable}" ordering="unordered" aggregation="{aggregation}" targetScope="instance" changeability="changeable">"#
    )?;
    writeln!(out, "              <UML:AssociationEnd.participant>")?;
    writeln!(
        out,
        r#"                <UML:Class xmi.idref="{participant}"/>"#
    )?;
    writeln!(out, "              </UML:AssociationEnd.participant>")?;
    writeln!(out, "            </UML:AssociationEnd>")
}

fn write_generalization(ordinal: usize, edge: &Edge, out: &mut dyn fmt::Write) -> fmt::Result {
    trace!(ordinal = ordinal, parent = edge.from(), child = edge.to(); "Writing XMI generalization");

    writeln!(
        out,
        r#"        <UML:Generalization xmi.id="234-{ordinal}" isSpecification="false">"#
    )?;
    writeln!(out, "          <UML:Generalization.child>")?;
    writeln!(
        out,
        r#"            <UML:Class xmi.idref="{}"/>"#,
        ElementId::from_name(edge.to())
    )?;
    writeln!(out, "          </UML:Generalization.child>")?;
    writeln!(out, "          <UML:Generalization.parent>")?;
    writeln!(
        out,
        r#"            <UML:Class xmi.idref="{}"/>"#,
        ElementId::from_name(edge.from())
    )?;
    writeln!(out, "          </UML:Generalization.parent>")?;
    writeln!(out, "        </UML:Generalization>")
}

#[cfg(test)]
mod tests {
    use railgraph_core::{ControllerMethods, NodeShape};

    use super::*;

    fn render(diagram: &Diagram) -> String {
        XmiExporter::new().export(diagram)
    }

    fn parse(xmi: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(xmi).expect("XMI should be well-formed")
    }

    fn owned_classes<'a>(doc: &'a roxmltree::Document<'a>) -> Vec<roxmltree::Node<'a, 'a>> {
        doc.descendants()
            .filter(|n| n.tag_name().name() == "Class" && n.attribute("name").is_some())
            .collect()
    }

    #[test]
    fn test_empty_diagram_is_well_formed() {
        let xmi = render(&Diagram::new("Models"));
        let doc = parse(&xmi);

        let model = doc
            .descendants()
            .find(|n| n.tag_name().name() == "Model")
            .unwrap();
        assert_eq!(model.attribute("xmi.id"), Some(MODEL_ID));
        assert_eq!(model.attribute("name"), Some(MODEL_NAME));
        assert!(owned_classes(&doc).is_empty());
    }

    #[test]
    fn test_header_names_exporter() {
        let xmi = XmiExporter::new()
            .with_exporter("railroady", "1.5.3")
            .export(&Diagram::new("Models"));
        assert!(xmi.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xmi.contains("<XMI.exporter>railroady</XMI.exporter>"));
        assert!(xmi.contains("<XMI.exporterVersion>1.5.3</XMI.exporterVersion>"));
        assert!(xmi.contains(r#"<XMI.metamodel xmi.name="UML" xmi.version="1.4"/>"#));
        assert!(xmi.ends_with("</XMI>\n"));
    }

    #[test]
    fn test_classes_use_hashed_ids_without_payload() {
        let mut diagram = Diagram::new("Controllers");
        diagram.add_node(Node::model("User", ["secret_attribute"]));
        diagram.add_node(Node::controller(
            "UsersController",
            ControllerMethods::new(vec!["secret_method".to_string()], vec![], vec![]),
        ));
        diagram.add_node(Node::new("Auditable", NodeShape::Module));

        let xmi = render(&diagram);
        let doc = parse(&xmi);
        let classes = owned_classes(&doc);

        assert_eq!(classes.len(), 3);
        for (class, name) in classes.iter().zip(["User", "UsersController", "Auditable"]) {
            assert_eq!(class.attribute("name"), Some(name));
            assert_eq!(
                class.attribute("xmi.id"),
                Some(ElementId::from_name(name).as_str())
            );
        }
        assert!(!xmi.contains("secret_attribute"));
        assert!(!xmi.contains("secret_method"));
    }

    #[test]
    fn test_association_ends() {
        let mut diagram = Diagram::new("Models");
        diagram.add_edge(Edge::new(EdgeKind::OneToMany, "User", "Post"));

        let xmi = render(&diagram);
        let doc = parse(&xmi);

        let association = doc
            .descendants()
            .find(|n| n.tag_name().name() == "Association")
            .unwrap();
        assert_eq!(association.attribute("xmi.id"), Some("123-2"));

        let ends: Vec<_> = association
            .descendants()
            .filter(|n| n.tag_name().name() == "AssociationEnd")
            .collect();
        assert_eq!(ends.len(), 2);

        let participant = |end: &roxmltree::Node| {
            end.descendants()
                .find(|n| n.tag_name().name() == "Class")
                .and_then(|n| n.attribute("xmi.idref"))
                .map(str::to_string)
        };

        assert_eq!(ends[0].attribute("xmi.id"), Some("123-2-1"));
        assert_eq!(ends[0].attribute("isNavigable"), Some("false"));
        assert_eq!(ends[0].attribute("aggregation"), Some("aggregate"));
        assert_eq!(
            participant(&ends[0]),
            Some(ElementId::from_name("User").to_string())
        );

        assert_eq!(ends[1].attribute("xmi.id"), Some("123-2-2"));
        assert_eq!(ends[1].attribute("isNavigable"), Some("true"));
        assert_eq!(ends[1].attribute("aggregation"), Some("none"));
        assert_eq!(
            participant(&ends[1]),
            Some(ElementId::from_name("Post").to_string())
        );
    }

    #[test]
    fn test_aggregation_by_kind() {
        for (kind, aggregation) in [
            (EdgeKind::OneToOne, "aggregate"),
            (EdgeKind::OneToMany, "aggregate"),
            (EdgeKind::ManyToMany, "none"),
        ] {
            let mut diagram = Diagram::new("Models");
            diagram.add_edge(Edge::new(kind, "A", "B"));
            let xmi = render(&diagram);
            let doc = parse(&xmi);

            let source_end = doc
                .descendants()
                .find(|n| n.attribute("xmi.id") == Some("123-2-1"))
                .unwrap();
            assert_eq!(source_end.attribute("aggregation"), Some(aggregation), "{kind}");
        }
    }

    #[test]
    fn test_generalization_references() {
        let mut diagram = Diagram::new("Models");
        diagram.add_edge(Edge::new(EdgeKind::IsA, "Animal", "Dog"));

        let xmi = render(&diagram);
        let doc = parse(&xmi);

        let generalization = doc
            .descendants()
            .find(|n| n.tag_name().name() == "Generalization")
            .unwrap();
        assert_eq!(generalization.attribute("xmi.id"), Some("234-2"));

        let reference = |role: &str| {
            generalization
                .children()
                .find(|n| n.tag_name().name() == role)
                .and_then(|n| n.children().find(|c| c.is_element()))
                .and_then(|n| n.attribute("xmi.idref"))
                .map(str::to_string)
        };
        assert_eq!(
            reference("Generalization.child"),
            Some(ElementId::from_name("Dog").to_string())
        );
        assert_eq!(
            reference("Generalization.parent"),
            Some(ElementId::from_name("Animal").to_string())
        );
    }

    #[test]
    fn test_event_edges_are_skipped_but_numbered() {
        let mut diagram = Diagram::new("Models");
        diagram.add_edge(Edge::new(EdgeKind::Event, "Cart", "Order").with_label("checkout"));
        diagram.add_edge(Edge::new(EdgeKind::OneToOne, "User", "Profile"));
        diagram.add_edge(Edge::new(EdgeKind::IsA, "User", "Admin"));

        let xmi = render(&diagram);
        parse(&xmi);

        assert!(!xmi.contains("checkout"));
        assert!(!xmi.contains(ElementId::from_name("Cart").as_str()));
        assert!(!xmi.contains("123-2\""));
        assert!(xmi.contains(r#"<UML:Association xmi.id="123-3""#));
        assert!(xmi.contains(r#"<UML:Generalization xmi.id="234-4""#));
    }

    #[test]
    fn test_exporter_format() {
        assert_eq!(XmiExporter::new().format(), OutputFormat::Xmi);
    }
}
