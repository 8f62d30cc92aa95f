//! GraphViz DOT exporter.
//!
//! Nodes become record-shaped or boxed DOT nodes depending on their kind,
//! state-machine groups become clusters, and edge kinds map to arrowhead
//! styles encoding cardinality and inheritance.
//!
//! Names are quoted verbatim. Embedded double quotes or record separators in
//! names are not escaped and may break the produced document.

use std::fmt;

use log::{debug, trace};

use railgraph_core::{Diagram, Edge, EdgeKind, Node, NodeShape, Visibility};

use super::{Exporter, OutputFormat};
use crate::label::DiagramLabel;

/// Left-justified line break inside a record label.
const LINE_BREAK: &str = r"\l";

/// Renders diagrams as `digraph` documents.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use railgraph::{DiagramLabel, export::{Exporter, dot::DotExporter}};
/// use railgraph_core::{Diagram, Edge, EdgeKind, Node};
///
/// let mut diagram = Diagram::new("Models");
/// diagram.add_node(Node::model("User", ["name", "email"]));
/// diagram.add_edge(Edge::new(EdgeKind::OneToMany, "User", "Post"));
///
/// let generated_at = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let label = DiagramLabel::new(generated_at, "0", "railgraph", "0.1.0");
///
/// let dot = DotExporter::new(label).export(&diagram);
/// assert!(dot.starts_with("digraph models_diagram {"));
/// assert!(dot.contains(r#""User" [shape=Mrecord, label="{User|name\lemail\l}"]"#));
/// ```
#[derive(Debug, Clone)]
pub struct DotExporter {
    label: DiagramLabel,
}

impl DotExporter {
    /// Creates an exporter with the values for the metadata label block.
    ///
    /// The block is only emitted for diagrams with `show_label` set.
    pub fn new(label: DiagramLabel) -> Self {
        Self { label }
    }

    fn write_header(&self, diagram: &Diagram, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "digraph {}_diagram {{",
            diagram.diagram_kind().to_lowercase()
        )?;
        writeln!(out, "\tgraph[overlap=false, splines=true]")?;

        if !diagram.show_label() {
            return Ok(());
        }

        let mut text = self.label.lines(diagram.diagram_kind()).join(LINE_BREAK);
        text.push_str(LINE_BREAK);
        writeln!(
            out,
            "\t_diagram_info [shape=\"plaintext\", label=\"{text}\", fontsize=13]"
        )
    }
}

impl Exporter for DotExporter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Dot
    }

    fn write_diagram(&self, diagram: &Diagram, out: &mut dyn fmt::Write) -> fmt::Result {
        debug!(
            nodes = diagram.nodes().len(),
            edges = diagram.edges().len(),
            show_label = diagram.show_label();
            "Writing DOT document"
        );

        self.write_header(diagram, out)?;
        for node in diagram.nodes() {
            write_node(node, out)?;
        }
        for edge in diagram.edges() {
            write_edge(edge, out)?;
        }
        writeln!(out, "}}")
    }
}

/// A name wrapped in double quotes for use as a DOT identifier.
#[derive(Debug, Clone, Copy)]
pub struct Quoted<'a>(pub &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

fn write_node(node: &Node, out: &mut dyn fmt::Write) -> fmt::Result {
    let name = node.name();
    trace!(name = name, kind = node.kind().as_str(); "Writing DOT node");

    let options = match node.shape() {
        NodeShape::Model(attributes) => format!(
            "shape=Mrecord, label=\"{{{name}|{}{LINE_BREAK}}}\"",
            attributes.join(LINE_BREAK)
        ),
        NodeShape::Class(_) => format!("shape=record, label=\"{{{name}|}}\""),
        NodeShape::ClassBrief => "shape=box".to_string(),
        NodeShape::Controller(methods) => {
            let rows: Vec<String> = Visibility::ORDERED
                .iter()
                .map(|visibility| {
                    format!("{}{LINE_BREAK}", methods.group(*visibility).join(LINE_BREAK))
                })
                .collect();
            format!("shape=Mrecord, label=\"{{{name}|{}}}\"", rows.join("|"))
        }
        NodeShape::Module => format!("shape=box, style=dotted, label=\"{name}\""),
        NodeShape::ModelBrief | NodeShape::ControllerBrief => String::new(),
        NodeShape::StateMachineGroup(statements) => {
            return write_cluster(name, statements, out);
        }
    };

    writeln!(out, "\t{} [{options}]", Quoted(name))
}

fn write_cluster(name: &str, statements: &[String], out: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(out, "\tsubgraph cluster_{} {{", name.to_lowercase())?;
    writeln!(out, "\t\tlabel = {}", Quoted(name))?;
    for statement in statements {
        writeln!(out, "\t\t{statement}")?;
    }
    writeln!(out, "\t}}")
}

fn write_edge(edge: &Edge, out: &mut dyn fmt::Write) -> fmt::Result {
    trace!(from = edge.from(), to = edge.to(), kind = edge.kind().as_str(); "Writing DOT edge");

    write!(out, "\t{} -> {} [", Quoted(edge.from()), Quoted(edge.to()))?;
    if !edge.label().is_empty() {
        write!(out, "label=\"{}\", ", edge.label())?;
    }
    writeln!(out, "{}]", edge_options(edge.kind()))
}

fn edge_options(kind: EdgeKind) -> &'static str {
    match kind {
        EdgeKind::OneToOne => "arrowtail=odot, arrowhead=odot, dir=both",
        EdgeKind::OneToMany => "arrowtail=odot, arrowhead=crow, dir=both",
        EdgeKind::ManyToMany => "arrowtail=crow, arrowhead=crow, dir=both",
        EdgeKind::IsA => "arrowhead=\"none\", arrowtail=\"onormal\"",
        EdgeKind::Event => "fontsize=10",
    }
}
