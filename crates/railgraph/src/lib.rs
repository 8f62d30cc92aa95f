//! Railgraph - entity/relationship diagrams as GraphViz DOT and UML XMI.
//!
//! A [`Diagram`] of typed nodes and edges, built by an extractor that reads
//! an application's schema, is serialized into a `digraph` document or an
//! XMI 1.2 class model. Both renderings are pure functions of the diagram.

pub mod config;
pub mod export;
pub mod label;
pub mod source;

mod error;

pub use railgraph_core::{
    ControllerMethods, DescriptorError, Diagram, Edge, EdgeKind, ElementId, Node, NodeKind,
    NodeShape, QualityIssue, Visibility, descriptor,
};

pub use error::RailgraphError;
pub use export::{OutputFormat, UnknownFormat};
pub use label::DiagramLabel;
pub use source::SourceFormat;

use chrono::NaiveDateTime;
use log::{debug, info, trace, warn};

use config::AppConfig;
use export::{Exporter, dot::DotExporter, xmi::XmiExporter};

/// Facade for loading and rendering Railgraph diagrams.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use railgraph::{DiagramRenderer, SourceFormat, config::AppConfig};
///
/// let source = r#"
///     kind = "Models"
///     [[nodes]]
///     kind = "model"
///     name = "User"
///     attributes = ["name", "email"]
/// "#;
///
/// let renderer = DiagramRenderer::new(AppConfig::default());
/// let diagram = renderer.parse(source, SourceFormat::Toml)
///     .expect("Failed to parse");
///
/// let generated_at = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let dot = renderer.render_dot(&diagram, generated_at);
/// let xmi = renderer.render_xmi(&diagram);
///
/// assert!(dot.starts_with("digraph models_diagram {"));
/// assert!(xmi.contains(r#"name="User""#));
/// ```
#[derive(Debug, Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Label values and output defaults
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the renderer configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a diagram document into a [`Diagram`].
    ///
    /// # Errors
    ///
    /// Returns `RailgraphError` when the document cannot be decoded or names
    /// an unknown node or edge kind.
    pub fn parse(&self, source: &str, format: SourceFormat) -> Result<Diagram, RailgraphError> {
        info!(format:% = format; "Parsing diagram document");

        let descriptor = format.decode(source)?;
        let diagram = Diagram::try_from(descriptor)?;

        debug!(
            nodes = diagram.nodes().len(),
            edges = diagram.edges().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Render a diagram as a DOT document.
    ///
    /// `generated_at` is only shown when the diagram enables its label
    /// block. All other label values come from the configuration.
    pub fn render_dot(&self, diagram: &Diagram, generated_at: NaiveDateTime) -> String {
        let exporter = DotExporter::new(self.config.label().label_at(generated_at));
        self.render_with(&exporter, diagram)
    }

    /// Render a diagram as an XMI document.
    pub fn render_xmi(&self, diagram: &Diagram) -> String {
        let label = self.config.label();
        let exporter = XmiExporter::new().with_exporter(label.app_name(), label.app_version());
        self.render_with(&exporter, diagram)
    }

    /// Render a diagram in the given format.
    pub fn render(
        &self,
        diagram: &Diagram,
        format: OutputFormat,
        generated_at: NaiveDateTime,
    ) -> String {
        match format {
            OutputFormat::Dot => self.render_dot(diagram, generated_at),
            OutputFormat::Xmi => self.render_xmi(diagram),
        }
    }

    fn render_with(&self, exporter: &dyn Exporter, diagram: &Diagram) -> String {
        let nodes = diagram.nodes().len();
        let edges = diagram.edges().len();
        info!(
            format:% = exporter.format(),
            diagram_kind = diagram.diagram_kind(),
            nodes = nodes,
            edges = edges;
            "Rendering diagram"
        );
        report_quality_issues(diagram);

        let document = exporter.export(diagram);

        info!(
            format:% = exporter.format(),
            nodes = nodes,
            edges = edges,
            bytes = document.len();
            "Diagram rendered successfully"
        );
        document
    }
}

fn report_quality_issues(diagram: &Diagram) {
    for issue in diagram.quality_issues() {
        match issue {
            QualityIssue::DuplicateNode(name) => {
                warn!(name = name.as_str(); "Duplicate node name, rendering every occurrence");
            }
            QualityIssue::DanglingEndpoint { edge_index, name } => {
                warn!(edge_index = edge_index, name = name.as_str(); "Edge endpoint names no node");
            }
        }
    }
}
