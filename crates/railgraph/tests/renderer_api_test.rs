//! Integration tests for the DiagramRenderer API
//!
//! These tests verify that the public API works end to end, from a diagram
//! document to rendered DOT and XMI text.

use chrono::{NaiveDate, NaiveDateTime};

use railgraph::{
    ControllerMethods, Diagram, DiagramRenderer, Edge, EdgeKind, ElementId, Node, OutputFormat,
    RailgraphError, SourceFormat,
    config::{AppConfig, LabelConfig, OutputConfig},
};

const MODELS_TOML: &str = r#"
    kind = "Models"
    show_label = true

    [[nodes]]
    kind = "model"
    name = "User"
    attributes = ["name :string", "email :string"]

    [[nodes]]
    kind = "model"
    name = "Post"
    attributes = ["title :string"]

    [[nodes]]
    kind = "model-brief"
    name = "Admin"

    [[edges]]
    kind = "one-to-many"
    from = "User"
    to = "Post"
    label = "posts"

    [[edges]]
    kind = "is-a"
    from = "User"
    to = "Admin"
"#;

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

#[test]
fn test_renderer_api_exists() {
    let _renderer = DiagramRenderer::default();
}

#[test]
fn test_parse_and_render_toml_document() {
    let renderer = DiagramRenderer::default();
    let diagram = renderer
        .parse(MODELS_TOML, SourceFormat::Toml)
        .expect("Failed to parse diagram");

    let dot = renderer.render_dot(&diagram, generated_at());
    assert!(dot.starts_with("digraph models_diagram {\n"));
    assert!(dot.contains("\t_diagram_info [shape=\"plaintext\""));
    assert!(dot.contains("Date: Jun 01 2024 - 12:30\\l"));
    assert!(dot.contains(
        "\t\"User\" -> \"Post\" [label=\"posts\", arrowtail=odot, arrowhead=crow, dir=both]\n"
    ));
    assert!(dot.contains("\t\"User\" -> \"Admin\" [arrowhead=\"none\", arrowtail=\"onormal\"]\n"));
    assert!(dot.ends_with("}\n"));

    let xmi = renderer.render_xmi(&diagram);
    assert!(xmi.contains(r#"<UML:Association xmi.id="123-2""#));
    assert!(xmi.contains(r#"<UML:Generalization xmi.id="234-3""#));
    roxmltree::Document::parse(&xmi).expect("XMI should be well-formed");
}

#[test]
fn test_parse_json_document() {
    let source = r#"{
        "kind": "Controllers",
        "nodes": [
            {
                "kind": "controller",
                "name": "UsersController",
                "attributes": { "public": ["index"], "protected": [], "private": ["auth"] }
            }
        ]
    }"#;

    let renderer = DiagramRenderer::default();
    let diagram = renderer
        .parse(source, SourceFormat::Json)
        .expect("Failed to parse diagram");
    let dot = renderer.render(&diagram, OutputFormat::Dot, generated_at());

    assert!(dot.starts_with("digraph controllers_diagram {"));
    assert!(dot.contains(r#"label="{UsersController|index\l|\l|auth\l}""#));
    assert!(!dot.contains("_diagram_info"));
}

#[test]
fn test_parse_unknown_kind_returns_error() {
    let source = r#"
        [[nodes]]
        kind = "widget"
        name = "Gear"
    "#;

    let result = DiagramRenderer::default().parse(source, SourceFormat::Toml);
    assert!(
        matches!(result, Err(RailgraphError::Descriptor(_))),
        "Should reject unknown node kind: {result:?}"
    );
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let result = DiagramRenderer::default().parse("{ not json", SourceFormat::Json);
    assert!(matches!(result, Err(RailgraphError::Decode { .. })));
}

#[test]
fn test_label_values_come_from_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [label]
        app_name = "railroady"
        app_version = "1.6.0"
        migration_version = "20240601000000"
        "#,
    )
    .unwrap();

    let mut diagram = Diagram::new("Models");
    diagram.set_show_label(true);

    let renderer = DiagramRenderer::new(config);
    let dot = renderer.render_dot(&diagram, generated_at());
    assert!(dot.contains("Migration version: 20240601000000\\l"));
    assert!(dot.contains("Generated by railroady 1.6.0\\l"));

    let xmi = renderer.render_xmi(&diagram);
    assert!(xmi.contains("<XMI.exporter>railroady</XMI.exporter>"));
    assert!(xmi.contains("<XMI.exporterVersion>1.6.0</XMI.exporterVersion>"));
}

#[test]
fn test_user_post_scenario() {
    let mut diagram = Diagram::new("Models");
    diagram.add_node(Node::model("User", ["name", "email"]));
    diagram.add_edge(Edge::new(EdgeKind::OneToMany, "User", "Post"));

    let renderer = DiagramRenderer::default();
    let dot = renderer.render_dot(&diagram, generated_at());

    let node_line = dot.lines().find(|line| line.contains("\"User\" [")).unwrap();
    assert!(node_line.contains("shape=Mrecord"));
    assert!(node_line.contains(r"name\lemail\l"));

    let edge_line = dot.lines().find(|line| line.contains("->")).unwrap();
    assert!(edge_line.contains("arrowtail=odot, arrowhead=crow, dir=both"));

    let xmi = renderer.render_xmi(&diagram);
    let doc = roxmltree::Document::parse(&xmi).unwrap();

    let user_id = ElementId::from_name("User");
    let post_id = ElementId::from_name("Post");

    let classes: Vec<_> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "Class" && n.attribute("name").is_some())
        .collect();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].attribute("xmi.id"), Some(user_id.as_str()));

    let associations: Vec<_> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "Association")
        .collect();
    assert_eq!(associations.len(), 1);

    let ends: Vec<_> = associations[0]
        .descendants()
        .filter(|n| n.tag_name().name() == "AssociationEnd")
        .collect();
    let idref = |end: roxmltree::Node| {
        end.descendants()
            .find(|n| n.attribute("xmi.idref").is_some())
            .and_then(|n| n.attribute("xmi.idref"))
            .map(str::to_string)
    };

    assert_eq!(ends[0].attribute("isNavigable"), Some("false"));
    assert_eq!(idref(ends[0]), Some(user_id.to_string()));
    assert_eq!(ends[1].attribute("isNavigable"), Some("true"));
    assert_eq!(idref(ends[1]), Some(post_id.to_string()));
}

#[test]
fn test_controller_scenario() {
    let mut diagram = Diagram::new("Controllers");
    diagram.add_node(Node::controller(
        "ApplicationController",
        ControllerMethods::new(vec!["index".to_string()], vec![], vec!["auth".to_string()]),
    ));

    let dot = DiagramRenderer::default().render_dot(&diagram, generated_at());
    assert!(dot.contains(r"index\l|\l|auth\l"));
}

#[test]
fn test_default_output_format_from_config() {
    let config = AppConfig::new(LabelConfig::default(), OutputConfig::new(OutputFormat::Xmi));
    let renderer = DiagramRenderer::new(config);
    assert_eq!(renderer.config().output().format(), OutputFormat::Xmi);
}

#[test]
fn test_renderer_reusability() {
    let renderer = DiagramRenderer::default();

    let mut first = Diagram::new("Models");
    first.add_node(Node::model("User", ["name"]));
    let mut second = Diagram::new("Models");
    second.add_node(Node::model("Account", ["iban"]));

    let dot1 = renderer.render_dot(&first, generated_at());
    let dot2 = renderer.render_dot(&second, generated_at());

    assert!(dot1.contains("\"User\""));
    assert!(dot2.contains("\"Account\""));
    assert!(!dot2.contains("\"User\""));
}
