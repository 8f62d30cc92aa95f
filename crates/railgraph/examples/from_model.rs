//! Example: Creating a diagram from the model types
//!
//! This example demonstrates how to programmatically build a diagram
//! using the model types directly, without a diagram document.

use chrono::Local;

use railgraph::{
    ControllerMethods, Diagram, DiagramRenderer, Edge, EdgeKind, Node, NodeShape,
    config::AppConfig,
};

fn main() {
    println!("Building diagram from model types...\n");

    let mut diagram = Diagram::new("Models");
    diagram.set_show_label(true);

    // Entity nodes with attribute rows
    diagram.add_node(Node::model(
        "User",
        ["id :integer", "name :string", "email :string"],
    ));
    diagram.add_node(Node::model("Post", ["id :integer", "title :string"]));
    diagram.add_node(Node::model("Comment", ["id :integer", "body :text"]));
    diagram.add_node(Node::new("Admin", NodeShape::ModelBrief));

    // A controller grouping its actions by visibility
    let mut methods = ControllerMethods::default();
    methods.push(railgraph::Visibility::Public, "index");
    methods.push(railgraph::Visibility::Public, "show");
    methods.push(railgraph::Visibility::Private, "authenticate");
    diagram.add_node(Node::controller("PostsController", methods));

    // Relationships
    diagram.add_edge(Edge::new(EdgeKind::OneToMany, "User", "Post").with_label("posts"));
    diagram.add_edge(Edge::new(EdgeKind::OneToMany, "Post", "Comment").with_label("comments"));
    diagram.add_edge(Edge::new(EdgeKind::IsA, "User", "Admin"));

    let renderer = DiagramRenderer::new(AppConfig::default());

    let dot = renderer.render_dot(&diagram, Local::now().naive_local());
    println!("--- DOT ---\n{dot}");

    let xmi = renderer.render_xmi(&diagram);
    println!("--- XMI ---\n{xmi}");
}
