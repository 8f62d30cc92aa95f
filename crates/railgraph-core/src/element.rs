//! Diagram elements: nodes, their payloads, and edges.
//!
//! Node and edge kinds form closed sets. A node carries its kind-specific
//! payload inside [`NodeShape`], so an exporter matching on the shape always
//! receives exactly the data that kind needs.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// The kind of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Model,
    ModelBrief,
    Class,
    ClassBrief,
    Controller,
    ControllerBrief,
    Module,
    StateMachineGroup,
}

impl NodeKind {
    /// All node kinds, in declaration order.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Model,
        NodeKind::ModelBrief,
        NodeKind::Class,
        NodeKind::ClassBrief,
        NodeKind::Controller,
        NodeKind::ControllerBrief,
        NodeKind::Module,
        NodeKind::StateMachineGroup,
    ];

    /// Returns the canonical descriptor name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Model => "model",
            NodeKind::ModelBrief => "model-brief",
            NodeKind::Class => "class",
            NodeKind::ClassBrief => "class-brief",
            NodeKind::Controller => "controller",
            NodeKind::ControllerBrief => "controller-brief",
            NodeKind::Module => "module",
            NodeKind::StateMachineGroup => "state-machine-group",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model" => Ok(NodeKind::Model),
            "model-brief" => Ok(NodeKind::ModelBrief),
            "class" => Ok(NodeKind::Class),
            "class-brief" => Ok(NodeKind::ClassBrief),
            "controller" => Ok(NodeKind::Controller),
            "controller-brief" => Ok(NodeKind::ControllerBrief),
            "module" => Ok(NodeKind::Module),
            "state-machine-group" | "aasm" => Ok(NodeKind::StateMachineGroup),
            other => Err(DescriptorError::UnknownNodeKind(other.to_string())),
        }
    }
}

/// Method visibility groups of a controller node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Visibility groups in rendering order.
    pub const ORDERED: [Visibility; 3] = [
        Visibility::Public,
        Visibility::Protected,
        Visibility::Private,
    ];
}

/// Method labels of a controller, grouped by visibility.
///
/// Each group keeps its insertion order. Empty groups are valid and still
/// occupy a row when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerMethods {
    #[serde(default)]
    public: Vec<String>,

    #[serde(default)]
    protected: Vec<String>,

    #[serde(default)]
    private: Vec<String>,
}

impl ControllerMethods {
    /// Creates a method record from the three visibility groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use railgraph_core::element::{ControllerMethods, Visibility};
    ///
    /// let methods = ControllerMethods::new(
    ///     vec!["index".to_string()],
    ///     vec![],
    ///     vec!["auth".to_string()],
    /// );
    /// assert_eq!(methods.group(Visibility::Private), ["auth".to_string()]);
    /// ```
    pub fn new(public: Vec<String>, protected: Vec<String>, private: Vec<String>) -> Self {
        Self {
            public,
            protected,
            private,
        }
    }

    /// Returns the method labels with the given visibility.
    pub fn group(&self, visibility: Visibility) -> &[String] {
        match visibility {
            Visibility::Public => &self.public,
            Visibility::Protected => &self.protected,
            Visibility::Private => &self.private,
        }
    }

    /// Appends a method label to the given visibility group.
    pub fn push(&mut self, visibility: Visibility, method: impl Into<String>) {
        let group = match visibility {
            Visibility::Public => &mut self.public,
            Visibility::Protected => &mut self.protected,
            Visibility::Private => &mut self.private,
        };
        group.push(method.into());
    }
}

/// Kind-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeShape {
    /// Record with one attribute row per label.
    Model(Vec<String>),
    ModelBrief,
    /// Class with attribute labels. The labels are kept but not rendered.
    Class(Vec<String>),
    ClassBrief,
    Controller(ControllerMethods),
    ControllerBrief,
    Module,
    /// Cluster of pre-formatted statements, emitted verbatim.
    StateMachineGroup(Vec<String>),
}

impl NodeShape {
    /// Returns the kind this payload belongs to.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeShape::Model(_) => NodeKind::Model,
            NodeShape::ModelBrief => NodeKind::ModelBrief,
            NodeShape::Class(_) => NodeKind::Class,
            NodeShape::ClassBrief => NodeKind::ClassBrief,
            NodeShape::Controller(_) => NodeKind::Controller,
            NodeShape::ControllerBrief => NodeKind::ControllerBrief,
            NodeShape::Module => NodeKind::Module,
            NodeShape::StateMachineGroup(_) => NodeKind::StateMachineGroup,
        }
    }

    /// Returns the empty payload for `kind`.
    pub fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Model => NodeShape::Model(Vec::new()),
            NodeKind::ModelBrief => NodeShape::ModelBrief,
            NodeKind::Class => NodeShape::Class(Vec::new()),
            NodeKind::ClassBrief => NodeShape::ClassBrief,
            NodeKind::Controller => NodeShape::Controller(ControllerMethods::default()),
            NodeKind::ControllerBrief => NodeShape::ControllerBrief,
            NodeKind::Module => NodeShape::Module,
            NodeKind::StateMachineGroup => NodeShape::StateMachineGroup(Vec::new()),
        }
    }
}

/// A named diagram node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    shape: NodeShape,
}

impl Node {
    /// Creates a node with the given name and payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use railgraph_core::element::{Node, NodeKind, NodeShape};
    ///
    /// let node = Node::new("User", NodeShape::Model(vec!["name".to_string()]));
    /// assert_eq!(node.kind(), NodeKind::Model);
    /// ```
    pub fn new(name: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    /// Creates a `model` node with attribute labels.
    pub fn model<I, S>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            NodeShape::Model(attributes.into_iter().map(Into::into).collect()),
        )
    }

    /// Creates a `controller` node.
    pub fn controller(name: impl Into<String>, methods: ControllerMethods) -> Self {
        Self::new(name, NodeShape::Controller(methods))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &NodeShape {
        &self.shape
    }

    pub fn kind(&self) -> NodeKind {
        self.shape.kind()
    }
}

/// The kind of a relationship between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    OneToOne,
    OneToMany,
    ManyToMany,
    IsA,
    Event,
}

impl EdgeKind {
    /// All edge kinds, in declaration order.
    pub const ALL: [EdgeKind; 5] = [
        EdgeKind::OneToOne,
        EdgeKind::OneToMany,
        EdgeKind::ManyToMany,
        EdgeKind::IsA,
        EdgeKind::Event,
    ];

    /// Returns the canonical descriptor name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::OneToOne => "one-to-one",
            EdgeKind::OneToMany => "one-to-many",
            EdgeKind::ManyToMany => "many-to-many",
            EdgeKind::IsA => "is-a",
            EdgeKind::Event => "event",
        }
    }

    /// Returns `true` for the cardinality kinds rendered as associations.
    pub fn is_association(&self) -> bool {
        matches!(
            self,
            EdgeKind::OneToOne | EdgeKind::OneToMany | EdgeKind::ManyToMany
        )
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeKind {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-to-one" | "one-one" => Ok(EdgeKind::OneToOne),
            "one-to-many" | "one-many" => Ok(EdgeKind::OneToMany),
            "many-to-many" | "many-many" => Ok(EdgeKind::ManyToMany),
            "is-a" => Ok(EdgeKind::IsA),
            "event" => Ok(EdgeKind::Event),
            other => Err(DescriptorError::UnknownEdgeKind(other.to_string())),
        }
    }
}

/// A directed relationship between two node names.
///
/// Endpoints are plain names and are not required to match a node of the
/// diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    kind: EdgeKind,
    from: String,
    to: String,
    label: String,
}

impl Edge {
    /// Creates an unlabeled edge.
    pub fn new(kind: EdgeKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
            label: String::new(),
        }
    }

    /// Sets the edge label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the label, empty when none was set.
    pub fn label(&self) -> &str {
        &self.label
    }
}
