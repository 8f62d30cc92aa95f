pub mod dot;
pub mod xmi;

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use railgraph_core::Diagram;

/// A serializer turning a whole [`Diagram`] into one text document.
///
/// Exporters never mutate the diagram. Rendering the same diagram twice with
/// the same exporter yields the same text.
pub trait Exporter {
    /// Returns the format this exporter produces.
    fn format(&self) -> OutputFormat;

    /// Writes the complete document for `diagram` to `out`.
    fn write_diagram(&self, diagram: &Diagram, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Renders the complete document for `diagram` into a string.
    fn export(&self, diagram: &Diagram) -> String {
        let mut out = String::new();
        self.write_diagram(diagram, &mut out)
            .expect("Writing to String buffer is infallible");
        out
    }
}

/// Output document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// GraphViz DOT.
    #[default]
    Dot,
    /// XMI 1.2 with the UML 1.4 metamodel.
    Xmi,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Xmi => "xmi",
        }
    }

    /// Infers the format from a file extension, if it names one.
    ///
    /// `.dot` and `.gv` select DOT; `.xmi` and `.xml` select XMI.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "dot" | "gv" => Some(OutputFormat::Dot),
            "xmi" | "xml" => Some(OutputFormat::Xmi),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An output format name that is neither `dot` nor `xmi`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format `{0}`, expected `dot` or `xmi`")]
pub struct UnknownFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dot" | "gv" => Ok(OutputFormat::Dot),
            "xmi" => Ok(OutputFormat::Xmi),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
