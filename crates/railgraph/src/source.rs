//! Diagram document decoding.
//!
//! Extractors hand diagrams over as TOML or JSON documents following the
//! [`DiagramDescriptor`] layout.

use std::{fmt, path::Path};

use railgraph_core::descriptor::DiagramDescriptor;

use crate::error::RailgraphError;

/// Serialization of a diagram document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    #[default]
    Toml,
    Json,
}

impl SourceFormat {
    /// Infers the format from a file extension, defaulting to TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Toml,
        }
    }

    /// Decodes a diagram document.
    ///
    /// # Errors
    ///
    /// Returns [`RailgraphError::Decode`] when `source` is not a valid
    /// document in this format.
    pub fn decode(&self, source: &str) -> Result<DiagramDescriptor, RailgraphError> {
        match self {
            SourceFormat::Toml => {
                toml::from_str(source).map_err(|err| RailgraphError::new_decode_error(*self, err))
            }
            SourceFormat::Json => serde_json::from_str(source)
                .map_err(|err| RailgraphError::new_decode_error(*self, err)),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Toml => write!(f, "TOML"),
            SourceFormat::Json => write!(f, "JSON"),
        }
    }
}
