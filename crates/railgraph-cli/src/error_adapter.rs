//! Error adapter for converting RailgraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use railgraph::{DescriptorError, RailgraphError};

/// Adapter rendering a [`RailgraphError`] as a miette diagnostic.
///
/// Railgraph errors carry no source spans, so the adapter only contributes
/// an error code and, where one applies, a help message.
pub struct ErrorAdapter<'a>(pub &'a RailgraphError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            RailgraphError::Io(_) => "railgraph::io",
            RailgraphError::Decode { .. } => "railgraph::decode",
            RailgraphError::Descriptor(_) => "railgraph::descriptor",
            RailgraphError::Config(_) => "railgraph::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            RailgraphError::Descriptor(DescriptorError::UnknownNodeKind(_)) => {
                "expected one of: model, model-brief, class, class-brief, controller, \
                 controller-brief, module, state-machine-group"
            }
            RailgraphError::Descriptor(DescriptorError::UnknownEdgeKind(_)) => {
                "expected one of: one-to-one, one-to-many, many-to-many, is-a, event"
            }
            RailgraphError::Descriptor(DescriptorError::PayloadMismatch { .. }) => {
                "models and classes take a list of attributes, controllers take \
                 public/protected/private method groups"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
