//! Error types for Railgraph operations.
//!
//! This module provides the main error type [`RailgraphError`] which wraps
//! the failures that can occur while loading a diagram document. Rendering
//! itself cannot fail.

use std::io;

use thiserror::Error;

use railgraph_core::DescriptorError;

use crate::source::SourceFormat;

/// The main error type for Railgraph operations.
#[derive(Debug, Error)]
pub enum RailgraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to decode {format} diagram document: {message}")]
    Decode {
        format: SourceFormat,
        message: String,
    },

    #[error("Invalid diagram descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RailgraphError {
    /// Create a new `Decode` error for a document in `format`.
    pub fn new_decode_error(format: SourceFormat, err: impl ToString) -> Self {
        Self::Decode {
            format,
            message: err.to_string(),
        }
    }
}
