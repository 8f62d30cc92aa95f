//! Configuration types for Railgraph rendering.
//!
//! This module provides configuration structures that control the metadata
//! label block and the default output format. All types implement
//! [`serde::Deserialize`] for loading from external sources, and every field
//! falls back to a default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining label and output settings.
//! - [`LabelConfig`] - Values embedded in the DOT label block and the XMI header.
//! - [`OutputConfig`] - Default [`OutputFormat`] when none is requested.
//!
//! # Example
//!
//! ```
//! # use railgraph::config::AppConfig;
//! # use railgraph::OutputFormat;
//! let config: AppConfig = toml::from_str(r#"
//!     [label]
//!     app_name = "railroady"
//!     migration_version = "20240101120000"
//! "#).unwrap();
//!
//! assert_eq!(config.label().app_name(), "railroady");
//! assert_eq!(config.output().format(), OutputFormat::Dot);
//! ```

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{export::OutputFormat, label::DiagramLabel};

/// Date format used in the label block unless configured otherwise.
pub const DEFAULT_DATE_FORMAT: &str = "%b %d %Y - %H:%M";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Label configuration section.
    #[serde(default)]
    label: LabelConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `label` - Label block values.
    /// * `output` - Output format defaults.
    pub fn new(label: LabelConfig, output: OutputConfig) -> Self {
        Self { label, output }
    }

    /// Returns the label configuration.
    pub fn label(&self) -> &LabelConfig {
        &self.label
    }

    /// Returns a mutable reference to the label configuration.
    pub fn label_mut(&mut self) -> &mut LabelConfig {
        &mut self.label
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Values embedded in generated documents.
///
/// The migration version describes the schema the diagram was extracted
/// from. Application name and version identify the generating tool in the DOT
/// label block and as the XMI exporter.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "default_app_name")]
    app_name: String,

    #[serde(default = "default_app_version")]
    app_version: String,

    #[serde(default = "default_migration_version")]
    migration_version: String,

    /// `strftime`-style pattern for the generation timestamp.
    #[serde(default = "default_date_format")]
    date_format: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_version: default_app_version(),
            migration_version: default_migration_version(),
            date_format: default_date_format(),
        }
    }
}

impl LabelConfig {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    pub fn migration_version(&self) -> &str {
        &self.migration_version
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Replaces the migration version.
    pub fn set_migration_version(&mut self, migration_version: impl Into<String>) {
        self.migration_version = migration_version.into();
    }

    /// Builds the label block contents for a diagram generated at `generated_at`.
    pub fn label_at(&self, generated_at: NaiveDateTime) -> DiagramLabel {
        DiagramLabel::new(
            generated_at,
            &self.migration_version,
            &self.app_name,
            &self.app_version,
        )
        .with_date_format(&self.date_format)
    }
}

/// Output format defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Format used when neither the caller nor the output path selects one.
    #[serde(default)]
    format: OutputFormat,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the given default format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the default [`OutputFormat`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

fn default_app_name() -> String {
    "railgraph".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_migration_version() -> String {
    "0".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
