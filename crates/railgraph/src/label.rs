//! Metadata label block contents.
//!
//! The DOT exporter can append a plaintext node describing when and by what
//! the diagram was generated. Every value shown there is supplied by the
//! caller, so rendering never consults the clock or the environment.

use std::fmt::Write;

use chrono::NaiveDateTime;
use log::warn;

use crate::config::DEFAULT_DATE_FORMAT;

/// Fixed attribution line closing the label block.
pub const ATTRIBUTION_URL: &str = "http://railroady.prestonlee.com";

/// Values shown in the metadata label block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramLabel {
    generated_at: NaiveDateTime,
    migration_version: String,
    app_name: String,
    app_version: String,
    date_format: String,
}

impl DiagramLabel {
    /// Creates a label using [`DEFAULT_DATE_FORMAT`].
    ///
    /// # Arguments
    ///
    /// * `generated_at` - Generation timestamp shown on the `Date:` line
    /// * `migration_version` - Schema migration version of the described application
    /// * `app_name` - Name of the generating tool
    /// * `app_version` - Version of the generating tool
    pub fn new(
        generated_at: NaiveDateTime,
        migration_version: impl Into<String>,
        app_name: impl Into<String>,
        app_version: impl Into<String>,
    ) -> Self {
        Self {
            generated_at,
            migration_version: migration_version.into(),
            app_name: app_name.into(),
            app_version: app_version.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Sets the `strftime`-style pattern of the `Date:` line.
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Formats the generation timestamp.
    ///
    /// Falls back to [`DEFAULT_DATE_FORMAT`] when the configured pattern
    /// cannot be applied to a naive timestamp.
    pub fn formatted_date(&self) -> String {
        let mut date = String::new();
        if write!(date, "{}", self.generated_at.format(&self.date_format)).is_ok() {
            return date;
        }

        warn!(date_format = self.date_format.as_str(); "Invalid label date format, using default");
        self.generated_at.format(DEFAULT_DATE_FORMAT).to_string()
    }

    /// Returns the label lines, without line terminators.
    pub fn lines(&self, diagram_kind: &str) -> [String; 5] {
        [
            format!("{diagram_kind} diagram"),
            format!("Date: {}", self.formatted_date()),
            format!("Migration version: {}", self.migration_version),
            format!("Generated by {} {}", self.app_name, self.app_version),
            ATTRIBUTION_URL.to_string(),
        ]
    }
}
