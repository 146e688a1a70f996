//! HTML template loading and literal marker substitution

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::MarkerConfig;
use crate::content::Document;

/// Template loading errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// An HTML template with its marker tokens.
///
/// Markers are exact literal substrings; each is replaced at its first
/// occurrence only. A marker the template does not contain is skipped with
/// a warning and its value dropped.
#[derive(Debug)]
pub struct Template {
    raw: String,
    markers: MarkerConfig,
}

impl Template {
    /// Load a template from a file
    pub fn load(path: &Path, markers: MarkerConfig) -> Result<Self, TemplateError> {
        let raw = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { raw, markers })
    }

    /// Build a template from an in-memory string
    pub fn from_source(raw: impl Into<String>, markers: MarkerConfig) -> Self {
        Self {
            raw: raw.into(),
            markers,
        }
    }

    /// Fill the template with the document's date, title, and rendered body
    #[must_use]
    pub fn fill(&self, doc: &Document) -> String {
        let mut out = self.raw.clone();

        for (marker, value) in [
            (&self.markers.date, doc.date.as_str()),
            (&self.markers.title, doc.title.as_str()),
            (&self.markers.body, doc.content.as_str()),
        ] {
            if out.contains(marker.as_str()) {
                out = out.replacen(marker.as_str(), value, 1);
            } else {
                tracing::warn!("Marker {:?} not found in template, dropping its value", marker);
            }
        }

        out
    }
}
