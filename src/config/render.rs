//! Render configuration (pagegen.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main configuration for a render run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Date display format, Moment.js-style (e.g. "YYYY-MM-DD")
    pub date_format: String,

    /// Marker tokens replaced in the template
    pub markers: MarkerConfig,

    /// Code highlighting settings
    pub highlight: HighlightConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            date_format: "YYYY-MM-DD".to_string(),
            markers: MarkerConfig::default(),
            highlight: HighlightConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl RenderConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: RenderConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// The literal marker tokens substituted in the template.
///
/// Markers are exact substrings, not patterns; a template author who
/// mistypes a token gets a warning instead of a silent no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub date: String,
    pub title: String,
    pub body: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            date: "<!--DATE-->".to_string(),
            title: "<!--TITLE-->".to_string(),
            body: "<!--BODY-->".to_string(),
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
