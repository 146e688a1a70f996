//! Rendered document model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A markdown page after front-matter extraction and rendering.
/// Immutable once the loader has built it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Page title
    pub title: String,

    /// Display date substituted into the template
    pub date: String,

    /// Raw markdown body (front-matter removed)
    pub raw: String,

    /// Rendered HTML fragment
    pub content: String,

    /// Source file name (display form)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}
