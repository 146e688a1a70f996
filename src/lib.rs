//! pagegen: a minimal static page generator
//!
//! Renders a single markdown file with front-matter metadata through an
//! HTML template by literal marker substitution, and writes the filled
//! template to an output path.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod template;

use anyhow::Result;
use std::path::Path;

/// The main pagegen application
#[derive(Clone)]
pub struct Pagegen {
    /// Render configuration
    pub config: config::RenderConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Pagegen {
    /// Create a new Pagegen instance from a directory, loading
    /// pagegen.yml from it when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("pagegen.yml");

        let config = if config_path.exists() {
            config::RenderConfig::load(&config_path)?
        } else {
            config::RenderConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Render a markdown file through a template to an output path
    pub fn render(&self, markdown: &Path, template: &Path, output: &Path) -> Result<()> {
        commands::render::run(self, markdown, template, output)
    }
}
