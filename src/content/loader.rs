//! Document loader - turns one markdown file into a Document

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

use super::{Document, FrontMatter, MarkdownRenderer};
use crate::helpers::format_date;
use crate::Pagegen;

/// Loads and renders a single markdown source file
pub struct DocumentLoader<'a> {
    pagegen: &'a Pagegen,
    renderer: MarkdownRenderer,
}

impl<'a> DocumentLoader<'a> {
    /// Create a new document loader
    pub fn new(pagegen: &'a Pagegen) -> Self {
        let renderer = MarkdownRenderer::with_options(pagegen.config.highlight.clone());
        Self { pagegen, renderer }
    }

    /// Load a document from a file
    pub fn load(&self, path: &Path) -> Result<Document> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read markdown file {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&raw);

        // Title from front-matter or filename
        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let date = self.display_date(&fm, path);

        let source = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let content = self.renderer.render(body)?;
        tracing::debug!(
            "Loaded {:?}: title={:?} date={:?} ({} bytes of markdown)",
            path,
            title,
            date,
            body.len()
        );

        Ok(Document {
            title,
            date,
            raw: body.to_string(),
            content,
            source,
            full_source: path.to_path_buf(),
            extra: fm.extra,
        })
    }

    /// The date string substituted into the template: the front-matter date
    /// normalized through the configured format when it parses, verbatim
    /// when it does not, the file mtime (then now) when it is absent.
    fn display_date(&self, fm: &FrontMatter, path: &Path) -> String {
        let format = &self.pagegen.config.date_format;

        if let Some(raw) = &fm.date {
            if let Some(parsed) = fm.parse_date() {
                return format_date(&parsed, format);
            }
            tracing::warn!("Unrecognized date {:?} in {:?}, using it verbatim", raw, path);
            return raw.trim().to_string();
        }

        let fallback = fs::metadata(path)
            .ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Local>::from)
            .unwrap_or_else(Local::now);
        format_date(&fallback, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn pagegen() -> Pagegen {
        Pagegen {
            config: crate::config::RenderConfig::default(),
            base_dir: std::env::temp_dir(),
        }
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "post.md",
            "---\ntitle: Hello\ndate: 2024-01-01\n---\n# Hi",
        );

        let pg = pagegen();
        let doc = DocumentLoader::new(&pg).load(&path).unwrap();
        assert_eq!(doc.title, "Hello");
        assert_eq!(doc.date, "2024-01-01");
        assert_eq!(doc.raw, "# Hi");
        assert_eq!(doc.content, "<h1>Hi</h1>\n");
        assert_eq!(doc.source, "post.md");
    }

    #[test]
    fn test_title_falls_back_to_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "my-page.md", "Just some text.");

        let pg = pagegen();
        let doc = DocumentLoader::new(&pg).load(&path).unwrap();
        assert_eq!(doc.title, "my-page");
        assert!(doc.content.contains("Just some text."));
    }

    #[test]
    fn test_date_normalized_through_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "post.md",
            "---\ntitle: T\ndate: 2024-01-15 10:30:00\n---\nbody",
        );

        let pg = pagegen();
        let doc = DocumentLoader::new(&pg).load(&path).unwrap();
        assert_eq!(doc.date, "2024-01-15");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "post.md", "---\ntitle: X\ndate: Y\n---\n");

        let pg = pagegen();
        let doc = DocumentLoader::new(&pg).load(&path).unwrap();
        assert_eq!(doc.date, "Y");
        assert_eq!(doc.content, "");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let pg = pagegen();
        let err = DocumentLoader::new(&pg)
            .load(Path::new("/nonexistent/never.md"))
            .unwrap_err();
        assert!(err.to_string().contains("never.md"));
    }
}
