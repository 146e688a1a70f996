//! Render one markdown file through an HTML template

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::loader::DocumentLoader;
use crate::template::Template;
use crate::Pagegen;

/// Run the render pipeline: load the document, fill the template, write
/// the result to the output path.
pub fn run(pagegen: &Pagegen, markdown: &Path, template: &Path, output: &Path) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = DocumentLoader::new(pagegen);
    let doc = loader.load(markdown)?;
    tracing::info!("Loaded {:?}: {:?} ({})", markdown, doc.title, doc.date);

    let template = Template::load(template, pagegen.config.markers.clone())?;
    let html = template.fill(&doc);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory {:?}", parent))?;
        }
    }
    fs::write(output, &html)
        .with_context(|| format!("failed to write output file {:?}", output))?;

    let duration = start.elapsed();
    tracing::info!(
        "Rendered {:?} -> {:?} in {:.2}ms",
        markdown,
        output,
        duration.as_secs_f64() * 1000.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;

    fn pagegen() -> Pagegen {
        Pagegen {
            config: RenderConfig::default(),
            base_dir: std::env::temp_dir(),
        }
    }

    #[test]
    fn test_render_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let md = dir.path().join("page.md");
        let tpl = dir.path().join("template.html");
        let out = dir.path().join("out/index.html");

        fs::write(&md, "---\ntitle: Hello\ndate: 2024-01-01\n---\n# Hi").unwrap();
        fs::write(
            &tpl,
            "<p><!--TITLE--></p><span><!--DATE--></span><!--BODY-->",
        )
        .unwrap();

        run(&pagegen(), &md, &tpl, &out).unwrap();

        let html = fs::read_to_string(&out).unwrap();
        assert_eq!(html, "<p>Hello</p><span>2024-01-01</span><h1>Hi</h1>\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let md = dir.path().join("page.md");
        let tpl = dir.path().join("template.html");
        let out = dir.path().join("index.html");

        fs::write(&md, "---\ntitle: T\ndate: 2024-06-01\n---\nSome *body* text.").unwrap();
        fs::write(&tpl, "<title><!--TITLE--></title><!--BODY-->").unwrap();

        let pg = pagegen();
        run(&pg, &md, &tpl, &out).unwrap();
        let first = fs::read_to_string(&out).unwrap();
        run(&pg, &md, &tpl, &out).unwrap();
        let second = fs::read_to_string(&out).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_missing_markdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let tpl = dir.path().join("template.html");
        let out = dir.path().join("index.html");
        fs::write(&tpl, "<!--BODY-->").unwrap();

        let err = run(
            &pagegen(),
            Path::new("/nonexistent/page.md"),
            &tpl,
            &out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("page.md"));
        assert!(!out.exists());
    }

    #[test]
    fn test_render_missing_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let md = dir.path().join("page.md");
        let out = dir.path().join("index.html");
        fs::write(&md, "body").unwrap();

        let err = run(
            &pagegen(),
            &md,
            Path::new("/nonexistent/template.html"),
            &out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("template.html"));
        assert!(!out.exists());
    }
}
