//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;

/// Markdown renderer with optional code highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    highlight: HighlightConfig,
}

impl MarkdownRenderer {
    /// Create a renderer with default highlighting settings
    pub fn new() -> Self {
        Self::with_options(HighlightConfig::default())
    }

    /// Create a renderer with the given highlighting settings
    pub fn with_options(highlight: HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            highlight,
        }
    }

    /// Render a markdown body into an HTML fragment
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();

        if !self.highlight.enable {
            html::push_html(&mut html_output, parser);
            return Ok(html_output);
        }

        // Intercept code blocks and emit highlighted HTML in their place
        let mut events: Vec<Event> = Vec::new();
        let mut in_code_block = false;
        let mut code_lang: Option<String> = None;
        let mut code_buf = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_buf.clear();
                    code_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                }
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted = self.highlight_code(&code_buf, code_lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                    in_code_block = false;
                    code_lang = None;
                }
                Event::Text(text) if in_code_block => {
                    code_buf.push_str(&text);
                }
                other => {
                    if !in_code_block {
                        events.push(other);
                    }
                }
            }
        }

        html::push_html(&mut html_output, events.into_iter());
        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self.theme_set.themes.get(&self.highlight.theme) else {
            tracing::warn!(
                "Unknown highlight theme {:?}, using plain code block",
                self.highlight.theme
            );
            return plain_code_block(code, lang);
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) if self.highlight.line_number => {
                with_line_numbers(&highlighted, lang)
            }
            Ok(highlighted) => highlighted,
            Err(_) => plain_code_block(code, lang),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escaped <pre><code> fallback when highlighting is unavailable
fn plain_code_block(code: &str, lang: &str) -> String {
    format!(
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        lang,
        html_escape(code)
    )
}

/// Wrap highlighted code in a gutter table with line numbers
fn with_line_numbers(code: &str, lang: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();
    let line_count = lines.len();

    let mut gutter = String::new();
    let mut code_lines = String::new();

    for (i, line) in lines.iter().enumerate() {
        gutter.push_str(&format!(r#"<span class="line-number">{}</span>"#, i + 1));
        code_lines.push_str(line);
        if i < line_count - 1 {
            gutter.push('\n');
            code_lines.push('\n');
        }
    }

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
        lang, gutter, code_lines
    )
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
