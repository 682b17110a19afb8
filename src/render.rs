//! Markdown rendering and the standalone article page.
//!
//! ## Renderer seam
//!
//! The archive builder never calls a markdown library directly. It goes
//! through [`MarkupRenderer`], so the rendering backend can be swapped (or
//! made to fail in tests) without touching the build logic. The production
//! implementation is [`CmarkRenderer`], backed by `pulldown-cmark`.
//!
//! ## Article page
//!
//! The HTML body variant ships `article.html` as a complete page that opens
//! correctly straight from the archive:
//!
//! ```text
//! <!DOCTYPE html>
//! html
//! ├── head: charset, viewport, <title>, inline stylesheet
//! └── body > main > article
//!     ├── h1            title
//!     ├── p.summary     (if any)
//!     ├── p.meta        Author: …   (if any)
//!     ├── p.meta        Tags: a, b  (if any)
//!     ├── hr
//!     └── rendered markdown body
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) so every metadata value is escaped;
//! only the renderer's output is inserted raw.

use crate::config::MarkdownConfig;
use crate::types::ArticleManifest;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Markdown rendering failed: {0}")]
    Failed(String),
}

/// Shown by the preview when the body is still empty.
pub const PREVIEW_PLACEHOLDER: &str = "*Start writing to see preview…*";

const CSS: &str = include_str!("../static/article.css");

/// Converts markdown source to HTML markup.
pub trait MarkupRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// `pulldown-cmark` renderer with configurable CommonMark extensions.
#[derive(Debug, Clone, Copy)]
pub struct CmarkRenderer {
    options: Options,
}

impl CmarkRenderer {
    pub fn new(config: &MarkdownConfig) -> Self {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, config.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, config.tasklists);
        options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
        Self { options }
    }
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

impl MarkupRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        md_html::push_html(&mut out, parser);
        Ok(out)
    }
}

/// Render the draft body for previewing, with a hint when it is empty.
pub fn render_preview(renderer: &dyn MarkupRenderer, body: &str) -> Result<String, RenderError> {
    let trimmed = body.trim();
    let source = if trimmed.is_empty() {
        PREVIEW_PLACEHOLDER
    } else {
        trimmed
    };
    renderer.render(source)
}

/// Wrap rendered body markup in the standalone article page.
pub fn article_document(manifest: &ArticleManifest, body_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (manifest.title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                main {
                    article {
                        h1 { (manifest.title) }
                        @if let Some(summary) = &manifest.summary {
                            p.summary { (summary) }
                        }
                        @if let Some(author) = &manifest.author {
                            p.meta { strong { "Author:" } " " (author) }
                        }
                        @if !manifest.tags.is_empty() {
                            p.meta { strong { "Tags:" } " " (manifest.tags.join(", ")) }
                        }
                        hr;
                        (PreEscaped(body_html))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::manifest_fixture;

    #[test]
    fn cmark_renders_basic_markdown() {
        let html = CmarkRenderer::default()
            .render("# Hello\n\nThis is **bold** and *italic*.")
            .unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn cmark_tables_follow_config() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n";

        let with_tables = CmarkRenderer::default().render(md).unwrap();
        assert!(with_tables.contains("<table>"));

        let config = MarkdownConfig {
            tables: false,
            ..MarkdownConfig::default()
        };
        let without = CmarkRenderer::new(&config).render(md).unwrap();
        assert!(!without.contains("<table>"));
    }

    #[test]
    fn cmark_strikethrough_enabled_by_default() {
        let html = CmarkRenderer::default().render("~~gone~~").unwrap();
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn preview_uses_placeholder_for_empty_body() {
        let html = render_preview(&CmarkRenderer::default(), "  \n ").unwrap();
        assert!(html.contains("<em>Start writing to see preview…</em>"));
    }

    #[test]
    fn preview_renders_trimmed_body() {
        let html = render_preview(&CmarkRenderer::default(), "\n\n## Draft\n").unwrap();
        assert_eq!(html.trim(), "<h2>Draft</h2>");
    }

    #[test]
    fn document_has_page_structure() {
        let manifest = manifest_fixture();
        let html = article_document(&manifest, "<p>Body</p>").into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>My First Post</title>"));
        assert!(html.contains("<h1>My First Post</h1>"));
        assert!(html.contains("<hr><p>Body</p>"));
    }

    #[test]
    fn document_includes_optional_metadata() {
        let mut manifest = manifest_fixture();
        manifest.author = Some("Ada".to_string());
        manifest.summary = Some("A short intro".to_string());
        manifest.tags = vec!["rust".to_string(), "cli".to_string()];
        let html = article_document(&manifest, "").into_string();
        assert!(html.contains(r#"<p class="summary">A short intro</p>"#));
        assert!(html.contains("<strong>Author:</strong> Ada"));
        assert!(html.contains("<strong>Tags:</strong> rust, cli"));
    }

    #[test]
    fn document_omits_missing_metadata() {
        let html = article_document(&manifest_fixture(), "").into_string();
        assert!(!html.contains("summary\">"));
        assert!(!html.contains("Author:"));
        assert!(!html.contains("Tags:"));
    }

    #[test]
    fn document_escapes_metadata() {
        let mut manifest = manifest_fixture();
        manifest.title = "<script>alert('x')</script>".to_string();
        manifest.author = Some("Tom & Jerry".to_string());
        let html = article_document(&manifest, "").into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn document_inlines_stylesheet() {
        let html = article_document(&manifest_fixture(), "").into_string();
        assert!(html.contains("<style>body { margin: 0;"));
    }
}
