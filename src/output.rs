//! CLI output formatting.
//!
//! Output is **information-first**: the article leads with its title, and the
//! slug, format, and archive paths follow as indented context lines. Images
//! are listed by position with their original name and size, and the archive
//! path they were renamed to underneath.
//!
//! ```text
//! Article: My First Post
//!     Slug: my-first-post
//!     Format: markdown (article.md)
//!     Tags: rust, cli
//! Images
//!     01 Photo One.PNG (12 KB)
//!         → assets/01-photo-one.png
//! Archive
//!     dist/my-first-post.zip
//! ```
//!
//! Each `format_*` function is pure and returns `Vec<String>` for testability;
//! the matching `print_*` wrapper writes to stdout.

use crate::archive::ArticlePackage;
use crate::types::ArticleManifest;
use std::path::Path;

/// Format a 1-based positional index as 2-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>2}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Size in whole kilobytes, rounded to nearest.
pub fn kilobytes(bytes: u64) -> u64 {
    (bytes as f64 / 1024.0).round() as u64
}

fn format_article_header(manifest: &ArticleManifest) -> Vec<String> {
    let mut lines = vec![format!("Article: {}", manifest.title)];
    let ctx = indent(1);
    lines.push(format!("{ctx}Slug: {}", manifest.slug));
    lines.push(format!(
        "{ctx}Format: {} ({})",
        manifest.format, manifest.body_file
    ));
    if let Some(author) = &manifest.author {
        lines.push(format!("{ctx}Author: {author}"));
    }
    if let Some(summary) = &manifest.summary {
        lines.push(format!("{ctx}Summary: {}", truncate(summary, 60)));
    }
    if !manifest.tags.is_empty() {
        lines.push(format!("{ctx}Tags: {}", manifest.tags.join(", ")));
    }
    lines
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Format the result of a build. `archive_path` is `None` for dry runs.
pub fn format_build_output(package: &ArticlePackage, archive_path: Option<&Path>) -> Vec<String> {
    let manifest = &package.manifest;
    let mut lines = format_article_header(manifest);

    lines.push("Images".to_string());
    if manifest.images.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, image) in manifest.images.iter().enumerate() {
        lines.push(format!(
            "{}{} {} ({} KB)",
            indent(1),
            format_index(i + 1),
            image.original_name,
            kilobytes(image.size)
        ));
        lines.push(format!("{}→ {}", indent(2), image.file));
    }

    if let Some(path) = archive_path {
        lines.push("Archive".to_string());
        lines.push(format!("{}{}", indent(1), path.display()));
    }

    lines
}

/// Print build output to stdout.
pub fn print_build_output(package: &ArticlePackage, archive_path: Option<&Path>) {
    for line in format_build_output(package, archive_path) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::{ArchiveEntry, ArchiveTree};
    use crate::test_helpers::*;
    use crate::types::{BodyFormat, ImageManifestEntry};

    fn package(manifest: ArticleManifest) -> ArticlePackage {
        ArticlePackage {
            tree: ArchiveTree {
                root: ArchiveEntry::folder(manifest.slug.clone(), Vec::new()),
            },
            manifest,
        }
    }

    #[test]
    fn kilobytes_rounds_to_nearest() {
        assert_eq!(kilobytes(0), 0);
        assert_eq!(kilobytes(511), 0);
        assert_eq!(kilobytes(512), 1);
        assert_eq!(kilobytes(12 * 1024 + 100), 12);
    }

    #[test]
    fn build_output_minimal() {
        let mut manifest = manifest_fixture();
        manifest.format = BodyFormat::Markdown;
        manifest.body_file = "article.md".to_string();
        let lines = format_build_output(&package(manifest), None);
        assert_eq!(
            lines,
            vec![
                "Article: My First Post",
                "    Slug: my-first-post",
                "    Format: markdown (article.md)",
                "Images",
                "    (none)",
            ]
        );
    }

    #[test]
    fn build_output_with_images_and_archive() {
        let mut manifest = manifest_fixture();
        manifest.tags = vec!["rust".to_string(), "cli".to_string()];
        manifest.images = vec![ImageManifestEntry {
            original_name: "Photo One.PNG".to_string(),
            file: "assets/01-photo-one.png".to_string(),
            size: 12 * 1024,
            mime_type: "image/png".to_string(),
        }];
        let lines = format_build_output(&package(manifest), Some(Path::new("dist/x.zip")));
        assert!(lines.contains(&"    Tags: rust, cli".to_string()));
        assert!(lines.contains(&"    01 Photo One.PNG (12 KB)".to_string()));
        assert!(lines.contains(&"        → assets/01-photo-one.png".to_string()));
        assert_eq!(lines[lines.len() - 2], "Archive");
        assert_eq!(lines[lines.len() - 1], "    dist/x.zip");
    }

    #[test]
    fn build_output_truncates_long_summary() {
        let mut manifest = manifest_fixture();
        manifest.summary = Some("é".repeat(80));
        let lines = format_build_output(&package(manifest), None);
        let summary = lines.iter().find(|l| l.contains("Summary:")).unwrap();
        assert!(summary.ends_with("..."));
        assert_eq!(summary.trim_start().chars().count(), "Summary: ".len() + 60 + 3);
    }
}
