//! Archive building: article input → folder tree + manifest.
//!
//! This is the core of the crate. [`build_archive`] is a pure function: it
//! takes one [`ArticleInput`] snapshot and returns an in-memory
//! [`ArchiveTree`] describing every file of the archive, together with the
//! [`ArticleManifest`] written into it. No files are read or written here;
//! serialization to zip lives in [`crate::pack`].
//!
//! ## Archive Layout
//!
//! ```text
//! <slug>/
//! ├── article.html | article.md   # body, depending on BodyFormat
//! ├── article.json                # ArticleManifest, 2-space indented
//! ├── README.txt                  # where to unzip, built from the slug
//! └── assets/
//!     ├── 01-photo-one.png        # attached images, renamed by position
//!     └── 02-diagram.svg
//! ```
//!
//! ## Defaults
//!
//! The title is the only required field. Everything else degrades gracefully:
//! an empty body becomes [`PLACEHOLDER_BODY`], empty author/summary become
//! `null`, an empty tag field becomes `[]`, and the slug follows the title
//! unless one was set explicitly.
//!
//! Given the same input and timestamp, the tree is identical byte for byte.

use crate::config::ArticleConfig;
use crate::metadata::{optional_text, split_tags};
use crate::naming::{safe_image_name, slugify};
use crate::render::{MarkupRenderer, RenderError, article_document};
use crate::types::{ArticleInput, ArticleManifest, BodyFormat, ImageManifestEntry};
use chrono::{DateTime, SubsecRound, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("article title is required")]
    MissingTitle,
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Body used when the author has not written anything yet.
pub const PLACEHOLDER_BODY: &str = "# Untitled Article";

/// Name of the manifest file inside the article folder.
pub const MANIFEST_FILE: &str = "article.json";

/// Name of the install instructions inside the article folder.
pub const README_FILE: &str = "README.txt";

/// Subfolder holding the attached images.
pub const ASSETS_DIR: &str = "assets";

/// Settings that shape the archive but are not part of the article itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub format: BodyFormat,
    /// Repository directory the README points at, e.g. `/articles`.
    pub install_root: String,
}

impl BuildOptions {
    pub fn from_config(config: &ArticleConfig) -> Self {
        Self {
            format: config.format,
            install_root: config.install_root.clone(),
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            format: BodyFormat::Html,
            install_root: "/articles".to_string(),
        }
    }
}

/// A node in the archive tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveEntry {
    File { name: String, contents: Vec<u8> },
    Folder { name: String, entries: Vec<ArchiveEntry> },
}

impl ArchiveEntry {
    pub fn file(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        ArchiveEntry::File {
            name: name.into(),
            contents: contents.into(),
        }
    }

    pub fn folder(name: impl Into<String>, entries: Vec<ArchiveEntry>) -> Self {
        ArchiveEntry::Folder {
            name: name.into(),
            entries,
        }
    }
}

/// In-memory description of the archive, rooted at the article folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTree {
    pub root: ArchiveEntry,
}

impl ArchiveTree {
    /// Flatten the tree into `(path, entry)` pairs in tree order.
    ///
    /// Folder paths end with `/`; the root folder comes first.
    pub fn walk(&self) -> Vec<(String, &ArchiveEntry)> {
        let mut out = Vec::new();
        walk_recursive(&self.root, "", &mut out);
        out
    }

    /// Look up a file by its slash-separated path, e.g. `my-post/article.json`.
    pub fn file(&self, path: &str) -> Option<&[u8]> {
        self.walk().into_iter().find_map(|(p, entry)| match entry {
            ArchiveEntry::File { contents, .. } if p == path => Some(contents.as_slice()),
            _ => None,
        })
    }
}

fn walk_recursive<'a>(
    entry: &'a ArchiveEntry,
    prefix: &str,
    out: &mut Vec<(String, &'a ArchiveEntry)>,
) {
    match entry {
        ArchiveEntry::File { name, .. } => out.push((format!("{prefix}{name}"), entry)),
        ArchiveEntry::Folder { name, entries } => {
            let path = format!("{prefix}{name}/");
            out.push((path.clone(), entry));
            for child in entries {
                walk_recursive(child, &path, out);
            }
        }
    }
}

/// Everything one build produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePackage {
    pub manifest: ArticleManifest,
    pub tree: ArchiveTree,
}

impl ArticlePackage {
    pub fn slug(&self) -> &str {
        &self.manifest.slug
    }

    /// Suggested file name for the serialized archive.
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.manifest.slug)
    }
}

/// Resolve the slug an article will be packaged under.
///
/// A non-empty explicit slug wins, even if it slugifies to nothing; an
/// empty or absent one falls back to the title.
pub fn effective_slug(input: &ArticleInput) -> String {
    match input.slug.as_deref() {
        Some(slug) if !slug.is_empty() => slugify(slug),
        _ => slugify(&input.title),
    }
}

/// Install instructions placed next to the article files.
pub fn readme_text(install_root: &str, slug: &str, body_file: &str) -> String {
    let root = install_root.trim_end_matches('/');
    format!(
        "Unzip this folder into your repository's {root}/ directory.\n\n\
         Expected path:\n\
         {root}/{slug}/{MANIFEST_FILE}\n\
         {root}/{slug}/{body_file}\n\
         {root}/{slug}/{ASSETS_DIR}/*\n"
    )
}

/// Build the archive tree and manifest for one article.
///
/// Fails only when the title is blank, or when the renderer fails for the
/// HTML body variant.
pub fn build_archive(
    input: &ArticleInput,
    options: &BuildOptions,
    created_at: DateTime<Utc>,
    renderer: &dyn MarkupRenderer,
) -> Result<ArticlePackage, BuildError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(BuildError::MissingTitle);
    }

    let slug = effective_slug(input);

    let mut images = Vec::with_capacity(input.images.len());
    let mut assets = Vec::with_capacity(input.images.len());
    for (index, image) in input.images.iter().enumerate() {
        let safe_name = safe_image_name(&image.name, index);
        images.push(ImageManifestEntry {
            original_name: image.name.clone(),
            file: format!("{ASSETS_DIR}/{safe_name}"),
            size: image.size(),
            mime_type: image.mime_type.clone(),
        });
        assets.push(ArchiveEntry::file(safe_name, image.bytes.clone()));
    }

    let format = options.format;
    let manifest = ArticleManifest {
        title: title.to_string(),
        slug: slug.clone(),
        author: optional_text(&input.author),
        summary: optional_text(&input.summary),
        tags: split_tags(&input.tags),
        // article.json stores milliseconds
        created_at: created_at.trunc_subsecs(3),
        format,
        body_file: format.body_file().to_string(),
        images,
    };

    let body = match input.body.trim() {
        "" => PLACEHOLDER_BODY,
        trimmed => trimmed,
    };
    let body_contents = match format {
        BodyFormat::Markdown => body.to_string(),
        BodyFormat::Html => {
            let body_html = renderer.render(body)?;
            article_document(&manifest, &body_html).into_string()
        }
    };

    let manifest_json = serde_json::to_string_pretty(&manifest)?;
    let readme = readme_text(&options.install_root, &slug, format.body_file());

    let root = ArchiveEntry::folder(
        slug,
        vec![
            ArchiveEntry::file(format.body_file(), body_contents),
            ArchiveEntry::file(MANIFEST_FILE, manifest_json),
            ArchiveEntry::file(README_FILE, readme),
            ArchiveEntry::folder(ASSETS_DIR, assets),
        ],
    );

    Ok(ArticlePackage {
        manifest,
        tree: ArchiveTree { root },
    })
}
