//! Draft directory scanning.
//!
//! The draft directory is the on-disk authoring form. Scanning reads it into a
//! fresh [`ArticleInput`] snapshot plus the effective [`PackConfig`]; nothing
//! is validated beyond what is needed to read the files. The title check
//! belongs to the archive builder.
//!
//! ## Directory Structure
//!
//! ```text
//! my-draft/
//! ├── article.toml        # Article fields (required)
//! ├── article.md          # Markdown body (optional)
//! ├── config.toml         # Packaging config (optional)
//! └── images/             # Attachments (optional)
//!     ├── Photo One.PNG
//!     └── diagram.svg
//! ```
//!
//! ## article.toml
//!
//! ```toml
//! title = "My First Post"
//! slug = "custom"            # optional; omit to derive from the title
//! author = "Ada"
//! summary = "One paragraph."
//! tags = "rust, cli"         # comma-separated, like the form field
//! body = "article.md"        # optional; body file name
//! images = ["images/b.png", "images/a.png"]  # optional explicit order
//! ```
//!
//! ## Image order
//!
//! With an explicit `images` list, attachments follow that list. Otherwise
//! every image file directly inside `images/` is attached, sorted by file
//! name. Files with unrecognised extensions in `images/` are skipped.

use crate::config::{self, PackConfig};
use crate::types::{ArticleInput, ImageInput};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("TOML parse error in article.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("No article.toml found in draft directory: {0}")]
    MissingDraft(PathBuf),
    #[error("Body file not found: {0}")]
    MissingBody(PathBuf),
    #[error("Listed image not found: {0}")]
    MissingImage(PathBuf),
    #[error("Listed image is not a file: {0}")]
    ImageNotAFile(PathBuf),
    #[error("Listed file is not a supported image: {0}")]
    NotAnImage(PathBuf),
}

/// Name of the article fields file inside a draft directory.
pub const DRAFT_FILE: &str = "article.toml";

/// Body file used when `article.toml` does not name one.
pub const DEFAULT_BODY_FILE: &str = "article.md";

/// Folder scanned for attachments when `article.toml` does not list them.
pub const IMAGES_DIR: &str = "images";

/// Contents of `article.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DraftFile {
    pub title: String,
    pub slug: Option<String>,
    pub author: String,
    pub summary: String,
    pub tags: String,
    pub body: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Field values given on the command line, taking precedence over the draft.
#[derive(Debug, Clone, Default)]
pub struct DraftOverrides {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<String>,
}

impl DraftOverrides {
    pub fn apply(&self, input: &mut ArticleInput) {
        if let Some(title) = &self.title {
            input.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            input.slug = Some(slug.clone());
        }
        if let Some(author) = &self.author {
            input.author = author.clone();
        }
        if let Some(summary) = &self.summary {
            input.summary = summary.clone();
        }
        if let Some(tags) = &self.tags {
            input.tags = tags.clone();
        }
    }
}

/// A scanned draft, ready to hand to the archive builder.
#[derive(Debug, Clone)]
pub struct Draft {
    pub input: ArticleInput,
    pub config: PackConfig,
    /// Body file path, if one was read.
    pub body_path: Option<PathBuf>,
    /// Source path of each attached image, parallel to `input.images`.
    pub image_paths: Vec<PathBuf>,
}

/// MIME type for a supported image extension (case-insensitive).
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

/// Read a draft directory into an article snapshot.
pub fn scan(draft_dir: &Path) -> Result<Draft, ScanError> {
    let draft_path = draft_dir.join(DRAFT_FILE);
    if !draft_path.is_file() {
        return Err(ScanError::MissingDraft(draft_dir.to_path_buf()));
    }
    let draft: DraftFile = toml::from_str(&fs::read_to_string(&draft_path)?)?;
    let config = config::load_config(draft_dir)?;

    let (body, body_path) = read_body(draft_dir, draft.body.as_deref())?;

    let image_paths = match &draft.images {
        Some(listed) => listed_images(draft_dir, listed)?,
        None => discover_images(&draft_dir.join(IMAGES_DIR))?,
    };
    let images = image_paths
        .iter()
        .map(|path| load_image(path))
        .collect::<Result<Vec<_>, _>>()?;

    let input = ArticleInput {
        title: draft.title,
        slug: draft.slug,
        author: draft.author,
        summary: draft.summary,
        tags: draft.tags,
        body,
        images,
    };

    Ok(Draft {
        input,
        config,
        body_path,
        image_paths,
    })
}

/// Read the body file. A missing default body is an empty body; a missing
/// explicitly named body is an error.
fn read_body(
    draft_dir: &Path,
    named: Option<&str>,
) -> Result<(String, Option<PathBuf>), ScanError> {
    let path = draft_dir.join(named.unwrap_or(DEFAULT_BODY_FILE));
    if path.is_file() {
        let body = fs::read_to_string(&path)?;
        return Ok((body, Some(path)));
    }
    match named {
        Some(_) => Err(ScanError::MissingBody(path)),
        None => Ok((String::new(), None)),
    }
}

fn listed_images(draft_dir: &Path, listed: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    listed
        .iter()
        .map(|rel| {
            let path = draft_dir.join(rel);
            if !path.exists() {
                Err(ScanError::MissingImage(path))
            } else if !path.is_file() {
                Err(ScanError::ImageNotAFile(path))
            } else if mime_type_for(&path).is_none() {
                Err(ScanError::NotAnImage(path))
            } else {
                Ok(path)
            }
        })
        .collect()
}

/// Image files directly inside `dir`, sorted by file name.
fn discover_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && mime_type_for(entry.path()).is_some() {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn load_image(path: &Path) -> Result<ImageInput, ScanError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = mime_type_for(path)
        .ok_or_else(|| ScanError::NotAnImage(path.to_path_buf()))?
        .to_string();
    let bytes = fs::read(path)?;
    Ok(ImageInput {
        name,
        mime_type,
        bytes,
    })
}
