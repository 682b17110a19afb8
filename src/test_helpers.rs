//! Shared test utilities for the article-pack test suite.
//!
//! Provides article and image builders with predictable contents, a fixed
//! build timestamp, and helpers for writing draft directories to disk.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut input = article("My First Post");
//! input.images = vec![png("Photo One.PNG", 12)];
//!
//! let tmp = TempDir::new().unwrap();
//! write_draft(tmp.path(), "title = \"My First Post\"\n");
//! write_image(tmp.path(), "images/a.png", 4);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use std::path::Path;

use crate::types::{ArticleInput, ArticleManifest, BodyFormat, ImageInput};

// =========================================================================
// In-memory fixtures
// =========================================================================

/// Build timestamp used by every test that builds an archive.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
}

/// Article with only a title set.
pub fn article(title: &str) -> ArticleInput {
    ArticleInput {
        title: title.to_string(),
        ..ArticleInput::default()
    }
}

/// PNG attachment with `size` bytes of patterned content.
pub fn png(name: &str, size: usize) -> ImageInput {
    ImageInput {
        name: name.to_string(),
        mime_type: "image/png".to_string(),
        bytes: (0..size).map(|i| (i % 251) as u8).collect(),
    }
}

/// Manifest for "My First Post" with no optional metadata and no images.
pub fn manifest_fixture() -> ArticleManifest {
    ArticleManifest {
        title: "My First Post".to_string(),
        slug: "my-first-post".to_string(),
        author: None,
        summary: None,
        tags: Vec::new(),
        created_at: fixed_time(),
        format: BodyFormat::Html,
        body_file: BodyFormat::Html.body_file().to_string(),
        images: Vec::new(),
    }
}

// =========================================================================
// Draft directories on disk
// =========================================================================

/// Write `article.toml` into a draft directory.
pub fn write_draft(dir: &Path, toml: &str) {
    std::fs::write(dir.join("article.toml"), toml).unwrap();
}

/// Write a file of `size` bytes at `rel` inside `dir`, creating parents.
pub fn write_image(dir: &Path, rel: &str, size: usize) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, vec![0xAB; size]).unwrap();
}
