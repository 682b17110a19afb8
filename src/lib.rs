//! # Article Pack
//!
//! Packages a markdown article and its images into a zip archive with a fixed
//! layout, ready to unzip into a site repository's `articles/` directory.
//!
//! # Architecture: Scan → Build → Pack
//!
//! ```text
//! 1. Scan   draft/        →  ArticleInput          (filesystem → snapshot)
//! 2. Build  ArticleInput  →  ArchiveTree + manifest (pure, no I/O)
//! 3. Pack   ArchiveTree   →  <slug>.zip            (zip bytes → disk)
//! ```
//!
//! The build stage is the core and is a pure function of its input plus a
//! capture timestamp, so it is tested without touching the filesystem. Scan
//! and pack are thin boundaries around it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Reads a draft directory (`article.toml`, body, `images/`) into an [`types::ArticleInput`] |
//! | [`archive`] | Builds the archive tree and `article.json` manifest from one input snapshot |
//! | [`pack`] | Serializes the tree to a zip and saves `<slug>.zip` |
//! | [`render`] | Markdown renderer seam and the standalone `article.html` page |
//! | [`naming`] | Slug derivation and `NN-name.ext` asset naming |
//! | [`metadata`] | Field normalization: optional text, tag splitting, slug source |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`types`] | Input snapshot and manifest types |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Builder, Two Body Formats
//!
//! The archive can carry the body as a rendered standalone HTML page or as the
//! markdown source. Both go through the same [`archive::build_archive`],
//! parameterized by [`types::BodyFormat`]; only the body file differs.
//!
//! ## Snapshots, Not State
//!
//! Each build takes a complete [`types::ArticleInput`]. Whether the slug was
//! set by hand is part of the snapshot (`slug: Some(..)`), not a flag kept
//! somewhere between runs.
//!
//! ## Title Is the Only Required Field
//!
//! A blank title is the single validation failure. Every other field has a
//! default: the slug follows the title, an empty body becomes a placeholder
//! heading, and empty author/summary become `null` in the manifest.

pub mod archive;
pub mod config;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod pack;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
