//! Shared types passed between the draft scanner, the archive builder, and the
//! serializer.
//!
//! [`ArticleManifest`] is the one type that leaves the process: it is written
//! as `article.json` inside the archive, so its serde field names are part of
//! the output format and use camelCase.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A snapshot of everything the author entered for one article.
///
/// Built fresh for every build; nothing is carried between builds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleInput {
    /// Required. Must contain something other than whitespace.
    pub title: String,
    /// Explicit slug. `Some` means the author set it by hand; `None` means the
    /// slug follows the title.
    pub slug: Option<String>,
    pub author: String,
    pub summary: String,
    /// Raw comma-separated tag field, e.g. `"rust, cli,, notes"`.
    pub tags: String,
    /// Markdown source of the article body.
    pub body: String,
    /// Attached images, in attachment order.
    pub images: Vec<ImageInput>,
}

/// An attached image file, already loaded into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    /// File name as the author attached it (`"Photo One.PNG"`).
    pub name: String,
    /// MIME type (`"image/png"`).
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Which body file the archive carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    /// Rendered standalone HTML page (`article.html`).
    #[default]
    Html,
    /// Raw markdown source (`article.md`).
    Markdown,
}

impl BodyFormat {
    /// Format tag recorded in the manifest.
    pub fn tag(self) -> &'static str {
        match self {
            BodyFormat::Html => "html",
            BodyFormat::Markdown => "markdown",
        }
    }

    /// Name of the body file inside the article folder.
    pub fn body_file(self) -> &'static str {
        match self {
            BodyFormat::Html => "article.html",
            BodyFormat::Markdown => "article.md",
        }
    }
}

impl fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BodyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(BodyFormat::Html),
            "markdown" | "md" => Ok(BodyFormat::Markdown),
            other => Err(format!(
                "unknown body format '{other}' (expected 'html' or 'markdown')"
            )),
        }
    }
}

/// One attached image as recorded in `article.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageManifestEntry {
    pub original_name: String,
    /// Path relative to the article folder, e.g. `assets/01-photo-one.png`.
    pub file: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Article metadata written as `article.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleManifest {
    pub title: String,
    pub slug: String,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub format: BodyFormat,
    pub body_file: String,
    pub images: Vec<ImageManifestEntry>,
}

/// `2026-10-18T09:30:00.000Z`: UTC, millisecond precision, `Z` suffix.
mod iso_millis {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
