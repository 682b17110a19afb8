//! Slug derivation and archive asset naming.
//!
//! Every name that ends up inside the archive passes through [`slugify`]:
//! the top-level folder (from the title or the explicit slug) and the base
//! name of every attached image.
//!
//! ## Slugs
//!
//! A slug is lowercase ASCII letters and digits separated by single dashes:
//! - `"My First Post"` → `"my-first-post"`
//! - `"  --Hello,  World!--  "` → `"hello-world"`
//! - `"Résumé Tips!!"` → `"r-sum-tips"` (non-ASCII letters are separators)
//! - `"!!!"` → `"untitled-article"` (empty results fall back to the default)
//!
//! ## Asset names
//!
//! Attached images are renamed to `NN-<slug>.<ext>`, where `NN` is the 1-based
//! position in the attachment list, zero-padded to two digits. The position
//! keeps names unique even when two originals slugify to the same base, and
//! the padding keeps lexicographic order equal to attachment order for up to
//! 99 images.
//! - `("Photo One.PNG", 0)` → `"01-photo-one.png"`
//! - `("diagram.final.svg", 4)` → `"05-diagram-final.svg"`
//! - `("README", 11)` → `"12-readme"`

/// Slug used when the input has no usable characters.
pub const DEFAULT_SLUG: &str = "untitled-article";

/// Derive a URL- and filesystem-safe slug from arbitrary text.
///
/// Never fails: input with no ASCII alphanumerics yields [`DEFAULT_SLUG`].
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

/// Split a file name at its last dot into `(base, extension)`.
///
/// The extension keeps its leading dot and is lowercased. Names without a dot
/// have no extension.
pub fn split_extension(name: &str) -> (&str, Option<String>) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], Some(name[dot..].to_lowercase())),
        None => (name, None),
    }
}

/// Archive file name for the image at zero-based `index` in the attachment list.
pub fn safe_image_name(original: &str, index: usize) -> String {
    let (base, extension) = split_extension(original);
    format!(
        "{:02}-{}{}",
        index + 1,
        slugify(base),
        extension.as_deref().unwrap_or("")
    )
}
