//! Zip serialization and saving.
//!
//! Turns an [`ArchiveTree`] into a deflate-compressed zip held in memory, and
//! writes it to disk as `<slug>.zip`. Folders are stored as explicit directory
//! entries so archive tools show the empty `assets/` folder too. Entry order is
//! tree order, which keeps the archive listing stable across builds.

use crate::archive::{ArchiveEntry, ArchiveTree};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Error, Debug)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Serialize the tree into zip bytes.
pub fn write_zip(tree: &ArchiveTree) -> Result<Vec<u8>, PackError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);
    let dir_options = file_options.unix_permissions(0o755);

    for (path, entry) in tree.walk() {
        match entry {
            ArchiveEntry::Folder { .. } => {
                writer.add_directory(path, dir_options)?;
            }
            ArchiveEntry::File { contents, .. } => {
                writer.start_file(path, file_options)?;
                writer.write_all(contents)?;
            }
        }
    }

    Ok(writer.finish()?.into_inner())
}

/// Write zip bytes to `<output_dir>/<file_name>`, creating the directory.
pub fn save_zip(bytes: &[u8], output_dir: &Path, file_name: &str) -> Result<PathBuf, PackError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    fs::write(&path, bytes)?;
    Ok(path)
}
