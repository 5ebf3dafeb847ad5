//! Loading dropped paths from disk into [`LocalFile`]s.
//!
//! Top-level paths are taken as given. Directories are walked recursively;
//! hidden and system files found inside them are skipped.

use crate::entry::LocalFile;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Path does not exist: {0}")]
    NotFound(String),

    #[error("Path has no file name: {0}")]
    NoFileName(String),
}

/// File names skipped during directory traversal
const SYSTEM_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini", "__MACOSX"];

fn is_hidden_or_system(name: &str) -> bool {
    name.starts_with('.') || SYSTEM_FILES.contains(&name)
}

/// Expand the given paths into a flat, ordered list of file paths
pub fn resolve_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>, IngestError> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(IngestError::NotFound(path.display().to_string()));
        }

        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| match entry.file_name().to_str() {
                Some(name) => !is_hidden_or_system(name),
                None => {
                    warn!("Skipping non UTF-8 name: {}", entry.path().display());
                    false
                }
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", path.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

/// Read one file into memory, guessing its mimetype from the extension
pub async fn load_local_file(path: &Path) -> Result<LocalFile, IngestError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| IngestError::NoFileName(path.display().to_string()))?
        .to_string();

    let bytes = fs::read(path).await?;
    debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(LocalFile::from_bytes(name, bytes))
}

/// Resolve and read every dropped path
pub async fn load_local_files(paths: &[PathBuf]) -> Result<Vec<LocalFile>, IngestError> {
    let mut files = Vec::new();
    for path in resolve_paths(paths)? {
        files.push(load_local_file(&path).await?);
    }
    Ok(files)
}
