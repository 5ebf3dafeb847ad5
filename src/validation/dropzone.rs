use crate::config::UploadConfig;
use crate::entry::LocalFile;
use serde::Serialize;
use std::path::Path;

/// Reason a dropzone refused a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionCode {
    FileTooLarge,
    FileInvalidType,
    TooManyFiles,
}

/// A file refused before validation, with every reason that applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedFile {
    pub file: LocalFile,
    pub errors: Vec<RejectionCode>,
}

/// Files split by the dropzone pre-filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropOutcome {
    pub accepted: Vec<LocalFile>,
    pub rejected: Vec<RejectedFile>,
}

/// Check a file against the `accept` patterns. An empty list accepts everything.
pub fn accepts_file(file: &LocalFile, accept: &[String]) -> bool {
    if accept.is_empty() {
        return true;
    }

    let mime = file.mime_type.to_lowercase();
    let extension = Path::new(&file.name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()));

    accept.iter().any(|pattern| {
        let pattern = pattern.trim().to_lowercase();
        if pattern.starts_with('.') {
            extension.as_deref() == Some(pattern.as_str())
        } else if let Some(prefix) = pattern.strip_suffix("/*") {
            mime.split('/').next() == Some(prefix)
        } else {
            mime == pattern
        }
    })
}

/// Split dropped files into accepted and rejected by size and type
pub fn screen_drop(files: Vec<LocalFile>, config: &UploadConfig) -> DropOutcome {
    let max_size = config.max_file_size();
    let mut outcome = DropOutcome::default();

    for file in files {
        let mut errors = Vec::new();

        if max_size.is_some_and(|max| file.size > max) {
            errors.push(RejectionCode::FileTooLarge);
        }
        if !accepts_file(&file, &config.accept) {
            errors.push(RejectionCode::FileInvalidType);
        }

        if errors.is_empty() {
            outcome.accepted.push(file);
        } else {
            outcome.rejected.push(RejectedFile { file, errors });
        }
    }

    outcome
}
