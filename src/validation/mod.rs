//! Drop validation.
//!
//! A dropped batch goes through two stages: [`screen_drop`] sorts files into
//! accepted and rejected the way a dropzone does (per-file size and type),
//! then [`validate_batch`] checks the accepted files against the list as a
//! whole. Every category is collected; a batch with any error is rejected as
//! a unit.

mod dropzone;
mod errors;

pub use dropzone::{accepts_file, screen_drop, DropOutcome, RejectedFile, RejectionCode};
pub use errors::{ErrorCategory, ValidationErrors};

use crate::config::UploadConfig;
use crate::entry::{DisplayEntry, LocalFile};
use crate::utils::format_file_size;

/// Validate a dropped batch against the current entries.
///
/// `existing` is the current projected list (remote and local entries).
/// Entries with an unknown size count as zero bytes toward the aggregate cap.
pub fn validate_batch(
    candidates: &[LocalFile],
    rejected: &[RejectedFile],
    existing: &[DisplayEntry],
    config: &UploadConfig,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    // Duplicate names against remote display names and local blob names
    let existing_names: Vec<&str> = existing
        .iter()
        .filter_map(|entry| entry.file_name.as_deref())
        .collect();
    for file in candidates {
        if existing_names.contains(&file.name.as_str()) {
            errors
                .duplicate_files
                .push(format!("Duplicate file name: \"{}\"", file.name));
        }
    }

    if !config.allow_multiple && candidates.len() > 1 {
        errors
            .max_files_exceeded
            .push("Only one file can be uploaded at a time".to_string());
    }

    if let Some(max_files) = config.max_file_count {
        if candidates.len() + existing.len() > max_files {
            errors
                .max_files_exceeded
                .push(format!("You can upload at most {} files", max_files));
        }
    }

    let max_size = config.max_file_size().unwrap_or(0);
    for rejection in rejected {
        for code in &rejection.errors {
            match code {
                RejectionCode::FileTooLarge => errors.oversized_files.push(format!(
                    "File too large: \"{}\" is larger than {}",
                    rejection.file.name,
                    format_file_size(max_size)
                )),
                RejectionCode::FileInvalidType => errors
                    .unsupported_files
                    .push(format!("Unsupported file type: \"{}\"", rejection.file.name)),
                RejectionCode::TooManyFiles => {}
            }
        }
    }

    if let Some(max_total) = config.max_aggregate_size() {
        let existing_total = existing
            .iter()
            .filter_map(|e| e.file_size)
            .fold(0u64, u64::saturating_add);
        let candidate_total = candidates
            .iter()
            .map(|f| f.size)
            .fold(0u64, u64::saturating_add);
        let total = existing_total.saturating_add(candidate_total);

        if total > max_total {
            errors.max_total_size_exceeded.push(format!(
                "Total file size exceeds the limit: {}, limited to {}",
                format_file_size(total),
                format_file_size(max_total)
            ));
        }
    }

    errors
}
