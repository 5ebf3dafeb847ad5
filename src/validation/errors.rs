use serde::Serialize;
use std::fmt;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DuplicateFiles,
    OversizedFiles,
    UnsupportedFiles,
    MaxFilesExceeded,
    MaxTotalSizeExceeded,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 5] = [
        ErrorCategory::DuplicateFiles,
        ErrorCategory::OversizedFiles,
        ErrorCategory::UnsupportedFiles,
        ErrorCategory::MaxFilesExceeded,
        ErrorCategory::MaxTotalSizeExceeded,
    ];

    /// Key used in serialized output
    pub fn key(&self) -> &'static str {
        match self {
            ErrorCategory::DuplicateFiles => "duplicateFiles",
            ErrorCategory::OversizedFiles => "oversizedFiles",
            ErrorCategory::UnsupportedFiles => "unsupportedFiles",
            ErrorCategory::MaxFilesExceeded => "maxFilesExceeded",
            ErrorCategory::MaxTotalSizeExceeded => "maxTotalSizeExceeded",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Categorized, human-readable validation messages for one drop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub duplicate_files: Vec<String>,
    pub oversized_files: Vec<String>,
    pub unsupported_files: Vec<String>,
    pub max_files_exceeded: Vec<String>,
    pub max_total_size_exceeded: Vec<String>,
}

impl ValidationErrors {
    pub fn messages(&self, category: ErrorCategory) -> &[String] {
        match category {
            ErrorCategory::DuplicateFiles => &self.duplicate_files,
            ErrorCategory::OversizedFiles => &self.oversized_files,
            ErrorCategory::UnsupportedFiles => &self.unsupported_files,
            ErrorCategory::MaxFilesExceeded => &self.max_files_exceeded,
            ErrorCategory::MaxTotalSizeExceeded => &self.max_total_size_exceeded,
        }
    }

    /// Non-empty categories, in a fixed order
    pub fn categories(&self) -> Vec<(ErrorCategory, &[String])> {
        ErrorCategory::ALL
            .iter()
            .map(|c| (*c, self.messages(*c)))
            .filter(|(_, messages)| !messages.is_empty())
            .collect()
    }

    /// Total number of messages
    pub fn len(&self) -> usize {
        ErrorCategory::ALL.iter().map(|c| self.messages(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary: Vec<String> = self
            .categories()
            .iter()
            .map(|(category, messages)| format!("{} ({})", category, messages.len()))
            .collect();
        write!(f, "{}", summary.join(", "))
    }
}
