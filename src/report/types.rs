use crate::validation::ValidationErrors;
use serde::Serialize;

/// One non-empty error category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryContext {
    pub key: String,
    pub messages: Vec<String>,
}

/// Context for report templates
/// Placeholders: {{title}}, {{total}}, {{categories}} (each with {{key}} and {{messages}})
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub title: String,
    pub total: usize,
    pub categories: Vec<CategoryContext>,
}

impl ReportContext {
    pub fn from_errors(errors: &ValidationErrors) -> Self {
        Self {
            title: "Uploaded files do not meet the following requirements".to_string(),
            total: errors.len(),
            categories: errors
                .categories()
                .into_iter()
                .map(|(category, messages)| CategoryContext {
                    key: category.key().to_string(),
                    messages: messages.to_vec(),
                })
                .collect(),
        }
    }
}
