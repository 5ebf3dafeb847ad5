use handlebars::Handlebars;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use super::types::ReportContext;
use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Report template not found: {0}")]
    TemplateNotFound(String),
}

const REPORT_TEMPLATE_NAME: &str = "report";

/// Default layout: a header line, then each category with its messages
pub const DEFAULT_REPORT_TEMPLATE: &str = concat!(
    "{{title}}\n",
    "{{#each categories}}",
    "- {{key}}:\n",
    "{{#each messages}}",
    "    - {{this}}\n",
    "{{/each}}",
    "{{/each}}",
);

pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    /// Renderer using [`DEFAULT_REPORT_TEMPLATE`]
    pub fn new() -> Result<Self, ReportError> {
        Self::with_template(DEFAULT_REPORT_TEMPLATE)
    }

    /// Renderer using a custom Handlebars template
    pub fn with_template(template: &str) -> Result<Self, ReportError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string(REPORT_TEMPLATE_NAME, template)?;
        Ok(Self { handlebars })
    }

    /// Load a custom template from disk
    pub async fn from_file(template_path: &Path) -> Result<Self, ReportError> {
        if !template_path.exists() {
            return Err(ReportError::TemplateNotFound(
                template_path.display().to_string(),
            ));
        }
        let content = fs::read_to_string(template_path).await?;
        Self::with_template(&content)
    }

    /// Render the report. An empty error set renders as an empty string.
    pub fn render(&self, errors: &ValidationErrors) -> Result<String, ReportError> {
        if errors.is_empty() {
            return Ok(String::new());
        }
        let context = ReportContext::from_errors(errors);
        Ok(self.handlebars.render(REPORT_TEMPLATE_NAME, &context)?)
    }
}

/// Render with the default template
pub fn render_report(errors: &ValidationErrors) -> Result<String, ReportError> {
    ReportRenderer::new()?.render(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_errors() -> ValidationErrors {
        ValidationErrors {
            duplicate_files: vec!["Duplicate file name: \"a.txt\"".to_string()],
            max_total_size_exceeded: vec![
                "Total file size exceeds the limit: 2 KB, limited to 1 KB".to_string(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_default_report() {
        let report = render_report(&sample_errors()).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines[0],
            "Uploaded files do not meet the following requirements"
        );
        assert!(lines.contains(&"- duplicateFiles:"));
        assert!(lines.contains(&"    - Duplicate file name: \"a.txt\""));
        assert!(lines.contains(&"- maxTotalSizeExceeded:"));
        assert!(!report.contains("oversizedFiles"));
    }

    #[test]
    fn test_render_empty_errors() {
        let report = render_report(&ValidationErrors::default()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_custom_template() {
        let renderer = ReportRenderer::with_template("{{total}} problem(s)").unwrap();
        assert_eq!(renderer.render(&sample_errors()).unwrap(), "2 problem(s)");
    }

    #[test]
    fn test_invalid_template() {
        let result = ReportRenderer::with_template("{{#each categories}}");
        assert!(matches!(result, Err(ReportError::TemplateError(_))));
    }

    #[tokio::test]
    async fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.hbs");
        fs::write(&path, "{{#each categories}}[{{key}}]{{/each}}")
            .await
            .unwrap();

        let renderer = ReportRenderer::from_file(&path).await.unwrap();
        assert_eq!(
            renderer.render(&sample_errors()).unwrap(),
            "[duplicateFiles][maxTotalSizeExceeded]"
        );
    }

    #[tokio::test]
    async fn test_from_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ReportRenderer::from_file(&temp.path().join("missing.hbs")).await;
        assert!(matches!(result, Err(ReportError::TemplateNotFound(_))));
    }
}
