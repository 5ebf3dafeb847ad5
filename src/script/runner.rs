use super::types::{Operation, StepReport};
use crate::entry::{JsonRecord, RecordFields, RemoteRecord};
use crate::ingest::{load_local_files, IngestError};
use crate::list::{UploadError, UploadEvent, UploadList};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Ingest error: {0}")]
    IngestError(#[from] IngestError),

    #[error("Remove needs either a name or an index")]
    MissingRemoveTarget,

    #[error("Default record {0} is not a JSON object")]
    InvalidRecord(usize),
}

/// Read a JSON array of operations
pub async fn read_script(script_path: &Path) -> Result<Vec<Operation>, ScriptError> {
    let content = fs::read_to_string(script_path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a JSON array of default records, read through `fields`
pub async fn read_defaults(
    defaults_path: &Path,
    fields: RecordFields,
) -> Result<Vec<JsonRecord>, ScriptError> {
    let content = fs::read_to_string(defaults_path).await?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)?;
    if let Some(index) = values.iter().position(|value| !value.is_object()) {
        return Err(ScriptError::InvalidRecord(index));
    }
    Ok(JsonRecord::wrap_all(values, fields))
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Apply every operation in order.
///
/// Rejected drops and invalid targets are recorded in the step's report and
/// the script continues; IO failures abort it.
pub async fn run_script<R>(
    list: &mut UploadList<R>,
    defaults: &[R],
    operations: &[Operation],
    base_dir: &Path,
) -> Result<Vec<StepReport>, ScriptError>
where
    R: RemoteRecord + Serialize,
{
    let mut reports = Vec::with_capacity(operations.len());

    for (step, operation) in operations.iter().enumerate() {
        let mut report = StepReport::new(step, operation);

        let result = match operation {
            Operation::Drop { paths } => {
                let paths: Vec<PathBuf> = paths.iter().map(|p| resolve(base_dir, p)).collect();
                let files = load_local_files(&paths).await?;
                list.drop_files(files)
            }
            Operation::Remove { name, index } => match (name, index) {
                (Some(name), _) => {
                    let target = list
                        .entries()
                        .into_iter()
                        .find(|entry| entry.file_name.as_deref() == Some(name.as_str()));
                    match target {
                        Some(entry) => list.remove(entry.id),
                        None => {
                            report.error = Some(format!("No entry named \"{}\"", name));
                            Ok(Vec::new())
                        }
                    }
                }
                (None, Some(index)) => list.remove_at(*index),
                (None, None) => return Err(ScriptError::MissingRemoveTarget),
            },
            Operation::Move { from, to } => list.move_entry(*from, *to),
            Operation::Reset => {
                list.reset(defaults.to_vec());
                Ok(Vec::new())
            }
        };

        match result {
            Ok(events) => {
                debug!("Step {} ({}) emitted {:?}", step, operation.name(), event_names(&events));
                report.events = events
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<Result<Vec<_>, _>>()?;
            }
            Err(UploadError::Validation(errors)) => {
                report.validation = Some(errors);
            }
            Err(e) => {
                warn!("Step {} ({}) failed: {}", step, operation.name(), e);
                report.error = Some(e.to_string());
            }
        }

        reports.push(report);
    }

    info!(
        "Script finished: {} step(s), {} entries, {} removed",
        reports.len(),
        list.len(),
        list.removed_records().len()
    );
    Ok(reports)
}

/// Event names of a report, in emission order
pub fn event_names<R>(events: &[UploadEvent<R>]) -> Vec<&'static str> {
    events.iter().map(UploadEvent::name).collect()
}
