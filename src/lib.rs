pub mod config;
pub mod entry;
pub mod ingest;
pub mod list;
pub mod preview;
pub mod report;
pub mod script;
pub mod single;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{read_config, write_config, ConfigError, SizeLimit, UploadConfig};
pub use entry::{
    DisplayEntry, EntryId, EntryKind, JsonRecord, LocalEntry, LocalFile, RecordFields,
    RemoteFile, RemoteRecord,
};
pub use ingest::{load_local_files, IngestError};
pub use list::{UploadError, UploadEvent, UploadList, UploadListener};
pub use preview::{PreviewHandle, PreviewRegistry};
pub use report::{render_report, ReportError, ReportRenderer};
pub use script::{run_script, Operation, ScriptError, StepReport};
pub use single::{SingleFileError, SingleFileSlot, SlotView};
pub use utils::{convert_to_bytes, format_file_size, SizeUnit};
pub use validation::{
    screen_drop, validate_batch, DropOutcome, ErrorCategory, RejectedFile, RejectionCode,
    ValidationErrors,
};
