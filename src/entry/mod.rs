mod record;
mod types;

pub use record::{JsonRecord, RecordFields, RemoteFile, RemoteRecord};
pub use types::{DisplayEntry, EntryId, EntryKind, LocalEntry, LocalFile};
