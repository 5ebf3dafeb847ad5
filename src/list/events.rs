use crate::entry::LocalEntry;
use serde::Serialize;

/// Output emitted after a mutation. A mutation's events are emitted as one
/// batch once internal state is fully updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum UploadEvent<R> {
    /// The full set of staged local entries, ready for an upload step
    FilesSelected(Vec<LocalEntry>),
    /// The remaining remote records with their renumbered order keys
    RemoteOrderChanged(Vec<R>),
    /// Every remote record removed since the last reset
    RemoteEntriesRemoved(Vec<R>),
}

impl<R> UploadEvent<R> {
    pub fn name(&self) -> &'static str {
        match self {
            UploadEvent::FilesSelected(_) => "filesSelected",
            UploadEvent::RemoteOrderChanged(_) => "remoteOrderChanged",
            UploadEvent::RemoteEntriesRemoved(_) => "remoteEntriesRemoved",
        }
    }

    /// Hand this event to the matching listener callback
    pub fn deliver(&self, listener: &mut dyn UploadListener<R>) {
        match self {
            UploadEvent::FilesSelected(entries) => listener.on_files_selected(entries),
            UploadEvent::RemoteOrderChanged(records) => listener.on_remote_order_changed(records),
            UploadEvent::RemoteEntriesRemoved(records) => {
                listener.on_remote_entries_removed(records)
            }
        }
    }
}

/// Callbacks of the external owner. Every method defaults to a no-op.
pub trait UploadListener<R> {
    fn on_files_selected(&mut self, _entries: &[LocalEntry]) {}

    fn on_remote_order_changed(&mut self, _records: &[R]) {}

    fn on_remote_entries_removed(&mut self, _records: &[R]) {}
}
