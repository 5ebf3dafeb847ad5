//! The upload list: remote records and staged local files merged into one
//! ordered, reorderable list.
//!
//! State lives in two source collections. The display list is always
//! recomputed from them by [`UploadList::entries`]; every mutation goes
//! through add, remove, move or reconcile, and each returns the batch of
//! [`UploadEvent`]s it emitted.

mod events;
mod projection;
mod reconcile;

pub use events::{UploadEvent, UploadListener};
pub use reconcile::array_move;

use crate::config::UploadConfig;
use crate::entry::{DisplayEntry, EntryId, LocalEntry, LocalFile, RemoteRecord};
use crate::preview::PreviewRegistry;
use crate::validation::{screen_drop, validate_batch, RejectedFile, ValidationErrors};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Upload rejected: {0}")]
    Validation(ValidationErrors),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Drag reordering is disabled")]
    ReorderDisabled,
}

/// A remote record plus the synthetic id it was given when seeded
#[derive(Debug, Clone)]
struct RemoteSlot<R> {
    id: EntryId,
    record: R,
}

pub struct UploadList<R: RemoteRecord> {
    config: UploadConfig,
    remote: Vec<RemoteSlot<R>>,
    local: Vec<LocalEntry>,
    removed: Vec<R>,
    errors: ValidationErrors,
    previews: PreviewRegistry,
    listener: Option<Box<dyn UploadListener<R>>>,
}

impl<R: RemoteRecord> UploadList<R> {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            remote: Vec::new(),
            local: Vec::new(),
            removed: Vec::new(),
            errors: ValidationErrors::default(),
            previews: PreviewRegistry::new(),
            listener: None,
        }
    }

    /// Create a list seeded with the given default records
    pub fn with_defaults(config: UploadConfig, defaults: Vec<R>) -> Self {
        let mut list = Self::new(config);
        list.reset(defaults);
        list
    }

    /// Register the external owner's callbacks
    pub fn set_listener(&mut self, listener: Box<dyn UploadListener<R>>) {
        self.listener = Some(listener);
    }

    /// Replace the default records wholesale.
    ///
    /// The records keep their relative order but are renumbered `0..N-1`.
    /// Staged local files, pending removals and errors are discarded and
    /// their previews released. No events are emitted.
    pub fn reset(&mut self, mut defaults: Vec<R>) {
        defaults.sort_by_key(|record| record.order());
        self.remote = defaults
            .into_iter()
            .enumerate()
            .map(|(order, mut record)| {
                record.set_order(order);
                RemoteSlot {
                    id: EntryId::new(),
                    record,
                }
            })
            .collect();
        self.local.clear();
        self.removed.clear();
        self.errors = ValidationErrors::default();
        self.previews.release_all();

        info!("Upload list reset with {} default file(s)", self.remote.len());
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Errors from the most recent drop; empty after a successful one
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Current remote records, in stored order
    pub fn remote_records(&self) -> Vec<R> {
        self.remote.iter().map(|slot| slot.record.clone()).collect()
    }

    /// Current staged local entries, in stored order
    pub fn local_entries(&self) -> &[LocalEntry] {
        &self.local
    }

    /// Remote records removed since the last reset
    pub fn removed_records(&self) -> &[R] {
        &self.removed
    }

    pub fn len(&self) -> usize {
        self.remote.len() + self.local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// The display list: both populations projected and sorted by order
    pub fn entries(&self) -> Vec<DisplayEntry> {
        let remote = self
            .remote
            .iter()
            .map(|slot| projection::project_remote(slot.id, &slot.record))
            .collect();
        let local = self
            .local
            .iter()
            .map(|entry| projection::project_local(entry, self.previews.url(&entry.id)))
            .collect();
        projection::merge_sorted(remote, local)
    }

    /// Screen dropped files like a dropzone, then add the accepted ones
    pub fn drop_files(&mut self, files: Vec<LocalFile>) -> Result<Vec<UploadEvent<R>>, UploadError> {
        let outcome = screen_drop(files, &self.config);
        self.add_files(outcome.accepted, outcome.rejected)
    }

    /// Validate and stage a batch of files.
    ///
    /// The batch is accepted or rejected as a unit. On success each file is
    /// appended after the existing entries in drop order.
    pub fn add_files(
        &mut self,
        candidates: Vec<LocalFile>,
        rejected: Vec<RejectedFile>,
    ) -> Result<Vec<UploadEvent<R>>, UploadError> {
        self.errors = ValidationErrors::default();
        if candidates.is_empty() && rejected.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.entries();
        let errors = validate_batch(&candidates, &rejected, &entries, &self.config);
        if !errors.is_empty() {
            warn!("Rejected drop of {} file(s): {}", candidates.len() + rejected.len(), errors);
            self.errors = errors.clone();
            return Err(UploadError::Validation(errors));
        }
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let base = entries.len();
        for (index, file) in candidates.into_iter().enumerate() {
            let entry = LocalEntry::new(base + index, file);
            self.previews.acquire(entry.id, &entry.file);
            debug!(
                "Staged {} ({} bytes) at order {}",
                entry.file.name, entry.file.size, entry.order
            );
            self.local.push(entry);
        }

        let events = vec![UploadEvent::FilesSelected(self.local.clone())];
        Ok(self.emit(events))
    }

    /// Remove an entry. A remote record is added to the removed set.
    pub fn remove(&mut self, id: EntryId) -> Result<Vec<UploadEvent<R>>, UploadError> {
        let entries = self.entries();
        if !entries.iter().any(|entry| entry.id == id) {
            return Err(UploadError::EntryNotFound(id));
        }

        let removed_record = self
            .remote
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| slot.record.clone());

        let target: Vec<DisplayEntry> = entries.into_iter().filter(|e| e.id != id).collect();
        let mut events = self.apply_sequence(&target);

        if let Some(record) = removed_record {
            self.removed.push(record);
            events.push(UploadEvent::RemoteEntriesRemoved(self.removed.clone()));
        }

        debug!("Removed entry {}, {} remaining", id.short(), self.len());
        Ok(self.emit(events))
    }

    /// Remove the entry at a display position
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<UploadEvent<R>>, UploadError> {
        let entries = self.entries();
        let id = entries
            .get(index)
            .map(|entry| entry.id)
            .ok_or(UploadError::IndexOutOfRange {
                index,
                len: entries.len(),
            })?;
        self.remove(id)
    }

    /// Move the entry at display position `from` to `to`.
    ///
    /// Moving an entry onto itself emits nothing.
    pub fn move_entry(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<Vec<UploadEvent<R>>, UploadError> {
        if !self.config.allow_drag_reorder {
            return Err(UploadError::ReorderDisabled);
        }

        let mut entries = self.entries();
        let len = entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(UploadError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(Vec::new());
        }

        array_move(&mut entries, from, to);
        debug!("Moved entry from {} to {}", from, to);
        let events = self.apply_sequence(&entries);
        Ok(self.emit(events))
    }

    /// Drag-end: move the `active` entry to the position of the `over` entry
    pub fn move_by_id(
        &mut self,
        active: EntryId,
        over: EntryId,
    ) -> Result<Vec<UploadEvent<R>>, UploadError> {
        let entries = self.entries();
        let position = |id: EntryId| {
            entries
                .iter()
                .position(|entry| entry.id == id)
                .ok_or(UploadError::EntryNotFound(id))
        };
        let from = position(active)?;
        let to = position(over)?;
        self.move_entry(from, to)
    }

    /// Re-derive membership and order from a target sequence and emit the
    /// resulting remote and local sets
    pub fn reconcile(&mut self, target: &[DisplayEntry]) -> Vec<UploadEvent<R>> {
        let events = self.apply_sequence(target);
        self.emit(events)
    }

    fn emit(&mut self, events: Vec<UploadEvent<R>>) -> Vec<UploadEvent<R>> {
        if let Some(listener) = self.listener.as_deref_mut() {
            for event in &events {
                event.deliver(listener);
            }
        }
        events
    }
}
