//! Reconciliation of stored order and membership against a target sequence.

use super::events::UploadEvent;
use super::UploadList;
use crate::entry::{DisplayEntry, EntryId, EntryKind, RemoteRecord};
use std::collections::HashMap;

/// Move the element at `from` to `to`, shifting the elements in between
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

impl<R: RemoteRecord> UploadList<R> {
    /// Apply a target sequence to the stored sets without emitting.
    ///
    /// Entries are matched by id and kind. Entries missing from the target
    /// leave the list; the survivors are renumbered `0..N-1` in target order.
    /// Unknown ids in the target are skipped so the numbering stays dense.
    pub(super) fn apply_sequence(&mut self, target: &[DisplayEntry]) -> Vec<UploadEvent<R>> {
        let remote_ids: Vec<EntryId> = self.remote.iter().map(|slot| slot.id).collect();
        let local_ids: Vec<EntryId> = self.local.iter().map(|entry| entry.id).collect();

        let mut positions: HashMap<EntryId, usize> = HashMap::new();
        for entry in target {
            let known = match entry.kind {
                EntryKind::Remote => remote_ids.contains(&entry.id),
                EntryKind::Local => local_ids.contains(&entry.id),
            };
            if known && !positions.contains_key(&entry.id) {
                let next = positions.len();
                positions.insert(entry.id, next);
            }
        }

        self.remote.retain(|slot| positions.contains_key(&slot.id));
        for slot in &mut self.remote {
            slot.record.set_order(positions[&slot.id]);
        }

        let previews = &mut self.previews;
        self.local.retain(|entry| {
            let keep = positions.contains_key(&entry.id);
            if !keep {
                previews.release(&entry.id);
            }
            keep
        });
        for entry in &mut self.local {
            entry.order = positions[&entry.id];
        }

        vec![
            UploadEvent::RemoteOrderChanged(self.remote_records()),
            UploadEvent::FilesSelected(self.local.clone()),
        ]
    }
}
