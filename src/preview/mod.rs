//! Preview handles for staged local files.
//!
//! A handle is an object-URL-like locator (`blob:upload-list/<uuid>`) that
//! keeps the file's bytes reachable for display. Handles are keyed by
//! [`EntryId`] and must be released when the entry leaves the list; anything
//! still live is released when the registry is dropped.

use crate::entry::{EntryId, LocalFile};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const PREVIEW_SCHEME: &str = "blob:upload-list/";

/// A live preview of a local file
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    url: String,
    bytes: Arc<[u8]>,
}

impl PreviewHandle {
    fn new(file: &LocalFile) -> Self {
        Self {
            url: format!("{}{}", PREVIEW_SCHEME, Uuid::new_v4()),
            bytes: file.shared_bytes(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Tracks every live preview handle by entry
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    handles: HashMap<EntryId, PreviewHandle>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the handle for an entry. Acquiring twice returns the same handle.
    pub fn acquire(&mut self, id: EntryId, file: &LocalFile) -> &PreviewHandle {
        self.handles.entry(id).or_insert_with(|| {
            let handle = PreviewHandle::new(file);
            debug!("Acquired preview {} for entry {}", handle.url, id.short());
            handle
        })
    }

    pub fn get(&self, id: &EntryId) -> Option<&PreviewHandle> {
        self.handles.get(id)
    }

    pub fn url(&self, id: &EntryId) -> Option<&str> {
        self.handles.get(id).map(PreviewHandle::url)
    }

    /// Release one handle. Returns false if the entry had none.
    pub fn release(&mut self, id: &EntryId) -> bool {
        match self.handles.remove(id) {
            Some(handle) => {
                debug!("Released preview {} for entry {}", handle.url, id.short());
                true
            }
            None => false,
        }
    }

    /// Release every handle, returning how many were live
    pub fn release_all(&mut self) -> usize {
        let count = self.handles.len();
        self.handles.clear();
        if count > 0 {
            debug!("Released {} preview(s)", count);
        }
        count
    }

    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}

impl Drop for PreviewRegistry {
    fn drop(&mut self) {
        self.release_all();
    }
}
