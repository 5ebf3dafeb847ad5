use crate::utils::{compute_bytes_hash, guess_mime_type, now_iso};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Stable synthetic identity assigned to every entry when it enters the list.
///
/// Reorder and removal match on this id, never on file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short form of the id (first 8 characters), for logs
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A freshly selected file held in memory
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    /// SHA-256 of the contents
    pub sha256: String,
    #[serde(skip)]
    bytes: Arc<[u8]>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let sha256 = compute_bytes_hash(&bytes);
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            mime_type: mime_type.into(),
            sha256,
            bytes: Arc::from(bytes),
        }
    }

    /// Build a file whose mimetype is guessed from the name's extension
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = guess_mime_type(&name);
        Self::new(name, mime_type, bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the contents, used by previews
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }
}

/// A staged local file with its position in the list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalEntry {
    pub id: EntryId,
    pub order: usize,
    pub file: LocalFile,
    pub staged_at: String,
}

impl LocalEntry {
    pub fn new(order: usize, file: LocalFile) -> Self {
        Self {
            id: EntryId::new(),
            order,
            file,
            staged_at: now_iso(),
        }
    }
}

/// Which population an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Already persisted externally
    Remote,
    /// Selected in this session, not yet uploaded
    Local,
}

/// Read-only projection of a remote or local entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub order: usize,
    pub src: String,
    pub file_name: Option<String>,
    pub is_image: bool,
    pub file_size: Option<u64>,
}

impl DisplayEntry {
    pub fn is_remote(&self) -> bool {
        self.kind == EntryKind::Remote
    }
}
