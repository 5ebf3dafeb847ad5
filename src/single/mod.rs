//! Single-file upload slot: one optional persisted record, replaceable by
//! one freshly selected file.

use crate::entry::{EntryId, LocalFile, RemoteRecord};
use crate::preview::PreviewRegistry;
use crate::utils::{file_name_from_url, is_image_file, is_image_mime};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SingleFileError {
    #[error("Only one file can be uploaded at a time")]
    TooManyFiles,

    #[error("No file was selected")]
    NoFile,
}

/// What the slot currently shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub src: String,
    pub alt: String,
    pub is_image: bool,
    /// Known only for a freshly selected file
    pub file_size: Option<u64>,
    pub is_uploaded: bool,
}

pub struct SingleFileSlot<R: RemoteRecord> {
    default: Option<R>,
    uploaded: Option<(EntryId, LocalFile)>,
    error: Option<String>,
    previews: PreviewRegistry,
}

impl<R: RemoteRecord> SingleFileSlot<R> {
    pub fn new(default: Option<R>) -> Self {
        Self {
            default,
            uploaded: None,
            error: None,
            previews: PreviewRegistry::new(),
        }
    }

    /// Replace the persisted record. Any selected file is discarded.
    pub fn set_default(&mut self, default: Option<R>) {
        self.default = default;
        self.clear_uploaded();
    }

    pub fn default_record(&self) -> Option<&R> {
        self.default.as_ref()
    }

    pub fn uploaded(&self) -> Option<&LocalFile> {
        self.uploaded.as_ref().map(|(_, file)| file)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Accept a drop of exactly one file, replacing any previous selection
    pub fn accept(&mut self, mut files: Vec<LocalFile>) -> Result<LocalFile, SingleFileError> {
        if files.len() > 1 {
            let error = SingleFileError::TooManyFiles;
            self.error = Some(error.to_string());
            return Err(error);
        }
        let file = files.pop().ok_or(SingleFileError::NoFile)?;

        self.error = None;
        self.clear_uploaded();

        let id = EntryId::new();
        self.previews.acquire(id, &file);
        debug!("Single-file slot accepted {}", file.name);
        self.uploaded = Some((id, file.clone()));
        Ok(file)
    }

    /// The selected file if any, otherwise the persisted record
    pub fn view(&self) -> Option<SlotView> {
        if let Some((id, file)) = &self.uploaded {
            return Some(SlotView {
                src: self.previews.url(id).unwrap_or_default().to_string(),
                alt: file.name.clone(),
                is_image: is_image_mime(&file.mime_type),
                file_size: Some(file.size),
                is_uploaded: false,
            });
        }

        self.default.as_ref().map(|record| {
            let src = record.src().unwrap_or_default().to_string();
            SlotView {
                is_image: is_image_file(&file_name_from_url(&src)),
                src,
                alt: record.display_name().unwrap_or_default().to_string(),
                file_size: None,
                is_uploaded: true,
            }
        })
    }

    fn clear_uploaded(&mut self) {
        if let Some((id, _)) = self.uploaded.take() {
            self.previews.release(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RemoteFile;

    fn avatar() -> RemoteFile {
        RemoteFile {
            path_url: "https://cdn.example.com/avatar.png?v=2".to_string(),
            file_name: "avatar.png".to_string(),
            file_size: None,
            order: 0,
        }
    }

    #[test]
    fn test_view_shows_default() {
        let slot = SingleFileSlot::new(Some(avatar()));
        let view = slot.view().unwrap();
        assert_eq!(view.alt, "avatar.png");
        assert!(view.is_image);
        assert!(view.is_uploaded);
    }

    #[test]
    fn test_empty_slot_has_no_view() {
        let slot: SingleFileSlot<RemoteFile> = SingleFileSlot::new(None);
        assert!(slot.view().is_none());
    }

    #[test]
    fn test_accept_replaces_and_releases() {
        let mut slot = SingleFileSlot::new(Some(avatar()));
        slot.accept(vec![LocalFile::from_bytes("one.pdf", vec![1])]).unwrap();
        slot.accept(vec![LocalFile::from_bytes("two.png", vec![1, 2])]).unwrap();

        assert_eq!(slot.previews().live_count(), 1);
        let view = slot.view().unwrap();
        assert_eq!(view.alt, "two.png");
        assert_eq!(view.file_size, Some(2));
        assert!(!view.is_uploaded);
        assert!(view.src.starts_with("blob:upload-list/"));
    }

    #[test]
    fn test_accept_rejects_multiple() {
        let mut slot: SingleFileSlot<RemoteFile> = SingleFileSlot::new(None);
        let result = slot.accept(vec![
            LocalFile::from_bytes("a.txt", vec![]),
            LocalFile::from_bytes("b.txt", vec![]),
        ]);

        assert_eq!(result, Err(SingleFileError::TooManyFiles));
        assert_eq!(slot.error(), Some("Only one file can be uploaded at a time"));
        assert!(slot.uploaded().is_none());

        slot.accept(vec![LocalFile::from_bytes("a.txt", vec![])]).unwrap();
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_accept_empty() {
        let mut slot: SingleFileSlot<RemoteFile> = SingleFileSlot::new(None);
        assert_eq!(slot.accept(vec![]), Err(SingleFileError::NoFile));
    }

    #[test]
    fn test_set_default_clears_selection() {
        let mut slot = SingleFileSlot::new(None);
        slot.accept(vec![LocalFile::from_bytes("a.txt", vec![])]).unwrap();

        slot.set_default(Some(avatar()));
        assert!(slot.uploaded().is_none());
        assert_eq!(slot.previews().live_count(), 0);
        assert_eq!(slot.view().unwrap().alt, "avatar.png");
    }
}
