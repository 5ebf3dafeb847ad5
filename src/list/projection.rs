//! Projection of remote and local entries into one display list.

use crate::entry::{DisplayEntry, EntryId, EntryKind, LocalEntry, RemoteRecord};
use crate::utils::{file_name_from_url, is_image_file, is_image_mime};

pub(crate) fn project_remote<R: RemoteRecord>(id: EntryId, record: &R) -> DisplayEntry {
    let src = record.src().unwrap_or_default().to_string();
    let is_image = is_image_file(&file_name_from_url(&src));

    DisplayEntry {
        id,
        kind: EntryKind::Remote,
        order: record.order(),
        src,
        file_name: record.display_name().map(str::to_string),
        is_image,
        file_size: record.byte_size(),
    }
}

pub(crate) fn project_local(entry: &LocalEntry, preview_url: Option<&str>) -> DisplayEntry {
    DisplayEntry {
        id: entry.id,
        kind: EntryKind::Local,
        order: entry.order,
        src: preview_url.unwrap_or_default().to_string(),
        file_name: Some(entry.file.name.clone()),
        is_image: is_image_mime(&entry.file.mime_type),
        file_size: Some(entry.file.size),
    }
}

/// Concatenate remote then local projections and stable-sort by order
pub(crate) fn merge_sorted(
    remote: Vec<DisplayEntry>,
    local: Vec<DisplayEntry>,
) -> Vec<DisplayEntry> {
    let mut entries = remote;
    entries.extend(local);
    entries.sort_by_key(|entry| entry.order);
    entries
}
