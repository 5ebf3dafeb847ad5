#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;
use upload_list::{LocalEntry, LocalFile, RemoteFile, UploadList, UploadListener};

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// The persisted files a form typically starts with
pub fn sample_remote_files() -> Vec<RemoteFile> {
    vec![
        RemoteFile {
            path_url: "https://pixlr.com/images/generator/text-to-image.webp".to_string(),
            file_name: "text-to-image.webp".to_string(),
            file_size: Some(1000),
            order: 0,
        },
        RemoteFile {
            path_url: "https://fps.cdnpk.net/images/home/subhome-ai.webp?w=649&h=649".to_string(),
            file_name: "subhome-ai.webp".to_string(),
            file_size: Some(1500),
            order: 1,
        },
        RemoteFile {
            path_url: "https://files.example.com/docs/contract.pdf".to_string(),
            file_name: "contract.pdf".to_string(),
            file_size: Some(2300),
            order: 2,
        },
    ]
}

pub fn remote(name: &str, order: usize, size: u64) -> RemoteFile {
    RemoteFile {
        path_url: format!("https://files.example.com/{}", name),
        file_name: name.to_string(),
        file_size: Some(size),
        order,
    }
}

pub fn local_file(name: &str, size: usize) -> LocalFile {
    LocalFile::from_bytes(name, vec![0u8; size])
}

/// Display names in display order
pub fn display_names(list: &UploadList<RemoteFile>) -> Vec<String> {
    list.entries()
        .into_iter()
        .map(|entry| entry.file_name.unwrap_or_default())
        .collect()
}

/// Assert the display orders are exactly 0..N-1
pub fn assert_dense_orders(list: &UploadList<RemoteFile>) {
    let orders: Vec<usize> = list.entries().iter().map(|entry| entry.order).collect();
    let expected: Vec<usize> = (0..list.len()).collect();
    assert_eq!(orders, expected, "orders are not dense");
}

/// Everything the external owner was told, in call order
#[derive(Debug, Default, Clone)]
pub struct Received {
    pub selected: Vec<Vec<LocalEntry>>,
    pub order_changed: Vec<Vec<RemoteFile>>,
    pub removed: Vec<Vec<RemoteFile>>,
}

pub struct RecordingListener {
    pub received: Rc<RefCell<Received>>,
}

impl UploadListener<RemoteFile> for RecordingListener {
    fn on_files_selected(&mut self, entries: &[LocalEntry]) {
        self.received.borrow_mut().selected.push(entries.to_vec());
    }

    fn on_remote_order_changed(&mut self, records: &[RemoteFile]) {
        self.received.borrow_mut().order_changed.push(records.to_vec());
    }

    fn on_remote_entries_removed(&mut self, records: &[RemoteFile]) {
        self.received.borrow_mut().removed.push(records.to_vec());
    }
}

/// Attach a recording listener and return its shared log
pub fn attach_recorder(list: &mut UploadList<RemoteFile>) -> Rc<RefCell<Received>> {
    let received = Rc::new(RefCell::new(Received::default()));
    list.set_listener(Box::new(RecordingListener {
        received: Rc::clone(&received),
    }));
    received
}
