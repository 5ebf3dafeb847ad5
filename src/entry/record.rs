use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

/// Accessors for an externally owned, already persisted file record.
///
/// The list stays generic over the record shape: it reads the source
/// locator, display name and size through this trait and writes back the
/// order key after a reconcile.
pub trait RemoteRecord: Clone {
    fn src(&self) -> Option<&str>;
    fn display_name(&self) -> Option<&str>;
    fn byte_size(&self) -> Option<u64>;
    fn order(&self) -> usize;
    fn set_order(&mut self, order: usize);
}

/// A typical persisted file record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFile {
    #[serde(rename = "pathURL")]
    pub path_url: String,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    pub order: usize,
}

impl RemoteRecord for RemoteFile {
    fn src(&self) -> Option<&str> {
        Some(&self.path_url)
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.file_name)
    }

    fn byte_size(&self) -> Option<u64> {
        self.file_size
    }

    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

/// Field names used to read a [`JsonRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    pub src: String,
    pub name: String,
    pub size: String,
    pub order: String,
}

impl Default for RecordFields {
    fn default() -> Self {
        Self {
            src: "src".to_string(),
            name: "alt".to_string(),
            size: "fileSize".to_string(),
            order: "order".to_string(),
        }
    }
}

/// An arbitrary JSON object read through configurable field names
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    value: serde_json::Value,
    fields: Arc<RecordFields>,
}

impl JsonRecord {
    pub fn new(value: serde_json::Value, fields: Arc<RecordFields>) -> Self {
        Self { value, fields }
    }

    /// Wrap every value of a batch with the same field mapping
    pub fn wrap_all(values: Vec<serde_json::Value>, fields: RecordFields) -> Vec<Self> {
        let fields = Arc::new(fields);
        values
            .into_iter()
            .map(|value| Self::new(value, Arc::clone(&fields)))
            .collect()
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    pub fn into_value(self) -> serde_json::Value {
        self.value
    }
}

impl Serialize for JsonRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl RemoteRecord for JsonRecord {
    fn src(&self) -> Option<&str> {
        self.value.get(&self.fields.src).and_then(|v| v.as_str())
    }

    fn display_name(&self) -> Option<&str> {
        self.value.get(&self.fields.name).and_then(|v| v.as_str())
    }

    fn byte_size(&self) -> Option<u64> {
        self.value.get(&self.fields.size).and_then(|v| v.as_u64())
    }

    fn order(&self) -> usize {
        self.value
            .get(&self.fields.order)
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as usize
    }

    fn set_order(&mut self, order: usize) {
        if let Some(object) = self.value.as_object_mut() {
            object.insert(self.fields.order.clone(), serde_json::Value::from(order));
        }
    }
}
