mod file_name;
mod hash;
mod mime;
mod size;

pub use file_name::{file_name_from_url, icon_for_file_name, UNNAMED_FILE};
pub use hash::compute_bytes_hash;
pub use mime::{guess_mime_type, is_image_file, is_image_mime, DEFAULT_MIME_TYPE};
pub use size::{convert_to_bytes, format_file_size, SizeUnit};

/// Get current timestamp in ISO 8601 format
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}
