use std::path::Path;

/// Placeholder name for a source locator with no usable file name
pub const UNNAMED_FILE: &str = "unnamed";

/// Extract the file name from a URL or path: last segment, query string removed
pub fn file_name_from_url(url: &str) -> String {
    if url.is_empty() {
        return UNNAMED_FILE.to_string();
    }

    let last_segment = url.rsplit('/').next().unwrap_or(url);
    let file_name = last_segment.split('?').next().unwrap_or(last_segment);
    file_name.to_string()
}

/// Get the icon identifier used for a non-image file
pub fn icon_for_file_name(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("pdf") => "vscode-icons:file-type-pdf2",
        Some("doc") | Some("docx") => "vscode-icons:file-type-word",
        Some("xlsx") => "vscode-icons:file-type-excel",
        _ => "solar:document-bold",
    }
}
