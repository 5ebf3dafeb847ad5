use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Mimetype used when the extension is unknown
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];

static IMAGE_MIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"image/(jpeg|png|gif|bmp|svg\+xml|webp)").expect("valid image mime regex")
});

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check whether a source locator points at an image.
///
/// Matches on a known image extension first, then on an embedded
/// `image/<type>` mimetype (e.g. a `Content-Type=image/png` query parameter).
pub fn is_image_file(src: &str) -> bool {
    let extension = src.rsplit('.').next().map(|e| e.to_lowercase());
    if let Some(ext) = extension {
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return true;
        }
    }

    IMAGE_MIME_RE.is_match(src) || src.contains("image/")
}

/// Check whether a mimetype is an image type
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// Guess a mimetype from a file name's extension
pub fn guess_mime_type(file_name: &str) -> &'static str {
    match extension_of(file_name).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("csv") => "text/csv",
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        Some("zip") => "application/zip",
        Some("mp4") => "video/mp4",
        _ => DEFAULT_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file_by_extension() {
        assert!(is_image_file("text-to-image.webp"));
        assert!(is_image_file("photo.JPG"));
        assert!(is_image_file("https://cdn.example.com/a/b/logo.svg"));
        assert!(!is_image_file("report.pdf"));
        assert!(!is_image_file(""));
    }

    #[test]
    fn test_is_image_file_by_mime_pattern() {
        assert!(is_image_file("https://example.com/download?Content-Type=image/png"));
        assert!(is_image_file("blob?type=image/tiff"));
        assert!(!is_image_file("https://example.com/download?Content-Type=text/plain"));
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(!is_image_mime("application/pdf"));
    }

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("a.PNG"), "image/png");
        assert_eq!(guess_mime_type("a.jpeg"), "image/jpeg");
        assert_eq!(guess_mime_type("a.pdf"), "application/pdf");
        assert_eq!(guess_mime_type("Makefile"), DEFAULT_MIME_TYPE);
    }
}
