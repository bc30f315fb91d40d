/// Local file selection and loading
///
/// Files are picked with the native dialog and read off the UI thread.
/// The MIME type is resolved here so the controller can decide whether
/// the file is an image without touching the disk again.

use image::ImageFormat;
use std::path::{Path, PathBuf};

use super::MediaError;

/// Extensions offered by the "Images" filter of the file dialog
const IMAGE_EXTENSIONS: [&str; 9] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico"];

/// Fallback for anything we cannot identify
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// A file the user picked, fully read into memory
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Whether the MIME type is in the `image/*` family
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image")
    }
}

/// Show the native file picker
///
/// Returns `None` if the user cancels.
pub async fn pick_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Add Photos")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Read a picked file and resolve its MIME type
pub async fn load_file(path: PathBuf) -> Result<SelectedFile, MediaError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| MediaError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mime = detect_mime(&path, &bytes).to_string();
    tracing::debug!(path = %path.display(), %mime, size = bytes.len(), "loaded selected file");

    Ok(SelectedFile { path, mime, bytes })
}

/// Resolve a MIME type from the extension, falling back to content sniffing
pub fn detect_mime(path: &Path, bytes: &[u8]) -> &'static str {
    ImageFormat::from_path(path)
        .or_else(|_| image::guess_format(bytes))
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME)
}
