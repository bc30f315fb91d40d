/// Media preview module
///
/// This module handles:
/// - Picking and reading local files (loader.rs)
/// - Object URLs for the bytes being previewed (registry.rs)
/// - Keeping the preview container at a 16/12 ratio (preview.rs)

pub mod loader;
pub mod preview;
pub mod registry;

use iced::widget::image::Handle;
use thiserror::Error;

use crate::state::data::MediaItem;
use crate::state::form::ListingForm;
use loader::SelectedFile;
use preview::PreviewSizer;
use registry::ObjectUrlRegistry;

/// Errors raised while reading a selected file
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },
}

/// Owns the object URLs of the form's media and the preview size
#[derive(Debug)]
pub struct MediaController {
    urls: ObjectUrlRegistry,
    sizer: PreviewSizer,
}

impl MediaController {
    /// Mount the controller for a window of the given width
    pub fn mount(window_width: f32) -> Self {
        Self {
            urls: ObjectUrlRegistry::new(),
            sizer: PreviewSizer::attach(window_width),
        }
    }

    /// Attach a selected file to the form
    ///
    /// Non-image files are ignored and leave the form untouched. A replaced
    /// image has its object URL revoked. Returns `true` if media was set.
    pub fn select(&mut self, file: SelectedFile, form: &mut ListingForm) -> bool {
        if !file.is_image() {
            tracing::debug!(path = %file.path.display(), mime = %file.mime, "ignoring non-image file");
            return false;
        }

        let url = self.urls.create(file.bytes);
        tracing::info!(path = %file.path.display(), %url, "image attached");

        if let Some(previous) = form.set_media(MediaItem::image(url)) {
            self.urls.revoke(&previous.url);
        }
        self.sizer.refresh();
        true
    }

    /// Detach the form's image and release its object URL
    pub fn remove(&mut self, form: &mut ListingForm) {
        if let Some(previous) = form.remove_media() {
            self.urls.revoke(&previous.url);
            tracing::info!(url = %previous.url, "image removed");
        }
        self.sizer.refresh();
    }

    /// Window resized
    pub fn on_resize(&mut self, window_width: f32) {
        self.sizer.on_resize(window_width);
    }

    /// Whether resize events should still be delivered
    pub fn is_listening(&self) -> bool {
        self.sizer.is_attached()
    }

    pub fn preview_height(&self) -> f32 {
        self.sizer.height()
    }

    /// Image handle for a media item still held by the controller
    pub fn handle(&self, media: &MediaItem) -> Option<&Handle> {
        self.urls.handle(&media.url)
    }

    #[cfg(test)]
    pub fn live_urls(&self) -> usize {
        self.urls.len()
    }

    /// Detach the resize listener and release every object URL
    pub fn teardown(&mut self) {
        tracing::info!(released = self.urls.len(), "tearing down media preview");
        self.sizer.detach();
        self.urls.revoke_all();
    }
}
