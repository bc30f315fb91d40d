/// Preview container sizing
///
/// The preview container keeps the media aspect ratio: its height is the
/// container width divided by 16/12. The width follows the window, minus
/// the sidebar and the paddings laid out around the preview pane.

use crate::state::data::MEDIA_ASPECT_RATIO;

/// Fixed width of the input sidebar
pub const SIDEBAR_WIDTH: f32 = 320.0;
/// Padding around the whole window content
pub const OUTER_PADDING: f32 = 20.0;
/// Gap between the sidebar and the preview pane
pub const PANE_SPACING: f32 = 20.0;
/// Padding inside the preview box
pub const PREVIEW_PADDING: f32 = 20.0;

/// Width available to the preview container for a given window width
pub fn container_width(window_width: f32) -> f32 {
    let chrome = SIDEBAR_WIDTH + 2.0 * OUTER_PADDING + PANE_SPACING + 2.0 * PREVIEW_PADDING;
    (window_width - chrome).max(0.0)
}

/// Height that keeps the 16/12 ratio for a container width
pub fn height_for_width(width: f32) -> f32 {
    (f64::from(width) / MEDIA_ASPECT_RATIO) as f32
}

/// Tracks the preview container size while the resize listener is attached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSizer {
    width: f32,
    height: f32,
    attached: bool,
}

impl PreviewSizer {
    /// Attach to a window of the given width
    pub fn attach(window_width: f32) -> Self {
        let width = container_width(window_width);
        Self {
            width,
            height: height_for_width(width),
            attached: true,
        }
    }

    /// Stop following window resizes
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Window resized, ignored once detached
    pub fn on_resize(&mut self, window_width: f32) {
        if !self.attached {
            return;
        }
        self.width = container_width(window_width);
        self.refresh();
    }

    /// Recompute the height from the current width
    pub fn refresh(&mut self) {
        self.height = height_for_width(self.width);
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
