/// Shared data structures for the listing form
///
/// These structs represent the data model that flows between
/// the form state, the preview pane and the submission client.

use chrono::Utc;
use serde::Serialize;

/// Width-to-height ratio of every preview image (16:12)
pub const MEDIA_ASPECT_RATIO: f64 = 16.0 / 12.0;

/// The kind of media attached to a listing
///
/// Only images are ever produced; the enum exists so the wire format
/// carries an explicit `"type": "image"` tag.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
}

/// A locally selected media file, referenced by its object URL
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// Always `MediaKind::Image`
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Session-scoped object URL (`blob:collection-tracker/<uuid>`)
    pub url: String,
    /// Fixed at 16/12
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: f64,
}

impl MediaItem {
    /// Create an image item for the given object URL
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
            aspect_ratio: MEDIA_ASPECT_RATIO,
        }
    }
}

/// The in-progress listing held by the form
///
/// Lives only as long as the window; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    /// Text matching `^\d{1,8}(\.\d{0,2})?$`, or empty
    pub price: String,
    /// At most 150 whitespace-separated words
    pub description: String,
    pub media: Option<MediaItem>,
}

/// The payload sent to the listing endpoint
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Listing {
    /// Client-generated millisecond timestamp
    pub id: i64,
    pub title: String,
    pub price: String,
    pub description: String,
    pub media: Option<MediaItem>,
}

impl Listing {
    /// Snapshot a draft with a fresh id taken from the system clock
    ///
    /// Two submissions within the same millisecond share an id.
    pub fn from_draft(draft: &ListingDraft) -> Self {
        Self::with_id(Utc::now().timestamp_millis(), draft)
    }

    /// Snapshot a draft with an explicit id
    pub fn with_id(id: i64, draft: &ListingDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            price: draft.price.clone(),
            description: draft.description.clone(),
            media: draft.media.clone(),
        }
    }

    /// Convert to the JSON body expected by the backend
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
