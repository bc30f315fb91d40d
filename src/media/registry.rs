/// Object URLs for locally selected media
///
/// An object URL is a session-scoped name for bytes held in memory, so the
/// listing can reference its image without uploading it. Every URL created
/// here must be revoked once nothing displays it anymore; whatever is left
/// when the registry is dropped is revoked then.

use iced::widget::image::Handle;
use std::collections::HashMap;

const URL_PREFIX: &str = "blob:collection-tracker/";

#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    entries: HashMap<String, Handle>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes and return a fresh URL for them
    pub fn create(&mut self, bytes: Vec<u8>) -> String {
        let url = format!("{URL_PREFIX}{}", uuid::Uuid::new_v4());
        self.entries.insert(url.clone(), Handle::from_bytes(bytes));
        url
    }

    /// Release a URL, returns `false` if it was unknown or already revoked
    pub fn revoke(&mut self, url: &str) -> bool {
        let revoked = self.entries.remove(url).is_some();
        if revoked {
            tracing::debug!(%url, "revoked object url");
        }
        revoked
    }

    /// Release everything
    pub fn revoke_all(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(count = self.entries.len(), "revoking all object urls");
        }
        self.entries.clear();
    }

    /// Image handle for a live URL
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for ObjectUrlRegistry {
    fn drop(&mut self) {
        self.revoke_all();
    }
}
