//! Renderer-owned upload cache.
//!
//! Maps a stable [`SourceId`] to the texture handle its pixels were uploaded
//! to, together with the content version of that upload. A source is uploaded
//! at most once per version; once a handle exists for a source it is never
//! reallocated, invalidation only re-uploads through it. There is no
//! eviction; records live as long as the renderer unless explicitly removed.

use std::collections::HashMap;

use crate::backend::traits::TextureHandle;
use crate::texture::source::SourceId;

/// Cached upload state for one texture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRecord {
    /// The handle the source's pixels live in.
    pub handle: TextureHandle,
    /// Content version at upload time; `None` means the pixels must be
    /// re-uploaded before the next use.
    pub uploaded_version: Option<u64>,
}

/// Map from source identity to upload record.
#[derive(Debug, Default)]
pub struct TextureCache {
    records: HashMap<SourceId, TextureRecord>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for `id`, if its source has ever been uploaded.
    pub fn lookup(&self, id: SourceId) -> Option<TextureRecord> {
        self.records.get(&id).copied()
    }

    /// Record a fresh upload of `id` into `handle`.
    pub fn record_upload(&mut self, id: SourceId, handle: TextureHandle, version: u64) {
        self.records.insert(
            id,
            TextureRecord {
                handle,
                uploaded_version: Some(version),
            },
        );
    }

    /// Force a re-upload on the next use of `id`, keeping its handle.
    pub fn invalidate(&mut self, id: SourceId) {
        if let Some(record) = self.records.get_mut(&id) {
            log::debug!("invalidating cached texture for source {:?}", id);
            record.uploaded_version = None;
        }
    }

    /// Forget the record for `id` entirely, returning its handle.
    ///
    /// The handle itself is not destroyed; handle lifetime management stays
    /// with the context owner.
    pub fn remove(&mut self, id: SourceId) -> Option<TextureHandle> {
        self.records.remove(&id).map(|record| record.handle)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::source::{ImageSource, PixelFrame, TextureSource};

    fn some_id() -> SourceId {
        ImageSource::new(PixelFrame::white()).id()
    }

    #[test]
    fn test_record_and_lookup() {
        let mut cache = TextureCache::new();
        let id = some_id();
        assert!(cache.lookup(id).is_none());

        cache.record_upload(id, TextureHandle(7), 3);
        let record = cache.lookup(id).unwrap();
        assert_eq!(record.handle, TextureHandle(7));
        assert_eq!(record.uploaded_version, Some(3));
    }

    #[test]
    fn test_invalidate_keeps_handle() {
        let mut cache = TextureCache::new();
        let id = some_id();
        cache.record_upload(id, TextureHandle(7), 0);
        cache.invalidate(id);

        let record = cache.lookup(id).unwrap();
        assert_eq!(record.handle, TextureHandle(7));
        assert_eq!(record.uploaded_version, None);
    }

    #[test]
    fn test_remove() {
        let mut cache = TextureCache::new();
        let id = some_id();
        cache.record_upload(id, TextureHandle(7), 0);
        assert_eq!(cache.remove(id), Some(TextureHandle(7)));
        assert!(cache.is_empty());
        assert_eq!(cache.remove(id), None);
    }
}
