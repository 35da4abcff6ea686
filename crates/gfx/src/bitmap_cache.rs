//! Decoded bitmap cache
//!
//! The asset set is a handful of static images, so the cache is a bounded,
//! append-only list: no eviction and no updates. Once it is full, inserting
//! hands the image back and the caller draws it uncached.

use arrayvec::ArrayVec;

use crate::fb::DecodedImage;
use crate::types::BITMAP_CACHE_CAPACITY;

/// Identity of an encoded source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub &'static str);

/// Encoded bitmap bytes plus the identity they are cached under
#[derive(Debug, Clone, Copy)]
pub struct EncodedImage<'a> {
    pub id: ImageId,
    pub bytes: &'a [u8],
}

/// Insert refused because the cache is full; the image is returned unchanged.
#[derive(Debug)]
pub struct CacheFull(pub DecodedImage);

#[derive(Debug)]
struct CacheEntry {
    id: ImageId,
    image: DecodedImage,
}

#[derive(Debug, Default)]
pub struct BitmapCache {
    entries: ArrayVec<CacheEntry, BITMAP_CACHE_CAPACITY>,
}

impl BitmapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, id: ImageId) -> Option<&DecodedImage> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.image)
    }

    /// Store `image` under `id` and return the cached copy.
    ///
    /// An id that is already cached keeps its first image; the new one is dropped.
    pub fn insert(&mut self, id: ImageId, image: DecodedImage) -> Result<&DecodedImage, CacheFull> {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            return Ok(&self.entries[pos].image);
        }
        if self.entries.is_full() {
            return Err(CacheFull(image));
        }

        let pos = self.entries.len();
        self.entries.push(CacheEntry { id, image });
        Ok(&self.entries[pos].image)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }
}
