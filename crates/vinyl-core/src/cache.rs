use crate::album::AlbumId;
use crate::error::CacheError;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, CacheError>;

/// Prefix of every album cache key.
pub const KEY_PREFIX: &str = "album:";

/// Returns the cache key under which the title of album `id` is stored.
pub fn cache_key(id: AlbumId) -> String {
    format!("{KEY_PREFIX}{id}")
}

/// A key-value projection of album titles.
///
/// Entries live under [`cache_key`] and hold only the title. They carry no
/// expiry and are never invalidated.
#[async_trait]
pub trait AlbumCache: Send + Sync + 'static {
    /// Stores the title of album `id`, overwriting any previous value.
    async fn set_title(&self, id: AlbumId, title: &str) -> Result<()>;

    /// Returns `Ok(None)` if no title is cached for `id`.
    async fn get_title(&self, id: AlbumId) -> Result<Option<String>>;
}
