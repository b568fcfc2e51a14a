use crate::album::Album;
use crate::error::StorageError;
use crate::filter::AlbumFilter;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of an album repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every stored album, in no particular order.
    ///
    /// The whole result set is materialized; a single undecodable document
    /// fails the entire call.
    async fn find_all(&self) -> Result<Vec<Album>>;

    /// Returns the first album matching `filter`, or `None`.
    async fn find_one(&self, filter: &AlbumFilter) -> Result<Option<Album>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores a new album. Duplicate ids are not rejected.
    async fn insert(&self, album: &Album) -> Result<()>;

    /// Replaces the first album matching `filter` with `album` in full.
    /// Returns the number of matched albums (0 or 1).
    async fn replace_one(&self, filter: &AlbumFilter, album: &Album) -> Result<u64>;

    /// Removes the first album matching `filter`.
    /// Returns the number of removed albums (0 or 1).
    async fn delete_one(&self, filter: &AlbumFilter) -> Result<u64>;
}
