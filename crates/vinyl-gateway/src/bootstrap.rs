//! Startup projection of album titles into the cache.

use thiserror::Error;
use tracing::{debug, info};
use vinyl_core::{AlbumCache, CacheError, ReadRepository, StorageError};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to read albums: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to cache album title: {0}")]
    Cache(#[from] CacheError),
}

/// Writes the title of every stored album into `cache` under `album:{id}`.
///
/// Runs once before the server accepts requests. The first read or write
/// failure aborts the sync; nothing is retried or skipped. Returns the
/// number of entries written.
pub async fn sync_titles<R, C>(repository: &R, cache: &C) -> Result<usize, BootstrapError>
where
    R: ReadRepository + ?Sized,
    C: AlbumCache + ?Sized,
{
    let albums = repository.find_all().await?;

    for album in &albums {
        cache.set_title(album.id, &album.title).await?;
        debug!(id = %album.id, "cached album title");
    }

    info!(count = albums.len(), "synced album titles to cache");
    Ok(albums.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vinyl_cache::MokaTitleCache;
    use vinyl_core::{Album, AlbumFilter, AlbumId};
    use vinyl_storage::InMemoryRepository;

    fn album(id: i64, title: &str) -> Album {
        Album {
            id: AlbumId::new(id),
            title: title.to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        }
    }

    /// Cache that accepts a fixed number of writes, then fails.
    struct FlakyCache {
        remaining: AtomicUsize,
        writes: AtomicUsize,
    }

    impl FlakyCache {
        fn failing_after(successes: usize) -> Self {
            Self {
                remaining: AtomicUsize::new(successes),
                writes: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AlbumCache for FlakyCache {
        async fn set_title(&self, _id: AlbumId, _title: &str) -> vinyl_core::cache::Result<()> {
            if self
                .remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_err()
            {
                return Err(CacheError::Operation("write refused".to_string()));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn get_title(&self, _id: AlbumId) -> vinyl_core::cache::Result<Option<String>> {
            Ok(None)
        }
    }

    struct UnreachableRepository;

    #[async_trait]
    impl ReadRepository for UnreachableRepository {
        async fn find_all(&self) -> vinyl_core::repository::Result<Vec<Album>> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }

        async fn find_one(
            &self,
            _filter: &AlbumFilter,
        ) -> vinyl_core::repository::Result<Option<Album>> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn sync_writes_title_of_every_album() {
        let repo = InMemoryRepository::with_albums([album(1, "Blue Train"), album(2, "Jeru")]);
        let cache = MokaTitleCache::new();

        let count = sync_titles(&repo, &cache).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            cache.get_title(AlbumId::new(1)).await.unwrap().as_deref(),
            Some("Blue Train")
        );
        assert_eq!(
            cache.get_title(AlbumId::new(2)).await.unwrap().as_deref(),
            Some("Jeru")
        );
    }

    #[tokio::test]
    async fn sync_of_empty_repository() {
        let repo = InMemoryRepository::new();
        let cache = MokaTitleCache::new();

        assert_eq!(sync_titles(&repo, &cache).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_ids_keep_last_title() {
        let repo = InMemoryRepository::with_albums([album(1, "first"), album(1, "second")]);
        let cache = MokaTitleCache::new();

        sync_titles(&repo, &cache).await.unwrap();

        assert_eq!(
            cache.get_title(AlbumId::new(1)).await.unwrap().as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn cache_failure_aborts_sync() {
        let repo = InMemoryRepository::with_albums([
            album(1, "Blue Train"),
            album(2, "Jeru"),
            album(3, "Sarah Vaughan"),
        ]);
        let cache = FlakyCache::failing_after(1);

        let err = sync_titles(&repo, &cache).await.unwrap_err();

        assert!(matches!(err, BootstrapError::Cache(_)));
        assert_eq!(cache.writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn storage_failure_aborts_sync() {
        let cache = FlakyCache::failing_after(usize::MAX);

        let err = sync_titles(&UnreachableRepository, &cache)
            .await
            .unwrap_err();

        assert!(matches!(err, BootstrapError::Storage(_)));
        assert_eq!(cache.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn sync_through_trait_objects() {
        let repo: Box<dyn vinyl_core::Repository> =
            Box::new(InMemoryRepository::with_albums([album(5, "Giant Steps")]));
        let cache: Box<dyn AlbumCache> = Box::new(MokaTitleCache::new());

        assert_eq!(sync_titles(&*repo, &*cache).await.unwrap(), 1);
    }
}
