use async_trait::async_trait;
use moka::future::Cache;
use tracing::trace;
use vinyl_core::cache::{cache_key, Result};
use vinyl_core::{AlbumCache, AlbumId};

/// An in-process implementation of [`AlbumCache`] using Moka.
///
/// The cache is unbounded and entries never expire or get evicted, matching
/// the Redis backend. Useful for single-node runs and for exercising the
/// startup sync without a Redis server.
#[derive(Debug, Clone)]
pub struct MokaTitleCache {
    cache: Cache<String, String>,
}

impl MokaTitleCache {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }
}

impl Default for MokaTitleCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlbumCache for MokaTitleCache {
    async fn set_title(&self, id: AlbumId, title: &str) -> Result<()> {
        trace!(%id, "storing album title in memory");
        self.cache.insert(cache_key(id), title.to_string()).await;
        Ok(())
    }

    async fn get_title(&self, id: AlbumId) -> Result<Option<String>> {
        Ok(self.cache.get(&cache_key(id)).await)
    }
}
