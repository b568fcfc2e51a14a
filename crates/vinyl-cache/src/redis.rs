use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, trace, warn};
use vinyl_core::cache::{cache_key, Result};
use vinyl_core::{AlbumCache, AlbumId, CacheError};

/// A Redis-based implementation of [`AlbumCache`].
///
/// Titles are stored as plain strings under `album:{id}` with no expiry.
#[derive(Debug, Clone)]
pub struct RedisTitleCache {
    conn: redis::aio::MultiplexedConnection,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> CacheError {
    if err.is_timeout() {
        CacheError::Timeout(format!("{operation}: {err}"))
    } else {
        CacheError::Operation(format!("{operation}: {err}"))
    }
}

impl RedisTitleCache {
    /// Creates a new Redis title cache over an established connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a multiplexed connection to the server at `url`.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::Unavailable(format!("invalid Redis url: {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Unavailable(format!("failed to connect to Redis: {e}")))?;

        debug!("connected to Redis");
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl AlbumCache for RedisTitleCache {
    async fn set_title(&self, id: AlbumId, title: &str) -> Result<()> {
        let key = cache_key(id);
        trace!(%id, "storing album title in Redis");

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(&key, title).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(%id, error = %e, "failed to cache album title in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }

    async fn get_title(&self, id: AlbumId) -> Result<Option<String>> {
        let key = cache_key(id);

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(&key).await {
            Ok(title) => {
                trace!(%id, hit = title.is_some(), "looked up album title in Redis");
                Ok(title)
            }
            Err(e) => {
                warn!(%id, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }
}
