//! Title cache backends for the Vinyl album service.

pub mod moka;
pub mod redis;

pub use self::moka::MokaTitleCache;
pub use self::redis::RedisTitleCache;
pub use vinyl_core::cache::{cache_key, AlbumCache};
pub use vinyl_core::CacheError;
