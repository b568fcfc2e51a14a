//! Core types and traits for the Vinyl album service.
//!
//! This crate provides the album record, the typed filter used to select
//! stored documents, and the repository and cache contracts shared by the
//! storage backends, the cache backends and the HTTP gateway.

pub mod album;
pub mod cache;
pub mod error;
pub mod filter;
pub mod repository;

pub use album::{Album, AlbumId};
pub use cache::AlbumCache;
pub use error::{CacheError, CoreError, StorageError};
pub use filter::AlbumFilter;
pub use repository::{ReadRepository, Repository};
