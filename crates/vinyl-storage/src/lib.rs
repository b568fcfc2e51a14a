//! Persistence backends for albums.

pub mod memory;
pub mod mongo;

pub use memory::InMemoryRepository;
pub use mongo::MongoRepository;
pub use vinyl_core::{ReadRepository, Repository, StorageError};
