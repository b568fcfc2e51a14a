use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection, Database};
use tracing::{debug, trace, warn};
use vinyl_core::repository::Result;
use vinyl_core::{Album, AlbumFilter, ReadRepository, Repository, StorageError};

/// Name of the collection holding album documents.
pub const COLLECTION_NAME: &str = "albums";

/// MongoDB implementation of the repository contract.
///
/// Each album is one document shaped like [`Album`], plus the driver-managed
/// `_id`. The `id` field is only an equality-filter key: no index or
/// uniqueness constraint is assumed on it.
#[derive(Debug, Clone)]
pub struct MongoRepository {
    collection: Collection<Album>,
}

impl MongoRepository {
    /// Creates a repository over the `albums` collection of `database`.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    /// Connects to the server at `uri` and pings it so an unreachable store
    /// is reported before the repository is handed out.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await.map_err(map_mongo_error)?;
        let database = client.database(database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;
        debug!(database = %database.name(), "connected to MongoDB");

        Ok(Self::new(&database))
    }

    /// Returns a reference to the underlying collection.
    pub fn collection(&self) -> &Collection<Album> {
        &self.collection
    }
}

fn filter_document(filter: &AlbumFilter) -> Document {
    match filter {
        AlbumFilter::ById(id) => doc! { "id": id.get() },
    }
}

fn map_mongo_error(err: mongodb::error::Error) -> StorageError {
    let message = err.to_string();

    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Io(_) => StorageError::Unavailable(message),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StorageError::InvalidData(message)
        }
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for MongoRepository {
    async fn find_all(&self) -> Result<Vec<Album>> {
        trace!("fetching all albums");

        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;

        cursor.try_collect().await.map_err(|e| {
            warn!(error = %e, "failed to drain album cursor");
            map_mongo_error(e)
        })
    }

    async fn find_one(&self, filter: &AlbumFilter) -> Result<Option<Album>> {
        trace!(%filter, "fetching album");

        self.collection
            .find_one(filter_document(filter))
            .await
            .map_err(map_mongo_error)
    }
}

#[async_trait]
impl Repository for MongoRepository {
    async fn insert(&self, album: &Album) -> Result<()> {
        self.collection
            .insert_one(album)
            .await
            .map_err(map_mongo_error)?;

        debug!(id = %album.id, "inserted album");
        Ok(())
    }

    async fn replace_one(&self, filter: &AlbumFilter, album: &Album) -> Result<u64> {
        let result = self
            .collection
            .replace_one(filter_document(filter), album)
            .await
            .map_err(map_mongo_error)?;

        debug!(%filter, matched = result.matched_count, "replaced album");
        Ok(result.matched_count)
    }

    async fn delete_one(&self, filter: &AlbumFilter) -> Result<u64> {
        let result = self
            .collection
            .delete_one(filter_document(filter))
            .await
            .map_err(map_mongo_error)?;

        debug!(%filter, deleted = result.deleted_count, "deleted album");
        Ok(result.deleted_count)
    }
}
