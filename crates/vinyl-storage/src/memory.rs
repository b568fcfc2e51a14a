use async_trait::async_trait;
use parking_lot::RwLock;
use vinyl_core::repository::Result;
use vinyl_core::{Album, AlbumFilter, ReadRepository, Repository};

/// In-memory implementation of the repository contract.
///
/// Albums are kept in insertion order and ids are not unique, so several
/// entries may share an id; filtered operations act on the first match,
/// mirroring the document store.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `albums`.
    pub fn with_albums(albums: impl IntoIterator<Item = Album>) -> Self {
        Self {
            albums: RwLock::new(albums.into_iter().collect()),
        }
    }

    /// Number of stored albums, duplicates included.
    pub fn len(&self) -> usize {
        self.albums.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.read().is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Album>> {
        Ok(self.albums.read().clone())
    }

    async fn find_one(&self, filter: &AlbumFilter) -> Result<Option<Album>> {
        let albums = self.albums.read();
        Ok(albums.iter().find(|album| filter.matches(album)).cloned())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, album: &Album) -> Result<()> {
        self.albums.write().push(album.clone());
        Ok(())
    }

    async fn replace_one(&self, filter: &AlbumFilter, album: &Album) -> Result<u64> {
        let mut albums = self.albums.write();
        match albums.iter_mut().find(|stored| filter.matches(stored)) {
            Some(stored) => {
                *stored = album.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, filter: &AlbumFilter) -> Result<u64> {
        let mut albums = self.albums.write();
        match albums.iter().position(|stored| filter.matches(stored)) {
            Some(index) => {
                albums.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vinyl_core::AlbumId;

    fn album(id: i64, title: &str, price: f64) -> Album {
        Album {
            id: AlbumId::new(id),
            title: title.to_string(),
            artist: "John Coltrane".to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn insert_and_find_one() {
        let repo = InMemoryRepository::new();
        let blue_train = album(1, "Blue Train", 56.99);

        repo.insert(&blue_train).await.unwrap();

        let found = repo.find_one(&AlbumFilter::by_id(1)).await.unwrap();
        assert_eq!(found, Some(blue_train));
    }

    #[tokio::test]
    async fn find_one_nonexistent() {
        let repo = InMemoryRepository::new();

        let found = repo.find_one(&AlbumFilter::by_id(1)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_all_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryRepository::new();
        repo.insert(&album(2, "Giant Steps", 63.99)).await.unwrap();
        repo.insert(&album(1, "Blue Train", 56.99)).await.unwrap();

        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id.get())
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn duplicate_ids_are_accepted() {
        let repo = InMemoryRepository::new();
        repo.insert(&album(1, "first", 1.0)).await.unwrap();
        repo.insert(&album(1, "second", 2.0)).await.unwrap();

        assert_eq!(repo.len(), 2);
        let found = repo.find_one(&AlbumFilter::by_id(1)).await.unwrap().unwrap();
        assert_eq!(found.title, "first");
    }

    #[tokio::test]
    async fn replace_one_overwrites_whole_album() {
        let repo = InMemoryRepository::with_albums([album(1, "Blue Train", 56.99)]);
        let replacement = Album {
            id: AlbumId::new(1),
            price: 45.0,
            ..Album::default()
        };

        let matched = repo
            .replace_one(&AlbumFilter::by_id(1), &replacement)
            .await
            .unwrap();

        assert_eq!(matched, 1);
        let found = repo.find_one(&AlbumFilter::by_id(1)).await.unwrap();
        assert_eq!(found, Some(replacement));
    }

    #[tokio::test]
    async fn replace_one_only_touches_first_match() {
        let repo =
            InMemoryRepository::with_albums([album(1, "first", 1.0), album(1, "second", 2.0)]);

        repo.replace_one(&AlbumFilter::by_id(1), &album(1, "replaced", 3.0))
            .await
            .unwrap();

        let titles: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["replaced", "second"]);
    }

    #[tokio::test]
    async fn replace_one_without_match() {
        let repo = InMemoryRepository::new();

        let matched = repo
            .replace_one(&AlbumFilter::by_id(1), &album(1, "Blue Train", 1.0))
            .await
            .unwrap();

        assert_eq!(matched, 0);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn delete_one_existing() {
        let repo = InMemoryRepository::with_albums([album(1, "Blue Train", 56.99)]);

        assert_eq!(repo.delete_one(&AlbumFilter::by_id(1)).await.unwrap(), 1);
        assert!(repo
            .find_one(&AlbumFilter::by_id(1))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_one_nonexistent() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.delete_one(&AlbumFilter::by_id(1)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn concurrent_access() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10i64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(&album(i, &format!("album-{i}"), 1.0))
                    .await
                    .unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10i64 {
            let found = repo.find_one(&AlbumFilter::by_id(i)).await.unwrap().unwrap();
            assert_eq!(found.title, format!("album-{i}"));
        }
    }
}
