use crate::album::{Album, AlbumId};
use std::fmt::Display;

/// An exact-match condition selecting which stored albums an operation
/// applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumFilter {
    /// Matches albums whose `id` equals the given id.
    ById(AlbumId),
}

impl AlbumFilter {
    pub fn by_id(id: impl Into<AlbumId>) -> Self {
        Self::ById(id.into())
    }

    /// Returns `true` if `album` satisfies this filter.
    pub fn matches(&self, album: &Album) -> bool {
        match self {
            AlbumFilter::ById(id) => album.id == *id,
        }
    }
}

impl Display for AlbumFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlbumFilter::ById(id) => write!(f, "id = {id}"),
        }
    }
}
