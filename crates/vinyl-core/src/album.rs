use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Identifier of an album.
///
/// Ids are supplied by clients and are not unique-enforced: two stored
/// albums may share the same id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(i64);

impl AlbumId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for AlbumId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for AlbumId {
    type Err = CoreError;

    /// Parses a decimal 64-bit id, as found in a request path segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| CoreError::InvalidAlbumId {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored album.
///
/// Every field falls back to its zero value when absent from the decoded
/// payload or set to `null`, so a partial document is accepted as-is without
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    #[serde(deserialize_with = "null_as_default")]
    pub id: AlbumId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
