mod album;
mod health;

pub use album::{MessageResponse, ALBUM_DELETED};
pub use health::HealthResponse;
