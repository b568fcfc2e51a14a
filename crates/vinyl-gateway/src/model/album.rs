use serde::Serialize;

/// Confirmation message returned after a successful delete.
pub const ALBUM_DELETED: &str = "Album deleted";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
