mod album;
mod fallback;
mod health;

pub use album::{
    create_album_handler, delete_album_handler, get_album_handler, list_albums_handler,
    update_album_handler,
};
pub use fallback::method_not_allowed_handler;
pub use health::health_handler;
