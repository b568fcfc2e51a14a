//! HTTP gateway for the Vinyl album service.
//!
//! Exposes CRUD routes over albums backed by a [`vinyl_core::Repository`],
//! plus the startup routine that projects album titles into an
//! [`vinyl_core::AlbumCache`].

pub mod app;
pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
