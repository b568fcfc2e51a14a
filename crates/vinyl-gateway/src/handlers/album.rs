use crate::error::{AppError, Result};
use crate::model::{MessageResponse, ALBUM_DELETED};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;
use vinyl_core::{Album, AlbumFilter, AlbumId};

type AlbumPath = std::result::Result<Path<String>, PathRejection>;
type AlbumBody = std::result::Result<Json<Album>, JsonRejection>;

fn parse_id(path: AlbumPath) -> Result<AlbumId> {
    let Path(raw) = path?;
    Ok(raw.parse::<AlbumId>()?)
}

/// Stores the submitted album and echoes it back.
///
/// The id is whatever the client sent; none is generated here.
pub async fn create_album_handler(
    State(state): State<AppState>,
    body: AlbumBody,
) -> Result<(StatusCode, Json<Album>)> {
    let Json(album) = body?;

    state.repository().insert(&album).await?;
    debug!(id = %album.id, "created album");

    Ok((StatusCode::CREATED, Json(album)))
}

pub async fn list_albums_handler(State(state): State<AppState>) -> Result<Json<Vec<Album>>> {
    let albums = state.repository().find_all().await?;
    Ok(Json(albums))
}

pub async fn get_album_handler(
    path: AlbumPath,
    State(state): State<AppState>,
) -> Result<Json<Album>> {
    let id = parse_id(path)?;

    state
        .repository()
        .find_one(&AlbumFilter::by_id(id))
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Replaces the stored album with the submitted one in full.
///
/// Fields missing from the body are stored as zero values; the body's own
/// `id` is stored as given even if it differs from the path id.
pub async fn update_album_handler(
    path: AlbumPath,
    State(state): State<AppState>,
    body: AlbumBody,
) -> Result<Json<Album>> {
    let id = parse_id(path)?;
    let Json(album) = body?;

    let matched = state
        .repository()
        .replace_one(&AlbumFilter::by_id(id), &album)
        .await?;
    if matched == 0 {
        return Err(AppError::NotFound);
    }

    debug!(%id, "replaced album");
    Ok(Json(album))
}

pub async fn delete_album_handler(
    path: AlbumPath,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(path)?;

    let deleted = state
        .repository()
        .delete_one(&AlbumFilter::by_id(id))
        .await?;
    if deleted == 0 {
        return Err(AppError::NotFound);
    }

    debug!(%id, "deleted album");
    Ok(Json(MessageResponse {
        message: ALBUM_DELETED,
    }))
}
