use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::page_window;
use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{Accommodation, AccommodationGallery, Room};
use crate::schemas::{AccommodationCreate, AccommodationUpdate, GalleryImagePayload, RoomCreate};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub category: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Accommodation>>> {
    let (skip, limit) = page_window(params.skip, params.limit)?;
    let accommodations = state
        .db
        .list_accommodations(
            skip,
            limit,
            params.search.as_deref(),
            params.category.as_deref(),
        )
        .await?;
    Ok(Json(accommodations))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Accommodation>> {
    Ok(Json(state.db.get_accommodation(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AccommodationCreate>,
) -> AppResult<(StatusCode, Json<Accommodation>)> {
    info!("Creating accommodation '{}'", payload.id);
    let accommodation = state.db.create_accommodation(payload).await?;
    Ok((StatusCode::CREATED, Json(accommodation)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AccommodationUpdate>,
) -> AppResult<Json<Accommodation>> {
    Ok(Json(state.db.update_accommodation(&id, payload).await?))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if state.db.delete_accommodation(&id).await? {
        info!("Deleted accommodation '{}'", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Accommodation not found".to_string()))
    }
}

pub async fn add_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let room = state.db.add_room(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn remove_room(
    State(state): State<AppState>,
    Path((id, room_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_room(&id, room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GalleryImagePayload>,
) -> AppResult<(StatusCode, Json<AccommodationGallery>)> {
    let image = state
        .db
        .add_accommodation_gallery_image(&id, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn remove_gallery_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state
        .db
        .delete_accommodation_gallery_image(&id, image_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
