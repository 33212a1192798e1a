use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::page_window;
use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{PhotoSpot, PhotoSpotGallery, PhotoSpotNearbyAttraction, PhotoSpotTip};
use crate::schemas::{GalleryImagePayload, NamePayload, PhotoSpotCreate, PhotoSpotUpdate, TipPayload};

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
) -> AppResult<Json<Vec<PhotoSpot>>> {
    let (skip, limit) = page_window(params.skip, params.limit)?;
    let spots = state
        .db
        .list_photo_spots(
            skip,
            limit,
            params.search.as_deref(),
            params.category.as_deref(),
        )
        .await?;
    Ok(Json(spots))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PhotoSpot>> {
    Ok(Json(state.db.get_photo_spot(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PhotoSpotCreate>,
) -> AppResult<(StatusCode, Json<PhotoSpot>)> {
    info!("Creating photo spot '{}'", payload.id);
    let spot = state.db.create_photo_spot(payload).await?;
    Ok((StatusCode::CREATED, Json(spot)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PhotoSpotUpdate>,
) -> AppResult<Json<PhotoSpot>> {
    Ok(Json(state.db.update_photo_spot(&id, payload).await?))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if state.db.delete_photo_spot(&id).await? {
        info!("Deleted photo spot '{}'", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Photo spot not found".to_string()))
    }
}

pub async fn add_tip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TipPayload>,
) -> AppResult<(StatusCode, Json<PhotoSpotTip>)> {
    let tip = state.db.add_photo_spot_tip(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(tip)))
}

pub async fn remove_tip(
    State(state): State<AppState>,
    Path((id, tip_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_photo_spot_tip(&id, tip_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GalleryImagePayload>,
) -> AppResult<(StatusCode, Json<PhotoSpotGallery>)> {
    let image = state.db.add_photo_spot_gallery_image(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn remove_gallery_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_photo_spot_gallery_image(&id, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_nearby_attraction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NamePayload>,
) -> AppResult<(StatusCode, Json<PhotoSpotNearbyAttraction>)> {
    let attraction = state.db.add_photo_spot_nearby_attraction(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(attraction)))
}

pub async fn remove_nearby_attraction(
    State(state): State<AppState>,
    Path((id, attraction_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state
        .db
        .delete_photo_spot_nearby_attraction(&id, attraction_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
