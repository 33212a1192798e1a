use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::page_window;
use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{Destination, DestinationGallery, DestinationTip};
use crate::schemas::{DestinationCreate, DestinationUpdate, GalleryImagePayload, TipPayload};

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
) -> AppResult<Json<Vec<Destination>>> {
    let (skip, limit) = page_window(params.skip, params.limit)?;
    let destinations = state
        .db
        .list_destinations(
            skip,
            limit,
            params.search.as_deref(),
            params.category.as_deref(),
        )
        .await?;
    Ok(Json(destinations))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Destination>> {
    Ok(Json(state.db.get_destination(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DestinationCreate>,
) -> AppResult<(StatusCode, Json<Destination>)> {
    info!("Creating destination '{}'", payload.id);
    let destination = state.db.create_destination(payload).await?;
    Ok((StatusCode::CREATED, Json(destination)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DestinationUpdate>,
) -> AppResult<Json<Destination>> {
    Ok(Json(state.db.update_destination(&id, payload).await?))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if state.db.delete_destination(&id).await? {
        info!("Deleted destination '{}'", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Destination not found".to_string()))
    }
}

pub async fn add_tip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TipPayload>,
) -> AppResult<(StatusCode, Json<DestinationTip>)> {
    let tip = state.db.add_destination_tip(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(tip)))
}

pub async fn remove_tip(
    State(state): State<AppState>,
    Path((id, tip_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_destination_tip(&id, tip_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GalleryImagePayload>,
) -> AppResult<(StatusCode, Json<DestinationGallery>)> {
    let image = state.db.add_destination_gallery_image(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn remove_gallery_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_destination_gallery_image(&id, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
