use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::page_window;
use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{Culinary, CulinaryGallery, CulinarySpecialty};
use crate::schemas::{CulinaryCreate, CulinaryUpdate, GalleryImagePayload, NamePayload};

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
) -> AppResult<Json<Vec<Culinary>>> {
    let (skip, limit) = page_window(params.skip, params.limit)?;
    let culinaries = state
        .db
        .list_culinaries(
            skip,
            limit,
            params.search.as_deref(),
            params.category.as_deref(),
        )
        .await?;
    Ok(Json(culinaries))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Culinary>> {
    Ok(Json(state.db.get_culinary(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CulinaryCreate>,
) -> AppResult<(StatusCode, Json<Culinary>)> {
    info!("Creating culinary '{}'", payload.id);
    let culinary = state.db.create_culinary(payload).await?;
    Ok((StatusCode::CREATED, Json(culinary)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CulinaryUpdate>,
) -> AppResult<Json<Culinary>> {
    Ok(Json(state.db.update_culinary(&id, payload).await?))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if state.db.delete_culinary(&id).await? {
        info!("Deleted culinary '{}'", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Culinary not found".to_string()))
    }
}

pub async fn add_specialty(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NamePayload>,
) -> AppResult<(StatusCode, Json<CulinarySpecialty>)> {
    let specialty = state.db.add_culinary_specialty(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(specialty)))
}

pub async fn remove_specialty(
    State(state): State<AppState>,
    Path((id, specialty_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_culinary_specialty(&id, specialty_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GalleryImagePayload>,
) -> AppResult<(StatusCode, Json<CulinaryGallery>)> {
    let image = state.db.add_culinary_gallery_image(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn remove_gallery_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_culinary_gallery_image(&id, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
