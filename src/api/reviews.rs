use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::page_window;
use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::Review;
use crate::schemas::{ReviewCreate, ReviewUpdate};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub destination: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Review>>> {
    let (skip, limit) = page_window(params.skip, params.limit)?;
    let reviews = state
        .db
        .list_reviews(skip, limit, params.destination.as_deref())
        .await?;
    Ok(Json(reviews))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Review>> {
    Ok(Json(state.db.get_review(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<(StatusCode, Json<Review>)> {
    info!("Creating review '{}'", payload.id);
    let review = state.db.create_review(payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ReviewUpdate>,
) -> AppResult<Json<Review>> {
    Ok(Json(state.db.update_review(&id, payload).await?))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if state.db.delete_review(&id).await? {
        info!("Deleted review '{}'", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Review not found".to_string()))
    }
}
