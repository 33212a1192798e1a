use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::page_window;
use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{RouteStep, RouteTip, TransportRoute};
use crate::schemas::{RouteStepCreate, TipPayload, TransportRouteCreate, TransportRouteUpdate};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub difficulty: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<TransportRoute>>> {
    let (skip, limit) = page_window(params.skip, params.limit)?;
    let routes = state
        .db
        .list_transport_routes(
            skip,
            limit,
            params.search.as_deref(),
            params.difficulty.as_deref(),
        )
        .await?;
    Ok(Json(routes))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TransportRoute>> {
    Ok(Json(state.db.get_transport_route(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TransportRouteCreate>,
) -> AppResult<(StatusCode, Json<TransportRoute>)> {
    info!("Creating transport route '{}'", payload.id);
    let route = state.db.create_transport_route(payload).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TransportRouteUpdate>,
) -> AppResult<Json<TransportRoute>> {
    Ok(Json(state.db.update_transport_route(&id, payload).await?))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if state.db.delete_transport_route(&id).await? {
        info!("Deleted transport route '{}'", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Transport route not found".to_string()))
    }
}

pub async fn add_step(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RouteStepCreate>,
) -> AppResult<(StatusCode, Json<RouteStep>)> {
    let step = state.db.add_route_step(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(step)))
}

pub async fn remove_step(
    State(state): State<AppState>,
    Path((id, step_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_route_step(&id, step_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_tip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TipPayload>,
) -> AppResult<(StatusCode, Json<RouteTip>)> {
    let tip = state.db.add_route_tip(&id, &payload).await?;
    Ok((StatusCode::CREATED, Json(tip)))
}

pub async fn remove_tip(
    State(state): State<AppState>,
    Path((id, tip_id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    state.db.delete_route_tip(&id, tip_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
